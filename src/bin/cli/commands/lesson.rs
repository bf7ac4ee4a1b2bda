use anyhow::Result;

use biolog::progress::awards;
use biolog::{AppState, Catalog};

use crate::OutputFormat;

pub fn run(state: &mut AppState, module: &str, lesson: &str, format: &OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();
    let def = catalog.get(module);
    match def {
        Some(def) => {
            if !def.lessons.iter().any(|l| l.id == lesson) {
                eprintln!("warning: {} is not a catalog lesson of {}", lesson, module);
            }
        }
        None => eprintln!("warning: {} is not a catalog module", module),
    }

    state.progress.mark_lesson_complete(module, lesson);
    let granted = awards::grant_earned(&mut state.progress);

    let progress = state.progress.module_progress(module);
    let new_awards: Vec<_> = granted.iter().filter_map(|id| awards::get(id)).collect();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "module": module,
                "lesson": lesson,
                "progress": progress,
                "newAchievements": new_awards
                    .iter()
                    .map(|a| serde_json::json!({ "id": a.id, "title": a.title, "icon": a.icon }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            match def {
                Some(def) => {
                    let (done, _) = state.progress.lesson_completion(module, def.lessons.len());
                    println!(
                        "Marked {} complete ({}/{} lessons in {}).",
                        lesson,
                        done,
                        def.lessons.len(),
                        module
                    );
                }
                None => println!("Marked {} complete in {}.", lesson, module),
            }
            for award in &new_awards {
                println!("Achievement unlocked: {} {}", award.icon, award.title);
            }
        }
    }

    Ok(())
}
