use anyhow::Result;

use biolog::catalog::EXERCISE_CATEGORIES;
use biolog::progress::awards;
use biolog::{AppState, Catalog};

use crate::OutputFormat;

pub fn run(
    state: &mut AppState,
    module: &str,
    category: &str,
    attempted: u32,
    correct: u32,
    format: &OutputFormat,
) -> Result<()> {
    if Catalog::builtin().get(module).is_none() {
        eprintln!("warning: {} is not a catalog module", module);
    }
    if !EXERCISE_CATEGORIES.contains(&category) {
        eprintln!(
            "warning: {} is not a known exercise category ({})",
            category,
            EXERCISE_CATEGORIES.join(", ")
        );
    }

    state.progress.submit_exercise_score(module, category, attempted, correct)?;
    let granted = awards::grant_earned(&mut state.progress);

    let progress = state.progress.module_progress(module);
    let new_awards: Vec<_> = granted.iter().filter_map(|id| awards::get(id)).collect();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "module": module,
                "category": category,
                "progress": progress,
                "newAchievements": new_awards
                    .iter()
                    .map(|a| serde_json::json!({ "id": a.id, "title": a.title, "icon": a.icon }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let score = progress
                .exercises
                .get(category)
                .map(|e| e.score)
                .unwrap_or(0.0);
            println!(
                "Recorded {}/{} on {} {} exercises (running score {:.0}%).",
                correct,
                attempted,
                module,
                category,
                score * 100.0
            );
            for award in &new_awards {
                println!("Achievement unlocked: {} {}", award.icon, award.title);
            }
        }
    }

    Ok(())
}
