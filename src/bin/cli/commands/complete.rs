use anyhow::Result;

use biolog::progress::awards;
use biolog::{AppState, Catalog};

use crate::OutputFormat;

pub fn run(state: &mut AppState, module: &str, format: &OutputFormat) -> Result<()> {
    if Catalog::builtin().get(module).is_none() {
        eprintln!("warning: {} is not a catalog module", module);
    }

    state.progress.mark_module_complete(module);
    let granted = awards::grant_earned(&mut state.progress);

    let progress = state.progress.module_progress(module);
    let overall = state.progress.overall_progress();
    let new_awards: Vec<_> = granted.iter().filter_map(|id| awards::get(id)).collect();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "module": module,
                "progress": progress,
                "overall": overall,
                "newAchievements": new_awards
                    .iter()
                    .map(|a| serde_json::json!({ "id": a.id, "title": a.title, "icon": a.icon }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Module {} complete. Course progress: {}/{} modules ({}%).",
                module, overall.completed_modules, overall.total_modules, overall.percentage
            );
            for award in &new_awards {
                println!("Achievement unlocked: {} {}", award.icon, award.title);
            }
        }
    }

    Ok(())
}
