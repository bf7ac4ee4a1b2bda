use anyhow::Result;

use biolog::progress::ModuleStatus;
use biolog::{AppState, Catalog};

use crate::OutputFormat;

pub fn run(state: &AppState, format: &OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .modules()
                .iter()
                .map(|def| {
                    let progress = state.progress.module_progress(&def.id);
                    let (done, percent) =
                        state.progress.lesson_completion(&def.id, def.lessons.len());
                    serde_json::json!({
                        "id": def.id,
                        "order": def.order,
                        "title": def.title,
                        "status": progress.status,
                        "unlocked": state.progress.is_module_unlocked(&def.id, &def.prerequisites),
                        "lessonsCompleted": done,
                        "lessonCount": def.lessons.len(),
                        "lessonPercent": percent,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let title_width = catalog
                .modules()
                .iter()
                .map(|m| m.title.len())
                .max()
                .unwrap_or(6)
                .max(6);
            let status_width = 11;

            println!(
                "{:<2} {:<tw$} {:<sw$} {}",
                "#",
                "Module",
                "Status",
                "Lessons",
                tw = title_width,
                sw = status_width
            );
            println!(
                "{} {} {} {}",
                "\u{2500}".repeat(2),
                "\u{2500}".repeat(title_width),
                "\u{2500}".repeat(status_width),
                "\u{2500}".repeat(7)
            );

            for def in catalog.modules() {
                let progress = state.progress.module_progress(&def.id);
                let (done, _) = state.progress.lesson_completion(&def.id, def.lessons.len());
                let status = match progress.status {
                    ModuleStatus::Completed => "completed",
                    ModuleStatus::InProgress => "in progress",
                    ModuleStatus::Unlocked => "unlocked",
                    ModuleStatus::Locked => {
                        if state.progress.is_module_unlocked(&def.id, &def.prerequisites) {
                            "unlocked"
                        } else {
                            "locked"
                        }
                    }
                };

                println!(
                    "{:<2} {:<tw$} {:<sw$} {}/{}",
                    def.order,
                    def.title,
                    status,
                    done,
                    def.lessons.len(),
                    tw = title_width,
                    sw = status_width
                );
            }
        }
    }

    Ok(())
}
