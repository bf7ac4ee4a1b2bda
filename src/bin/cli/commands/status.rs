use anyhow::Result;

use biolog::progress::awards;
use biolog::AppState;

use crate::OutputFormat;

pub fn run(state: &AppState, format: &OutputFormat) -> Result<()> {
    let record = state.progress.record();
    let overall = state.progress.overall_progress();
    let lessons_completed: usize = record.modules.values().map(|m| m.lessons_completed()).sum();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "overall": overall,
                "lessonsCompleted": lessons_completed,
                "statistics": record.statistics,
                "achievementsEarned": record.achievements.len(),
                "achievementsTotal": awards::AWARDS.len(),
                "startedAt": record.started_at.map(|t| t.to_rfc3339()),
                "lastActiveAt": record.last_active_at.map(|t| t.to_rfc3339()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Modules completed: {}/{} ({}%)",
                overall.completed_modules, overall.total_modules, overall.percentage
            );
            println!("Lessons completed: {}", lessons_completed);
            println!(
                "Exercises: {} attempted, {} correct",
                record.statistics.total_exercises_completed,
                record.statistics.total_exercises_correct
            );
            println!(
                "Achievements: {}/{}",
                record.achievements.len(),
                awards::AWARDS.len()
            );
            if let Some(started) = record.started_at {
                println!("Started: {}", started.format("%Y-%m-%d"));
            }
            if let Some(active) = record.last_active_at {
                println!("Last active: {}", active.format("%Y-%m-%d"));
            }
        }
    }

    Ok(())
}
