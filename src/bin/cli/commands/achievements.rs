use anyhow::Result;

use biolog::progress::awards;
use biolog::AppState;

use crate::OutputFormat;

pub fn run(state: &mut AppState, format: &OutputFormat) -> Result<()> {
    // Sweep first so badges earned since the last mutation show up.
    awards::grant_earned(&mut state.progress);
    let record = state.progress.record();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = awards::AWARDS
                .iter()
                .map(|award| {
                    let earned_at = record
                        .achievements
                        .iter()
                        .find(|a| a.id == award.id)
                        .map(|a| a.earned_at.to_rfc3339());
                    serde_json::json!({
                        "id": award.id,
                        "title": award.title,
                        "description": award.description,
                        "icon": award.icon,
                        "earned": earned_at.is_some(),
                        "earnedAt": earned_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let title_width = awards::AWARDS
                .iter()
                .map(|a| a.title.len())
                .max()
                .unwrap_or(5);

            for award in awards::AWARDS {
                let earned = record
                    .achievements
                    .iter()
                    .find(|a| a.id == award.id)
                    .map(|a| format!("earned {}", a.earned_at.format("%Y-%m-%d")))
                    .unwrap_or_else(|| "not yet".to_string());

                println!(
                    "{} {:<tw$}  {:<17} {}",
                    award.icon,
                    award.title,
                    earned,
                    award.description,
                    tw = title_width
                );
            }

            let earned_count = record.achievements.len();
            println!("\n{}/{} achievements earned", earned_count, awards::AWARDS.len());
        }
    }

    Ok(())
}
