use anyhow::{bail, Result};

use biolog::AppState;

use crate::OutputFormat;

pub fn run(state: &mut AppState, yes: bool, format: &OutputFormat) -> Result<()> {
    if !yes {
        bail!("this erases all progress; pass --yes to confirm");
    }

    state.progress.clear();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reset": true,
                "overall": state.progress.overall_progress(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("All progress erased.");
        }
    }

    Ok(())
}
