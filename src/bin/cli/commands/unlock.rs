use anyhow::Result;

use biolog::progress::ModuleStatus;
use biolog::{AppState, Catalog};

use crate::OutputFormat;

pub fn run(state: &mut AppState, module: &str, format: &OutputFormat) -> Result<()> {
    if Catalog::builtin().get(module).is_none() {
        eprintln!("warning: {} is not a catalog module", module);
    }

    let before = state.progress.module_progress(module).status;
    state.progress.unlock_module(module);
    let progress = state.progress.module_progress(module);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "module": module,
                "changed": before != progress.status,
                "progress": progress,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match before {
            ModuleStatus::Completed => println!("Module {} is already complete.", module),
            ModuleStatus::Unlocked => println!("Module {} is already unlocked.", module),
            _ => println!("Module {} unlocked.", module),
        },
    }

    Ok(())
}
