mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use biolog::{AppState, SystemPreferences};

#[derive(Parser)]
#[command(name = "biolog", about = "Logarithms in Biology learner progress CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Course-wide progress summary
    Status,

    /// List modules with lock state and lesson completion
    Modules,

    /// Mark a lesson complete
    Lesson {
        /// Module id (e.g. module-1)
        module: String,
        /// Lesson id (e.g. lesson-1-2)
        lesson: String,
    },

    /// Record an exercise set attempt
    Score {
        /// Module id
        module: String,
        /// Exercise category (conceptual, computational, applied, challenge)
        category: String,
        /// Questions attempted
        #[arg(long)]
        attempted: u32,
        /// Questions answered correctly
        #[arg(long)]
        correct: u32,
    },

    /// Mark a module complete
    Complete {
        /// Module id
        module: String,
    },

    /// Unlock a module without completing its prerequisites
    Unlock {
        /// Module id
        module: String,
    },

    /// List achievements and their earned state
    Achievements,

    /// Erase all progress
    Reset {
        /// Confirm the erase
        #[arg(long)]
        yes: bool,
    },

    /// Presentation settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Toggle a setting
    Toggle {
        /// Which setting to toggle
        setting: SettingName,
    },

    /// Restore default settings
    Reset,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum SettingName {
    /// Light/dark color mode
    Dark,
    /// High contrast palette
    Contrast,
    /// Normal/large font size
    FontSize,
    /// Reduced motion
    Motion,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut state = open_state(cli.data_dir.clone())?;

    match cli.command {
        Command::Status => commands::status::run(&state, &cli.format)?,
        Command::Modules => commands::modules::run(&state, &cli.format)?,
        Command::Lesson { module, lesson } => {
            commands::lesson::run(&mut state, &module, &lesson, &cli.format)?;
        }
        Command::Score { module, category, attempted, correct } => {
            commands::score::run(&mut state, &module, &category, attempted, correct, &cli.format)?;
        }
        Command::Complete { module } => {
            commands::complete::run(&mut state, &module, &cli.format)?;
        }
        Command::Unlock { module } => {
            commands::unlock::run(&mut state, &module, &cli.format)?;
        }
        Command::Achievements => commands::achievements::run(&mut state, &cli.format)?,
        Command::Reset { yes } => commands::reset::run(&mut state, yes, &cli.format)?,
        Command::Settings(subcmd) => match subcmd {
            SettingsCommand::Show => commands::settings::run_show(&state, &cli.format)?,
            SettingsCommand::Toggle { setting } => {
                commands::settings::run_toggle(&mut state, &setting, &cli.format)?;
            }
            SettingsCommand::Reset => commands::settings::run_reset(&mut state, &cli.format)?,
        },
    }

    Ok(())
}

fn open_state(data_dir: Option<PathBuf>) -> anyhow::Result<AppState> {
    let mut state = match data_dir {
        Some(dir) => AppState::open(dir),
        None => AppState::open_default()?,
    };
    // Host preferences reach a terminal app through the environment rather
    // than a media query.
    state.settings.apply_system_preferences(system_preferences_from_env());
    Ok(state)
}

fn system_preferences_from_env() -> SystemPreferences {
    SystemPreferences {
        prefers_dark: env_flag("BIOLOG_PREFERS_DARK"),
        prefers_reduced_motion: env_flag("BIOLOG_PREFERS_REDUCED_MOTION"),
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
