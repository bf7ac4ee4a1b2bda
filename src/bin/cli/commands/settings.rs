use anyhow::Result;

use biolog::{AppState, Settings};

use crate::{OutputFormat, SettingName};

pub fn run_show(state: &AppState, format: &OutputFormat) -> Result<()> {
    print_settings(state.settings.settings(), format)
}

pub fn run_toggle(state: &mut AppState, setting: &SettingName, format: &OutputFormat) -> Result<()> {
    match setting {
        SettingName::Dark => state.settings.toggle_color_mode(),
        SettingName::Contrast => state.settings.toggle_high_contrast(),
        SettingName::FontSize => state.settings.toggle_font_size(),
        SettingName::Motion => state.settings.toggle_reduce_motion(),
    }
    print_settings(state.settings.settings(), format)
}

pub fn run_reset(state: &mut AppState, format: &OutputFormat) -> Result<()> {
    state.settings.reset();
    print_settings(state.settings.settings(), format)
}

fn print_settings(settings: &Settings, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "settings": settings,
                "classes": settings.presentation_classes(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let classes = settings.presentation_classes();
            println!("Color mode:    {}", if settings.is_dark() { "dark" } else { "light" });
            println!("High contrast: {}", on_off(settings.high_contrast));
            println!("Font size:     {}", if settings.is_large_font() { "large" } else { "normal" });
            println!("Reduce motion: {}", on_off(settings.reduce_motion));
            println!(
                "Classes:       {}",
                if classes.is_empty() { "(none)".to_string() } else { classes.join(" ") }
            );
        }
    }

    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
