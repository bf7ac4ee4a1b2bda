//! The settings store
//!
//! Same persistence model as the progress store: the in-memory record is
//! authoritative, every mutation writes through fire-and-forget, and a
//! missing or unreadable stored record silently becomes the defaults.

use crate::persist::KeyValue;

use super::models::{ColorMode, FontSize, Settings, SystemPreferences};

/// Persistence key for the settings record
pub const STORAGE_KEY: &str = "logarithms-biology-settings";

pub struct SettingsStore {
    settings: Settings,
    persist: Box<dyn KeyValue>,
    /// Whether a stored record existed when the store was opened; decides
    /// if the system dark-mode preference may pick the initial color mode
    had_stored: bool,
}

impl SettingsStore {
    /// Open the store, loading the persisted record if one exists. Never
    /// fails; unreadable state becomes the defaults with a logged warning.
    pub fn open(persist: Box<dyn KeyValue>) -> Self {
        let (settings, had_stored) = match persist.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(settings) => (settings, true),
                Err(err) => {
                    log::warn!("stored settings are unreadable, using defaults: {}", err);
                    (Settings::default(), false)
                }
            },
            Ok(None) => (Settings::default(), false),
            Err(err) => {
                log::warn!("could not read stored settings, using defaults: {}", err);
                (Settings::default(), false)
            }
        };

        Self {
            settings,
            persist,
            had_stored,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One-shot pass over the host's system preferences, run once right
    /// after opening.
    ///
    /// Reduced motion only ever switches ON: a learner who explicitly
    /// enabled it keeps it regardless of what the system says, and the
    /// store never switches it off for them. The system dark-mode report
    /// only picks the initial color mode on a first run (no stored record);
    /// after that the stored choice wins, and there is no change listener.
    pub fn apply_system_preferences(&mut self, prefs: SystemPreferences) {
        let mut changed = false;

        if prefs.prefers_reduced_motion && !self.settings.reduce_motion {
            self.settings.reduce_motion = true;
            changed = true;
        }

        if prefs.prefers_dark && !self.had_stored && self.settings.color_mode != ColorMode::Dark {
            self.settings.color_mode = ColorMode::Dark;
            changed = true;
        }

        if changed {
            self.save();
        }
    }

    pub fn toggle_color_mode(&mut self) {
        self.settings.color_mode = match self.settings.color_mode {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        };
        self.save();
    }

    pub fn toggle_high_contrast(&mut self) {
        self.settings.high_contrast = !self.settings.high_contrast;
        self.save();
    }

    pub fn toggle_font_size(&mut self) {
        self.settings.font_size = match self.settings.font_size {
            FontSize::Normal => FontSize::Large,
            FontSize::Large => FontSize::Normal,
        };
        self.save();
    }

    pub fn toggle_reduce_motion(&mut self) {
        self.settings.reduce_motion = !self.settings.reduce_motion;
        self.save();
    }

    /// Restore the compiled-in defaults and persist them (unlike the
    /// progress reset, this keeps a stored record)
    pub fn reset(&mut self) {
        self.settings = Settings::default();
        self.save();
    }

    fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.settings) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize settings: {}", err);
                return;
            }
        };
        if let Err(err) = self.persist.write(STORAGE_KEY, &json) {
            log::warn!(
                "could not persist settings, keeping in-memory state: {}",
                err
            );
        }
    }
}
