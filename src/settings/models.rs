//! Data models for display settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Normal,
    Large,
}

impl Default for FontSize {
    fn default() -> Self {
        Self::Normal
    }
}

/// The learner's display and accessibility preferences.
///
/// Serialized with the same camelCase keys and lowercase values the course
/// app has always persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub reduce_motion: bool,
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        self.color_mode == ColorMode::Dark
    }

    pub fn is_large_font(&self) -> bool {
        self.font_size == FontSize::Large
    }

    /// The class list the presentation layer applies to its root element
    pub fn presentation_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.is_dark() {
            classes.push("dark");
        }
        if self.high_contrast {
            classes.push("high-contrast");
        }
        if self.is_large_font() {
            classes.push("text-lg");
        }
        if self.reduce_motion {
            classes.push("reduce-motion");
        }
        classes
    }
}

/// What the host environment reports about the user's system preferences.
/// Read once at startup; the store never re-checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPreferences {
    pub prefers_dark: bool,
    pub prefers_reduced_motion: bool,
}
