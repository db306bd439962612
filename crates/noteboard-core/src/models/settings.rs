//! Application settings model

use serde::{Deserialize, Serialize};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Theme mode
    pub theme: ThemeMode,
    /// Font family for the whole board
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Number of content characters shown per note in the list
    pub preview_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            font_family: "system-ui".to_string(),
            font_size: 14,
            preview_chars: 100,
        }
    }
}
