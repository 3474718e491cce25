//! Persisted user settings.
//!
//! The only setting is the color theme, stored under the single key
//! `theme` in a small TOML file next to wherever the game is launched.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Color theme for the terminal UI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette (default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Switches between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// User settings persisted between sessions.
#[derive(Debug, Clone, Copy, Default, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Saved color theme.
    #[serde(default)]
    theme: Theme,
}

impl Settings {
    /// Creates settings with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Replaces the stored theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Loads settings from a TOML file.
    ///
    /// A missing file is not an error; it yields the defaults so a first
    /// launch starts with the light theme.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(theme = settings.theme.label(), "Settings loaded");
        Ok(settings)
    }

    /// Saves settings to a TOML file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), theme = self.theme.label()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let content = toml::to_string(self)
            .map_err(|e| SettingsError::new(format!("Failed to encode settings: {}", e)))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))?;

        debug!("Settings saved");
        Ok(())
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
