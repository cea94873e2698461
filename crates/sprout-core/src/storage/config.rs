//! TOML-based application configuration.
//!
//! Stores user preferences: the daily reminder time and display settings.
//! Configuration is stored at `~/.config/sprout/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Daily reminder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Hour of day for the reminder, 0-23.
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
    /// Minute within the hour, 0-59.
    #[serde(default)]
    pub minute: u32,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Marker printed next to completed goals in list output.
    #[serde(default = "default_done_marker")]
    pub done_marker: String,
    /// Whether streak output includes the all-time win counter.
    #[serde(default = "default_true")]
    pub show_total_wins: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/sprout/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_reminder_hour() -> u32 {
    9
}
fn default_done_marker() -> String {
    "x".into()
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hour: default_reminder_hour(),
            minute: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            show_total_wins: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/sprout"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, or return defaults if missing or unparseable.
    pub fn load() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Set the reminder time from an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not parse as a valid wall time.
    pub fn set_reminder_time(&mut self, time: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            key: "reminder".into(),
            message: message.into(),
        };

        let (hour, minute) = time
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        let hour: u32 = hour.parse().map_err(|_| invalid("hour is not a number"))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| invalid("minute is not a number"))?;
        if hour > 23 || minute > 59 {
            return Err(invalid("time out of range"));
        }

        self.reminder.hour = hour;
        self.reminder.minute = minute;
        Ok(())
    }
}
