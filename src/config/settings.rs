//! Configuration settings for the pomodoro timer.
//!
//! Startup defaults are loaded from `~/.pomodoro/config.yaml`. Changes made
//! inside the running timer stay in memory and are never written back.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::{
    Settings, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SESSIONS_BEFORE_LONG_BREAK,
    DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
};
use crate::error::PomodoroError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Interval durations.
    pub timer: TimerConfig,
    /// End-of-interval cues.
    pub notifications: NotificationConfig,
}

/// Interval durations as written in the config file.
///
/// Unvalidated; turned into [`Settings`] by [`TimerConfig::to_settings`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work interval in minutes.
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of work intervals before a long break.
    #[serde(default = "default_sessions_before_long_break")]
    pub sessions_before_long_break: u32,
}

/// End-of-interval cue settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Flash a status message in the TUI.
    #[serde(default = "default_true")]
    pub flash: bool,
}

// Default value functions for serde
const fn default_work() -> u32 {
    DEFAULT_WORK_MINUTES
}

const fn default_short_break() -> u32 {
    DEFAULT_SHORT_BREAK_MINUTES
}

const fn default_long_break() -> u32 {
    DEFAULT_LONG_BREAK_MINUTES
}

const fn default_sessions_before_long_break() -> u32 {
    DEFAULT_SESSIONS_BEFORE_LONG_BREAK
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions_before_long_break: default_sessions_before_long_break(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            flash: default_true(),
        }
    }
}

impl TimerConfig {
    /// Override individual values, as given on the command line.
    #[must_use]
    pub fn overlay(
        self,
        work_minutes: Option<u32>,
        short_break_minutes: Option<u32>,
        long_break_minutes: Option<u32>,
        sessions_before_long_break: Option<u32>,
    ) -> Self {
        Self {
            work_minutes: work_minutes.unwrap_or(self.work_minutes),
            short_break_minutes: short_break_minutes.unwrap_or(self.short_break_minutes),
            long_break_minutes: long_break_minutes.unwrap_or(self.long_break_minutes),
            sessions_before_long_break: sessions_before_long_break
                .unwrap_or(self.sessions_before_long_break),
        }
    }

    /// Validate into session settings.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Settings` if any value is out of range.
    pub fn to_settings(&self) -> Result<Settings, PomodoroError> {
        Ok(Settings::new(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
            self.sessions_before_long_break,
        )?)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomodoroError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.long_break_minutes, 15);
        assert_eq!(config.timer.sessions_before_long_break, 4);
        assert!(config.notifications.bell);
        assert_eq!(config.timer.to_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer, TimerConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  work_minutes: 45
notifications:
  bell: false
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.work_minutes, 45);
        assert!(!config.notifications.bell);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.short_break_minutes, 5);
        assert!(config.notifications.flash);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [1, 2").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_out_of_range_config_fails_validation() {
        let timer = TimerConfig {
            long_break_minutes: 500,
            ..TimerConfig::default()
        };
        let err = timer.to_settings().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_overlay_prefers_given_values() {
        let timer = TimerConfig::default().overlay(Some(50), None, Some(20), None);
        assert_eq!(timer.work_minutes, 50);
        assert_eq!(timer.short_break_minutes, 5);
        assert_eq!(timer.long_break_minutes, 20);
        assert_eq!(timer.sessions_before_long_break, 4);
    }
}
