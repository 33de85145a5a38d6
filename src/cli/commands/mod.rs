//! Command implementations.
//!
//! This module resolves startup settings and implements the
//! non-interactive commands.

mod completions;
mod plan;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use plan::plan;

use std::path::Path;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, NotificationConfig};
use crate::core::Settings;
use crate::error::PomodoroError;
use crate::output::format_settings;

/// Everything the timer needs to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Startup {
    pub settings: Settings,
    pub notifications: NotificationConfig,
}

/// Resolve startup settings: defaults, then config file, then flags.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed, or if the
/// resulting durations are out of range.
pub fn startup(cli: &Cli) -> Result<Startup, PomodoroError> {
    let config = load_config(cli.config.as_deref())?;
    let d = cli.durations;
    let settings = config
        .timer
        .overlay(d.work, d.short_break, d.long_break, d.sessions)
        .to_settings()?;

    let mut notifications = config.notifications;
    if d.no_bell {
        notifications.bell = false;
    }

    Ok(Startup {
        settings,
        notifications,
    })
}

fn load_config(path: Option<&Path>) -> Result<Config, PomodoroError> {
    match path {
        Some(p) => Config::load_from_path(p),
        None => Config::load(),
    }
}

/// Execute settings command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn settings(startup: &Startup, format: OutputFormat) -> Result<String, PomodoroError> {
    format_settings(&startup.settings, &startup.notifications, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str], config: &Path) -> Cli {
        let mut argv = vec!["pomodoro", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_startup_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&[], &dir.path().join("missing.yaml"));

        let s = startup(&cli).unwrap();
        assert_eq!(s.settings, Settings::default());
        assert!(s.notifications.bell);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "timer:\n  work_minutes: 40\n  short_break_minutes: 8\n").unwrap();
        let cli = parse(&["--work", "50", "--no-bell"], &path);

        let s = startup(&cli).unwrap();
        assert_eq!(s.settings.work_minutes(), 50);
        assert_eq!(s.settings.short_break_minutes(), 8);
        assert!(!s.notifications.bell);
    }

    #[test]
    fn test_out_of_range_flag_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&["--sessions", "0"], &dir.path().join("missing.yaml"));

        let err = startup(&cli).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Sessions until long break"));
    }

    #[test]
    fn test_settings_command_json() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&["-w", "30"], &dir.path().join("missing.yaml"));
        let s = startup(&cli).unwrap();

        let out = settings(&s, OutputFormat::Json).unwrap();
        assert!(out.contains("\"work_minutes\": 30"));
    }
}
