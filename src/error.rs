//! Error types for the pomodoro timer.

use thiserror::Error;

use crate::core::SettingsError;

/// Errors surfaced to the command line and the TUI shell.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// A settings value was outside its allowed range.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Configuration could not be resolved, read, or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PomodoroError {
    /// Whether the user can fix this by changing an input value.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Settings(_))
    }
}
