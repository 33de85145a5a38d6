//! Configuration management for the pomodoro timer.
//!
//! This module handles loading startup defaults from `~/.pomodoro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, NotificationConfig, TimerConfig};
