//! pomodoro-timer - A Pomodoro countdown timer for the terminal
//!
//! The timer logic lives in [`core`] and is independent of any display: a
//! [`Session`] owns the interval state and is driven by an injected tick
//! scheduler and end-of-interval notifier. The [`tui`] module is one such
//! driver.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::{Mode, Session, Settings};
pub use error::PomodoroError;
