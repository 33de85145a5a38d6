//! Output formatting for the non-interactive commands.
//!
//! This module provides formatters for displaying settings and interval
//! plans in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::NotificationConfig;
use crate::core::{Mode, Settings};
use crate::error::PomodoroError;

pub use json::*;
pub use pretty::*;

/// One row of an interval plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    /// 1-based position in the plan.
    pub index: usize,
    pub mode: Mode,
    pub minutes: u32,
    /// Work intervals completed once this one ends.
    pub completed_after: u32,
}

/// Format effective settings based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_settings(
    settings: &Settings,
    notifications: &NotificationConfig,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_settings_pretty(settings, notifications)),
        OutputFormat::Json => format_settings_json(settings, notifications),
    }
}

/// Format an interval plan based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_plan(entries: &[PlanEntry], format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(entries)),
        OutputFormat::Json => format_plan_json(entries),
    }
}
