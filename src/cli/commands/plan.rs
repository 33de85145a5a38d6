//! Interval plan preview.

use crate::cli::args::OutputFormat;
use crate::cli::commands::Startup;
use crate::core::{Mode, Settings, MAX_PREVIEW};
use crate::error::PomodoroError;
use crate::output::{format_plan, PlanEntry};

/// Execute plan command
///
/// # Errors
///
/// Returns `PomodoroError::Config` if `count` exceeds [`MAX_PREVIEW`], or an
/// error if output formatting fails.
pub fn plan(startup: &Startup, count: usize, format: OutputFormat) -> Result<String, PomodoroError> {
    if count > MAX_PREVIEW {
        return Err(PomodoroError::Config(format!(
            "plan count must be at most {MAX_PREVIEW}, got {count}"
        )));
    }
    format_plan(&build_plan(&startup.settings, count), format)
}

/// The first `count` intervals of a fresh session.
fn build_plan(settings: &Settings, count: usize) -> Vec<PlanEntry> {
    let cadence = settings.sessions_before_long_break();

    std::iter::successors(Some((Mode::Work, 0)), |&(mode, completed)| {
        Some(mode.next(completed, cadence))
    })
    .take(count.min(MAX_PREVIEW))
    .enumerate()
    .map(|(i, (mode, completed))| PlanEntry {
        index: i + 1,
        mode,
        minutes: settings.minutes_for(mode),
        completed_after: mode.next(completed, cadence).1,
    })
    .collect()
}
