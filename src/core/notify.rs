//! The interval-ended signal sent from the session to the shell.

use serde::Serialize;
use thiserror::Error;

use crate::core::Mode;

/// Emitted once each time an interval runs out on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalEnded {
    /// The interval that just ran out.
    pub finished: Mode,
    /// The interval that starts now.
    pub next: Mode,
    /// Work intervals completed so far, including `finished` if it was one.
    pub completed_work_sessions: u32,
}

impl IntervalEnded {
    /// One-line message for a status bar or log.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} finished, {} started", self.finished, self.next)
    }
}

/// A cue that could not be delivered. Never fatal to the session.
#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

impl From<std::io::Error> for NotifyError {
    fn from(e: std::io::Error) -> Self {
        Self(e.to_string())
    }
}

/// Receives interval-ended signals.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Deliver the cue. Must return promptly.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the cue could not be delivered.
    fn interval_ended(&mut self, event: &IntervalEnded) -> Result<(), NotifyError>;
}

/// Notifier that does nothing.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

#[cfg(test)]
impl Notifier for SilentNotifier {
    fn interval_ended(&mut self, _event: &IntervalEnded) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Notifier that keeps every event.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub events: Vec<IntervalEnded>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn interval_ended(&mut self, event: &IntervalEnded) -> Result<(), NotifyError> {
        self.events.push(*event);
        Ok(())
    }
}
