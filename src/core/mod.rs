//! Core session logic for the pomodoro timer.
//!
//! Everything in here is independent of any terminal or GUI toolkit: the
//! shell drives time through [`TickScheduler`] and receives cues through
//! [`Notifier`].

mod clock;
mod mode;
mod notify;
mod scheduler;
mod session;
mod settings;

pub use clock::{format_clock, render_progress_bar};
pub use mode::Mode;
pub use notify::{IntervalEnded, Notifier, NotifyError};
pub use scheduler::{TickHandle, TickId, TickScheduler, TICK_INTERVAL};
pub use session::{Activity, Session, Snapshot, TickOutcome, MAX_PREVIEW};
pub use settings::{
    SettingField, Settings, SettingsError, DEFAULT_LONG_BREAK_MINUTES,
    DEFAULT_SESSIONS_BEFORE_LONG_BREAK, DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
};

#[cfg(test)]
pub use notify::{MockNotifier, RecordingNotifier, SilentNotifier};
#[cfg(test)]
pub use scheduler::{ManualScheduler, MockTickScheduler};
