//! The session state machine.
//!
//! A [`Session`] owns the timer state for the lifetime of the process. Two
//! axes describe it: the interval type ([`Mode`]) and the activity
//! ([`Activity`]). User commands and scheduled ticks are the only inputs;
//! every operation returns a [`Snapshot`] the shell can render directly.
//!
//! At most one tick is ever pending. The session keeps the [`TickHandle`] it
//! received from the scheduler and cancels it before scheduling another, so
//! a second pending tick cannot exist.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::{
    format_clock, IntervalEnded, Mode, Notifier, SettingField, Settings, SettingsError,
    TickHandle, TickId, TickScheduler, TICK_INTERVAL,
};

/// Longest interval preview [`Session::upcoming`] will build.
pub const MAX_PREVIEW: usize = 1000;

/// Activity axis of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    /// Freshly reset or never started.
    Idle,
    /// Counting down.
    Running,
    /// Stopped part-way, resumable.
    Paused,
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// Mutable timer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerState {
    mode: Mode,
    remaining_seconds: u32,
    /// Length the current interval started with, for progress.
    interval_seconds: u32,
    is_running: bool,
    is_paused: bool,
    completed_work_sessions: u32,
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub interval_seconds: u32,
    /// `remaining_seconds` as `MM:SS`.
    pub remaining: String,
    pub is_running: bool,
    pub is_paused: bool,
    pub completed_work_sessions: u32,
}

impl Snapshot {
    #[must_use]
    pub const fn activity(&self) -> Activity {
        if self.is_running {
            Activity::Running
        } else if self.is_paused {
            Activity::Paused
        } else {
            Activity::Idle
        }
    }

    /// Fraction of the current interval already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.interval_seconds == 0 {
            return 1.0;
        }
        let elapsed = self.interval_seconds.saturating_sub(self.remaining_seconds);
        f64::from(elapsed) / f64::from(self.interval_seconds)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Stopped,
    /// One second was taken off the clock.
    Counted,
    /// The interval ran out and the next one began.
    Advanced(IntervalEnded),
}

/// The Pomodoro session state machine.
pub struct Session<S, N> {
    state: TimerState,
    settings: Settings,
    scheduler: S,
    notifier: N,
    pending: Option<TickHandle>,
}

impl<S: TickScheduler, N: Notifier> Session<S, N> {
    /// Create an idle session in work mode with a full work interval loaded.
    pub fn new(settings: Settings, scheduler: S, notifier: N) -> Self {
        let work = settings.duration_secs(Mode::Work);
        Self {
            state: TimerState {
                mode: Mode::Work,
                remaining_seconds: work,
                interval_seconds: work,
                is_running: false,
                is_paused: false,
                completed_work_sessions: 0,
            },
            settings,
            scheduler,
            notifier,
            pending: None,
        }
    }

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.state.mode,
            remaining_seconds: self.state.remaining_seconds,
            interval_seconds: self.state.interval_seconds,
            remaining: format_clock(i64::from(self.state.remaining_seconds)),
            is_running: self.state.is_running,
            is_paused: self.state.is_paused,
            completed_work_sessions: self.state.completed_work_sessions,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Id of the tick the session is waiting for, if any.
    #[must_use]
    pub fn pending_tick(&self) -> Option<TickId> {
        self.pending.as_ref().map(TickHandle::id)
    }

    /// Start counting down, or resume after a pause.
    ///
    /// Ignored if already running. The remaining time is kept as-is.
    pub fn start(&mut self) -> Snapshot {
        if self.state.is_running {
            debug!("start ignored: already running");
            return self.snapshot();
        }
        let resumed = self.state.is_paused;
        self.state.is_running = true;
        self.state.is_paused = false;
        self.arm();
        info!(
            mode = %self.state.mode,
            remaining = self.state.remaining_seconds,
            resumed,
            "timer started"
        );
        self.snapshot()
    }

    /// Stop counting down, keeping the remaining time for a later resume.
    ///
    /// Ignored if not running.
    pub fn pause(&mut self) -> Snapshot {
        if !self.state.is_running {
            debug!("pause ignored: not running");
            return self.snapshot();
        }
        self.disarm();
        self.state.is_running = false;
        self.state.is_paused = true;
        info!(remaining = self.state.remaining_seconds, "timer paused");
        self.snapshot()
    }

    /// Back to an idle work interval with the session count cleared.
    pub fn reset(&mut self) -> Snapshot {
        self.disarm();
        self.state.is_running = false;
        self.state.is_paused = false;
        self.state.completed_work_sessions = 0;
        self.load(Mode::Work);
        info!("timer reset");
        self.snapshot()
    }

    /// End the current interval early and run the next one.
    ///
    /// A skipped work interval counts as completed. No interval-ended signal
    /// is emitted.
    pub fn skip(&mut self) -> Snapshot {
        self.disarm();
        self.state.is_running = false;
        let ended = self.advance();
        info!(finished = %ended.finished, next = %ended.next, "interval skipped");
        self.snapshot()
    }

    /// Advance time by one second.
    ///
    /// The tick that takes the clock to zero also ends the interval: the
    /// notifier is told and the next interval starts running at full length.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            debug!("tick ignored: not running");
            return TickOutcome::Stopped;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            if self.state.remaining_seconds > 0 {
                self.arm();
                return TickOutcome::Counted;
            }
        }

        let ended = self.advance();
        if let Err(e) = self.notifier.interval_ended(&ended) {
            warn!("{e}");
        }
        info!(
            finished = %ended.finished,
            next = %ended.next,
            completed = ended.completed_work_sessions,
            "interval ended"
        );
        TickOutcome::Advanced(ended)
    }

    /// Deliver a scheduled tick.
    ///
    /// Returns `None` without touching the state if `id` is not the tick the
    /// session is waiting for, which is the case for any tick scheduled
    /// before a pause, reset, or skip.
    pub fn fire(&mut self, id: TickId) -> Option<TickOutcome> {
        match self.pending.take() {
            Some(handle) if handle.id() == id => Some(self.tick()),
            other => {
                debug!(%id, "stale tick dropped");
                self.pending = other;
                None
            }
        }
    }

    /// Replace the settings.
    ///
    /// When idle, the current interval is reloaded at its new length. While
    /// running or paused the new values take effect from the next interval.
    pub fn apply_settings(&mut self, settings: Settings) -> Snapshot {
        self.settings = settings;
        if self.is_idle() {
            self.load(self.state.mode);
        }
        debug!(?settings, "settings applied");
        self.snapshot()
    }

    /// Validate and apply a full set of raw values.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` and leaves the session untouched if any
    /// value is out of range.
    pub fn apply_values(
        &mut self,
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        sessions_before_long_break: u32,
    ) -> Result<Snapshot, SettingsError> {
        let settings = Settings::new(
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            sessions_before_long_break,
        )?;
        Ok(self.apply_settings(settings))
    }

    /// Validate and apply a change to a single field.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` and leaves the session untouched if the value
    /// is out of range.
    pub fn apply_field(
        &mut self,
        field: SettingField,
        value: u32,
    ) -> Result<Snapshot, SettingsError> {
        let settings = self.settings.with(field, value)?;
        Ok(self.apply_settings(settings))
    }

    /// The next `count` intervals the cadence would produce from here.
    ///
    /// At most [`MAX_PREVIEW`] intervals are returned.
    #[must_use]
    pub fn upcoming(&self, count: usize) -> Vec<Mode> {
        let cadence = self.settings.sessions_before_long_break();
        let start = (self.state.mode, self.state.completed_work_sessions);
        std::iter::successors(Some(start), |&(mode, completed)| {
            Some(mode.next(completed, cadence))
        })
        .skip(1)
        .take(count.min(MAX_PREVIEW))
        .map(|(mode, _)| mode)
        .collect()
    }

    const fn is_idle(&self) -> bool {
        !self.state.is_running && !self.state.is_paused
    }

    fn load(&mut self, mode: Mode) {
        let secs = self.settings.duration_secs(mode);
        self.state.mode = mode;
        self.state.remaining_seconds = secs;
        self.state.interval_seconds = secs;
    }

    /// Move to the next interval and keep running.
    fn advance(&mut self) -> IntervalEnded {
        let finished = self.state.mode;
        let (next, completed) = finished.next(
            self.state.completed_work_sessions,
            self.settings.sessions_before_long_break(),
        );
        self.state.completed_work_sessions = completed;
        self.load(next);
        self.state.is_running = true;
        self.state.is_paused = false;
        self.arm();
        IntervalEnded {
            finished,
            next,
            completed_work_sessions: completed,
        }
    }

    /// Schedule the next tick, replacing any pending one.
    fn arm(&mut self) {
        self.disarm();
        self.pending = Some(self.scheduler.schedule(TICK_INTERVAL));
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S, N> std::fmt::Debug for Session<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
