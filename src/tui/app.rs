//! Application state for the TUI.

use std::io::Stdout;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::commands::Startup;
use crate::core::{Session, SettingField, SettingsError, Snapshot, TickOutcome};
use crate::tui::bell::BellNotifier;
use crate::tui::deadline::DeadlineScheduler;

/// Window title suffix.
pub const APP_TITLE: &str = "Pomodoro Timer";

/// Longest the event loop waits for input when no tick is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How long the visual cue stays up after an interval ends.
const FLASH_FOR: Duration = Duration::from_secs(3);

/// Session type driven by the terminal.
pub type TerminalSession<W = Stdout> = Session<DeadlineScheduler, BellNotifier<W>>;

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Start, or resume after a pause.
    Start,
    Pause,
    Reset,
    Skip,
    /// Move the settings cursor by this many fields.
    Select(i8),
    /// Change the selected setting by this many units.
    Adjust(i8),
    /// Append a digit to the typed value.
    Digit(char),
    /// Drop the last typed digit.
    Backspace,
    /// Apply the typed value.
    Commit,
    Help,
}

/// Application state.
pub struct App<W: std::io::Write = Stdout> {
    /// The timer.
    pub session: TerminalSession<W>,
    /// Index into `SettingField::ALL` of the highlighted setting.
    pub selected: usize,
    /// Digits typed for the highlighted setting, not yet applied.
    pub input: String,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether to show the visual end-of-interval cue.
    pub flash_enabled: bool,
    /// Visual cue is shown until this instant.
    pub flash_until: Option<Instant>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App<Stdout> {
    /// Create a new app instance ringing the bell on stdout.
    #[must_use]
    pub fn new(startup: &Startup) -> Self {
        Self::with_bell(startup, BellNotifier::stdout(startup.notifications.bell))
    }
}

impl<W: std::io::Write> App<W> {
    /// Create a new app instance with a specific bell.
    #[must_use]
    pub fn with_bell(startup: &Startup, bell: BellNotifier<W>) -> Self {
        Self {
            session: Session::new(startup.settings, DeadlineScheduler::new(), bell),
            selected: 0,
            input: String::new(),
            status: Some("Press space to start, ? for help".to_string()),
            flash_enabled: startup.notifications.flash,
            flash_until: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// The setting under the cursor.
    #[must_use]
    pub const fn selected_field(&self) -> SettingField {
        SettingField::ALL[self.selected % SettingField::ALL.len()]
    }

    /// Whether the visual cue is showing at `now`.
    #[must_use]
    pub fn flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    /// How long the event loop may block waiting for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .scheduler()
            .time_until_due(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }

    /// Deliver the pending tick if it is due.
    pub fn on_clock(&mut self, now: Instant) {
        let Some(id) = self.session.scheduler_mut().take_due(now) else {
            return;
        };
        if let Some(TickOutcome::Advanced(ended)) = self.session.fire(id) {
            if self.flash_enabled {
                self.status = Some(ended.message());
                self.flash_until = Some(now + FLASH_FOR);
            }
        }
    }

    /// Apply a decoded key press.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Start => {
                let before = self.session.snapshot();
                if before.is_running {
                    return;
                }
                self.session.start();
                self.status = Some(if before.is_paused { "Resumed" } else { "Started" }.to_string());
            }
            Action::Pause => {
                if self.session.pause().is_paused {
                    self.status = Some("Paused".to_string());
                }
            }
            Action::Reset => {
                self.session.reset();
                self.flash_until = None;
                self.status = Some("Reset".to_string());
            }
            Action::Skip => {
                let snap = self.session.skip();
                self.status = Some(format!("Skipped to {}", snap.mode));
            }
            Action::Select(delta) => {
                self.input.clear();
                let n = SettingField::ALL.len();
                let step = usize::from(delta.unsigned_abs()) % n;
                self.selected = if delta < 0 {
                    (self.selected + n - step) % n
                } else {
                    (self.selected + step) % n
                };
                self.status = Some(format!("Editing: {}", self.selected_field()));
            }
            Action::Adjust(delta) => {
                self.input.clear();
                let field = self.selected_field();
                let current = self.session.settings().get(field);
                let value = current.saturating_add_signed(i32::from(delta));
                self.apply(field, value);
            }
            Action::Digit(c) => {
                if c.is_ascii_digit() && self.input.len() < 3 {
                    self.input.push(c);
                }
            }
            Action::Backspace => {
                self.input.pop();
            }
            Action::Commit => {
                if self.input.is_empty() {
                    return;
                }
                let field = self.selected_field();
                let input = std::mem::take(&mut self.input);
                match field.parse(&input) {
                    Ok(value) => self.apply(field, value),
                    Err(e) => self.report(&e),
                }
            }
            Action::Help => {
                self.status = Some(
                    "space:start | p:pause | r:reset | n:skip | tab:setting | +/-:adjust | q:quit"
                        .to_string(),
                );
            }
        }
    }

    fn apply(&mut self, field: SettingField, value: u32) {
        match self.session.apply_field(field, value) {
            Ok(snap) => {
                let when = if snap.is_running || snap.is_paused {
                    " (from next interval)"
                } else {
                    ""
                };
                self.status = Some(format!("{field}: {value}{when}"));
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, e: &SettingsError) {
        debug!("rejected setting: {e}");
        self.status = Some(e.to_string());
    }
}

/// Terminal window title for a snapshot.
#[must_use]
pub fn window_title(snap: &Snapshot) -> String {
    format!("{} • {} • {APP_TITLE}", snap.remaining, snap.mode.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::core::{Mode, Settings};

    fn app() -> App<Vec<u8>> {
        let startup = Startup {
            settings: Settings::default(),
            notifications: NotificationConfig::default(),
        };
        App::with_bell(&startup, BellNotifier::new(Vec::new(), true))
    }

    fn one_minute_app() -> App<Vec<u8>> {
        let startup = Startup {
            settings: Settings::new(1, 1, 1, 4).unwrap(),
            notifications: NotificationConfig::default(),
        };
        App::with_bell(&startup, BellNotifier::new(Vec::new(), false))
    }

    #[test]
    fn test_start_pause_resume_status() {
        let mut app = app();
        app.dispatch(Action::Start);
        assert_eq!(app.status.as_deref(), Some("Started"));
        app.dispatch(Action::Pause);
        assert_eq!(app.status.as_deref(), Some("Paused"));
        app.dispatch(Action::Start);
        assert_eq!(app.status.as_deref(), Some("Resumed"));
        assert!(app.snapshot().is_running);
    }

    #[test]
    fn test_clock_delivers_due_tick() {
        let mut app = app();
        app.dispatch(Action::Start);
        let later = Instant::now() + Duration::from_secs(2);
        app.on_clock(later);
        assert_eq!(app.snapshot().remaining_seconds, 1499);
        // The next tick is a full second away again.
        app.on_clock(Instant::now());
        assert_eq!(app.snapshot().remaining_seconds, 1499);
    }

    #[test]
    fn test_clock_does_nothing_while_paused() {
        let mut app = app();
        app.dispatch(Action::Start);
        app.dispatch(Action::Pause);
        app.on_clock(Instant::now() + Duration::from_secs(10));
        assert_eq!(app.snapshot().remaining_seconds, 1500);
    }

    #[test]
    fn test_interval_end_flashes_status() {
        let mut app = one_minute_app();
        app.dispatch(Action::Start);
        for _ in 0..60 {
            app.on_clock(Instant::now() + Duration::from_secs(2));
        }
        assert_eq!(app.snapshot().mode, Mode::ShortBreak);
        assert_eq!(
            app.status.as_deref(),
            Some("Work finished, Short Break started")
        );
        assert!(app.flash_until.is_some());
    }

    #[test]
    fn test_adjust_selected_setting() {
        let mut app = app();
        app.dispatch(Action::Adjust(1));
        assert_eq!(app.session.settings().work_minutes(), 26);
        assert_eq!(app.snapshot().remaining_seconds, 26 * 60);

        app.dispatch(Action::Select(1));
        assert_eq!(app.selected_field(), SettingField::ShortBreak);
        app.dispatch(Action::Adjust(-1));
        assert_eq!(app.session.settings().short_break_minutes(), 4);
    }

    #[test]
    fn test_select_wraps_backwards() {
        let mut app = app();
        app.dispatch(Action::Select(-1));
        assert_eq!(app.selected_field(), SettingField::SessionsBeforeLongBreak);
    }

    #[test]
    fn test_adjust_below_minimum_is_rejected() {
        let mut app = one_minute_app();
        app.dispatch(Action::Adjust(-1));
        assert_eq!(app.session.settings().work_minutes(), 1);
        assert_eq!(
            app.status.as_deref(),
            Some("Work (min) must be between 1 and 180, got 0")
        );
    }

    #[test]
    fn test_typed_value_is_applied() {
        let mut app = app();
        app.dispatch(Action::Digit('4'));
        app.dispatch(Action::Digit('5'));
        app.dispatch(Action::Commit);
        assert_eq!(app.session.settings().work_minutes(), 45);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_typed_out_of_range_value_is_rejected() {
        let mut app = app();
        app.dispatch(Action::Digit('9'));
        app.dispatch(Action::Digit('9'));
        app.dispatch(Action::Digit('9'));
        app.dispatch(Action::Digit('9'));
        assert_eq!(app.input, "999");
        app.dispatch(Action::Commit);
        assert_eq!(app.session.settings().work_minutes(), 25);
        assert!(app.status.unwrap().contains("between 1 and 180"));
    }

    #[test]
    fn test_settings_while_running_note_next_interval() {
        let mut app = app();
        app.dispatch(Action::Start);
        app.dispatch(Action::Adjust(5));
        assert_eq!(
            app.status.as_deref(),
            Some("Work (min): 30 (from next interval)")
        );
        assert_eq!(app.snapshot().remaining_seconds, 1500);
    }

    #[test]
    fn test_skip_and_reset() {
        let mut app = app();
        app.dispatch(Action::Skip);
        assert_eq!(app.status.as_deref(), Some("Skipped to Short Break"));
        assert_eq!(app.snapshot().completed_work_sessions, 1);
        app.dispatch(Action::Reset);
        assert_eq!(app.snapshot().completed_work_sessions, 0);
        assert_eq!(app.snapshot().mode, Mode::Work);
    }

    #[test]
    fn test_poll_timeout_bounded() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
        app.dispatch(Action::Start);
        assert!(app.poll_timeout(Instant::now()) <= IDLE_POLL);
    }

    #[test]
    fn test_window_title() {
        let app = app();
        assert_eq!(window_title(&app.snapshot()), "25:00 • WORK • Pomodoro Timer");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
