//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;
use crate::tui::app::Action;

/// Wait up to `timeout` for a key press and decode it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, PomodoroError> {
    if !event::poll(timeout)
        .map_err(|e| PomodoroError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| PomodoroError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(action_for(key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Controls
        KeyCode::Char(' ' | 's') => Action::Start,
        KeyCode::Char('p') => Action::Pause,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('n') => Action::Skip,

        // Settings
        KeyCode::Tab | KeyCode::Right => Action::Select(1),
        KeyCode::BackTab | KeyCode::Left => Action::Select(-1),
        KeyCode::Char('+' | '=') | KeyCode::Up => Action::Adjust(1),
        KeyCode::Char('-') | KeyCode::Down => Action::Adjust(-1),
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Enter => Action::Commit,

        KeyCode::Char('?') => Action::Help,

        _ => return None,
    };
    Some(action)
}
