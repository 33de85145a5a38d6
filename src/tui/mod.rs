//! Terminal User Interface (TUI) for the timer.
//!
//! Draws the session, maps key presses to session operations and delivers
//! ticks from a deadline-based scheduler. Built with ratatui and crossterm.

mod app;
mod bell;
mod deadline;
mod digits;
mod event;
mod ui;

pub use app::{window_title, Action, App, TerminalSession, APP_TITLE};
pub use bell::BellNotifier;
pub use deadline::DeadlineScheduler;

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use tracing::info;

use crate::cli::commands::Startup;
use crate::error::PomodoroError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(startup: &Startup) -> Result<(), PomodoroError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomodoroError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomodoroError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomodoroError::Terminal(format!("Failed to create terminal: {e}")))?;

    info!(settings = ?startup.settings, "starting timer");
    let mut app = App::new(startup);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetTitle(""),
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B, W>(terminal: &mut Terminal<B>, app: &mut App<W>) -> Result<(), PomodoroError>
where
    B: Backend + Write,
    W: Write,
{
    let mut title = String::new();

    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomodoroError::Terminal(format!("Failed to draw: {e}")))?;

        let wanted = window_title(&app.snapshot());
        if wanted != title {
            execute!(terminal.backend_mut(), SetTitle(&wanted))
                .map_err(|e| PomodoroError::Terminal(format!("Failed to set title: {e}")))?;
            title = wanted;
        }

        // Handle events
        if let Some(action) = event::handle_events(app.poll_timeout(Instant::now()))? {
            app.dispatch(action);
        }
        app.on_clock(Instant::now());
    }

    info!("quitting");
    Ok(())
}
