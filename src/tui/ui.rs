//! UI rendering for the TUI.

use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::{render_progress_bar, Activity, Mode, SettingField, Snapshot};
use crate::tui::app::{App, APP_TITLE};
use crate::tui::digits::{big_text, big_text_width, GLYPH_HEIGHT};

/// Below this height the compact layout is used.
const MIN_FULL_HEIGHT: u16 = 20;

const ACCENT: Color = Color::Red;
const MUTED: Color = Color::DarkGray;

/// Render the application UI.
pub fn render<W: std::io::Write>(frame: &mut Frame<'_>, app: &App<W>) {
    let snap = app.snapshot();
    let flashing = app.flashing(Instant::now());

    if frame.area().height < MIN_FULL_HEIGHT {
        render_compact(frame, app, &snap, flashing);
        return;
    }

    // Create layout: header, mode, clock, sessions, progress, controls, settings, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(1),                // Mode
            Constraint::Min(GLYPH_HEIGHT + 2),    // Clock
            Constraint::Length(1),                // Sessions
            Constraint::Length(1),                // Progress
            Constraint::Length(2),                // Controls
            Constraint::Length(4),                // Settings
            Constraint::Length(1),                // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], flashing);
    render_mode(frame, &snap, chunks[1]);
    render_clock(frame, &snap, chunks[2], flashing);
    render_sessions(frame, app, &snap, chunks[3]);
    render_progress(frame, &snap, chunks[4]);
    render_controls(frame, &snap, chunks[5]);
    render_settings(frame, app, chunks[6]);
    render_status_bar(frame, app, chunks[7]);
}

const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => ACCENT,
        Mode::ShortBreak => Color::Green,
        Mode::LongBreak => Color::Cyan,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, area: Rect, flashing: bool) {
    let border = if flashing { Color::Yellow } else { ACCENT };

    let header = Paragraph::new(APP_TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

    frame.render_widget(header, area);
}

fn render_mode(frame: &mut Frame<'_>, snap: &Snapshot, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(MUTED)),
        Span::styled(
            snap.mode.label(),
            Style::default()
                .fg(mode_color(snap.mode))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", snap.activity()), Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the remaining time, large when there is room.
fn render_clock(frame: &mut Frame<'_>, snap: &Snapshot, area: Rect, flashing: bool) {
    let color = if flashing {
        Color::Yellow
    } else if snap.activity() == Activity::Paused {
        MUTED
    } else {
        Color::White
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let fits = usize::from(area.width) >= big_text_width(&snap.remaining)
        && area.height >= GLYPH_HEIGHT;

    let lines: Vec<Line<'_>> = if fits {
        let pad = usize::from((area.height - GLYPH_HEIGHT) / 2);
        std::iter::repeat(Line::raw(""))
            .take(pad)
            .chain(
                big_text(&snap.remaining)
                    .into_iter()
                    .map(|row| Line::styled(row, style)),
            )
            .collect()
    } else {
        vec![Line::styled(snap.remaining.clone(), style)]
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_sessions<W: std::io::Write>(
    frame: &mut Frame<'_>,
    app: &App<W>,
    snap: &Snapshot,
    area: Rect,
) {
    let mut spans = vec![Span::styled(
        format!("Work sessions: {}", snap.completed_work_sessions),
        Style::default().fg(MUTED),
    )];

    if let Some(next) = app.session.upcoming(1).first() {
        spans.push(Span::styled(
            format!("  •  Next: {next}"),
            Style::default().fg(MUTED),
        ));
    }

    if let Some(at) = ends_at(snap, &Local::now()) {
        spans.push(Span::styled(
            format!("  •  Ends at {at}"),
            Style::default().fg(MUTED),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_progress(frame: &mut Frame<'_>, snap: &Snapshot, area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(mode_color(snap.mode)).bg(Color::Black))
        .ratio(snap.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", snap.progress() * 100.0));
    frame.render_widget(gauge, area);
}

/// Render the key hints standing in for buttons.
fn render_controls(frame: &mut Frame<'_>, snap: &Snapshot, area: Rect) {
    let start_label = match snap.activity() {
        Activity::Idle => "Start",
        Activity::Running | Activity::Paused => "Resume",
    };
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(MUTED);
    let (start_style, pause_style) = if snap.is_running {
        (disabled, enabled)
    } else {
        (
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            disabled,
        )
    };

    let line = Line::from(vec![
        Span::styled(format!("[space] {start_label}"), start_style),
        Span::raw("   "),
        Span::styled("[p] Pause", pause_style),
        Span::raw("   "),
        Span::styled("[r] Reset", enabled),
        Span::raw("   "),
        Span::styled("[n] Skip", enabled),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM).border_style(disabled)),
        area,
    );
}

/// Render the four settings side by side.
fn render_settings<W: std::io::Write>(frame: &mut Frame<'_>, app: &App<W>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, (field, column)) in SettingField::ALL.iter().zip(columns.iter()).enumerate() {
        let selected = i == app.selected;
        let value = if selected && !app.input.is_empty() {
            format!("{}_", app.input)
        } else {
            app.session.settings().get(*field).to_string()
        };

        let border = if selected { ACCENT } else { MUTED };
        let widget = Paragraph::new(Line::styled(
            value,
            Style::default().add_modifier(if selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(field.label(), Style::default().fg(MUTED)))
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(widget, *column);
    }
}

/// Render the status bar.
fn render_status_bar<W: std::io::Write>(frame: &mut Frame<'_>, app: &App<W>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start | p:pause | r:reset | n:skip | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(MUTED));

    frame.render_widget(status, area);
}

/// Everything on a handful of lines for small terminals.
fn render_compact<W: std::io::Write>(
    frame: &mut Frame<'_>,
    app: &App<W>,
    snap: &Snapshot,
    flashing: bool,
) {
    let bar_width = usize::from(frame.area().width.saturating_sub(4)).min(40);
    let clock_style = if flashing {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                snap.mode.label(),
                Style::default().fg(mode_color(snap.mode)).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(snap.remaining.clone(), clock_style),
            Span::styled(
                format!("  {}  sessions: {}", snap.activity(), snap.completed_work_sessions),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::raw(render_progress_bar(snap.progress(), bar_width)),
        Line::styled(
            app.status.as_deref().unwrap_or("?:help | q:quit").to_string(),
            Style::default().fg(MUTED),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// Wall-clock time the running interval will end, as `HH:MM`.
#[must_use]
pub fn ends_at<Tz: TimeZone>(snap: &Snapshot, now: &DateTime<Tz>) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    if !snap.is_running {
        return None;
    }
    let end = now.clone() + chrono::Duration::seconds(i64::from(snap.remaining_seconds));
    Some(end.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::cli::commands::Startup;
    use crate::config::NotificationConfig;
    use crate::core::Settings;
    use crate::tui::app::Action;
    use crate::tui::bell::BellNotifier;

    fn app() -> App<Vec<u8>> {
        let startup = Startup {
            settings: Settings::default(),
            notifications: NotificationConfig::default(),
        };
        App::with_bell(&startup, BellNotifier::new(Vec::new(), false))
    }

    fn rendered(app: &App<Vec<u8>>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_ends_at_only_while_running() {
        let mut snap = app().snapshot();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 50, 0).unwrap();
        assert_eq!(ends_at(&snap, &now), None);

        snap.is_running = true;
        assert_eq!(ends_at(&snap, &now).as_deref(), Some("10:15"));
    }

    #[test]
    fn test_full_layout_shows_title_and_settings() {
        let app = app();
        let screen = rendered(&app, 80, 30);
        assert!(screen.contains("Pomodoro Timer"));
        assert!(screen.contains("WORK"));
        assert!(screen.contains("Work sessions: 0"));
        assert!(screen.contains("Short break (min)"));
        assert!(screen.contains("[space] Start"));
    }

    #[test]
    fn test_compact_layout_on_short_terminal() {
        let app = app();
        let screen = rendered(&app, 60, 5);
        assert!(screen.contains("25:00"));
        assert!(screen.contains("sessions: 0"));
    }

    #[test]
    fn test_paused_shows_resume() {
        let mut app = app();
        app.dispatch(Action::Start);
        app.dispatch(Action::Pause);
        let screen = rendered(&app, 80, 30);
        assert!(screen.contains("[space] Resume"));
        assert!(screen.contains("Paused"));
    }
}
