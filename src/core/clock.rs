//! Remaining-time formatting.

/// Format a number of seconds as `MM:SS`.
///
/// Negative input is clamped to zero. Minutes are not wrapped into hours, so
/// a three-hour interval renders as `180:00`.
#[must_use]
pub fn format_clock(seconds: i64) -> String {
    let total = seconds.max(0);
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn test_format_clock_clamps_negative() {
        assert_eq!(format_clock(-5), "00:00");
    }

    #[test]
    fn test_format_clock_long_interval() {
        assert_eq!(format_clock(240 * 60), "240:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
    }
}
