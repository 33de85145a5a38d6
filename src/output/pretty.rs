use colored::Colorize;

use crate::config::NotificationConfig;
use crate::core::{format_clock, Mode, SettingField, Settings};
use crate::output::PlanEntry;

/// Format effective settings as an aligned list
pub fn format_settings_pretty(settings: &Settings, notifications: &NotificationConfig) -> String {
    let mut output = format!("{}\n", "Timer settings".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for field in SettingField::ALL {
        let (min, max) = field.range();
        output.push_str(&format!(
            "  {:<28}{:>4}  {}\n",
            field.label(),
            settings.get(field).to_string().bold(),
            format!("({min}-{max})").dimmed()
        ));
    }

    let on_off = |b: bool| if b { "on".green() } else { "off".red() };
    output.push_str(&format!("  {:<28}{:>4}\n", "Bell", on_off(notifications.bell)));
    output.push_str(&format!("  {:<28}{:>4}\n", "Flash", on_off(notifications.flash)));

    output
}

/// Format an interval plan as a numbered list
pub fn format_plan_pretty(entries: &[PlanEntry]) -> String {
    if entries.is_empty() {
        return "Plan (0 intervals)\n  Nothing to show".to_string();
    }

    let total: u64 = entries.iter().map(|e| u64::from(e.minutes)).sum();
    let total_secs = i64::try_from(total.saturating_mul(60)).unwrap_or(i64::MAX);
    let mut output = format!(
        "Plan ({} intervals, {})\n",
        entries.len(),
        format_clock(total_secs)
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for entry in entries {
        let name = match entry.mode {
            Mode::Work => entry.mode.display_name().red().bold(),
            Mode::ShortBreak => entry.mode.display_name().green(),
            Mode::LongBreak => entry.mode.display_name().cyan().bold(),
        };
        output.push_str(&format!(
            "{:>3}. {:<14} {}",
            entry.index,
            name,
            format_clock(i64::from(entry.minutes) * 60)
        ));
        if entry.mode == Mode::Work {
            output.push_str(&format!(
                "  {}",
                format!("session {}", entry.completed_after).dimmed()
            ));
        }
        output.push('\n');
    }

    output
}
