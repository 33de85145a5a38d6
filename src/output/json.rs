//! JSON output formatting.

use serde_json::json;

use crate::config::NotificationConfig;
use crate::core::Settings;
use crate::error::PomodoroError;
use crate::output::PlanEntry;

/// Format effective settings as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_settings_json(
    settings: &Settings,
    notifications: &NotificationConfig,
) -> Result<String, PomodoroError> {
    let output = json!({
        "timer": settings,
        "notifications": notifications,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an interval plan as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_plan_json(entries: &[PlanEntry]) -> Result<String, PomodoroError> {
    let total_minutes: u64 = entries.iter().map(|e| u64::from(e.minutes)).sum();
    let output = json!({
        "count": entries.len(),
        "total_minutes": total_minutes,
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    #[test]
    fn test_format_settings_json() {
        let result =
            format_settings_json(&Settings::default(), &NotificationConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["timer"]["work_minutes"], 25);
        assert_eq!(value["timer"]["sessions_before_long_break"], 4);
        assert_eq!(value["notifications"]["bell"], true);
    }

    #[test]
    fn test_format_plan_json() {
        let entries = [
            PlanEntry {
                index: 1,
                mode: Mode::Work,
                minutes: 25,
                completed_after: 1,
            },
            PlanEntry {
                index: 2,
                mode: Mode::ShortBreak,
                minutes: 5,
                completed_after: 1,
            },
        ];
        let result = format_plan_json(&entries).unwrap();

        assert!(result.contains("\"count\": 2"));
        assert!(result.contains("\"total_minutes\": 30"));
        assert!(result.contains("\"SHORT_BREAK\""));
    }

    #[test]
    fn test_format_plan_json_empty() {
        let result = format_plan_json(&[]).unwrap();
        assert!(result.contains("\"items\": []"));
    }
}
