//! Interval durations and the long-break cadence.
//!
//! A [`Settings`] value is always valid: the only ways to build one are
//! [`Settings::default`], [`Settings::new`] and [`Settings::with`], and the
//! last two validate every field against its allowed range.

use serde::Serialize;
use thiserror::Error;

use crate::core::Mode;

/// Default work interval in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default short break in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
/// Default number of work intervals before a long break.
pub const DEFAULT_SESSIONS_BEFORE_LONG_BREAK: u32 = 4;

/// One user-editable settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    Work,
    ShortBreak,
    LongBreak,
    SessionsBeforeLongBreak,
}

impl SettingField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [
        Self::Work,
        Self::ShortBreak,
        Self::LongBreak,
        Self::SessionsBeforeLongBreak,
    ];

    /// Inclusive range of accepted values.
    #[must_use]
    pub const fn range(&self) -> (u32, u32) {
        match self {
            Self::Work => (1, 180),
            Self::ShortBreak => (1, 120),
            Self::LongBreak => (1, 240),
            Self::SessionsBeforeLongBreak => (1, 12),
        }
    }

    /// Label shown next to the input control.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work (min)",
            Self::ShortBreak => "Short break (min)",
            Self::LongBreak => "Long break (min)",
            Self::SessionsBeforeLongBreak => "Sessions until long break",
        }
    }

    /// Check a value against this field's range.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OutOfRange` if the value is outside the range.
    pub fn check(self, value: u32) -> Result<u32, SettingsError> {
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(SettingsError::OutOfRange {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Parse and check raw user input for this field.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NotANumber` for non-integer input and
    /// `SettingsError::OutOfRange` for integers outside the range.
    pub fn parse(self, input: &str) -> Result<u32, SettingsError> {
        let trimmed = input.trim();
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| SettingsError::NotANumber {
                field: self,
                input: trimmed.to_string(),
            })?;
        self.check(value)
    }
}

impl std::fmt::Display for SettingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A rejected settings value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: SettingField,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{field} must be a whole number, got {input:?}")]
    NotANumber { field: SettingField, input: String },
}

impl SettingsError {
    /// The field that was rejected.
    #[must_use]
    pub const fn field(&self) -> SettingField {
        match self {
            Self::OutOfRange { field, .. } | Self::NotANumber { field, .. } => *field,
        }
    }
}

/// Validated interval durations and long-break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
    sessions_before_long_break: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            sessions_before_long_break: DEFAULT_SESSIONS_BEFORE_LONG_BREAK,
        }
    }
}

impl Settings {
    /// Build settings, rejecting the whole set if any field is out of range.
    ///
    /// # Errors
    ///
    /// Returns the first `SettingsError` found, in display order.
    pub fn new(
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        sessions_before_long_break: u32,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            work_minutes: SettingField::Work.check(work_minutes)?,
            short_break_minutes: SettingField::ShortBreak.check(short_break_minutes)?,
            long_break_minutes: SettingField::LongBreak.check(long_break_minutes)?,
            sessions_before_long_break: SettingField::SessionsBeforeLongBreak
                .check(sessions_before_long_break)?,
        })
    }

    /// Copy of these settings with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OutOfRange` if `value` is outside the field's range.
    pub fn with(self, field: SettingField, value: u32) -> Result<Self, SettingsError> {
        let value = field.check(value)?;
        let mut next = self;
        match field {
            SettingField::Work => next.work_minutes = value,
            SettingField::ShortBreak => next.short_break_minutes = value,
            SettingField::LongBreak => next.long_break_minutes = value,
            SettingField::SessionsBeforeLongBreak => next.sessions_before_long_break = value,
        }
        Ok(next)
    }

    /// Read one field.
    #[must_use]
    pub const fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::Work => self.work_minutes,
            SettingField::ShortBreak => self.short_break_minutes,
            SettingField::LongBreak => self.long_break_minutes,
            SettingField::SessionsBeforeLongBreak => self.sessions_before_long_break,
        }
    }

    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    #[must_use]
    pub const fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    #[must_use]
    pub const fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    #[must_use]
    pub const fn sessions_before_long_break(&self) -> u32 {
        self.sessions_before_long_break
    }

    /// Configured length of an interval in minutes.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of an interval in seconds.
    #[must_use]
    pub const fn duration_secs(&self, mode: Mode) -> u32 {
        self.minutes_for(mode) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.work_minutes(), 25);
        assert_eq!(s.short_break_minutes(), 5);
        assert_eq!(s.long_break_minutes(), 15);
        assert_eq!(s.sessions_before_long_break(), 4);
        assert_eq!(s.duration_secs(Mode::Work), 1500);
        assert_eq!(s.duration_secs(Mode::ShortBreak), 300);
        assert_eq!(s.duration_secs(Mode::LongBreak), 900);
    }

    #[test]
    fn test_new_accepts_range_edges() {
        assert!(Settings::new(1, 1, 1, 1).is_ok());
        assert!(Settings::new(180, 120, 240, 12).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_work() {
        let err = Settings::new(0, 5, 15, 4).unwrap_err();
        assert_eq!(
            err,
            SettingsError::OutOfRange {
                field: SettingField::Work,
                value: 0,
                min: 1,
                max: 180
            }
        );
    }

    #[test]
    fn test_new_rejects_each_upper_bound() {
        assert_eq!(
            Settings::new(181, 5, 15, 4).unwrap_err().field(),
            SettingField::Work
        );
        assert_eq!(
            Settings::new(25, 121, 15, 4).unwrap_err().field(),
            SettingField::ShortBreak
        );
        assert_eq!(
            Settings::new(25, 5, 241, 4).unwrap_err().field(),
            SettingField::LongBreak
        );
        assert_eq!(
            Settings::new(25, 5, 15, 13).unwrap_err().field(),
            SettingField::SessionsBeforeLongBreak
        );
    }

    #[test]
    fn test_with_replaces_single_field() {
        let s = Settings::default()
            .with(SettingField::LongBreak, 30)
            .unwrap();
        assert_eq!(s.long_break_minutes(), 30);
        assert_eq!(s.work_minutes(), 25);
    }

    #[test]
    fn test_with_rejects_out_of_range() {
        let s = Settings::default();
        assert!(s.with(SettingField::SessionsBeforeLongBreak, 0).is_err());
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_parse_field_input() {
        assert_eq!(SettingField::Work.parse(" 50 "), Ok(50));
        assert!(matches!(
            SettingField::Work.parse("abc"),
            Err(SettingsError::NotANumber { .. })
        ));
        assert!(matches!(
            SettingField::Work.parse("-3"),
            Err(SettingsError::NotANumber { .. })
        ));
        assert!(matches!(
            SettingField::ShortBreak.parse("500"),
            Err(SettingsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_error_message_names_field_and_range() {
        let err = SettingField::LongBreak.check(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Long break (min) must be between 1 and 240, got 0"
        );
    }
}
