//! Interval types and the work/break cadence.

use serde::{Deserialize, Serialize};

/// The kind of interval currently being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// A focused work interval.
    Work,
    /// The break following most work intervals.
    ShortBreak,
    /// The break following every Nth work interval.
    LongBreak,
}

impl Mode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Short upper-case label used in titles and compact layouts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::ShortBreak => "SHORT",
            Self::LongBreak => "LONG",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Select the interval that follows this one.
    ///
    /// `completed` is the number of finished work intervals *before* this
    /// one ends. Returns the next mode together with the updated count:
    /// finishing a work interval bumps the count, and a long break is chosen
    /// whenever the new count is a multiple of `sessions_before_long_break`.
    #[must_use]
    pub fn next(self, completed: u32, sessions_before_long_break: u32) -> (Self, u32) {
        match self {
            Self::Work => {
                let completed = completed.saturating_add(1);
                let long_due = completed
                    .checked_rem(sessions_before_long_break)
                    .is_some_and(|r| r == 0);
                if long_due {
                    (Self::LongBreak, completed)
                } else {
                    (Self::ShortBreak, completed)
                }
            }
            Self::ShortBreak | Self::LongBreak => (Self::Work, completed),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
