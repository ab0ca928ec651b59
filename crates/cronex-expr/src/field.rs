//! Schedule field model: the five cron fields, their value domains, and the
//! named month/weekday token tables.

use serde::{Deserialize, Serialize};

/// Three-letter month names, 1-based (JAN = 1 .. DEC = 12).
pub const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Three-letter weekday names, 1-based (SUN = 1 .. SAT = 7).
pub const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The five schedule fields of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Minute of the hour, 0-59.
    Minute,
    /// Hour of the day, 0-23.
    Hour,
    /// Day of the month, 1-31.
    DayOfMonth,
    /// Month of the year, 1-12 (JAN-DEC).
    Month,
    /// Day of the week, 1-7 (SUN-SAT).
    DayOfWeek,
}

impl Field {
    /// Returns the inclusive (low, high) domain of legal values.
    pub fn domain(&self) -> (u32, u32) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (1, 7),
        }
    }

    /// Returns the field as a short identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "dom",
            Field::Month => "month",
            Field::DayOfWeek => "dow",
        }
    }

    /// Returns the human-readable label used in output lines and error
    /// messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }

    /// Returns the named-token table for this field, if it has one.
    ///
    /// Only month and day-of-week fields accept alphabetic tokens; every
    /// other field is purely numeric.
    pub fn name_table(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::Month => Some(&MONTH_NAMES),
            Field::DayOfWeek => Some(&DAY_NAMES),
            _ => None,
        }
    }

    /// Resolves a named token (e.g. "JAN", "mon") to its 1-based index.
    ///
    /// Returns `None` for fields without a name table and for tokens not in
    /// the table. Matching is case-insensitive.
    pub fn named_value(&self, token: &str) -> Option<u32> {
        let table = self.name_table()?;
        table
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|i| i as u32 + 1)
    }

    /// Returns the five fields in canonical expression order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Minute,
            Field::Hour,
            Field::DayOfMonth,
            Field::Month,
            Field::DayOfWeek,
        ]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
