//! Error types for expression parsing and field expansion.

use thiserror::Error;

/// Number of whitespace-separated tokens a schedule expression must contain:
/// five schedule fields plus the command.
pub const EXPECTED_TOKENS: usize = 6;

/// Errors raised while parsing a schedule expression or expanding one of its
/// fields.
///
/// Every variant carries the human-readable label of the offending field so
/// callers can report it without re-deriving context, and each variant maps
/// to a stable code via [`CronError::code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The expression did not split into exactly six tokens.
    #[error("expected {EXPECTED_TOKENS} whitespace-separated tokens (5 fields + command), found {found}")]
    ArgumentCount {
        /// Number of tokens actually found.
        found: usize,
    },

    /// A range sub-term's bounds are inverted or outside the field's domain.
    #[error("invalid range in {field}: {start}-{end} is outside {low}-{high} or inverted")]
    InvalidRange {
        /// Human-readable field label.
        field: &'static str,
        /// Resolved start bound.
        start: u32,
        /// Resolved end bound.
        end: u32,
        /// Domain lower bound.
        low: u32,
        /// Domain upper bound.
        high: u32,
    },

    /// A token is neither an integer nor a recognized named token for its
    /// field.
    #[error("malformed value in {field}: '{token}' is not a number or a named token")]
    MalformedNumber {
        /// Human-readable field label.
        field: &'static str,
        /// The offending token text.
        token: String,
    },

    /// A step frequency is zero.
    #[error("invalid step in {field}: step must be at least 1, got {step}")]
    InvalidStep {
        /// Human-readable field label.
        field: &'static str,
        /// The offending step value.
        step: u32,
    },

    /// A frequency sub-term whose base is neither `*` nor a range.
    #[error("invalid frequency in {field}: base '{base}' must be '*' or a range")]
    InvalidFrequencyBase {
        /// Human-readable field label.
        field: &'static str,
        /// The offending base text.
        base: String,
    },

    /// A single value lies outside the field's domain.
    #[error("value out of range in {field}: {value} is outside {low}-{high}")]
    ValueOutOfRange {
        /// Human-readable field label.
        field: &'static str,
        /// The offending value.
        value: u32,
        /// Domain lower bound.
        low: u32,
        /// Domain upper bound.
        high: u32,
    },

    /// A field or sub-term is empty after trimming.
    #[error("empty value in {field}")]
    EmptyField {
        /// Human-readable field label.
        field: &'static str,
    },
}

impl CronError {
    /// Returns the stable error code string (e.g. "CRON_001").
    ///
    /// These codes are part of the machine-readable output contract and can
    /// be matched on programmatically.
    pub fn code(&self) -> &'static str {
        match self {
            CronError::ArgumentCount { .. } => "CRON_001",
            CronError::InvalidRange { .. } => "CRON_002",
            CronError::MalformedNumber { .. } => "CRON_003",
            CronError::InvalidStep { .. } => "CRON_004",
            CronError::InvalidFrequencyBase { .. } => "CRON_005",
            CronError::ValueOutOfRange { .. } => "CRON_006",
            CronError::EmptyField { .. } => "CRON_007",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(CronError::ArgumentCount { found: 4 }.code(), "CRON_001");
        assert_eq!(
            CronError::InvalidRange {
                field: "hour",
                start: 12,
                end: 10,
                low: 0,
                high: 23,
            }
            .code(),
            "CRON_002"
        );
        assert_eq!(
            CronError::MalformedNumber {
                field: "minute",
                token: "x".to_string(),
            }
            .code(),
            "CRON_003"
        );
    }

    #[test]
    fn test_display_names_the_field_label() {
        let err = CronError::InvalidRange {
            field: "day of week",
            start: 6,
            end: 2,
            low: 1,
            high: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid range in day of week: 6-2 is outside 1-7 or inverted"
        );

        let err = CronError::ArgumentCount { found: 4 };
        assert_eq!(
            err.to_string(),
            "expected 6 whitespace-separated tokens (5 fields + command), found 4"
        );
    }
}
