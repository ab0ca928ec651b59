//! Parsed schedule expression: the five expanded fields plus the command.

use serde::Serialize;

use crate::error::{CronError, EXPECTED_TOKENS};
use crate::expand::expand;
use crate::field::Field;

/// A fully parsed and expanded schedule expression.
///
/// Each schedule field holds its expansion in generation order; the command
/// is carried through untouched. An expression is built once by
/// [`CronExpression::parse`] and not mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronExpression {
    /// Expanded minute values (0-59).
    pub minute: Vec<u32>,
    /// Expanded hour values (0-23).
    pub hour: Vec<u32>,
    /// Expanded day-of-month values (1-31).
    pub day_of_month: Vec<u32>,
    /// Expanded month values (1-12).
    pub month: Vec<u32>,
    /// Expanded day-of-week values (1-7).
    pub day_of_week: Vec<u32>,
    /// The literal command string.
    pub command: String,
}

impl CronExpression {
    /// Parses a schedule expression of exactly six whitespace-separated
    /// tokens: five schedule fields followed by the command.
    ///
    /// The split is strict: a command containing spaces pushes the token
    /// count past six and fails with [`CronError::ArgumentCount`] before any
    /// field is expanded. Fields expand eagerly left to right, and the first
    /// failing field short-circuits the rest.
    ///
    /// # Example
    /// ```
    /// use cronex_expr::CronExpression;
    ///
    /// let expr = CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/backup").unwrap();
    /// assert_eq!(expr.minute, vec![0, 15, 30, 45]);
    /// assert_eq!(expr.command, "/usr/bin/backup");
    /// ```
    pub fn parse(input: &str) -> Result<Self, CronError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != EXPECTED_TOKENS {
            return Err(CronError::ArgumentCount {
                found: tokens.len(),
            });
        }

        Ok(Self {
            minute: expand(tokens[0], Field::Minute)?,
            hour: expand(tokens[1], Field::Hour)?,
            day_of_month: expand(tokens[2], Field::DayOfMonth)?,
            month: expand(tokens[3], Field::Month)?,
            day_of_week: expand(tokens[4], Field::DayOfWeek)?,
            command: tokens[5].to_string(),
        })
    }

    /// Returns the five schedule fields and their expansions in canonical
    /// order.
    pub fn schedules(&self) -> [(Field, &[u32]); 5] {
        [
            (Field::Minute, self.minute.as_slice()),
            (Field::Hour, self.hour.as_slice()),
            (Field::DayOfMonth, self.day_of_month.as_slice()),
            (Field::Month, self.month.as_slice()),
            (Field::DayOfWeek, self.day_of_week.as_slice()),
        ]
    }

    /// Serializes the expression to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::str::FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_expression() {
        let expr = CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/backup").unwrap();
        assert_eq!(expr.minute, vec![0, 15, 30, 45]);
        assert_eq!(expr.hour, vec![0]);
        assert_eq!(expr.day_of_month, vec![1, 15]);
        assert_eq!(expr.month, (1..=12).collect::<Vec<u32>>());
        assert_eq!(expr.day_of_week, vec![1, 2, 3, 4, 5]);
        assert_eq!(expr.command, "/usr/bin/backup");
    }

    #[test]
    fn test_too_few_tokens() {
        let err = CronExpression::parse("* * * *").unwrap_err();
        assert_eq!(err, CronError::ArgumentCount { found: 4 });
    }

    #[test]
    fn test_too_many_tokens() {
        // A command containing a space is an argument-count error, not a
        // multi-word command.
        let err = CronExpression::parse("* * * * * echo hello").unwrap_err();
        assert_eq!(err, CronError::ArgumentCount { found: 7 });
    }

    #[test]
    fn test_count_violation_wins_over_field_errors() {
        // Token count is checked before any expansion; the bad minute field
        // is never reached.
        let err = CronExpression::parse("99-1 * * *").unwrap_err();
        assert_eq!(err, CronError::ArgumentCount { found: 4 });
    }

    #[test]
    fn test_field_error_short_circuits() {
        let err = CronExpression::parse("12-10 * * * * cmd").unwrap_err();
        assert!(matches!(err, CronError::InvalidRange { field: "minute", .. }));

        let err = CronExpression::parse("* 25 * * * cmd").unwrap_err();
        assert!(matches!(err, CronError::ValueOutOfRange { field: "hour", .. }));
    }

    #[test]
    fn test_named_fields_parse() {
        let expr = CronExpression::parse("0 12 1 JAN-MAR MON-FRI /bin/true").unwrap();
        assert_eq!(expr.month, vec![1, 2, 3]);
        assert_eq!(expr.day_of_week, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_str() {
        let expr: CronExpression = "0 0 1 1 1 /bin/true".parse().unwrap();
        assert_eq!(expr.command, "/bin/true");
    }

    #[test]
    fn test_schedules_order() {
        let expr = CronExpression::parse("0 1 2 3 4 cmd").unwrap();
        let labels: Vec<&str> = expr.schedules().iter().map(|(f, _)| f.label()).collect();
        assert_eq!(
            labels,
            vec!["minute", "hour", "day of month", "month", "day of week"]
        );
    }

    #[test]
    fn test_json_serialization() {
        let expr = CronExpression::parse("0 0 1 1 1 /bin/true").unwrap();
        let json = expr.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["minute"], serde_json::json!([0]));
        assert_eq!(value["command"], "/bin/true");
    }
}
