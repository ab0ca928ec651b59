//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag: a structured envelope that tools can
//! parse instead of the human-readable padded table.

use cronex_expr::{CronError, CronExpression};
use serde::Serialize;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "CRON_002").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl From<&CronError> for JsonError {
    fn from(err: &CronError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Envelope for the expand command's JSON output.
#[derive(Debug, Serialize)]
pub struct ExpandOutput {
    /// Whether the expression parsed successfully.
    pub success: bool,
    /// The parsed expression on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CronExpression>,
    /// Errors on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl ExpandOutput {
    /// Creates a success envelope.
    pub fn success(result: CronExpression) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failure envelope.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }
}
