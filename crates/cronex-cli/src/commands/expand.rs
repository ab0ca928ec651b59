//! Expand command implementation
//!
//! Parses a schedule expression and renders the expanded fields.

use anyhow::Result;
use colored::Colorize;
use cronex_expr::CronExpression;
use std::io::{self, Write};
use std::process::ExitCode;

use super::json_output::{ExpandOutput, JsonError};
use crate::output::render_table;

/// Run the expand command
///
/// # Arguments
/// * `expression` - The full schedule expression (five fields + command)
/// * `json_output` - Whether to output machine-readable JSON instead of the
///   padded table
///
/// # Returns
/// Exit code: 0 if the expression parsed, 1 if it did not
pub fn run(expression: &str, json_output: bool) -> Result<ExitCode> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if json_output {
        run_json(expression, &mut stdout)
    } else {
        run_human(expression, &mut stdout, &mut stderr)
    }
}

/// Run expand with human-readable output.
///
/// Success writes the six-line table to `stdout`; failure writes a single
/// diagnostic line to `stderr` and leaves `stdout` untouched.
fn run_human(
    expression: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<ExitCode> {
    match CronExpression::parse(expression) {
        Ok(expr) => {
            writeln!(stdout, "{}", render_table(&expr))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(stderr, "{} [{}]: {}", "error".red().bold(), err.code(), err)?;
            Ok(ExitCode::from(1))
        }
    }
}

/// Run expand with machine-readable JSON output on `stdout`.
///
/// The JSON envelope goes to `stdout` on both success and failure; the exit
/// code still distinguishes the two.
fn run_json(expression: &str, stdout: &mut impl Write) -> Result<ExitCode> {
    let output = match CronExpression::parse(expression) {
        Ok(expr) => ExpandOutput::success(expr),
        Err(err) => ExpandOutput::failure(vec![JsonError::from(&err)]),
    };

    let json = serde_json::to_string_pretty(&output)
        .expect("ExpandOutput serialization should not fail");
    writeln!(stdout, "{}", json)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
