//! Cron Schedule Expression Library
//!
//! This crate parses five-field cron schedule expressions (minute, hour,
//! day-of-month, month, day-of-week) plus a trailing command, and expands
//! each field's compact syntax into the explicit sequence of integer values
//! it denotes.
//!
//! # Overview
//!
//! A field expression is a comma-separated list of sub-terms, each one of:
//!
//! - `*` — every value in the field's domain
//! - `A-B` — a bounded inclusive range; bounds may be numeric or, for
//!   month/day-of-week fields, three-letter named tokens (`JAN`, `MON`)
//! - `*/S` — every S-th value across the full domain
//! - `A-B/S` — every S-th element of the bounded range
//! - a plain numeric or named single value
//!
//! Expansion is pure and stateless; all values are validated against the
//! field's domain, and every failure is a tagged [`CronError`] kind.
//!
//! # Example
//!
//! ```
//! use cronex_expr::{expand, CronExpression, Field};
//!
//! // Expand one field
//! assert_eq!(expand("*/15", Field::Minute).unwrap(), vec![0, 15, 30, 45]);
//!
//! // Parse a whole expression
//! let expr = CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/backup").unwrap();
//! assert_eq!(expr.day_of_month, vec![1, 15]);
//! assert_eq!(expr.command, "/usr/bin/backup");
//! ```
//!
//! # Modules
//!
//! - [`error`]: tagged error kinds with stable codes
//! - [`field`]: the five schedule fields, domains, and named-token tables
//! - [`expand`]: the field expansion grammar
//! - [`expression`]: whole-expression parsing

pub mod error;
pub mod expand;
pub mod expression;
pub mod field;

// Re-export commonly used types at the crate root
pub use error::{CronError, EXPECTED_TOKENS};
pub use expand::expand;
pub use expression::CronExpression;
pub use field::{Field, DAY_NAMES, MONTH_NAMES};
