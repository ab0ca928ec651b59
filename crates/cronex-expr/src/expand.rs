//! Field expansion: converts one comma-separated field expression into the
//! explicit sequence of integer values it denotes.
//!
//! Each sub-term is classified by the delimiters it contains, checked in
//! priority order: range with step (`A-B/S`), range (`A-B`), full-domain
//! step (`*/S`), wildcard (`*`), then a plain numeric or named value.
//! Expansion is a pure single pass; no sub-term depends on another.

use crate::error::CronError;
use crate::field::Field;

/// Expands a field expression into its ordered value sequence.
///
/// Sub-terms are separated by commas and expand in written order. The result
/// is neither sorted nor deduplicated; every value is guaranteed to lie in
/// the field's domain.
///
/// # Example
/// ```
/// use cronex_expr::{expand, Field};
///
/// assert_eq!(expand("*/15", Field::Minute).unwrap(), vec![0, 15, 30, 45]);
/// assert_eq!(expand("JAN-MAR", Field::Month).unwrap(), vec![1, 2, 3]);
/// ```
pub fn expand(text: &str, field: Field) -> Result<Vec<u32>, CronError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CronError::EmptyField {
            field: field.label(),
        });
    }

    let mut values = Vec::new();
    for term in text.split(',') {
        values.extend(expand_term(term.trim(), field)?);
    }
    Ok(values)
}

/// Expands a single comma-free sub-term.
fn expand_term(term: &str, field: Field) -> Result<Vec<u32>, CronError> {
    if term.is_empty() {
        return Err(CronError::EmptyField {
            field: field.label(),
        });
    }

    if term == "*" {
        let (low, high) = field.domain();
        return Ok((low..=high).collect());
    }

    match (term.contains('-'), term.contains('/')) {
        (true, true) => expand_range_with_step(term, field),
        (true, false) => expand_range(term, field),
        (false, true) => expand_wildcard_step(term, field),
        (false, false) => expand_single(term, field),
    }
}

/// Resolves one token to an integer: integer parse first, then named-token
/// lookup for fields that have a name table.
fn resolve_value(token: &str, field: Field) -> Result<u32, CronError> {
    if let Ok(value) = token.parse::<u32>() {
        return Ok(value);
    }
    field
        .named_value(token)
        .ok_or_else(|| CronError::MalformedNumber {
            field: field.label(),
            token: token.to_string(),
        })
}

/// Parses a step frequency; a step of zero is rejected.
fn parse_step(token: &str, field: Field) -> Result<u32, CronError> {
    let step = token
        .parse::<u32>()
        .map_err(|_| CronError::MalformedNumber {
            field: field.label(),
            token: token.to_string(),
        })?;
    if step == 0 {
        return Err(CronError::InvalidStep {
            field: field.label(),
            step,
        });
    }
    Ok(step)
}

/// Expands `A-B` into A..=B, with bounds validated against the field domain.
///
/// Each bound resolves independently, so numeric and named bounds can mix
/// (`JAN-3` and `1-MAR` both denote months 1 through 3).
fn expand_range(term: &str, field: Field) -> Result<Vec<u32>, CronError> {
    // A term with more than one '-' leaves a dash in the second half, which
    // then fails value resolution.
    let (start_text, end_text) = term.split_once('-').unwrap_or((term, ""));
    let start = resolve_value(start_text.trim(), field)?;
    let end = resolve_value(end_text.trim(), field)?;

    let (low, high) = field.domain();
    if start > end || start < low || end > high {
        return Err(CronError::InvalidRange {
            field: field.label(),
            start,
            end,
            low,
            high,
        });
    }
    Ok((start..=end).collect())
}

/// Expands `A-B/S`: the full range A..=B, keeping every S-th element
/// starting at the first.
fn expand_range_with_step(term: &str, field: Field) -> Result<Vec<u32>, CronError> {
    let (range_text, step_text) = term.split_once('/').unwrap_or((term, ""));
    let range = expand_range(range_text, field)?;
    let step = parse_step(step_text, field)?;
    Ok(range.into_iter().step_by(step as usize).collect())
}

/// Expands `*/S`: the full domain, keeping every S-th value from the low
/// bound. A base other than `*` is rejected rather than silently expanding
/// to nothing.
fn expand_wildcard_step(term: &str, field: Field) -> Result<Vec<u32>, CronError> {
    let (base, step_text) = term.split_once('/').unwrap_or((term, ""));
    if base != "*" {
        return Err(CronError::InvalidFrequencyBase {
            field: field.label(),
            base: base.to_string(),
        });
    }
    let step = parse_step(step_text, field)?;
    let (low, high) = field.domain();
    Ok((low..=high).step_by(step as usize).collect())
}

/// Expands a plain numeric or named single value, domain-checked.
fn expand_single(term: &str, field: Field) -> Result<Vec<u32>, CronError> {
    let value = resolve_value(term, field)?;
    let (low, high) = field.domain();
    if value < low || value > high {
        return Err(CronError::ValueOutOfRange {
            field: field.label(),
            value,
            low,
            high,
        });
    }
    Ok(vec![value])
}
