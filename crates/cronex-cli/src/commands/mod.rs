//! CLI command implementations

pub mod expand;

mod json_output;
