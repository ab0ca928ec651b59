//! Cronex CLI library.
//!
//! This crate provides the command implementations and output rendering for
//! the `cronex` binary, which expands cron schedule expressions into their
//! explicit per-field value sequences.

pub mod commands;
pub mod output;
