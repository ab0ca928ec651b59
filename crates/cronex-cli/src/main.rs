//! Cronex CLI - Command-line cron schedule expression expander
//!
//! This binary parses a five-field cron schedule expression plus a command
//! string and prints each field's expanded value sequence as a fixed-width
//! table (or a machine-readable JSON envelope with `--json`).

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use cronex_cli::commands;

/// Cronex - Cron Schedule Expression Expander
#[derive(Parser)]
#[command(name = "cronex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The schedule expression: "<minute> <hour> <day of month> <month> <day of week> <command>"
    expression: String,

    /// Output machine-readable JSON instead of the padded table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::expand::run(&cli.expression, cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_expression() {
        let cli = Cli::try_parse_from(["cronex", "*/15 0 1,15 * 1-5 /usr/bin/backup"]).unwrap();
        assert_eq!(cli.expression, "*/15 0 1,15 * 1-5 /usr/bin/backup");
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_json_flag() {
        let cli = Cli::try_parse_from(["cronex", "--json", "0 0 1 1 1 cmd"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.expression, "0 0 1 1 1 cmd");
    }

    #[test]
    fn test_cli_requires_expression() {
        assert!(Cli::try_parse_from(["cronex"]).is_err());
    }
}
