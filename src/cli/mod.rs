//! CLI module for yutgen
//!
//! ## Commands
//!
//! - `scan <source> [output_dir]` - Generate `<stem>.def` for one test source
//! - `aggregate <names> <output_dir>` - Generate `all_test.def` for a combined test binary
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CASE_PREFIX;
use crate::errors::GenError;
use crate::version::YUTGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenError> for CliError {
    fn from(err: GenError) -> Self {
        // Render through miette so the diagnostic code and help line reach the user.
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Registration-table generator for the yut C unit-test runner
#[derive(Parser, Debug)]
#[command(name = "yutgen")]
#[command(version = YUTGEN_VERSION)]
#[command(about = "Registration-table generator for the yut C unit-test runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a test source and write `<stem>.def`
    Scan {
        /// Test source file to scan
        #[arg(value_name = "SOURCE")]
        source: PathBuf,
        /// Output directory (default: current directory)
        #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
        /// Required test-case function prefix
        #[arg(long, value_name = "PREFIX", default_value = DEFAULT_CASE_PREFIX)]
        prefix: String,
        /// Runtime header to include
        #[arg(long, value_name = "HEADER")]
        header: Option<String>,
        /// Print the generated text instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Write `all_test.def` listing previously generated tables
    Aggregate {
        /// Comma-separated table names, in run order
        #[arg(value_name = "NAMES")]
        names: String,
        /// Output directory
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
        /// Suffix appended to every name (e.g. `_test`)
        #[arg(long, value_name = "SUFFIX", default_value = "")]
        suffix: String,
        /// Runtime header to include
        #[arg(long, value_name = "HEADER")]
        header: Option<String>,
        /// Print the generated text instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Scan {
            source,
            output_dir,
            prefix,
            header,
            dry_run,
        } => {
            let config = commands::build_config(Some(prefix), header);
            commands::scan(&source, &output_dir, &config, dry_run)
        }
        Command::Aggregate {
            names,
            output_dir,
            suffix,
            header,
            dry_run,
        } => {
            let config = commands::build_config(None, header);
            commands::aggregate(&names, &suffix, &output_dir, &config, dry_run)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan_defaults() {
        let cli = Cli::try_parse_from(["yutgen", "scan", "lex_test.c"]).unwrap();
        if let Command::Scan {
            source,
            output_dir,
            prefix,
            header,
            dry_run,
        } = cli.command
        {
            assert_eq!(source, PathBuf::from("lex_test.c"));
            assert_eq!(output_dir, PathBuf::from("."));
            assert_eq!(prefix, "test_");
            assert!(header.is_none());
            assert!(!dry_run);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_with_output_dir() {
        let cli = Cli::try_parse_from(["yutgen", "scan", "src/lex_test.c", "build/testing", "--dry-run"]).unwrap();
        if let Command::Scan {
            output_dir, dry_run, ..
        } = cli.command
        {
            assert_eq!(output_dir, PathBuf::from("build/testing"));
            assert!(dry_run);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_aggregate() {
        let cli = Cli::try_parse_from(["yutgen", "aggregate", "lex,value", "out", "--suffix", "_test"]).unwrap();
        if let Command::Aggregate {
            names,
            output_dir,
            suffix,
            ..
        } = cli.command
        {
            assert_eq!(names, "lex,value");
            assert_eq!(output_dir, PathBuf::from("out"));
            assert_eq!(suffix, "_test");
        } else {
            panic!("Expected Aggregate command");
        }
    }

    #[test]
    fn test_cli_aggregate_requires_output_dir() {
        assert!(Cli::try_parse_from(["yutgen", "aggregate", "foo,bar"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["yutgen"]).is_err());
    }

    #[test]
    fn test_gen_error_becomes_failure() {
        let err: CliError = GenError::naming("a-b", "contains '-'").into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("invalid table name 'a-b'"));
    }
}
