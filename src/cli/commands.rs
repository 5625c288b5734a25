//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};
use std::path::Path;

use crate::backend::{render_aggregate, render_table, write_generated};
use crate::config::GeneratorConfig;
use crate::frontend::scan_file;
use crate::model::AggregateTable;

use super::{CliError, CliResult, ExitCode};

/// Build the generator configuration from CLI overrides.
pub fn build_config(prefix: Option<String>, header: Option<String>) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    if let Some(prefix) = prefix {
        config = config.with_case_prefix(prefix);
    }
    if let Some(header) = header {
        config = config.with_runtime_header(header);
    }
    config
}

/// Scan one source file and write `<output_dir>/<stem>.def`.
///
/// Prints the recognized raw case names to stdout, one per line. With `dry_run`, prints the generated text instead
/// and writes nothing.
pub fn scan(source: &Path, output_dir: &Path, config: &GeneratorConfig, dry_run: bool) -> CliResult<ExitCode> {
    let table = scan_file(source, config)?;
    let text = render_table(&table, config);

    let mut stdout = io::stdout().lock();
    if dry_run {
        stdout.write_all(text.as_bytes()).map_err(stdout_error)?;
        return Ok(ExitCode::SUCCESS);
    }

    write_generated(output_dir, &config.table_file(&table.name), &text)?;
    for name in table.case_names() {
        writeln!(stdout, "{name}").map_err(stdout_error)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Write `<output_dir>/all_test.def` for the comma-separated table `names`.
pub fn aggregate(
    names: &str,
    suffix: &str,
    output_dir: &Path,
    config: &GeneratorConfig,
    dry_run: bool,
) -> CliResult<ExitCode> {
    let aggregate = AggregateTable::parse_list(names, suffix)?;
    let text = render_aggregate(&aggregate, config);

    if dry_run {
        io::stdout().lock().write_all(text.as_bytes()).map_err(stdout_error)?;
        return Ok(ExitCode::SUCCESS);
    }

    write_generated(output_dir, &config.aggregate_file, &text)?;
    Ok(ExitCode::SUCCESS)
}

fn stdout_error(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing to stdout: {}", e))
}
