//! Scan one source file into a registration table
//!
//! The scan walks the text line by line and keeps every recognized test case in source order. At most one setup and
//! one teardown are kept; the first recognized declaration wins and later ones are reported with `warn!`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::identifiers::validate_identifier;
use super::patterns::{Declaration, recognize};
use crate::config::GeneratorConfig;
use crate::errors::{GenError, GenResult};
use crate::model::{FixtureHooks, RegistrationTable, TestCase};

/// Maximum source file size (100 MB)
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Declarations found in a source text, before a table name is attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub cases: Vec<TestCase>,
    pub hooks: FixtureHooks,
}

/// Collect every recognized declaration in `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan_source(source: &str, config: &GeneratorConfig) -> ScanResult {
    let mut result = ScanResult::default();

    for (index, line) in source.lines().enumerate() {
        let Some(decl) = recognize(line, &config.case_prefix) else {
            continue;
        };
        let line_no = index + 1;
        debug!(line = line_no, kind = decl.kind(), "recognized declaration");

        match decl {
            Declaration::Case(case) => result.cases.push(case),
            Declaration::Setup(sig) => keep_first(&mut result.hooks.setup, sig, "setup", line_no),
            Declaration::Teardown(sig) => keep_first(&mut result.hooks.teardown, sig, "teardown", line_no),
        }
    }

    if result.cases.is_empty() {
        warn!("no test cases recognized");
    }
    result
}

fn keep_first(slot: &mut Option<String>, signature: String, kind: &str, line_no: usize) {
    if slot.is_some() {
        warn!(line = line_no, "duplicate {} ignored, keeping the first one", kind);
        return;
    }
    *slot = Some(signature);
}

/// Scan `source` into a table named `table_name`.
///
/// ## Errors
///
/// Returns [`GenError::Naming`] if `table_name` is not a valid C identifier.
pub fn scan_table(table_name: &str, source: &str, config: &GeneratorConfig) -> GenResult<RegistrationTable> {
    validate_identifier(table_name)?;
    let ScanResult { cases, hooks } = scan_source(source, config);
    if cases.len() >= config.max_cases {
        warn!(
            table = table_name,
            cases = cases.len(),
            capacity = config.max_cases.saturating_sub(1),
            "more test cases than the runtime table can hold"
        );
    }
    Ok(RegistrationTable::new(table_name, cases, hooks))
}

/// Derive the table name from a source path: the file name without its last extension.
///
/// ## Errors
///
/// Returns [`GenError::Naming`] if the path has no file name or the stem is not a valid C identifier.
pub fn table_name_from_path(path: &Path) -> GenResult<String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| GenError::naming(path.display().to_string(), "path has no file name"))?;
    let name = stem
        .to_str()
        .ok_or_else(|| GenError::naming(stem.to_string_lossy(), "file name is not valid UTF-8"))?;
    validate_identifier(name)?;
    Ok(name.to_string())
}

/// Read source file contents.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; every recognized shape is ASCII, so such lines
/// are skipped like any other unmatched line.
///
/// ## Errors
///
/// Returns [`GenError::Read`] if the file cannot be read or exceeds `MAX_SOURCE_SIZE`.
pub fn read_source(path: &Path) -> GenResult<String> {
    let metadata = fs::metadata(path).map_err(|e| GenError::read(path, e))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(GenError::read(
            path,
            std::io::Error::other(format!(
                "file is too large ({} bytes, max {} bytes)",
                metadata.len(),
                MAX_SOURCE_SIZE
            )),
        ));
    }
    let bytes = fs::read(path).map_err(|e| GenError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name, read and scan one source file.
///
/// The name is checked before the file is opened, so a bad name fails even for unreadable paths.
pub fn scan_file(path: &Path, config: &GeneratorConfig) -> GenResult<RegistrationTable> {
    let table_name = table_name_from_path(path)?;
    let source = read_source(path)?;
    scan_table(&table_name, &source, config)
}
