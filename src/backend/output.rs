//! Write generated files
//!
//! Output goes to a temporary file in the destination directory and is renamed over the target, so a concurrent build
//! step sees either the previous file or the complete new one.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::{GenError, GenResult};

/// Atomically write `contents` to `dir/file_name`, returning the final path.
///
/// ## Errors
///
/// Returns [`GenError::Write`] if `dir` does not exist or any step of the write fails. The temporary file is removed
/// on failure.
pub fn write_generated(dir: &Path, file_name: &str, contents: &str) -> GenResult<PathBuf> {
    let target = dir.join(file_name);

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GenError::write(&target, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| GenError::write(&target, e))?;
    tmp.as_file().sync_all().map_err(|e| GenError::write(&target, e))?;
    tmp.persist(&target).map_err(|e| GenError::write(&target, e.error))?;

    tracing::info!(path = %target.display(), bytes = contents.len(), "wrote generated file");
    Ok(target)
}
