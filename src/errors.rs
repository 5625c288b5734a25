//! Error types for scanning and generation.
//!
//! There is no recoverable category: every variant aborts the current invocation. Lines that match no declaration
//! shape are not errors and never surface here.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a scan or an aggregation
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("invalid table name '{name}': {reason}")]
    #[diagnostic(
        code(yutgen::naming),
        help("table names become C symbols and macro names; use only letters, digits and '_'")
    )]
    Naming { name: String, reason: String },

    #[error("cannot read '{}': {}", .path.display(), .source)]
    #[diagnostic(code(yutgen::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {}", .path.display(), .source)]
    #[diagnostic(code(yutgen::io::write), help("the output directory must exist and be writable"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    pub fn naming(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::Naming {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
