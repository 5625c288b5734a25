//! yutgen frontend
//!
//! Turns source text into a [`RegistrationTable`](crate::model::RegistrationTable):
//! - `patterns`: line-anchored recognition of case/setup/teardown declarations
//! - `identifiers`: C identifier rules for table names
//! - `scanner`: file reading, table naming and the line walk

pub mod identifiers;
pub mod patterns;
pub mod scanner;

pub use scanner::{ScanResult, scan_file, scan_source, scan_table, table_name_from_path};
