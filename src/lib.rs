#![forbid(unsafe_code)]
//! yutgen: registration-table generator for the yut C unit-test runner
//!
//! yut test sources declare cases as `static int test_<name>(<type> *p)` functions, with optional
//! `static <type> *setup()` and `static void teardown(<type> *p)` hooks. This crate scans such a file line by line
//! and emits a `.def` file holding the table the runtime iterates. A second generator fuses several per-file tables
//! into one registry for a combined test binary.
//!
//! - `frontend`: line recognition and scanning
//! - `backend`: `.def` rendering and atomic output
//! - `cli`: the `yutgen` command line
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a programming error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation (the static recognition patterns are the only case).

pub mod backend;
pub mod cli;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod model;
pub mod version;

pub use backend::{render_aggregate, render_table, write_generated};
pub use config::GeneratorConfig;
pub use errors::{GenError, GenResult};
pub use frontend::{scan_file, scan_source, scan_table, table_name_from_path};
pub use model::{AggregateTable, FixtureHooks, FnRef, RegistrationTable, TestCase};
