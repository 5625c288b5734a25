//! yutgen backend
//!
//! Renders registration tables and the aggregate registry as C declaration text, and writes the results.
//!
//! ## Module Organization
//!
//! - `writer.rs` - Tab-indented text builder
//! - `table.rs` - Per-file `.def` emission
//! - `aggregate.rs` - Combined `all_test.def` emission
//! - `output.rs` - Atomic file output

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod aggregate;
pub mod output;
pub mod table;
pub mod writer;

pub use aggregate::render_aggregate;
pub use output::write_generated;
pub use table::render_table;
