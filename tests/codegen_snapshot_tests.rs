//! Golden snapshot tests for generated `.def` files
//!
//! These tests scan the `.c` inputs in `tests/codegen_snapshots/` and compare
//! the generated text against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::path::Path;

use yutgen::{AggregateTable, GeneratorConfig, render_aggregate, render_table, scan_file};

/// Scan a file from the codegen_snapshots directory and render its table
fn generate_def(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.c", name);
    let config = GeneratorConfig::default();
    let table = scan_file(Path::new(&path), &config).unwrap_or_else(|e| panic!("Failed to scan {}: {}", path, e));
    render_table(&table, &config)
}

#[test]
fn test_hash_map_codegen() {
    let def = generate_def("hash_map_test");
    insta::assert_snapshot!("hash_map_test", def);
}

#[test]
fn test_void_param_codegen() {
    let def = generate_def("encoding_test");
    insta::assert_snapshot!("encoding_test", def);
}

#[test]
fn test_empty_source_codegen() {
    let def = generate_def("empty_test");
    insta::assert_snapshot!("empty_test", def);
}

#[test]
fn test_interleaved_hooks_codegen() {
    let def = generate_def("interleaved_test");
    insta::assert_snapshot!("interleaved_test", def);
}

#[test]
fn test_aggregate_codegen() {
    let aggregate = AggregateTable::parse_list("yut_test,lex_test,hash_map_test", "").expect("valid names");
    let def = render_aggregate(&aggregate, &GeneratorConfig::default());
    insta::assert_snapshot!("aggregate_all_test", def);
}
