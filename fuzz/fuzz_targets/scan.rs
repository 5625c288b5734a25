#![no_main]

use libfuzzer_sys::fuzz_target;
use yutgen::{GeneratorConfig, render_table, scan_table};

fuzz_target!(|data: &[u8]| {
    // Same lossy decoding as reading a source file
    let source = String::from_utf8_lossy(data);
    let config = GeneratorConfig::default();
    // Scanning never fails for a valid name; rendering must not panic on whatever was recognized
    if let Ok(table) = scan_table("fuzz_test", &source, &config) {
        let _ = render_table(&table, &config);
    }
});
