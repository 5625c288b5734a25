//! Emit the combined registry for a multi-file test binary
//!
//! The aggregate only knows table names. It declares each one `extern` and lists them in a single null-terminated
//! registry, in caller order. Whether the tables exist is a link-time question; nothing here checks it.

use super::writer::DefWriter;
use crate::config::GeneratorConfig;
use crate::model::AggregateTable;

/// Render the aggregate registry as `.def` text.
#[tracing::instrument(skip_all, fields(table_count = aggregate.names.len()))]
pub fn render_aggregate(aggregate: &AggregateTable, config: &GeneratorConfig) -> String {
    let guard = &config.aggregate_guard;
    let mut w = DefWriter::new();

    w.directive(&format!("#ifndef {guard}"));
    w.directive(&format!("#define {guard}"));
    w.newline();
    w.directive(&format!("#include \"{}\"", config.runtime_header));
    w.newline();
    w.directive(&format!("#if defined({})", config.aggregate_macro));
    w.newline();

    for name in &aggregate.names {
        w.writeln(&format!("extern const {} {};", config.table_type, name));
    }
    w.newline();

    w.writeln(&format!("const {} *{}[] = {{", config.table_type, config.registry_symbol));
    w.indent();
    for name in &aggregate.names {
        w.writeln(&format!("&{name},"));
    }
    w.writeln("NULL,");
    w.dedent();
    w.writeln("};");
    w.newline();

    w.directive(&format!("#endif // defined({})", config.aggregate_macro));
    w.newline();
    w.directive(&format!("#endif // {guard}"));
    w.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_foo_bar() {
        let aggregate = AggregateTable::parse_list("foo,bar", "").unwrap();
        let out = render_aggregate(&aggregate, &GeneratorConfig::default());
        let expected = "\
#ifndef UNIQUE_INCLUDE_YUT_ALL_TEST_DEF
#define UNIQUE_INCLUDE_YUT_ALL_TEST_DEF

#include \"yut.h\"

#if defined(YUT_ALL_TEST)

extern const struct yut_case_def foo;
extern const struct yut_case_def bar;

const struct yut_case_def *yut_intl_test[] = {
\t&foo,
\t&bar,
\tNULL,
};

#endif // defined(YUT_ALL_TEST)

#endif // UNIQUE_INCLUDE_YUT_ALL_TEST_DEF
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_list_still_terminates() {
        let aggregate = AggregateTable::parse_list("", "").unwrap();
        let out = render_aggregate(&aggregate, &GeneratorConfig::default());
        assert!(out.contains("const struct yut_case_def *yut_intl_test[] = {\n\tNULL,\n};\n"));
    }
}
