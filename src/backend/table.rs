//! Emit the per-file `.def` for one registration table
//!
//! The generated file is included at the top of the scanned test source. It forward-declares the recognized
//! functions, defines the table constant the runtime reads, and (unless the aggregate macro is defined) a one-entry
//! registry so a single-file test binary links on its own. Everything sits inside an include guard keyed by the table
//! name, and the cast macros are undefined again before the guard closes.

use super::writer::DefWriter;
use crate::config::GeneratorConfig;
use crate::model::{FnRef, RegistrationTable};

/// Cast macros and the runtime function-pointer types they cast to, in definition order
const CAST_MACROS: &[(&str, &str)] = &[
    ("SETUP", "yut_setup_t"),
    ("TEARDOWN", "yut_teardown_t"),
    ("CASE", "yut_case_t"),
];

/// Render a registration table as `.def` text.
#[tracing::instrument(skip_all, fields(table = %table.name, case_count = table.cases.len()))]
pub fn render_table(table: &RegistrationTable, config: &GeneratorConfig) -> String {
    let guard = config.table_guard(&table.name);
    let mut w = DefWriter::new();

    w.directive(&format!("#ifndef {guard}"));
    w.directive(&format!("#define {guard}"));
    w.newline();
    w.directive(&format!("#include \"{}\"", config.runtime_header));
    w.newline();
    for (name, target) in CAST_MACROS {
        let head = format!("{name}(p)");
        w.directive(&format!("#define {head:<12}(({target})p)"));
    }
    w.newline();

    emit_forward_declarations(&mut w, table);
    w.newline();
    emit_table_value(&mut w, table, config);
    w.newline();
    emit_single_file_registry(&mut w, table, config);
    w.newline();

    for (name, _) in CAST_MACROS.iter().rev() {
        w.directive(&format!("#undef {name}"));
    }
    w.newline();
    w.directive(&format!("#endif // {guard}"));
    w.finish()
}

fn emit_forward_declarations(w: &mut DefWriter, table: &RegistrationTable) {
    for ty in table.fixture_types() {
        w.writeln(&format!("{ty};"));
    }
    if let Some(setup) = &table.hooks.setup {
        w.writeln(&format!("{setup};"));
    }
    if let Some(teardown) = &table.hooks.teardown {
        w.writeln(&format!("{teardown};"));
    }
    for case in &table.cases {
        w.writeln(&format!("{};", case.signature));
    }
}

fn emit_table_value(w: &mut DefWriter, table: &RegistrationTable, config: &GeneratorConfig) {
    w.writeln(&format!("const {} {} = {{", config.table_type, table.name));
    w.indent();
    w.writeln(&format!("\"{}\",", table.name));
    w.writeln(&format!("{},", fn_ref_or_null(table.setup_ref().as_ref())));
    w.writeln(&format!("{},", fn_ref_or_null(table.teardown_ref().as_ref())));
    w.writeln("{");
    w.indent();
    for case in &table.cases {
        w.writeln(&format!(
            "{{ \"{}\", {}, }},",
            case.display_name,
            cast(&case.function_ref())
        ));
    }
    w.writeln("{ NULL, NULL, },");
    w.dedent();
    w.writeln("},");
    w.dedent();
    w.writeln("};");
}

fn emit_single_file_registry(w: &mut DefWriter, table: &RegistrationTable, config: &GeneratorConfig) {
    w.directive(&format!("#ifndef {}", config.aggregate_macro));
    w.writeln(&format!(
        "const {} *{}[] = {{ &{}, NULL, }};",
        config.table_type, config.registry_symbol, table.name
    ));
    w.directive("#endif");
}

fn cast(f: &FnRef) -> String {
    format!("{}({})", f.cast_macro(), f.symbol())
}

fn fn_ref_or_null(f: Option<&FnRef>) -> String {
    f.map(cast).unwrap_or_else(|| "NULL".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FixtureHooks, TestCase};

    fn case(raw: &str, param_type: &str) -> TestCase {
        TestCase {
            raw_name: raw.to_string(),
            display_name: raw["test_".len()..].to_string(),
            signature: format!("static int {raw}({param_type} *p)"),
            param_type: param_type.to_string(),
        }
    }

    #[test]
    fn test_empty_table() {
        let table = RegistrationTable::new("empty_test", Vec::new(), FixtureHooks::default());
        let out = render_table(&table, &GeneratorConfig::default());
        let expected = "\
#ifndef UNIQUE_INCLUDE_EMPTY_TEST_DEF
#define UNIQUE_INCLUDE_EMPTY_TEST_DEF

#include \"yut.h\"

#define SETUP(p)    ((yut_setup_t)p)
#define TEARDOWN(p) ((yut_teardown_t)p)
#define CASE(p)     ((yut_case_t)p)


const struct yut_case_def empty_test = {
\t\"empty_test\",
\tNULL,
\tNULL,
\t{
\t\t{ NULL, NULL, },
\t},
};

#ifndef YUT_ALL_TEST
const struct yut_case_def *yut_intl_test[] = { &empty_test, NULL, };
#endif

#undef CASE
#undef TEARDOWN
#undef SETUP

#endif // UNIQUE_INCLUDE_EMPTY_TEST_DEF
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_hooks_and_cases() {
        let table = RegistrationTable::new(
            "vm_test",
            vec![case("test_alpha", "struct vm"), case("test_beta", "struct vm")],
            FixtureHooks {
                setup: Some("static struct vm *setup()".to_string()),
                teardown: Some("static void teardown(struct vm *p)".to_string()),
            },
        );
        let out = render_table(&table, &GeneratorConfig::default());

        assert!(out.contains(
            "struct vm;\nstatic struct vm *setup();\nstatic void teardown(struct vm *p);\n\
             static int test_alpha(struct vm *p);\nstatic int test_beta(struct vm *p);\n"
        ));
        assert!(out.contains("\tSETUP(setup),\n\tTEARDOWN(teardown),\n"));
        assert!(out.contains(
            "\t\t{ \"alpha\", CASE(test_alpha), },\n\t\t{ \"beta\", CASE(test_beta), },\n\t\t{ NULL, NULL, },\n"
        ));
    }

    #[test]
    fn test_void_param_type_not_declared() {
        let table = RegistrationTable::new("t", vec![case("test_a", "void")], FixtureHooks::default());
        let out = render_table(&table, &GeneratorConfig::default());
        assert!(!out.contains("\nvoid;"));
        assert!(out.contains("static int test_a(void *p);"));
    }

    #[test]
    fn test_custom_header() {
        let table = RegistrationTable::new("t", Vec::new(), FixtureHooks::default());
        let config = GeneratorConfig::default().with_runtime_header("testing/yut.h");
        let out = render_table(&table, &config);
        assert!(out.contains("#include \"testing/yut.h\"\n"));
    }
}
