//! Generator configuration
//!
//! Every name the generated `.def` files share with the yut runtime lives here. The defaults reproduce the runtime's
//! data contract (`yut.h`); changing them is only useful when the runtime itself was renamed.

/// Default prefix a test-case function name must carry.
pub const DEFAULT_CASE_PREFIX: &str = "test_";

/// Slot count of `struct yut_case_def::caze` in the runtime (`YUT_MAX_CASE`).
pub const DEFAULT_MAX_CASES: usize = 48;

/// Generation configuration shared by the scanner and both emitters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Prefix a function needs to be recognized as a test case; stripped for the display label
    pub case_prefix: String,
    /// Runtime header included by every generated file
    pub runtime_header: String,
    /// C type of one registration table
    pub table_type: String,
    /// Null-terminated pointer array the runtime iterates
    pub registry_symbol: String,
    /// Macro defined by combined builds; suppresses the per-file array
    pub aggregate_macro: String,
    /// Prefix of per-file include guards
    pub guard_prefix: String,
    /// Extension of per-file outputs (without the dot)
    pub output_extension: String,
    /// File name of the aggregate output
    pub aggregate_file: String,
    /// Include guard of the aggregate output
    pub aggregate_guard: String,
    /// Case slots per table in the runtime, sentinel included
    pub max_cases: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            case_prefix: DEFAULT_CASE_PREFIX.to_string(),
            runtime_header: "yut.h".to_string(),
            table_type: "struct yut_case_def".to_string(),
            registry_symbol: "yut_intl_test".to_string(),
            aggregate_macro: "YUT_ALL_TEST".to_string(),
            guard_prefix: "UNIQUE_INCLUDE_".to_string(),
            output_extension: "def".to_string(),
            aggregate_file: "all_test.def".to_string(),
            aggregate_guard: "UNIQUE_INCLUDE_YUT_ALL_TEST_DEF".to_string(),
            max_cases: DEFAULT_MAX_CASES,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the test-case prefix
    pub fn with_case_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.case_prefix = prefix.into();
        self
    }

    /// Set the runtime header
    pub fn with_runtime_header(mut self, header: impl Into<String>) -> Self {
        self.runtime_header = header.into();
        self
    }

    /// Set the runtime's per-table case capacity
    pub fn with_max_cases(mut self, max_cases: usize) -> Self {
        self.max_cases = max_cases;
        self
    }

    /// Include guard for a per-file table, e.g. `UNIQUE_INCLUDE_LEX_TEST_DEF`
    pub fn table_guard(&self, table_name: &str) -> String {
        format!("{}{}_DEF", self.guard_prefix, table_name.to_uppercase())
    }

    /// Output file name for a per-file table, e.g. `lex_test.def`
    pub fn table_file(&self, table_name: &str) -> String {
        format!("{}.{}", table_name, self.output_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_runtime_contract() {
        let config = GeneratorConfig::default();
        assert_eq!(config.case_prefix, "test_");
        assert_eq!(config.runtime_header, "yut.h");
        assert_eq!(config.table_type, "struct yut_case_def");
        assert_eq!(config.registry_symbol, "yut_intl_test");
        assert_eq!(config.aggregate_macro, "YUT_ALL_TEST");
        assert_eq!(config.aggregate_file, "all_test.def");
        assert_eq!(config.max_cases, 48);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GeneratorConfig::new(), GeneratorConfig::default());
    }

    #[test]
    fn test_builder_methods() {
        let config = GeneratorConfig::new()
            .with_case_prefix("check_")
            .with_runtime_header("testing/yut.h")
            .with_max_cases(8);
        assert_eq!(config.case_prefix, "check_");
        assert_eq!(config.runtime_header, "testing/yut.h");
        assert_eq!(config.max_cases, 8);
    }

    #[test]
    fn test_table_guard_is_uppercased() {
        let config = GeneratorConfig::default();
        assert_eq!(config.table_guard("lex_test"), "UNIQUE_INCLUDE_LEX_TEST_DEF");
    }

    #[test]
    fn test_table_file() {
        let config = GeneratorConfig::default();
        assert_eq!(config.table_file("hash_map_test"), "hash_map_test.def");
    }
}
