//! Data model shared by the scanner and the emitters
//!
//! Everything here lives for a single invocation. A [`RegistrationTable`] owns the declarations recognized in one
//! source file; an [`AggregateTable`] only references tables by name.

use crate::errors::GenResult;
use crate::frontend::identifiers::validate_identifier;

/// Symbol of the setup hook in the scanned source
pub const SETUP_SYMBOL: &str = "setup";

/// Symbol of the teardown hook in the scanned source
pub const TEARDOWN_SYMBOL: &str = "teardown";

/// Type-erased reference to a function stored in a registration table.
///
/// The runtime keeps setup, teardown and case pointers in fixed-shape slots of different function-pointer types. The
/// tag decides which cast macro the emitter wraps the symbol in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FnRef {
    Setup(String),
    Teardown(String),
    Case(String),
}

impl FnRef {
    /// Cast macro defined at the top of every generated file for this slot kind
    pub fn cast_macro(&self) -> &'static str {
        match self {
            FnRef::Setup(_) => "SETUP",
            FnRef::Teardown(_) => "TEARDOWN",
            FnRef::Case(_) => "CASE",
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            FnRef::Setup(s) | FnRef::Teardown(s) | FnRef::Case(s) => s,
        }
    }
}

/// One recognized test-case function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Function name as written, prefix included
    pub raw_name: String,
    /// Label shown by the runner (`raw_name` without the prefix)
    pub display_name: String,
    /// Recognized declaration text, reused verbatim for the forward declaration
    pub signature: String,
    /// Non-pointer part of the parameter type, e.g. `struct ymd_mach`
    pub param_type: String,
}

impl TestCase {
    pub fn function_ref(&self) -> FnRef {
        FnRef::Case(self.raw_name.clone())
    }

    /// Whether the parameter type needs a forward declaration (`void *` does not)
    pub fn declares_fixture_type(&self) -> bool {
        !self.param_type.starts_with("void")
    }
}

/// Optional setup/teardown declarations of one file (signature text when present)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureHooks {
    pub setup: Option<String>,
    pub teardown: Option<String>,
}

/// Registration table for one scanned source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationTable {
    /// Table symbol, derived from the source file stem
    pub name: String,
    /// Cases in source order
    pub cases: Vec<TestCase>,
    pub hooks: FixtureHooks,
}

impl RegistrationTable {
    pub fn new(name: impl Into<String>, cases: Vec<TestCase>, hooks: FixtureHooks) -> Self {
        Self {
            name: name.into(),
            cases,
            hooks,
        }
    }

    pub fn setup_ref(&self) -> Option<FnRef> {
        self.hooks.setup.as_ref().map(|_| FnRef::Setup(SETUP_SYMBOL.to_string()))
    }

    pub fn teardown_ref(&self) -> Option<FnRef> {
        self.hooks
            .teardown
            .as_ref()
            .map(|_| FnRef::Teardown(TEARDOWN_SYMBOL.to_string()))
    }

    /// Distinct fixture types needing a forward declaration, in first-appearance order
    pub fn fixture_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for case in self.cases.iter().filter(|c| c.declares_fixture_type()) {
            if !types.contains(&case.param_type.as_str()) {
                types.push(&case.param_type);
            }
        }
        types
    }

    /// Raw case names in table order
    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.raw_name.as_str()).collect()
    }
}

/// Combined table referencing per-file tables by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTable {
    /// Table symbols in caller order
    pub names: Vec<String>,
}

impl AggregateTable {
    /// Build from names, appending `suffix` to each.
    ///
    /// Names are trimmed and empty entries dropped; every resulting name must be a valid C identifier.
    pub fn from_names<I, S>(names: I, suffix: &str) -> GenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let full = format!("{name}{suffix}");
            validate_identifier(&full)?;
            out.push(full);
        }
        Ok(Self { names: out })
    }

    /// Parse a comma-separated list such as `lex_test,value_test`.
    pub fn parse_list(list: &str, suffix: &str) -> GenResult<Self> {
        Self::from_names(list.split(','), suffix)
    }
}
