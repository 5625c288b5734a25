//! Line-anchored recognition of yut declarations
//!
//! Three shapes are recognized, each on a single physical line starting at column 0:
//!
//! - test case: `static int test_<name>(<type> *<param>)`
//! - setup:     `static <type> *setup()`
//! - teardown:  `static void teardown(<type> *<param>)`
//!
//! Only the matched prefix of a line is captured, so a trailing `{` or comment is never part of a signature.
//! Identifiers are ASCII word characters; no attempt is made to understand C beyond these shapes.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TestCase;

static CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^static int ([A-Za-z0-9_]+) ?\(([A-Za-z0-9_ ]+)\*[A-Za-z0-9_ ]+\)")
        .expect("INVARIANT: case pattern is a valid regex")
});

static SETUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^static [A-Za-z0-9_ ]+ \*setup ?\(\)").expect("INVARIANT: setup pattern is a valid regex")
});

static TEARDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^static void teardown ?\([A-Za-z0-9_ ]+\*[A-Za-z0-9_ ]+\)")
        .expect("INVARIANT: teardown pattern is a valid regex")
});

/// A declaration recognized on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Case(TestCase),
    /// Setup signature text
    Setup(String),
    /// Teardown signature text
    Teardown(String),
}

impl Declaration {
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Case(_) => "case",
            Declaration::Setup(_) => "setup",
            Declaration::Teardown(_) => "teardown",
        }
    }
}

/// Recognize a declaration at the start of `line`.
///
/// A test case needs `case_prefix` followed by at least one more identifier character; anything else is `None`.
pub fn recognize(line: &str, case_prefix: &str) -> Option<Declaration> {
    if let Some(caps) = CASE_RE.captures(line) {
        let raw_name = &caps[1];
        if let Some(display) = raw_name.strip_prefix(case_prefix) {
            if !display.is_empty() {
                return Some(Declaration::Case(TestCase {
                    raw_name: raw_name.to_string(),
                    display_name: display.to_string(),
                    signature: caps[0].to_string(),
                    param_type: caps[2].trim_end().to_string(),
                }));
            }
        }
        return None;
    }

    if let Some(m) = SETUP_RE.find(line) {
        return Some(Declaration::Setup(m.as_str().to_string()));
    }

    TEARDOWN_RE
        .find(line)
        .map(|m| Declaration::Teardown(m.as_str().to_string()))
}
