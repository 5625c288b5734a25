//! C identifier vocabulary (for table-name validation).
//!
//! A table name becomes an external symbol and, uppercased, part of an include-guard macro, so it has to be a plain
//! ASCII C identifier that is not a keyword.

use crate::errors::{GenError, GenResult};

/// C keywords (C11 plus the common extensions the runtime is built with).
pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum", "extern", "float",
    "for", "goto", "if", "inline", "int", "long", "register", "restrict", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local", "asm",
];

/// Check whether an identifier is a C keyword.
pub fn is_keyword(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validate that `name` can be used as a table symbol.
pub fn validate_identifier(name: &str) -> GenResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(GenError::naming(name, "name is empty"));
    };
    if !is_ident_start(first) {
        return Err(GenError::naming(name, format!("cannot start with '{first}'")));
    }
    if let Some(bad) = chars.find(|c| !is_ident_continue(*c)) {
        return Err(GenError::naming(name, format!("contains '{bad}'")));
    }
    if is_keyword(name) {
        return Err(GenError::naming(name, "is a C keyword"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["lex_test", "_private", "a", "T9", "value_test2"] {
            assert!(validate_identifier(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_hyphen_is_rejected() {
        let err = validate_identifier("hash-map_test").unwrap_err();
        assert_eq!(err.to_string(), "invalid table name 'hash-map_test': contains '-'");
    }

    #[test]
    fn test_leading_digit_is_rejected() {
        assert!(matches!(validate_identifier("9lives"), Err(GenError::Naming { .. })));
    }

    #[test]
    fn test_empty_and_keyword_rejected() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("static").is_err());
        assert!(is_keyword("int"));
        assert!(!is_keyword("yut"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(validate_identifier("tést").is_err());
    }
}
