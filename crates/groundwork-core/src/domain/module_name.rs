//! Pre-generation module-name validation.
//!
//! Runs before the template engine renders anything: a bad module name must
//! never reach the filesystem.

use crate::domain::error::DomainError;

/// Reserved words of the target language (Python 3.12 keyword list).
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Check that `name` is usable as a Python module name.
///
/// Rejects, in order: empty names, reserved keywords, and names not matching
/// `^[a-zA-Z][_a-zA-Z0-9]+$`. The pattern requires at least two characters;
/// single-letter names are rejected.
pub fn validate_module_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyModuleName);
    }

    if PYTHON_KEYWORDS.contains(&name) {
        return Err(DomainError::KeywordModuleName(name.to_string()));
    }

    if !matches_identifier_pattern(name) {
        return Err(DomainError::InvalidModuleName(name.to_string()));
    }

    Ok(())
}

/// `^[a-zA-Z][_a-zA-Z0-9]+$`
fn matches_identifier_pattern(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    let mut rest_len = 0;
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }
        rest_len += 1;
    }
    rest_len > 0
}
