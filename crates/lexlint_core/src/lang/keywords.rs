//! Reserved-word registries for both dialects.
//!
//! This module is the single source of truth for reserved words. Lookups are
//! **case-sensitive** (`True` is reserved in the Python-like dialect, `true`
//! is not).
//!
//! ## Notes
//! - Slice order is the declared scan order of the misspelled-keyword
//!   analyzer: the first entry within edit distance wins, so ties resolve
//!   deterministically by position here, not by closeness.
//! - The Python-like registry deliberately includes the annotation type
//!   names (`int`, `float`, `str`, `bool`, `list`, `dict`); the type-mismatch
//!   analyzer relies on them lexing as keywords.
//!
//! ## Examples
//! ```rust
//! use lexlint_core::Dialect;
//! use lexlint_core::lang::keywords;
//!
//! assert!(keywords::is_reserved(Dialect::PythonLike, "def"));
//! assert!(!keywords::is_reserved(Dialect::PythonLike, "function"));
//! assert!(keywords::is_reserved(Dialect::TypeScriptLike, "function"));
//! ```

use crate::Dialect;

/// Reserved words of the Python-like dialect.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield", "int", "float", "str", "bool", "list", "dict",
];

/// Reserved words of the TypeScript-like dialect.
pub const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "interface", "let", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "number", "string",
    "boolean", "any", "never", "unknown", "async", "await",
];

/// Reserved words for a dialect, in declared scan order.
pub fn for_dialect(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::PythonLike => PYTHON_KEYWORDS,
        Dialect::TypeScriptLike => TYPESCRIPT_KEYWORDS,
    }
}

/// Whether `word` is reserved in `dialect` (case-sensitive).
pub fn is_reserved(dialect: Dialect, word: &str) -> bool {
    for_dialect(dialect).contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_reserved(Dialect::PythonLike, "True"));
        assert!(!is_reserved(Dialect::PythonLike, "true"));
        assert!(is_reserved(Dialect::TypeScriptLike, "true"));
        assert!(!is_reserved(Dialect::TypeScriptLike, "True"));
    }

    #[test]
    fn annotation_types_are_reserved_in_python() {
        for ty in ["int", "float", "str", "bool", "list", "dict"] {
            assert!(is_reserved(Dialect::PythonLike, ty), "{ty} should be reserved");
        }
    }

    #[test]
    fn registries_have_no_duplicates() {
        for dialect in [Dialect::PythonLike, Dialect::TypeScriptLike] {
            let words = for_dialect(dialect);
            let mut seen = std::collections::HashSet::new();
            for w in words {
                assert!(seen.insert(*w), "duplicate reserved word {w:?} in {dialect}");
            }
        }
    }
}
