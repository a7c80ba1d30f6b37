//! Provide shared, pure language vocabulary for the lexlint analyzer.
//!
//! This crate is intentionally small and dependency-light. It is the single
//! source of truth for everything that varies per dialect: reserved-word
//! registries, builtin allow-lists, the invalid-operator lookup table, the
//! literal/annotation compatibility helpers, and the analyzer's capacity
//! bounds.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no
//!   analyzer-specific types. The scanning and diagnostic passes live in the
//!   `lexlint` crate and consume these registries.
//! - Dialect-specific behavior is represented as data looked up through the
//!   closed [`Dialect`] enum, not as per-dialect code paths.

pub mod lang;
pub mod limits;

/// A supported lexical rule set.
///
/// Selected once per analysis run from the input's declared file kind and
/// immutable for the run. Every dialect-dependent decision (reserved words,
/// comment syntax, identifier characters, string quotes, diagnostic tables)
/// keys off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Python-like sources (`#` comments, `'''`/`"""` docstrings).
    PythonLike,
    /// TypeScript-like sources (`//` comments, `/* ... */` blocks, `$` in
    /// identifiers, back-tick template strings).
    TypeScriptLike,
}

impl Dialect {
    /// Human-facing dialect name for reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::PythonLike => "Python",
            Dialect::TypeScriptLike => "TypeScript",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
