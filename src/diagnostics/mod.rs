//! Heuristic diagnostics over the token sequence.
//!
//! Four independent analyzers run read-only over the same immutable token
//! sequence and their findings are concatenated in a fixed order, so the
//! report is deterministic:
//!
//! 1. `misspell` - identifiers within edit distance 2 of a reserved word
//! 2. `type_mismatch` - local-window declared-type vs literal checks
//! 3. `undeclared` - two-pass undeclared-identifier detection
//! 4. `invalid_ops` - known-invalid operator spellings
//!
//! Diagnostics are findings about the analyzed source, never failures of
//! the analyzer itself; there is no error path here. Each analyzer is a
//! pure function of `(dialect, tokens)`, so running the report twice yields
//! identical results.

mod invalid_ops;
mod misspell;
mod type_mismatch;
mod undeclared;

use crate::lexer::Token;
use lexlint_core::{Dialect, limits};

/// Classification of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    MisspelledKeyword,
    TypeMismatch,
    UndeclaredIdentifier,
    InvalidOperator,
}

impl DiagnosticKind {
    /// Screaming-case label used by the report renderer.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::MisspelledKeyword => "MISSPELLED KEYWORD",
            DiagnosticKind::TypeMismatch => "TYPE MISMATCH",
            DiagnosticKind::UndeclaredIdentifier => "UNDECLARED IDENTIFIER",
            DiagnosticKind::InvalidOperator => "INVALID OPERATOR",
        }
    }
}

/// A single heuristic finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: u32,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: u32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line,
            kind,
        }
    }
}

/// All findings of one diagnostics run, in analyzer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
    /// True when the diagnostic capacity bound dropped further findings.
    pub truncated: bool,
}

impl DiagnosticReport {
    fn collect(parts: impl IntoIterator<Item = Vec<Diagnostic>>) -> Self {
        let mut diagnostics = Vec::new();
        let mut truncated = false;
        for part in parts {
            for diagnostic in part {
                if diagnostics.len() < limits::MAX_DIAGNOSTICS {
                    diagnostics.push(diagnostic);
                } else {
                    truncated = true;
                }
            }
        }
        Self { diagnostics, truncated }
    }
}

/// Run all four analyzers over a token sequence.
#[tracing::instrument(skip_all, fields(dialect = %dialect, tokens = tokens.len()))]
pub fn run(dialect: Dialect, tokens: &[Token]) -> DiagnosticReport {
    DiagnosticReport::collect([
        misspell::check(dialect, tokens),
        type_mismatch::check(dialect, tokens),
        undeclared::check(dialect, tokens),
        invalid_ops::check(dialect, tokens),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn report(dialect: Dialect, source: &str) -> DiagnosticReport {
        let tokens = lexer::tokenize(dialect, source).tokens;
        run(dialect, &tokens)
    }

    #[test]
    fn analyzer_order_is_fixed() {
        // One finding of each kind, deliberately in scrambled source order.
        // Every identifier is first seen in `name =` position so the
        // undeclared pass stays quiet.
        let source = "defn = 1\ncount = 0\ncount: int = 3.14\nx = 1\nx =< 2\n";
        let out = report(Dialect::PythonLike, source);
        let kinds: Vec<DiagnosticKind> = out.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::MisspelledKeyword,
                DiagnosticKind::TypeMismatch,
                DiagnosticKind::InvalidOperator,
            ]
        );
        assert_eq!(out.diagnostics[0].line, 1);
        assert_eq!(out.diagnostics[1].line, 3);
        assert_eq!(out.diagnostics[2].line, 5);
    }

    #[test]
    fn report_is_idempotent() {
        let tokens = lexer::tokenize(Dialect::TypeScriptLike, "let x: number = \"oops\";\ny + 1;").tokens;
        let first = run(Dialect::TypeScriptLike, &tokens);
        let second = run(Dialect::TypeScriptLike, &tokens);
        assert_eq!(first, second);
    }

    #[test]
    fn clean_source_produces_no_findings() {
        let out = report(Dialect::PythonLike, "total = 1\nresult = total + 2\nresult = result + total\n");
        assert!(out.diagnostics.is_empty());
        assert!(!out.truncated);
    }

    #[test]
    fn diagnostic_capacity_is_observable() {
        // Each undeclared use is one finding; overflow the bound.
        let source = "mystery\n".repeat(limits::MAX_DIAGNOSTICS + 10);
        let out = report(Dialect::PythonLike, &source);
        assert!(out.truncated);
        assert_eq!(out.diagnostics.len(), limits::MAX_DIAGNOSTICS);
    }
}
