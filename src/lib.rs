#![forbid(unsafe_code)]
//! Lexlint
//!
//! A lexical front end and heuristic linter for small Python-like and
//! TypeScript-like sources. The pipeline has three stages: comment
//! extraction (which also strips comments from the source while preserving
//! line positions), tokenization, and a set of read-only diagnostic
//! analyzers over the token sequence.
//!
//! Dialect vocabulary (keywords, builtins, operator tables, capacity
//! bounds) lives in the dependency-free `lexlint_core` crate; this crate
//! holds the scanners, analyzers, and the CLI surface.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! Note that analysis itself is infallible: malformed source produces
//! diagnostics (or odd tokens), never errors. The only error paths are
//! around file input in the CLI.

pub mod cli;
pub mod comments;
pub mod diagnostics;
pub mod distance;
pub mod lexer;
pub mod render;

pub use lexlint_core::Dialect;

pub use comments::{Comment, CommentExtraction};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticReport};
pub use lexer::{LexOutput, Token, TokenKind};

/// Everything the pipeline produced for one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dialect: Dialect,
    pub comments: CommentExtraction,
    pub lex: LexOutput,
    pub report: DiagnosticReport,
}

/// Run the full pipeline: extract comments, tokenize the stripped text,
/// then run all diagnostic analyzers.
#[tracing::instrument(skip_all, fields(dialect = %dialect, bytes = source.len()))]
pub fn analyze(dialect: Dialect, source: &str) -> Analysis {
    let comments = comments::extract(dialect, source);
    let lex = lexer::tokenize(dialect, &comments.stripped);
    let report = diagnostics::run(dialect, &lex.tokens);
    Analysis {
        dialect,
        comments,
        lex,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_tokenizes_stripped_text() {
        let source = "x = 1  # trailing note\n# full line\ny = 2\n";
        let out = analyze(Dialect::PythonLike, source);
        assert_eq!(out.comments.comments.len(), 2);
        let texts: Vec<&str> = out.lex.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "=", "1", "y", "=", "2"]);
        // The comment on line 2 must not shift `y` off line 3.
        assert_eq!(out.lex.tokens[3].line, 3);
        assert!(out.report.diagnostics.is_empty());
    }

    #[test]
    fn commented_out_code_is_not_analyzed() {
        let source = "// ghost + 1\nlet x = 2;\n";
        let out = analyze(Dialect::TypeScriptLike, source);
        assert!(out.report.diagnostics.is_empty());
        assert_eq!(out.comments.comments[0].content, "// ghost + 1");
    }
}
