//! Undeclared-identifier detection.
//!
//! Two explicit passes over the token sequence with a transient symbol
//! table that lives only for this call:
//!
//! - Pass 1 collects names from recognized declaration syntax. Python-like:
//!   any `IDENT '='` pair, plus every identifier between a `def`/`for`
//!   keyword and the next `:`. TypeScript-like: any `let`/`const`/`var`
//!   followed by an identifier, plus the name and parameters of a
//!   `function` up to the closing `)`.
//! - Pass 2 reports every identifier use that is not itself part of a
//!   declaration, not on the dialect's builtin allow-list, and not in the
//!   table. One finding per occurrence; repeated uses repeat the finding.
//!
//! There is no real scoping or definite-assignment analysis: a name
//! assigned anywhere counts as declared everywhere, including before the
//! assignment. That is a deliberate heuristic limit, not a bug.

use std::collections::HashSet;

use lexlint_core::lang::builtins;
use lexlint_core::{Dialect, limits};

use super::{Diagnostic, DiagnosticKind};
use crate::lexer::Token;

pub(super) fn check(dialect: Dialect, tokens: &[Token]) -> Vec<Diagnostic> {
    let declared = collect_declarations(dialect, tokens);

    let mut findings = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if !token.is_ident() || in_declaration_position(dialect, tokens, i) {
            continue;
        }
        if builtins::is_builtin(dialect, &token.text) || declared.contains(token.text.as_str()) {
            continue;
        }
        findings.push(Diagnostic::new(
            DiagnosticKind::UndeclaredIdentifier,
            token.line,
            format!("'{}' used but never declared", token.text),
        ));
    }
    findings
}

/// Pass 1: build the symbol table, bounded by [`limits::MAX_SYMBOLS`].
fn collect_declarations(dialect: Dialect, tokens: &[Token]) -> HashSet<String> {
    let mut declared = HashSet::new();
    match dialect {
        Dialect::PythonLike => {
            for (i, token) in tokens.iter().enumerate() {
                if token.is_ident() && tokens.get(i + 1).is_some_and(|next| next.is_text("=")) {
                    register(&mut declared, &token.text);
                }
                // def/for headers: parameters and loop variables up to the
                // next colon all count as declarations.
                if token.is_text("def") || token.is_text("for") {
                    for header in &tokens[i + 1..] {
                        if header.is_text(":") {
                            break;
                        }
                        if header.is_ident() {
                            register(&mut declared, &header.text);
                        }
                    }
                }
            }
        }
        Dialect::TypeScriptLike => {
            for (i, token) in tokens.iter().enumerate() {
                let is_binder = token.is_text("let") || token.is_text("const") || token.is_text("var");
                if is_binder && tokens.get(i + 1).is_some_and(Token::is_ident) {
                    register(&mut declared, &tokens[i + 1].text);
                }
                // function headers: the name plus every identifier sitting
                // after `(` or `,`, up to the closing paren.
                if token.is_text("function") {
                    for (j, header) in tokens.iter().enumerate().skip(i + 1) {
                        if header.is_text(")") {
                            break;
                        }
                        let after_separator =
                            j == i + 1 || tokens[j - 1].is_text("(") || tokens[j - 1].is_text(",");
                        if header.is_ident() && after_separator {
                            register(&mut declared, &header.text);
                        }
                    }
                }
            }
        }
    }
    declared
}

fn register(declared: &mut HashSet<String>, name: &str) {
    if declared.len() < limits::MAX_SYMBOLS || declared.contains(name) {
        declared.insert(name.to_string());
    }
}

/// Whether the identifier at `i` is itself the subject of a declaration.
fn in_declaration_position(dialect: Dialect, tokens: &[Token], i: usize) -> bool {
    match dialect {
        Dialect::PythonLike => tokens.get(i + 1).is_some_and(|next| next.is_text("=")),
        Dialect::TypeScriptLike => i > 0 && {
            let prev = &tokens[i - 1];
            prev.is_text("let") || prev.is_text("const") || prev.is_text("var") || prev.is_text("function")
        },
    }
}
