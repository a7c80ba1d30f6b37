//! Invalid-operator detection.
//!
//! Each dialect carries a small table of operator spellings that never
//! parse in that dialect, with a canned correction for each. The check is
//! a straight lookup over operator tokens, so any new entry in
//! [`lexlint_core::lang::operators`] is picked up without code changes
//! here.

use lexlint_core::Dialect;
use lexlint_core::lang::operators;

use super::{Diagnostic, DiagnosticKind};
use crate::lexer::{Token, TokenKind};

pub(super) fn check(dialect: Dialect, tokens: &[Token]) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    for token in tokens {
        if token.kind != TokenKind::Operator {
            continue;
        }
        if let Some(invalid) = operators::lookup_invalid(dialect, &token.text) {
            findings.push(Diagnostic::new(
                DiagnosticKind::InvalidOperator,
                token.line,
                invalid.message.to_string(),
            ));
        }
    }
    findings
}
