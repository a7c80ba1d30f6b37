//! Misspelled-keyword detection.
//!
//! Every identifier longer than two characters is compared against the
//! dialect's reserved words by edit distance. The first reserved word (in
//! declared registry order) within distance 2 wins and scanning stops for
//! that token, so ties resolve deterministically by registry position, not
//! by closeness.

use lexlint_core::Dialect;
use lexlint_core::lang::keywords;

use super::{Diagnostic, DiagnosticKind};
use crate::distance::edit_distance;
use crate::lexer::Token;

/// Length at or below which identifiers are never treated as misspellings.
/// Short names like `i` or `fn` would otherwise match half the registry.
const MIN_IDENT_LEN: usize = 3;

pub(super) fn check(dialect: Dialect, tokens: &[Token]) -> Vec<Diagnostic> {
    let reserved = keywords::for_dialect(dialect);
    let mut findings = Vec::new();

    for token in tokens {
        if !token.is_ident() || token.text.len() < MIN_IDENT_LEN {
            continue;
        }
        for keyword in reserved {
            let distance = edit_distance(&token.text, keyword);
            // Strictly positive: case-insensitive comparison yields 0 for a
            // case-variant of a reserved word (`true` vs `True`), and those
            // are not reported as misspellings.
            if distance > 0 && distance <= 2 {
                findings.push(Diagnostic::new(
                    DiagnosticKind::MisspelledKeyword,
                    token.line,
                    format!("'{}' looks misspelled (did you mean '{}'?)", token.text, keyword),
                ));
                break;
            }
        }
    }
    findings
}
