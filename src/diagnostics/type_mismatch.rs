//! Type-mismatch detection over fixed local token windows.
//!
//! This is pattern matching, not type inference: each dialect has exactly
//! one declaration shape, matched at a fixed offset window over the token
//! sequence. A window that does not match exactly is silently not analyzed;
//! there are no false positives from partial matches, and no detection
//! either.
//!
//! - Python-like: `IDENT ':' KEYWORD(int|float|str) '=' <literal>`
//! - TypeScript-like: `('let'|'const'|'var') IDENT ':' <type> '=' <value>`

use lexlint_core::Dialect;
use lexlint_core::lang::types::{self, LiteralShape, Mismatch};

use super::{Diagnostic, DiagnosticKind};
use crate::lexer::{Token, TokenKind};

pub(super) fn check(dialect: Dialect, tokens: &[Token]) -> Vec<Diagnostic> {
    match dialect {
        Dialect::PythonLike => check_python(tokens),
        Dialect::TypeScriptLike => check_typescript(tokens),
    }
}

fn literal_shape(token: &Token) -> LiteralShape {
    match token.kind {
        TokenKind::IntLiteral => LiteralShape::Int,
        TokenKind::FloatLiteral => LiteralShape::Float,
        TokenKind::StringLiteral => LiteralShape::Str,
        _ => LiteralShape::Other,
    }
}

fn check_python(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    for window in tokens.windows(5) {
        let [name, colon, declared, eq, value] = window else {
            unreachable!("windows(5) yields 5 tokens");
        };
        if !name.is_ident() || !colon.is_text(":") || declared.kind != TokenKind::Keyword || !eq.is_text("=") {
            continue;
        }

        let verdict = types::python_mismatch(&declared.text, literal_shape(value));
        if let Some(mismatch) = verdict {
            let message = match mismatch {
                Mismatch::FloatValue => format!(
                    "'{}' declared as int but assigned float value {}",
                    name.text, value.text
                ),
                Mismatch::StringValue => format!(
                    "'{}' declared as {} but assigned string value",
                    name.text, declared.text
                ),
                Mismatch::NumericValue => format!(
                    "'{}' declared as str but assigned numeric value {}",
                    name.text, value.text
                ),
                Mismatch::NonBooleanValue => continue, // not produced for Python-like
            };
            findings.push(Diagnostic::new(DiagnosticKind::TypeMismatch, name.line, message));
        }
    }
    findings
}

fn check_typescript(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    for window in tokens.windows(6) {
        let [binder, name, colon, declared, eq, value] = window else {
            unreachable!("windows(6) yields 6 tokens");
        };
        let is_binder = binder.is_text("let") || binder.is_text("const") || binder.is_text("var");
        if !is_binder || !name.is_ident() || !colon.is_text(":") || !eq.is_text("=") {
            continue;
        }

        let verdict = types::typescript_mismatch(&declared.text, literal_shape(value), &value.text);
        if let Some(mismatch) = verdict {
            let message = match mismatch {
                Mismatch::StringValue => format!(
                    "'{}' declared as number but assigned string value",
                    name.text
                ),
                Mismatch::NumericValue => format!(
                    "'{}' declared as string but assigned numeric value {}",
                    name.text, value.text
                ),
                Mismatch::NonBooleanValue => format!(
                    "'{}' declared as boolean but assigned non-boolean value",
                    name.text
                ),
                Mismatch::FloatValue => continue, // not produced for TypeScript-like
            };
            findings.push(Diagnostic::new(DiagnosticKind::TypeMismatch, binder.line, message));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn check_source(dialect: Dialect, source: &str) -> Vec<Diagnostic> {
        check(dialect, &lexer::tokenize(dialect, source).tokens)
    }

    #[test]
    fn python_int_with_float_value() {
        let findings = check_source(Dialect::PythonLike, "count: int = 3.14");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert_eq!(
            findings[0].message,
            "'count' declared as int but assigned float value 3.14"
        );
    }

    #[test]
    fn python_numeric_with_string_value() {
        let findings = check_source(Dialect::PythonLike, "a: int = 'x'\nb: float = \"y\"");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("declared as int but assigned string"));
        assert!(findings[1].message.contains("declared as float but assigned string"));
    }

    #[test]
    fn python_str_with_numeric_value() {
        let findings = check_source(Dialect::PythonLike, "name: str = 42");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "'name' declared as str but assigned numeric value 42");
    }

    #[test]
    fn python_compatible_declarations_pass() {
        let findings = check_source(
            Dialect::PythonLike,
            "count: int = 3\nratio: float = 0.5\nname: str = 'ok'\nwide: float = 1",
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn python_pattern_requires_annotation_keyword() {
        // `CustomType` lexes as an identifier, so the window never matches.
        let findings = check_source(Dialect::PythonLike, "x: CustomType = 'v'");
        assert!(findings.is_empty());
    }

    #[test]
    fn typescript_number_with_string_value() {
        let findings = check_source(Dialect::TypeScriptLike, "let price: number = \"free\";");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert_eq!(
            findings[0].message,
            "'price' declared as number but assigned string value"
        );
    }

    #[test]
    fn typescript_string_with_numeric_value() {
        let findings = check_source(Dialect::TypeScriptLike, "const label: string = 7.5;");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("numeric value 7.5"));
    }

    #[test]
    fn typescript_boolean_accepts_only_true_false() {
        let findings = check_source(
            Dialect::TypeScriptLike,
            "let a: boolean = true;\nlet b: boolean = false;\nlet c: boolean = 1;",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
        assert_eq!(
            findings[0].message,
            "'c' declared as boolean but assigned non-boolean value"
        );
    }

    #[test]
    fn typescript_pattern_requires_binder() {
        // Without let/const/var the window never matches.
        let findings = check_source(Dialect::TypeScriptLike, "price: number = \"free\";");
        assert!(findings.is_empty());
    }

    #[test]
    fn unannotated_assignment_is_not_analyzed() {
        let findings = check_source(Dialect::PythonLike, "count = 3.14");
        assert!(findings.is_empty());
    }
}
