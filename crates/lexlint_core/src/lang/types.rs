//! Annotation/literal compatibility helpers for the type-mismatch analyzer.
//!
//! These are pure decision tables over a declared type name and the shape of
//! the assigned literal token. They deliberately know nothing about tokens
//! or source positions; the analyzer maps its token window into a
//! [`LiteralShape`] and asks for the verdict.

/// The coarse shape of an assigned literal, as seen by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralShape {
    Int,
    Float,
    Str,
    /// Anything else: identifiers, keywords, operators. Only the boolean
    /// rule of the TypeScript-like dialect looks at these.
    Other,
}

/// Why a declaration and its assigned value are incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Float literal assigned to an `int` declaration.
    FloatValue,
    /// String literal assigned to a numeric declaration.
    StringValue,
    /// Numeric literal assigned to a string declaration.
    NumericValue,
    /// Non-`true`/`false` value assigned to a `boolean` declaration.
    NonBooleanValue,
}

/// Compatibility verdict for a Python-like `name: type = value` pattern.
///
/// `declared` is the annotation keyword text (`int`, `float`, `str`); other
/// annotations are never analyzed.
pub fn python_mismatch(declared: &str, value: LiteralShape) -> Option<Mismatch> {
    match (declared, value) {
        ("int", LiteralShape::Float) => Some(Mismatch::FloatValue),
        ("int" | "float", LiteralShape::Str) => Some(Mismatch::StringValue),
        ("str", LiteralShape::Int | LiteralShape::Float) => Some(Mismatch::NumericValue),
        _ => None,
    }
}

/// Compatibility verdict for a TypeScript-like
/// `let/const/var name: type = value` pattern.
///
/// The boolean rule is text-based: anything whose spelling is not literally
/// `true` or `false` mismatches, including identifiers.
pub fn typescript_mismatch(declared: &str, value: LiteralShape, value_text: &str) -> Option<Mismatch> {
    match (declared, value) {
        ("number", LiteralShape::Str) => Some(Mismatch::StringValue),
        ("string", LiteralShape::Int | LiteralShape::Float) => Some(Mismatch::NumericValue),
        ("boolean", _) if value_text != "true" && value_text != "false" => {
            Some(Mismatch::NonBooleanValue)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_int_rejects_float_but_not_int() {
        assert_eq!(python_mismatch("int", LiteralShape::Float), Some(Mismatch::FloatValue));
        assert_eq!(python_mismatch("int", LiteralShape::Int), None);
    }

    #[test]
    fn python_float_accepts_int_widening() {
        // float x = 3 is fine; only strings mismatch a float declaration.
        assert_eq!(python_mismatch("float", LiteralShape::Int), None);
        assert_eq!(python_mismatch("float", LiteralShape::Str), Some(Mismatch::StringValue));
    }

    #[test]
    fn unknown_annotations_are_never_flagged() {
        assert_eq!(python_mismatch("bool", LiteralShape::Str), None);
        assert_eq!(typescript_mismatch("any", LiteralShape::Str, "\"x\""), None);
    }

    #[test]
    fn typescript_boolean_is_text_based() {
        assert_eq!(typescript_mismatch("boolean", LiteralShape::Other, "true"), None);
        assert_eq!(typescript_mismatch("boolean", LiteralShape::Other, "false"), None);
        assert_eq!(
            typescript_mismatch("boolean", LiteralShape::Int, "1"),
            Some(Mismatch::NonBooleanValue)
        );
        assert_eq!(
            typescript_mismatch("boolean", LiteralShape::Other, "maybe"),
            Some(Mismatch::NonBooleanValue)
        );
    }
}
