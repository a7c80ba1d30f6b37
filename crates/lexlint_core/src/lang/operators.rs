//! Operator vocabulary: the lexical character sets and the table of
//! known-invalid operator spellings.
//!
//! Invalid operators are recognized by **exact text lookup**, not by
//! grammar. A spelling absent from the table is never flagged, even when it
//! is meaningless in context; the table exists to catch the handful of
//! cross-dialect slips the analyzer cares about (`===` in Python, `=<`
//! everywhere).

use crate::Dialect;

/// Characters the tokenizer accepts inside an operator run.
pub const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~";

/// Characters the tokenizer classifies as single-character delimiters.
pub const DELIMITER_CHARS: &str = "()[]{},:;.";

/// Whether `c` may appear in an operator token.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

/// Whether `c` is a delimiter.
pub fn is_delimiter_char(c: char) -> bool {
    DELIMITER_CHARS.contains(c)
}

/// A known-invalid operator spelling with its corrective message.
#[derive(Debug, Clone, Copy)]
pub struct InvalidOperator {
    pub spelling: &'static str,
    pub message: &'static str,
}

/// Invalid spellings in the Python-like dialect.
pub const PYTHON_INVALID_OPERATORS: &[InvalidOperator] = &[
    InvalidOperator {
        spelling: "===",
        message: "'===' is not valid in Python, use '==' instead",
    },
    InvalidOperator {
        spelling: "!==",
        message: "'!==' is not valid in Python, use '!=' instead",
    },
    InvalidOperator {
        spelling: "=<",
        message: "'=<' should be '<='",
    },
    InvalidOperator {
        spelling: "=>",
        message: "'=>' is not valid in Python, use '>=' for comparison",
    },
];

/// Invalid spellings in the TypeScript-like dialect.
///
/// `=>` is a legitimate arrow here, so only the flipped comparison is
/// flagged.
pub const TYPESCRIPT_INVALID_OPERATORS: &[InvalidOperator] = &[InvalidOperator {
    spelling: "=<",
    message: "'=<' should be '<='",
}];

/// The invalid-operator table for a dialect.
pub fn invalid_operators(dialect: Dialect) -> &'static [InvalidOperator] {
    match dialect {
        Dialect::PythonLike => PYTHON_INVALID_OPERATORS,
        Dialect::TypeScriptLike => TYPESCRIPT_INVALID_OPERATORS,
    }
}

/// Look up an operator spelling in the dialect's invalid table.
pub fn lookup_invalid(dialect: Dialect, spelling: &str) -> Option<&'static InvalidOperator> {
    invalid_operators(dialect).iter().find(|op| op.spelling == spelling)
}
