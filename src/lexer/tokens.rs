//! Token types for the lexlint tokenizer.
//!
//! Tokens are flat and text-bearing: the diagnostic passes match on token
//! text (`":"`, `"int"`, `"let"`), so each token owns its spelling instead
//! of an interned id.
//!
//! ## Notes
//! - Tokens are immutable once produced and addressed only by position in
//!   the token sequence.
//! - `line` is the 1-based source line of the token's **first** character,
//!   counted against the original file (comment stripping preserves
//!   newlines, so no mapping is needed).

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Operator,
    Delimiter,
}

impl TokenKind {
    /// Screaming-case label used by the report tables.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
        }
    }

    /// Whether this kind is one of the literal classifications.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }
}

/// A classified lexical unit with source-line attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(text: impl Into<String>, kind: TokenKind, line: u32) -> Self {
        Self {
            text: text.into(),
            kind,
            line,
        }
    }

    /// Whether this token is an identifier.
    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// Whether this token's spelling is exactly `text`.
    pub fn is_text(&self, text: &str) -> bool {
        self.text == text
    }
}
