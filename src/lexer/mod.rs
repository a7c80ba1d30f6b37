//! Tokenizer for the two supported dialects.
//!
//! Consumes comment-stripped source text and produces an ordered sequence of
//! classified tokens with line numbers. Scanning rules are evaluated in
//! priority order at each position after skipping whitespace:
//!
//! 1. Identifier/keyword (the TypeScript-like dialect also allows `$`)
//! 2. Number (digits and dots; multiple dots are tolerated, see below)
//! 3. String literal (`"`, `'`, plus back-tick for TypeScript-like)
//! 4. Operator (greedy run of operator characters, at most 3)
//! 5. Delimiter (single character)
//! 6. Anything else is skipped silently
//!
//! ## Module Structure
//!
//! - `tokens` - Token types ([`TokenKind`], [`Token`])
//!
//! ## Known heuristic limitations
//!
//! - The number scan accepts multiple `.` characters, producing a malformed
//!   "float" token (`1.2.3`). Downstream consumers must not assume a
//!   well-formed number.
//! - Operators are recognized lexically, not validated; `===` lexes fine in
//!   either dialect and is left to the invalid-operator pass.
//! - Hitting [`limits::MAX_TOKENS`] stops scanning without error; callers
//!   observe the bound through [`LexOutput::truncated`].

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::iter::Peekable;
use std::str::Chars;

use lexlint_core::lang::{keywords, operators};
use lexlint_core::{Dialect, limits};

/// Result of one tokenizer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    /// True when scanning stopped at the token capacity bound.
    pub truncated: bool,
}

/// Tokenizer state for one run over comment-stripped text.
struct Lexer<'a> {
    dialect: Dialect,
    chars: Peekable<Chars<'a>>,
    line: u32,
    tokens: Vec<Token>,
    truncated: bool,
}

impl<'a> Lexer<'a> {
    fn new(dialect: Dialect, source: &'a str) -> Self {
        Self {
            dialect,
            chars: source.chars().peekable(),
            line: 1,
            tokens: Vec::new(),
            truncated: false,
        }
    }

    fn run(mut self) -> LexOutput {
        loop {
            self.skip_whitespace();
            if self.chars.peek().is_none() {
                break;
            }
            if self.tokens.len() >= limits::MAX_TOKENS {
                self.truncated = true;
                break;
            }
            self.scan_token();
        }
        LexOutput {
            tokens: self.tokens,
            truncated: self.truncated,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };

        if self.is_ident_start(c) {
            self.scan_word();
        } else if c.is_ascii_digit() {
            self.scan_number();
        } else if self.is_quote(c) {
            self.scan_string(c);
        } else if operators::is_operator_char(c) {
            self.scan_operator();
        } else if operators::is_delimiter_char(c) {
            let line = self.line;
            self.advance();
            self.push(c.to_string(), TokenKind::Delimiter, line);
        } else {
            // Not tokenizable in either dialect; skipped, not reported.
            self.advance();
        }
    }

    fn is_ident_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || (self.dialect == Dialect::TypeScriptLike && c == '$')
    }

    fn is_ident_continue(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || (self.dialect == Dialect::TypeScriptLike && c == '$')
    }

    fn is_quote(&self, c: char) -> bool {
        c == '"' || c == '\'' || (self.dialect == Dialect::TypeScriptLike && c == '`')
    }

    fn push(&mut self, text: String, kind: TokenKind, line: u32) {
        self.tokens.push(Token::new(text, kind, line));
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    fn scan_word(&mut self) {
        let line = self.line;
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !self.is_ident_continue(c) {
                break;
            }
            text.push(c);
            self.advance();
        }

        let kind = if keywords::is_reserved(self.dialect, &text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(text, kind, line);
    }

    fn scan_number(&mut self) {
        let line = self.line;
        let mut text = String::new();
        let mut has_dot = false;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_digit() || c == '.') {
                break;
            }
            if c == '.' {
                has_dot = true;
            }
            text.push(c);
            self.advance();
        }

        let kind = if has_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.push(text, kind, line);
    }

    /// Scan a string literal, consuming through the matching closing quote.
    ///
    /// A backslash forces the following character to be consumed literally;
    /// escape meaning is never interpreted. Embedded newlines count toward
    /// the line counter only in the TypeScript-like dialect (template
    /// strings). An unterminated string consumes to end of input.
    fn scan_string(&mut self, quote: char) {
        let line = self.line;
        let mut text = String::new();
        // Opening quote.
        self.advance();
        text.push(quote);

        loop {
            match self.peek() {
                None => break, // unterminated: degrade gracefully
                Some(c) if c == quote => {
                    self.advance();
                    text.push(c);
                    break;
                }
                Some('\\') => {
                    self.advance();
                    text.push('\\');
                    if let Some(escaped) = self.advance() {
                        self.count_string_newline(escaped);
                        text.push(escaped);
                    }
                }
                Some(c) => {
                    self.advance();
                    self.count_string_newline(c);
                    text.push(c);
                }
            }
        }
        self.push(text, TokenKind::StringLiteral, line);
    }

    fn count_string_newline(&mut self, c: char) {
        if c == '\n' && self.dialect == Dialect::TypeScriptLike {
            self.line += 1;
        }
    }

    fn scan_operator(&mut self) {
        let line = self.line;
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !operators::is_operator_char(c) || text.len() >= 3 {
                break;
            }
            text.push(c);
            self.advance();
        }
        self.push(text, TokenKind::Operator, line);
    }
}

/// Tokenize comment-stripped text for a dialect.
///
/// The returned sequence is in source order; when the capacity bound is
/// reached the sequence is silently partial and `truncated` is set.
#[tracing::instrument(skip_all, fields(dialect = %dialect, source_len = source.len()))]
pub fn tokenize(dialect: Dialect, source: &str) -> LexOutput {
    Lexer::new(dialect, source).run()
}

// ============================================================================
// TESTS
// ============================================================================
