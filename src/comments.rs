//! Comment extraction for the two supported dialects.
//!
//! Given raw source text, produces the ordered list of comment records and a
//! comment-stripped copy of the source. Comment bytes are removed, but every
//! newline, including newlines inside multi-line comments, is preserved in
//! position, so the tokenizer's own line counting lines up with the
//! original file without any mapping.
//!
//! ## Dialect rules
//!
//! - Python-like: `#` to end of line; `'''`/`"""` docstring blocks, closed
//!   by the same quote character that opened them.
//! - TypeScript-like: `//` to end of line; `/* ... */` blocks.
//!
//! ## Known heuristic limitations
//!
//! - A `#` or `//` inside a string literal is still recognized as a comment
//!   marker; comment/string disambiguation is out of scope here.
//! - An unterminated multi-line comment consumes to end of input and still
//!   emits a record with the content collected so far.

use lexlint_core::{Dialect, limits};

/// An extracted comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub content: String,
    pub start_line: u32,
    pub end_line: u32,
    pub is_multiline: bool,
}

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentExtraction {
    pub comments: Vec<Comment>,
    /// The source with comment bytes removed and newlines preserved.
    pub stripped: String,
    /// True when the comment capacity bound was reached; stripping still
    /// covers the whole input, but further records are dropped.
    pub truncated: bool,
}

/// Extraction state for one run.
struct Extractor {
    dialect: Dialect,
    chars: Vec<char>,
    pos: usize,
    line: u32,
    stripped: String,
    comments: Vec<Comment>,
    truncated: bool,
}

impl Extractor {
    fn new(dialect: Dialect, source: &str) -> Self {
        Self {
            dialect,
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            stripped: String::with_capacity(source.len()),
            comments: Vec::new(),
            truncated: false,
        }
    }

    fn run(mut self) -> CommentExtraction {
        while self.pos < self.chars.len() {
            match self.dialect {
                Dialect::PythonLike => {
                    if self.at('#') {
                        self.take_single_line(1);
                        continue;
                    }
                    if let Some(quote) = self.at_triple_quote() {
                        self.take_python_block(quote);
                        continue;
                    }
                }
                Dialect::TypeScriptLike => {
                    if self.at('/') && self.at_offset(1, '/') {
                        self.take_single_line(2);
                        continue;
                    }
                    if self.at('/') && self.at_offset(1, '*') {
                        self.take_ts_block();
                        continue;
                    }
                }
            }
            self.pass_through();
        }
        CommentExtraction {
            comments: self.comments,
            stripped: self.stripped,
            truncated: self.truncated,
        }
    }

    // ========================================================================
    // Position helpers
    // ========================================================================

    fn at(&self, c: char) -> bool {
        self.chars.get(self.pos) == Some(&c)
    }

    fn at_offset(&self, offset: usize, c: char) -> bool {
        self.chars.get(self.pos + offset) == Some(&c)
    }

    /// The quote character of a triple-quote opener at the cursor, if any.
    fn at_triple_quote(&self) -> Option<char> {
        let c = *self.chars.get(self.pos)?;
        if (c == '\'' || c == '"') && self.at_offset(1, c) && self.at_offset(2, c) {
            Some(c)
        } else {
            None
        }
    }

    /// Copy the current character into the stripped output.
    fn pass_through(&mut self) {
        let c = self.chars[self.pos];
        if c == '\n' {
            self.line += 1;
        }
        self.stripped.push(c);
        self.pos += 1;
    }

    fn record(&mut self, comment: Comment) {
        if self.comments.len() < limits::MAX_COMMENTS {
            self.comments.push(comment);
        } else {
            self.truncated = true;
        }
    }

    // ========================================================================
    // Comment scanners
    // ========================================================================

    /// Consume a single-line comment starting with `marker_len` marker
    /// characters, exclusive of the terminating newline.
    fn take_single_line(&mut self, marker_len: usize) {
        let start_line = self.line;
        let mut content = String::new();
        for _ in 0..marker_len {
            content.push(self.chars[self.pos]);
            self.pos += 1;
        }
        while self.pos < self.chars.len() && self.chars[self.pos] != '\n' {
            content.push(self.chars[self.pos]);
            self.pos += 1;
        }
        // The newline itself stays in the stripped output via pass_through.
        self.record(Comment {
            content,
            start_line,
            end_line: start_line,
            is_multiline: false,
        });
    }

    /// Consume a `'''`/`"""` block closed by the same quote character.
    fn take_python_block(&mut self, quote: char) {
        let start_line = self.line;
        let mut content = String::new();
        for _ in 0..3 {
            content.push(self.chars[self.pos]);
            self.pos += 1;
        }

        loop {
            if self.pos >= self.chars.len() {
                break; // unterminated: keep what we have
            }
            if self.at(quote) && self.at_offset(1, quote) && self.at_offset(2, quote) {
                for _ in 0..3 {
                    content.push(self.chars[self.pos]);
                    self.pos += 1;
                }
                break;
            }
            self.consume_into_block(&mut content);
        }

        let end_line = self.line;
        self.record(Comment {
            content,
            start_line,
            end_line,
            is_multiline: true,
        });
    }

    /// Consume a `/* ... */` block.
    fn take_ts_block(&mut self) {
        let start_line = self.line;
        let mut content = String::new();
        for _ in 0..2 {
            content.push(self.chars[self.pos]);
            self.pos += 1;
        }

        loop {
            if self.pos >= self.chars.len() {
                break;
            }
            if self.at('*') && self.at_offset(1, '/') {
                for _ in 0..2 {
                    content.push(self.chars[self.pos]);
                    self.pos += 1;
                }
                break;
            }
            self.consume_into_block(&mut content);
        }

        let end_line = self.line;
        self.record(Comment {
            content,
            start_line,
            end_line,
            is_multiline: true,
        });
    }

    /// Consume one character of a multi-line comment body. Newlines are
    /// counted and echoed into the stripped output so downstream line
    /// numbers stay aligned with the original file.
    fn consume_into_block(&mut self, content: &mut String) {
        let c = self.chars[self.pos];
        if c == '\n' {
            self.line += 1;
            self.stripped.push('\n');
        }
        content.push(c);
        self.pos += 1;
    }
}

/// Extract comments from raw source text for a dialect.
#[tracing::instrument(skip_all, fields(dialect = %dialect, source_len = source.len()))]
pub fn extract(dialect: Dialect, source: &str) -> CommentExtraction {
    Extractor::new(dialect, source).run()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn newline_count(s: &str) -> usize {
        s.chars().filter(|&c| c == '\n').count()
    }

    #[test]
    fn python_single_line() {
        let out = extract(Dialect::PythonLike, "x = 1  # trailing note\ny = 2\n");
        assert_eq!(out.comments.len(), 1);
        let c = &out.comments[0];
        assert_eq!(c.content, "# trailing note");
        assert_eq!((c.start_line, c.end_line), (1, 1));
        assert!(!c.is_multiline);
        assert_eq!(out.stripped, "x = 1  \ny = 2\n");
    }

    #[test]
    fn python_docstring_block() {
        let source = "'''\nmodule docs\n'''\nx = 1\n";
        let out = extract(Dialect::PythonLike, source);
        assert_eq!(out.comments.len(), 1);
        let c = &out.comments[0];
        assert_eq!(c.content, "'''\nmodule docs\n'''");
        assert_eq!((c.start_line, c.end_line), (1, 3));
        assert!(c.is_multiline);
        // Newlines inside the block survive in the stripped output.
        assert_eq!(out.stripped, "\n\n\nx = 1\n");
    }

    #[test]
    fn docstring_close_quote_must_match_open_quote() {
        let source = "'''not closed by \"\"\" here'''";
        let out = extract(Dialect::PythonLike, source);
        assert_eq!(out.comments.len(), 1);
        assert_eq!(out.comments[0].content, source);
        assert_eq!(out.stripped, "");
    }

    #[test]
    fn typescript_comments() {
        let source = "let a = 1; // note\n/* block\nspanning */\nlet b = 2;\n";
        let out = extract(Dialect::TypeScriptLike, source);
        assert_eq!(out.comments.len(), 2);
        assert_eq!(out.comments[0].content, "// note");
        assert!(!out.comments[0].is_multiline);
        assert_eq!(out.comments[1].content, "/* block\nspanning */");
        assert_eq!((out.comments[1].start_line, out.comments[1].end_line), (2, 3));
        assert_eq!(out.stripped, "let a = 1; \n\n\nlet b = 2;\n");
    }

    #[test]
    fn unterminated_block_consumes_to_eof() {
        let out = extract(Dialect::TypeScriptLike, "a\n/* never closed\nb");
        assert_eq!(out.comments.len(), 1);
        let c = &out.comments[0];
        assert_eq!(c.content, "/* never closed\nb");
        assert_eq!((c.start_line, c.end_line), (2, 3));
        assert_eq!(out.stripped, "a\n\n");
    }

    #[test]
    fn stripping_preserves_newline_count() {
        let sources = [
            "# only a comment\n",
            "'''\na\nb\nc\n'''\n",
            "x = 1\ny = 2 # inline\n",
            "/* a\nb */ let x = 1; // c\n",
            "'''unterminated\nwith\nlines",
        ];
        for source in sources {
            for dialect in [Dialect::PythonLike, Dialect::TypeScriptLike] {
                let out = extract(dialect, source);
                assert_eq!(
                    newline_count(source),
                    newline_count(&out.stripped),
                    "newline count changed for {source:?} in {dialect}"
                );
            }
        }
    }

    #[test]
    fn hash_inside_string_is_still_a_comment() {
        // Documented limitation: extraction has no string awareness.
        let out = extract(Dialect::PythonLike, "s = \"a # b\"\n");
        assert_eq!(out.comments.len(), 1);
        assert_eq!(out.comments[0].content, "# b\"");
    }

    #[test]
    fn comment_capacity_is_observable() {
        let source = "# note\n".repeat(limits::MAX_COMMENTS + 3);
        let out = extract(Dialect::PythonLike, &source);
        assert!(out.truncated);
        assert_eq!(out.comments.len(), limits::MAX_COMMENTS);
        // The stripped text still covers the whole input.
        assert_eq!(newline_count(&out.stripped), limits::MAX_COMMENTS + 3);
    }
}
