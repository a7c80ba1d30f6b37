//! Terminal report rendering.
//!
//! Renders one [`Analysis`](crate::Analysis) as three box-drawn sections
//! (tokens, comments, diagnostics) with raw ANSI escapes. Every function
//! builds a `String` rather than printing, so the layout is testable and
//! the caller decides the output stream. Passing `color: false` drops all
//! escapes for pipes and dumb terminals.

use std::fmt::Write;

use crate::Analysis;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::lexer::{Token, TokenKind};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const HEADER: &str = "\x1b[1;36m";
const LINE_NUMBER: &str = "\x1b[90m";
const SINGLE_LINE_COMMENT: &str = "\x1b[32m";
const MULTI_LINE_COMMENT: &str = "\x1b[36m";

const BANNER_TOP: &str = "╔══════════════════════════════════════════════════════════════════════╗";
const BANNER_BOTTOM: &str = "╚══════════════════════════════════════════════════════════════════════╝";

fn token_color(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "\x1b[35m",
        TokenKind::Identifier => "\x1b[33m",
        TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral => "\x1b[34m",
        TokenKind::Operator => "\x1b[31m",
        TokenKind::Delimiter => "\x1b[37m",
    }
}

fn diagnostic_color(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::MisspelledKeyword => "\x1b[93m",
        DiagnosticKind::TypeMismatch => "\x1b[91m",
        DiagnosticKind::UndeclaredIdentifier => "\x1b[95m",
        DiagnosticKind::InvalidOperator => "\x1b[96m",
    }
}

/// Render the full three-section report.
pub fn report(analysis: &Analysis, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&token_table(&analysis.lex.tokens, color));
    out.push_str(&comment_section(analysis, color));
    out.push_str(&diagnostic_section(&analysis.report.diagnostics, color));
    out
}

fn banner(out: &mut String, title: &str, color: bool) {
    let tint = if color { HEADER } else { "" };
    let reset = if color { RESET } else { "" };
    out.push('\n');
    let _ = writeln!(out, "{tint}{BANNER_TOP}{reset}");
    let _ = writeln!(out, "{tint}║{title:^70}║{reset}");
    let _ = writeln!(out, "{tint}{BANNER_BOTTOM}{reset}");
}

/// Two-column token table: token text and its classification.
pub fn token_table(tokens: &[Token], color: bool) -> String {
    let bold = if color { BOLD } else { "" };
    let reset = if color { RESET } else { "" };

    let mut out = String::new();
    banner(&mut out, "TOKENIZATION TABLE", color);
    let _ = writeln!(
        out,
        "{bold}┌──────────────────────────────────┬───────────────────────────────────┐{reset}"
    );
    let _ = writeln!(
        out,
        "{bold}│{:<34}│{:<35}│{reset}",
        "            TOKEN", "           ATTRIBUTE"
    );
    let _ = writeln!(
        out,
        "{bold}├──────────────────────────────────┼───────────────────────────────────┤{reset}"
    );
    for token in tokens {
        let tint = if color { token_color(token.kind) } else { "" };
        let _ = writeln!(
            out,
            "│ {:<32} │ {tint}{:<33}{reset} │",
            token.text,
            token.kind.label()
        );
    }
    let _ = writeln!(
        out,
        "{bold}└──────────────────────────────────┴───────────────────────────────────┘{reset}"
    );
    out
}

fn comment_section(analysis: &Analysis, color: bool) -> String {
    let bold = if color { BOLD } else { "" };
    let reset = if color { RESET } else { "" };
    let gray = if color { LINE_NUMBER } else { "" };

    let mut out = String::new();
    banner(&mut out, "COMMENTS DETECTED", color);
    out.push('\n');

    let comments = &analysis.comments.comments;
    if comments.is_empty() {
        let _ = writeln!(out, "  {gray}✓ No comments found in the source code.{reset}");
        return out;
    }
    for comment in comments {
        if comment.is_multiline {
            let tint = if color { MULTI_LINE_COMMENT } else { "" };
            let _ = writeln!(
                out,
                "{gray}[Lines {}-{}]{reset} {bold}MULTI-LINE{reset}\n{tint}{}{reset}",
                comment.start_line, comment.end_line, comment.content
            );
        } else {
            let tint = if color { SINGLE_LINE_COMMENT } else { "" };
            let _ = writeln!(
                out,
                "{gray}[Line {}]{reset} {bold}SINGLE-LINE{reset}: {tint}{}{reset}",
                comment.start_line, comment.content
            );
        }
    }
    out
}

fn diagnostic_section(diagnostics: &[Diagnostic], color: bool) -> String {
    let reset = if color { RESET } else { "" };
    let gray = if color { LINE_NUMBER } else { "" };

    let mut out = String::new();
    banner(&mut out, "ERROR DETECTION", color);
    out.push('\n');

    if diagnostics.is_empty() {
        let green = if color { SINGLE_LINE_COMMENT } else { "" };
        let _ = writeln!(out, "  {green}✓ No errors detected! Code is clean.{reset}");
        return out;
    }
    for diagnostic in diagnostics {
        let tint = if color { diagnostic_color(diagnostic.kind) } else { "" };
        let _ = writeln!(
            out,
            "  {gray}[Line {}]{reset} {tint}[{}]{reset}",
            diagnostic.line,
            diagnostic.kind.label()
        );
        let _ = writeln!(out, "    {gray}↳ {}{reset}\n", diagnostic.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dialect, analyze};

    #[test]
    fn plain_output_has_no_escapes() {
        let analysis = analyze(Dialect::PythonLike, "x = 1  # note\nmystery\n");
        let out = report(&analysis, false);
        assert!(!out.contains('\x1b'));
        assert!(out.contains("TOKENIZATION TABLE"));
        assert!(out.contains("COMMENTS DETECTED"));
        assert!(out.contains("ERROR DETECTION"));
    }

    #[test]
    fn colored_output_resets_after_each_tinted_span() {
        let analysis = analyze(Dialect::PythonLike, "x = 1\n");
        let out = report(&analysis, true);
        assert!(out.contains("\x1b[33m"));
        assert!(out.ends_with("\x1b[0m\n") || out.contains("\x1b[0m"));
    }

    #[test]
    fn token_rows_show_text_and_label() {
        let analysis = analyze(Dialect::PythonLike, "if x:\n    y = 1\n");
        let out = token_table(&analysis.lex.tokens, false);
        assert!(out.contains("if"));
        assert!(out.contains("KEYWORD"));
        assert!(out.contains("IDENTIFIER"));
        assert!(out.contains("DELIMITER"));
    }

    #[test]
    fn empty_sections_report_clean() {
        let analysis = analyze(Dialect::TypeScriptLike, "let x = 1;\n");
        let out = report(&analysis, false);
        assert!(out.contains("No comments found"));
        assert!(out.contains("No errors detected! Code is clean."));
    }

    #[test]
    fn diagnostics_render_label_and_message() {
        let analysis = analyze(Dialect::PythonLike, "a = 1\nb = 2\na =< b\n");
        let out = report(&analysis, false);
        assert!(out.contains("[Line 3] [INVALID OPERATOR]"));
        assert!(out.contains("↳ '=<' should be '<='"));
    }
}
