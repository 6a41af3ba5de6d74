//! Lexical and syntax errors, and their compiler-style rendering.

use super::token_kind::TokenKind;
use crate::base::SourceSpan;
use thiserror::Error;

const C_FATAL: &str = "\x1b[1;31m";
const C_RESET: &str = "\x1b[0m";

/// What went wrong while lexing or parsing a unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxErrorKind {
    #[error("unknown character: {ch} ({})", code_point(.ch))]
    UnknownCharacter { ch: char },

    #[error("strings cannot contain a new line")]
    NewlineInString,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("duplicate decimal point in number")]
    DuplicateDecimal,

    #[error("integer literal out of range")]
    IntegerOutOfRange,

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },

    #[error("expecting ending to node list")]
    UnterminatedNodeList,

    #[error("node lists nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}

/// A lexical or syntax error with its location.
///
/// The offending source line is copied into the error so it can be rendered
/// after the unit that produced it has been dropped.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {kind}", .span.position())]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: SourceSpan,
    pub line_text: String,
}

impl SyntaxError {
    /// Build an error, copying the line `span` sits on out of `source`.
    pub fn new(kind: SyntaxErrorKind, span: SourceSpan, source: &str) -> Self {
        let start = usize::from(span.line_start).min(source.len());
        let rest = &source[start..];
        let end = rest.find('\n').unwrap_or(rest.len());
        Self {
            kind,
            span,
            line_text: rest[..end].to_string(),
        }
    }

    /// Render the error as a multi-line diagnostic:
    ///
    /// ```text
    /// liby fatal 1:13:
    ///    1 | settings 1.2.3
    ///      |             ^ duplicate decimal point in number
    /// ```
    pub fn render(&self, style: &DiagnosticStyle) -> String {
        let (fatal, reset) = if style.color {
            (C_FATAL, C_RESET)
        } else {
            ("", "")
        };
        let width = style.gutter;
        let column = self.span.column();
        let carets = self.span.len().max(1);

        let mut out = format!("liby {fatal}fatal{reset} {}:\n", self.span.position());
        out.push_str(&format!("{:>width$} | ", self.span.line + 1));
        out.push_str(&self.highlighted_line(fatal, reset));
        out.push('\n');
        out.push_str(&format!("{:>width$} | {:column$}", "", ""));
        out.push_str(&"^".repeat(carets));
        out.push(' ');
        out.push_str(&self.kind.to_string());
        out
    }

    fn highlighted_line(&self, open: &str, close: &str) -> String {
        if open.is_empty() {
            return self.line_text.clone();
        }
        let begin = self.span.column().min(self.line_text.len());
        let end = (begin + self.span.len()).min(self.line_text.len());
        match (
            self.line_text.get(..begin),
            self.line_text.get(begin..end),
            self.line_text.get(end..),
        ) {
            (Some(head), Some(mid), Some(tail)) => format!("{head}{open}{mid}{close}{tail}"),
            _ => self.line_text.clone(),
        }
    }
}

/// Presentation settings for [`SyntaxError::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticStyle {
    /// Highlight the offending span with ANSI colour codes.
    pub color: bool,
    /// Width of the line-number gutter.
    pub gutter: usize,
}

impl DiagnosticStyle {
    pub fn colored() -> Self {
        Self {
            color: true,
            ..Self::default()
        }
    }
}

impl Default for DiagnosticStyle {
    fn default() -> Self {
        Self {
            color: false,
            gutter: 4,
        }
    }
}
