//! Logos-based lexer for the y format
//!
//! Tokens are classified by their first significant character. Whitespace,
//! newlines and `//` comments are skipped; newlines advance the line counter
//! kept in the logos extras so every token knows where its line starts.

use super::error::{SyntaxError, SyntaxErrorKind};
use super::token_kind::TokenKind;
use crate::base::{SourceSpan, TextRange, TextSize};
use logos::{Logos, Skip};

/// Decoded value of a number token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Integer(u64),
    Decimal(f64),
}

/// A token with its kind, text, and position
///
/// For strings, `text` and `span` cover the bytes between the quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: SourceSpan,
    /// Decoded value; set for number tokens and for nothing else.
    pub literal: Option<Literal>,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        self.span.range
    }
}

/// Line bookkeeping carried through the logos lexer.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LineTracker {
    line: u32,
    line_start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum LexError {
    #[default]
    UnknownCharacter,
    NewlineInString,
    UnterminatedString,
    DuplicateDecimal,
    IntegerOutOfRange,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LineTracker)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    #[regex(r"\n", newline)]
    Newline,

    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Text,

    #[regex(r"[0-9][0-9_.]*", number)]
    Number(Literal),

    #[token("\"", string)]
    String,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

fn newline(lex: &mut logos::Lexer<'_, RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

fn number(lex: &mut logos::Lexer<'_, RawToken>) -> Result<Literal, LexError> {
    let text = lex.slice();
    let digits: String = text.chars().filter(|&c| c != '_').collect();

    match text.bytes().filter(|&b| b == b'.').count() {
        0 => digits
            .parse::<u64>()
            .map(Literal::Integer)
            .map_err(|_| LexError::IntegerOutOfRange),
        // One dot among ASCII digits always parses.
        1 => Ok(Literal::Decimal(digits.parse::<f64>().unwrap_or_default())),
        _ => Err(LexError::DuplicateDecimal),
    }
}

fn string(lex: &mut logos::Lexer<'_, RawToken>) -> Result<(), LexError> {
    let rest = lex.remainder();
    match rest.find(['"', '\n']) {
        Some(end) if rest.as_bytes()[end] == b'"' => {
            lex.bump(end + 1);
            Ok(())
        }
        Some(end) => {
            lex.bump(end);
            Err(LexError::NewlineInString)
        }
        None => {
            lex.bump(rest.len());
            Err(LexError::UnterminatedString)
        }
    }
}

fn size(offset: usize) -> TextSize {
    TextSize::new(offset as u32)
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Once the input is exhausted every further call to [`Lexer::next_token`]
/// returns a zero-width [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            done: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Produce the next token, or the first lexical error.
    pub fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        let Some(raw) = self.inner.next() else {
            return Ok(self.eof());
        };

        let raw = raw.map_err(|err| self.error(err))?;
        let range = self.inner.span();
        let text = self.inner.slice();

        let (kind, text, range, literal) = match raw {
            RawToken::Text => (TokenKind::Text, text, range, None),
            RawToken::Number(value) => (TokenKind::Number, text, range, Some(value)),
            RawToken::String => {
                let inner = range.start + 1..range.end - 1;
                (TokenKind::String, &text[1..text.len() - 1], inner, None)
            }
            RawToken::Dot => (TokenKind::Dot, text, range, None),
            RawToken::At => (TokenKind::At, text, range, None),
            RawToken::LBrace => (TokenKind::LBrace, text, range, None),
            RawToken::RBrace => (TokenKind::RBrace, text, range, None),
            // Both are skipped by their callbacks and never reach here.
            RawToken::Newline | RawToken::LineComment => return self.next_token(),
        };

        Ok(Token {
            kind,
            text,
            span: self.span(range.start, range.end),
            literal,
        })
    }

    fn eof(&self) -> Token<'a> {
        let end = self.source.len();
        Token {
            kind: TokenKind::Eof,
            text: "",
            span: self.span(end, end),
            literal: None,
        }
    }

    fn span(&self, start: usize, end: usize) -> SourceSpan {
        SourceSpan::new(
            self.inner.extras.line,
            size(self.inner.extras.line_start),
            TextRange::new(size(start), size(end)),
        )
    }

    fn error(&self, err: LexError) -> SyntaxError {
        let range = self.inner.span();
        let (kind, start, end) = match err {
            LexError::UnknownCharacter => {
                let ch = self.source[range.start..].chars().next().unwrap_or('\0');
                (
                    SyntaxErrorKind::UnknownCharacter { ch },
                    range.start,
                    range.start + ch.len_utf8(),
                )
            }
            LexError::NewlineInString => {
                (SyntaxErrorKind::NewlineInString, range.end, range.end + 1)
            }
            LexError::UnterminatedString => (
                SyntaxErrorKind::UnterminatedString,
                range.start,
                range.start + 1,
            ),
            LexError::DuplicateDecimal => {
                let at = self
                    .inner
                    .slice()
                    .match_indices('.')
                    .nth(1)
                    .map(|(i, _)| range.start + i)
                    .unwrap_or(range.start);
                (SyntaxErrorKind::DuplicateDecimal, at, at + 1)
            }
            LexError::IntegerOutOfRange => {
                (SyntaxErrorKind::IntegerOutOfRange, range.start, range.end)
            }
        };
        SyntaxError::new(kind, self.span(start, end), self.source)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, SyntaxError>;

    /// Yields every token up to, but not including, end of input. Stops after
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    Lexer::new(input).collect()
}
