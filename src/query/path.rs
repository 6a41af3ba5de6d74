use super::QueryError;
use crate::parser::{Lexer, Token, TokenKind};

/// Segments of a lookup path, lexed one at a time.
///
/// Segments are identifiers separated by whitespace or by a single `.`.
/// Nothing past the segment just returned has been read, so a caller that
/// stops early never sees errors further along the path. The iterator ends
/// after the first error.
pub struct PathSegments<'a> {
    lexer: Lexer<'a>,
    started: bool,
    done: bool,
}

impl<'a> PathSegments<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            lexer: Lexer::new(path),
            started: false,
            done: false,
        }
    }

    fn segment(&mut self) -> Result<Option<&'a str>, QueryError> {
        let mut token = self.lexer.next_token()?;
        if !self.started {
            self.started = true;
            if token.kind == TokenKind::Eof {
                return Ok(None);
            }
        } else {
            match token.kind {
                TokenKind::Eof => return Ok(None),
                TokenKind::Dot => token = self.lexer.next_token()?,
                _ => {}
            }
        }
        expect_text(token).map(|token| Some(token.text))
    }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = Result<&'a str, QueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let segment = self.segment().transpose();
        if !matches!(segment, Some(Ok(_))) {
            self.done = true;
        }
        segment
    }
}

/// A lookup path split into name segments up front.
///
/// Unlike [`PathSegments`], the whole path is checked before it is used, so
/// a `QueryPath` can be resolved repeatedly without re-lexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> QueryPath<'a> {
    /// Tokenize every segment of `path`.
    ///
    /// Numbers, strings, notes, braces, and stray dots are rejected rather
    /// than skipped.
    pub fn parse(path: &'a str) -> Result<Self, QueryError> {
        let segments = PathSegments::new(path).collect::<Result<Vec<_>, _>>()?;
        if segments.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

fn expect_text(token: Token<'_>) -> Result<Token<'_>, QueryError> {
    if token.kind == TokenKind::Text {
        return Ok(token);
    }
    Err(QueryError::UnexpectedToken {
        expected: TokenKind::Text,
        found: token.kind,
        column: token.span.column(),
    })
}
