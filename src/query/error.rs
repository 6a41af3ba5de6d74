use thiserror::Error;

use crate::parser::{SyntaxError, TokenKind};

/// A query path that cannot be used. Not matching anything is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("empty query path")]
    Empty,

    #[error("invalid query path: {0}")]
    Lex(#[from] SyntaxError),

    #[error("invalid query path: expected {expected}, found {found} at column {}", .column + 1)]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        column: usize,
    },
}
