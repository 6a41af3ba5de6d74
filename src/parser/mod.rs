//! Lexer and recursive-descent parser for the y format
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind and SourceSpan
//!     ↓
//! Parser → Tree (flat node arena, ranges into the source text)
//! ```
//!
//! Lexical and syntax errors stop the parse and come back as a
//! [`SyntaxError`], which can be rendered as a compiler-style diagnostic.

mod error;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod token_kind;

pub use error::{DiagnosticStyle, SyntaxError, SyntaxErrorKind};
pub use lexer::{Lexer, Literal, Token, tokenize};
pub use parser::parse;
pub use token_kind::{TokenKind, kind_to_name};
