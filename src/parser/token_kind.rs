//! Token kinds produced by the lexer.

/// All token kinds of the y format.
///
/// Text, number and string tokens carry a payload (see [`Token`](super::Token));
/// the rest are single characters or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// End of input, zero width.
    Eof,

    // =========================================================================
    // LITERALS
    // =========================================================================
    Text,   // settings
    Number, // 42, 4.2, 1_000
    String, // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    Dot,    // .
    At,     // @
    LBrace, // {
    RBrace, // }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(kind_to_name(*self))
    }
}

/// Map a token kind to the name shown in "expected X, found Y" messages.
pub fn kind_to_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Eof => "end of input",
        TokenKind::Text => "identifier",
        TokenKind::Number => "number",
        TokenKind::String => "string",
        TokenKind::Dot => "'.'",
        TokenKind::At => "'@'",
        TokenKind::LBrace => "'{'",
        TokenKind::RBrace => "'}'",
    }
}
