//! Position tracking for tokens and diagnostics.
//!
//! The lexer records, for every token, the line it sits on and the byte offset
//! where that line starts. Columns are derived from those two on demand.

use text_size::{TextRange, TextSize};

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    /// Formats as `line:column`, both 1-based.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Source provenance of a token: the line it was found on, where that line
/// begins, and the byte range of the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// 0-indexed line number.
    pub line: u32,
    /// Byte offset of the first character of `line`.
    pub line_start: TextSize,
    /// Byte range of the token.
    pub range: TextRange,
}

impl SourceSpan {
    pub fn new(line: u32, line_start: TextSize, range: TextRange) -> Self {
        Self {
            line,
            line_start,
            range,
        }
    }

    /// Zero-width span at `offset`, used for end of input.
    pub fn empty(line: u32, line_start: TextSize, offset: TextSize) -> Self {
        Self::new(line, line_start, TextRange::empty(offset))
    }

    /// Column of the first byte, counted from the line start.
    pub fn column(&self) -> usize {
        usize::from(self.range.start()).saturating_sub(usize::from(self.line_start))
    }

    pub fn position(&self) -> Position {
        Position::new(self.line as usize, self.column())
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        usize::from(self.range.len())
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
