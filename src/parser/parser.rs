//! Recursive descent parser for the y format
//!
//! Single pass, one token of lookahead, no backtracking. The first error
//! aborts the parse.
//!
//! ```text
//! Unit = Node EOF
//! Node = TEXT ( '{' Node* '}' | NUMBER | STRING )? Note*
//! Note = '@' TEXT
//! ```

use super::error::{SyntaxError, SyntaxErrorKind};
use super::lexer::{Lexer, Literal, Token};
use super::token_kind::TokenKind;
use crate::base::constants::MAX_NESTING;
use crate::base::{SourceSpan, TextRange};
use crate::syntax::tree::{NodeIndex, Tree, ValueData};

/// Parse one source unit into a tree.
///
/// A unit holds exactly one top-level node; anything after it is an error.
pub fn parse(source: &str) -> Result<Tree, SyntaxError> {
    let mut parser = Parser::new(source)?;
    parser.parse_unit()?;
    Ok(parser.finish())
}

impl From<Literal> for ValueData {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Integer(value) => ValueData::Integer(value),
            Literal::Decimal(value) => ValueData::Decimal(value),
        }
    }
}

/// The parser state
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    tree: Tree,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            tree: Tree::default(),
            depth: 0,
        })
    }

    fn finish(self) -> Tree {
        self.tree
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Advance, returning the token that was current.
    fn bump(&mut self) -> Result<Token<'a>, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, SyntaxError> {
        if self.at(kind) {
            return self.bump();
        }
        Err(self.error(
            SyntaxErrorKind::UnexpectedToken {
                expected: kind,
                found: self.current.kind,
            },
            self.current.span,
        ))
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, SyntaxError> {
        if self.at(kind) {
            self.bump().map(Some)
        } else {
            Ok(None)
        }
    }

    fn error(&self, kind: SyntaxErrorKind, span: SourceSpan) -> SyntaxError {
        SyntaxError::new(kind, span, self.lexer.source())
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Unit = Node EOF
    fn parse_unit(&mut self) -> Result<NodeIndex, SyntaxError> {
        let root = self.parse_node(None)?;
        self.expect(TokenKind::Eof)?;
        Ok(root)
    }

    /// Node = TEXT ( '{' Node* '}' | NUMBER | STRING )? Note*
    fn parse_node(&mut self, parent: Option<NodeIndex>) -> Result<NodeIndex, SyntaxError> {
        let name = self.expect(TokenKind::Text)?;
        let index = self.tree.open(name.range(), parent);

        let value = if let Some(brace) = self.consume(TokenKind::LBrace)? {
            ValueData::Node(self.parse_children(index, brace.span)?)
        } else if let Some(literal) = self.current.literal {
            // Only number tokens carry a literal.
            self.bump()?;
            ValueData::from(literal)
        } else if let Some(string) = self.consume(TokenKind::String)? {
            ValueData::String(string.range())
        } else {
            ValueData::None
        };

        let notes = self.parse_notes()?;
        self.tree.close(index, value, notes);
        Ok(index)
    }

    /// Children of a container, after its `{` up to and including the `}`.
    ///
    /// `open` is the span of the `{`, reported when the list is nested too deep.
    fn parse_children(
        &mut self,
        parent: NodeIndex,
        open: SourceSpan,
    ) -> Result<Vec<NodeIndex>, SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(SyntaxErrorKind::NestingTooDeep { limit: MAX_NESTING }, open));
        }
        self.depth += 1;

        let mut children = Vec::new();
        while self.consume(TokenKind::RBrace)?.is_none() {
            if self.at(TokenKind::Eof) {
                return Err(self.error(SyntaxErrorKind::UnterminatedNodeList, self.current.span));
            }
            children.push(self.parse_node(Some(parent))?);
        }

        self.depth -= 1;
        Ok(children)
    }

    /// Note* where Note = '@' TEXT
    fn parse_notes(&mut self) -> Result<Vec<TextRange>, SyntaxError> {
        let mut notes = Vec::new();
        while self.consume(TokenKind::At)?.is_some() {
            notes.push(self.expect(TokenKind::Text)?.range());
        }
        Ok(notes)
    }
}
