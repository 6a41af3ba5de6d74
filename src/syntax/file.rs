//! Source unit wrapper: the text of one input plus the tree parsed from it.

use std::path::{Path, PathBuf};

use super::tree::Tree;
use crate::base::TextRange;
use crate::parser::{SyntaxError, parse};

/// One parsed input.
///
/// The unit owns its text; every name, string value and note of its tree is a
/// range into that text. Nodes are only handed out as views borrowing the
/// unit (see [`NodeRef`](super::NodeRef)), so they cannot outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceUnit {
    /// Parse `text`, remembering `path` as its origin.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, SyntaxError> {
        let text = text.into();
        let tree = parse(&text)?;
        Ok(Self {
            path: path.into(),
            text,
            tree,
        })
    }

    /// Where the text came from. For in-memory sources this is the name
    /// they were loaded under.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub(crate) fn slice(&self, range: TextRange) -> &str {
        &self.text[range]
    }
}
