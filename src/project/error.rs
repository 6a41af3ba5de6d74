//! Error types for loading source units.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::{DiagnosticStyle, SyntaxError};

/// Errors that abort a load. Nothing is added to the context when one occurs.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path names a directory or something else that is not a regular file.
    #[error("{} is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    /// A directory load was given something that is not a directory.
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The text is not a valid unit.
    #[error("{}:{error}", .path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        error: SyntaxError,
    },
}

impl Error {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed load was for.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::NotAFile { path }
            | Self::NotADirectory { path }
            | Self::Syntax { path, .. } => path,
        }
    }

    /// The lexical or syntax error, if that is what stopped the load.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Full diagnostic text: the source excerpt for syntax errors, the
    /// message otherwise.
    pub fn render(&self, style: &DiagnosticStyle) -> String {
        match self {
            Self::Syntax { path, error } => format!("{}\n{}", path.display(), error.render(style)),
            other => other.to_string(),
        }
    }
}
