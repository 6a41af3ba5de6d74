//! Foundation types shared by the lexer, parser, tree and loader.
//!
//! - [`UnitId`] - Index of a loaded source unit inside a context
//! - [`TextRange`], [`TextSize`] - Byte offsets into a unit's text
//! - [`Position`], [`SourceSpan`] - Line/column provenance for diagnostics
//! - Crate constants (version, file extension)
//!
//! This module has NO dependencies on other liby modules.

pub mod constants;
mod position;
mod unit_id;

pub use position::{Position, SourceSpan};
pub use unit_id::UnitId;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
