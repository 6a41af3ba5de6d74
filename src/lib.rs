//! # liby
//!
//! Lexer, parser, node tree and path queries for the y configuration format.
//!
//! ```text
//! // settings.y
//! settings {
//!     graphics {
//!         vsync
//!         refresh 60
//!         scale 1.5
//!     }
//!     title "main menu"
//! } @mutable
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! query     → Path lookups ("settings graphics vsync") over the forest
//!   ↓
//! project   → Context: loads files, owns units, chains roots into a forest
//!   ↓
//! syntax    → SourceUnit, node arena, NodeRef/Value/NoteRef views
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, SyntaxError
//!   ↓
//! base      → Primitives (UnitId, TextRange, Position, SourceSpan)
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use liby::Context;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ctx = Context::new();
//! let settings = ctx.load("settings.y")?;
//!
//! if ctx.node(settings).and_then(|n| n.has_note("mutable")).is_some() {
//!     println!("settings are mutable");
//! }
//! if let Some(refresh) = ctx.find("settings graphics refresh")? {
//!     println!("{refresh}");
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → project → query)
// ============================================================================

/// Foundation types: UnitId, TextRange, Position, SourceSpan
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, SyntaxError
pub mod parser;

/// Syntax: SourceUnit, node arena, borrowed node views
pub mod syntax;

/// Project: Context, file loading
pub mod project;

/// Query: path tokenizing and resolution
pub mod query;

// Re-export the everyday API
pub use base::constants::{Y_EXT, Y_VERSION};
pub use base::{Position, SourceSpan, UnitId};
pub use parser::{DiagnosticStyle, SyntaxError, SyntaxErrorKind};
pub use project::{Context, Error};
pub use query::{QueryError, QueryPath};
pub use syntax::{NodeId, NodeRef, NoteRef, SourceUnit, Value, ValueKind};
