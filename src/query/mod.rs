//! Path queries over the loaded forest.
//!
//! A query path names one node by the chain of names leading to it from a
//! forest root: `"settings graphics vsync"` or `"settings.graphics.vsync"`.
//! The path is tokenized with the same lexer as source units, so segments
//! follow the identifier rules of the format.

mod error;
mod path;
mod resolve;

pub use error::QueryError;
pub use path::{PathSegments, QueryPath};
pub use resolve::{find, resolve};
