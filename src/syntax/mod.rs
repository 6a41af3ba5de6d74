//! Tree model: source units, the node arena, and borrowed node views.

pub mod file;
mod node;
pub(crate) mod tree;

pub use file::SourceUnit;
pub use node::{Children, NodeRef, NoteRef, Siblings, Value, ValueKind};
pub use tree::{NodeId, Tree};
