//! Loading source units into a [`Context`].

mod context;
mod error;
pub mod file_loader;

pub use context::Context;
pub use error::Error;
