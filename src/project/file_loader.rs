mod collection;
mod reading;

// Re-export core file loading functions
pub use collection::collect_file_paths;
pub use reading::{SourceFile, load_file, open};
