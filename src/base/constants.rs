//! Crate-wide constants.

/// Version of the y format understood by this crate.
pub const Y_VERSION: &str = "0.1";

/// File extension of y source units (without the dot).
pub const Y_EXT: &str = "y";

/// Deepest allowed nesting of node lists. Deeper input is a syntax error.
pub const MAX_NESTING: usize = 256;
