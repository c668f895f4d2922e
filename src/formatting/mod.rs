//! Serialization of lmy syntax trees back into source text

mod formatter;

// Re-export all public symbols
pub use formatter::*;
