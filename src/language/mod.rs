// Types representing the lmy workspace description language

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
