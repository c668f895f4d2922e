//! Parser for the lmy workspace description language

pub mod formatting;
pub mod language;
pub mod parsing;
mod regex;
