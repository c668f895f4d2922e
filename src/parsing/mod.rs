//! parser for the lmy language

use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

pub mod lexer;
pub mod parser;
pub mod values;

pub use parser::{ErrorKind, ParsingError};

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Document returned by parse() below can borrow from it.
/// A leading byte order mark is dropped.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => match content.strip_prefix('\u{feff}') {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(content),
        },
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document, or return the first error encountered.
pub fn parse(content: &str) -> Result<Document<'_>, ParsingError> {
    match parser::parse_document(content) {
        Ok(document) => {
            debug!(
                "Found {} definition{}",
                document.len(),
                if document.len() == 1 { "" } else { "s" }
            );
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            Err(error)
        }
    }
}

/// Where an error (or anything else with a byte offset) sits, for display to
/// humans. Line and column are one-origin; column counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

pub fn position(content: &str, offset: usize) -> Position {
    let offset = offset.min(content.len());
    let before = &content[..offset];

    let line = before
        .bytes()
        .filter(|&b| b == b'\n')
        .count();

    let column = match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    };

    Position {
        offset,
        line: line + 1,
        column: column + 1,
    }
}
