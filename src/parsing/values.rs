//! Resolution of the value following an assignment's `:` or a list item's `--`

use crate::language::Value;
use crate::parsing::lexer::*;
use crate::parsing::parser::ParsingError;

/// Consume the value starting at the lexer's current position and return it
/// as a single token, or None if nothing but whitespace and a comment remain
/// on the line.
///
/// The alternatives are tried in a fixed order, and a typed alternative is
/// only accepted if it reaches the end of the line (trailing whitespace and a
/// comment aside). Whatever doesn't fit one of the typed shapes is taken
/// verbatim as raw text, which is how shell commands and other free-form
/// text end up as values.
pub fn read_value<'i>(lexer: &mut Lexer<'i>) -> Result<Option<Token<'i>>, ParsingError> {
    lexer.trim_whitespace();

    if lexer.is_line_end() {
        return Ok(None);
    }

    let (kind, width) = classify_value(lexer.rest(), lexer.offset())?;
    if width == 0 {
        return Ok(None);
    }

    Ok(Some(lexer.take(kind, width)))
}

/// As read_value(), but a value is required.
pub fn resolve_value<'i>(lexer: &mut Lexer<'i>) -> Result<Value<'i>, ParsingError> {
    match read_value(lexer)? {
        Some(token) => Ok(value_of(&token)),
        None => Err(ParsingError::MissingValue(lexer.offset())),
    }
}

/// Convert a token produced by read_value() into the Value it denotes.
pub fn value_of<'i>(token: &Token<'i>) -> Value<'i> {
    let text = token.text;

    match token.kind {
        TokenKind::String => Value::String(&text[1..text.len() - 1]),
        TokenKind::True => Value::Boolean(true),
        TokenKind::False => Value::Boolean(false),
        TokenKind::Version => match parse_version(text) {
            Some(components) => Value::Version(components),
            None => Value::RawValue(text),
        },
        TokenKind::Number => match text.parse::<u64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::RawValue(text),
        },
        TokenKind::PathValue => Value::PathValue(text),
        TokenKind::Identifier => Value::Identifier(text),
        _ => Value::RawValue(text),
    }
}

fn classify_value(content: &str, offset: usize) -> Result<(TokenKind, usize), ParsingError> {
    if content.starts_with('"') {
        let width = scan_string(content).ok_or(ParsingError::UnterminatedString(offset))?;
        if is_line_end(&content[width..]) {
            return Ok((TokenKind::String, width));
        }
    }

    if let Some((kind, width)) = scan_keyword(content) {
        if matches!(kind, TokenKind::True | TokenKind::False) && is_line_end(&content[width..]) {
            return Ok((kind, width));
        }
    }

    let width = scan_version(content);
    if width > 0
        && is_line_end(&content[width..])
        && parse_version(&content[..width]).is_some()
    {
        return Ok((TokenKind::Version, width));
    }

    let width = scan_number(content);
    if width > 0
        && is_line_end(&content[width..])
        && content[..width]
            .parse::<u64>()
            .is_ok()
    {
        return Ok((TokenKind::Number, width));
    }

    if let Some((kind, width)) = scan_word(content) {
        if is_line_end(&content[width..]) {
            return Ok((kind, width));
        }
    }

    Ok((TokenKind::Raw, scan_raw(content)))
}

// Components that don't fit in a u64 mean this isn't a version we can
// represent, in which case the text falls through to be raw.
fn parse_version(text: &str) -> Option<Vec<u64>> {
    text.split('.')
        .map(|component| {
            component
                .parse::<u64>()
                .ok()
        })
        .collect()
}
