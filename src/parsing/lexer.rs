//! Tokenizer for lmy source text

use serde::Serialize;

use crate::parsing::parser::ParsingError;
use crate::parsing::values::read_value;
use crate::regex;

/// Byte offsets into the original input, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenBracket,
    CloseBracket,
    DoubleColon,
    Colon,
    OpenBrace,
    CloseBrace,
    Comma,
    Dash,
    Verify,
    Import,
    True,
    False,
    Identifier,
    String,
    Version,
    Number,
    Path,
    PathValue,
    Raw,
    Whitespace,
    Comment,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'i str,
}

impl<'i> Token<'i> {
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// How this token is named when it turns up somewhere it shouldn't.
    pub(crate) fn describe(&self) -> String {
        match self.kind {
            TokenKind::End => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

// `::` has to be tried before `:`
const PUNCTUATION: [(&str, TokenKind); 8] = [
    ("::", TokenKind::DoubleColon),
    (":", TokenKind::Colon),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
    (",", TokenKind::Comma),
    ("--", TokenKind::Dash),
];

const KEYWORDS: [(&str, TokenKind); 4] = [
    ("verify", TokenKind::Verify),
    ("import", TokenKind::Import),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// A cursor over the input which hands out one significant token at a time,
/// skipping (and optionally retaining) whitespace and comments in between.
/// Cloning it gives a probe which can look ahead without disturbing the
/// original.
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    source: &'i str,
    offset: usize,
    trivia: Option<Vec<Token<'i>>>,
}

impl<'i> Lexer<'i> {
    pub fn new(source: &'i str) -> Lexer<'i> {
        Lexer {
            source,
            offset: 0,
            trivia: None,
        }
    }

    /// As new(), but whitespace and comment tokens are kept and can be
    /// retrieved with trivia().
    pub fn retaining(source: &'i str) -> Lexer<'i> {
        Lexer {
            source,
            offset: 0,
            trivia: Some(Vec::new()),
        }
    }

    /// Restart scanning at an earlier (or later) position in the same input.
    pub fn at(source: &'i str, offset: usize) -> Lexer<'i> {
        Lexer {
            source,
            offset: offset.min(source.len()),
            trivia: None,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'i str {
        self.source
    }

    pub fn rest(&self) -> &'i str {
        &self.source[self.offset..]
    }

    pub fn is_finished(&self) -> bool {
        self.offset
            >= self
                .source
                .len()
    }

    pub fn trivia(&self) -> &[Token<'i>] {
        match &self.trivia {
            Some(trivia) => trivia.as_slice(),
            None => &[],
        }
    }

    fn advance(&mut self, kind: TokenKind, width: usize) -> Token<'i> {
        let start = self.offset;
        let end = start + width;
        self.offset = end;

        Token {
            kind,
            span: Span { start, end },
            text: &self.source[start..end],
        }
    }

    fn record(&mut self, token: Token<'i>) {
        if let Some(trivia) = &mut self.trivia {
            trivia.push(token);
        }
    }

    /// Skip any run of whitespace (newlines included) and comments.
    pub fn trim_trivia(&mut self) {
        loop {
            let content = self.rest();

            let width = content.len()
                - content
                    .trim_start()
                    .len();
            if width > 0 {
                let token = self.advance(TokenKind::Whitespace, width);
                self.record(token);
                continue;
            }

            if content.starts_with("//") {
                let width = content
                    .find(['\n', '\r'])
                    .unwrap_or(content.len());
                let token = self.advance(TokenKind::Comment, width);
                self.record(token);
                continue;
            }

            break;
        }
    }

    /// Skip whitespace other than line breaks; used in value positions, which
    /// end at the end of the line.
    pub fn trim_whitespace(&mut self) {
        let content = self.rest();
        let width = content.len()
            - content
                .trim_start_matches(is_inline_whitespace)
                .len();

        if width > 0 {
            let token = self.advance(TokenKind::Whitespace, width);
            self.record(token);
        }
    }

    pub fn is_line_end(&self) -> bool {
        is_line_end(self.rest())
    }

    /// Consume and return the next significant token.
    pub fn next_token(&mut self) -> Result<Token<'i>, ParsingError> {
        self.trim_trivia();
        let (kind, width) = self.classify()?;
        Ok(self.advance(kind, width))
    }

    /// Return the next significant token without consuming anything.
    pub fn peek_token(&self) -> Result<Token<'i>, ParsingError> {
        let mut probe = Lexer::at(self.source, self.offset);
        probe.next_token()
    }

    /// Consume a compound identifier, if one is next.
    pub fn read_identifier(&mut self) -> Option<Token<'i>> {
        self.trim_trivia();
        match scan_identifier(self.rest()) {
            0 => None,
            width => Some(self.advance(TokenKind::Identifier, width)),
        }
    }

    /// Consume the target of an import or verify statement, if one is next.
    pub fn read_path(&mut self) -> Option<Token<'i>> {
        self.trim_trivia();
        match scan_path(self.rest()) {
            0 => None,
            width => Some(self.advance(TokenKind::Path, width)),
        }
    }

    pub(crate) fn take(&mut self, kind: TokenKind, width: usize) -> Token<'i> {
        self.advance(kind, width)
    }

    // The priority order here is the whole of the tokenizer's ambiguity
    // resolution: punctuation, keywords, strings, versions, numbers, then
    // path-values and identifiers (longest wins), with raw text last.
    fn classify(&self) -> Result<(TokenKind, usize), ParsingError> {
        let content = self.rest();

        let c = match content
            .chars()
            .next()
        {
            Some(c) => c,
            None => return Ok((TokenKind::End, 0)),
        };

        for (symbol, kind) in PUNCTUATION {
            if content.starts_with(symbol) {
                return Ok((kind, symbol.len()));
            }
        }

        if let Some(found) = scan_keyword(content) {
            return Ok(found);
        }

        if c == '"' {
            return match scan_string(content) {
                Some(width) => Ok((TokenKind::String, width)),
                None => Err(ParsingError::UnterminatedString(self.offset)),
            };
        }

        let width = scan_version(content);
        if width > 0 {
            return Ok((TokenKind::Version, width));
        }

        let width = scan_number(content);
        if width > 0 {
            return Ok((TokenKind::Number, width));
        }

        if let Some(found) = scan_word(content) {
            return Ok(found);
        }

        match scan_raw(content) {
            0 => Err(ParsingError::Unrecognized(self.offset, c)),
            width => Ok((TokenKind::Raw, width)),
        }
    }
}

/// Lazily produced stream of significant tokens, finishing with a single
/// End token. Whitespace and comments passed over along the way are kept and
/// available from trivia().
///
/// The rest of the line after a `:` or `--` is read the way the parser reads
/// it, as at most one value token.
pub struct Tokens<'i> {
    lexer: Lexer<'i>,
    value: bool,
    done: bool,
}

impl<'i> Tokens<'i> {
    pub fn trivia(&self) -> &[Token<'i>] {
        self.lexer
            .trivia()
    }
}

impl<'i> Iterator for Tokens<'i> {
    type Item = Result<Token<'i>, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = if self.value {
            self.value = false;
            match read_value(&mut self.lexer) {
                Ok(Some(token)) => Ok(token),
                Ok(None) => self
                    .lexer
                    .next_token(),
                Err(error) => Err(error),
            }
        } else {
            self.lexer
                .next_token()
        };

        match &result {
            Ok(token) => match token.kind {
                TokenKind::End => self.done = true,
                TokenKind::Colon | TokenKind::Dash => self.value = true,
                _ => {}
            },
            Err(_) => self.done = true,
        }

        Some(result)
    }
}

pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lexer: Lexer::retaining(source),
        value: false,
        done: false,
    }
}

pub(crate) fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(crate) fn is_identifier_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'@' || b == b'-'
}

/// Length of the compound identifier at the start of content, or zero if
/// there isn't one. A colon is taken only when a letter or underscore
/// follows it immediately, so `aft:dev` is one identifier while `aft: dev`
/// and `server::` stop before the colon.
pub(crate) fn scan_identifier(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut i = 0;

    loop {
        match bytes.get(i) {
            Some(&b) if is_identifier_start(b) => i += 1,
            _ => return i,
        }

        while let Some(&b) = bytes.get(i) {
            if !is_identifier_continue(b) {
                break;
            }
            i += 1;
        }

        match (bytes.get(i), bytes.get(i + 1)) {
            (Some(b':'), Some(&b)) if is_identifier_start(b) => i += 1,
            _ => return i,
        }
    }
}

fn matched(re: &::regex::Regex, content: &str) -> usize {
    re.find(content)
        .map_or(0, |m| m.end())
}

pub(crate) fn scan_path(content: &str) -> usize {
    matched(regex!(r"^@?[A-Za-z_][A-Za-z0-9_\-/]*"), content)
}

pub(crate) fn scan_path_value(content: &str) -> usize {
    matched(regex!(r"^/?[A-Za-z_][A-Za-z0-9_\-/.]*"), content)
}

pub(crate) fn scan_version(content: &str) -> usize {
    matched(regex!(r"^[0-9]+(?:\.[0-9]+)+"), content)
}

pub(crate) fn scan_number(content: &str) -> usize {
    matched(regex!(r"^[0-9]+"), content)
}

/// Width of a quoted string including both quotes, or None if the line ends
/// before the closing quote.
pub(crate) fn scan_string(content: &str) -> Option<usize> {
    regex!(r#"^"[^"\n\r]*""#)
        .find(content)
        .map(|m| m.end())
}

/// A path-value only wins over an identifier when it is strictly longer,
/// which is to say when it has a slash or dot the identifier can't take.
pub(crate) fn scan_word(content: &str) -> Option<(TokenKind, usize)> {
    let identifier = scan_identifier(content);
    let path = scan_path_value(content);

    if path > identifier {
        Some((TokenKind::PathValue, path))
    } else if identifier > 0 {
        Some((TokenKind::Identifier, identifier))
    } else {
        None
    }
}

/// Keywords only count when nothing longer could be scanned from the same
/// position: `verifyx` and `true:dev` are identifiers, `import/x` is a
/// path-value.
pub(crate) fn scan_keyword(content: &str) -> Option<(TokenKind, usize)> {
    for (word, kind) in KEYWORDS {
        if content.starts_with(word) {
            let longest = scan_identifier(content).max(scan_path_value(content));
            if longest == word.len() {
                return Some((kind, word.len()));
            }
        }
    }
    None
}

/// Width of the free-form text running to the end of the line. A `//`
/// preceded by whitespace starts a comment and ends the text; trailing
/// whitespace is not included.
pub(crate) fn scan_raw(content: &str) -> usize {
    let mut end = 0;

    for (i, c) in content.char_indices() {
        let next = i + c.len_utf8();
        match c {
            '\n' | '\r' => break,
            c if is_inline_whitespace(c) => {
                if content[next..].starts_with("//") {
                    break;
                }
            }
            _ => end = next,
        }
    }

    end
}

/// Whitespace that doesn't end a line.
pub(crate) fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

/// Whether nothing but whitespace stands between here and the end of
/// the line, the end of the input, or a comment.
pub(crate) fn is_line_end(content: &str) -> bool {
    let rest = content.trim_start_matches(is_inline_whitespace);

    rest.is_empty() || rest.starts_with(['\n', '\r']) || rest.starts_with("//")
}
