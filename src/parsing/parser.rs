use std::fmt;

use crate::language::*;
use crate::parsing::lexer::{Lexer, Token, TokenKind};
use crate::parsing::values::{read_value, resolve_value, value_of};

pub fn parse_document(content: &str) -> Result<Document<'_>, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.parse_from_start()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    // nothing recognizable at a position where a definition should start
    Unrecognized(usize, char),
    UnterminatedString(usize),
    // what was wanted, and a description of what was there instead
    Expected(usize, &'static str, String),
    TrailingComma(usize),
    MissingValue(usize),
}

/// The three broad categories errors fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    UnterminatedString,
    Structural,
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::Unrecognized(offset, _) => *offset,
            ParsingError::UnterminatedString(offset) => *offset,
            ParsingError::Expected(offset, _, _) => *offset,
            ParsingError::TrailingComma(offset) => *offset,
            ParsingError::MissingValue(offset) => *offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParsingError::Unrecognized(_, _) => ErrorKind::Lexical,
            ParsingError::UnterminatedString(_) => ErrorKind::UnterminatedString,
            ParsingError::Expected(_, _, _) => ErrorKind::Structural,
            ParsingError::TrailingComma(_) => ErrorKind::Structural,
            ParsingError::MissingValue(_) => ErrorKind::Structural,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::Unrecognized(_, c) => format!("unrecognized character '{}'", c),
            ParsingError::UnterminatedString(_) => "unterminated string".to_string(),
            ParsingError::Expected(_, expected, found) => {
                format!("expected {} but found {}", expected, found)
            }
            ParsingError::TrailingComma(_) => "trailing comma in import list".to_string(),
            ParsingError::MissingValue(_) => "list item is missing its value".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParsingError {}

#[derive(Debug)]
pub struct Parser<'i> {
    lexer: Lexer<'i>,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            lexer: Lexer::new(""),
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.lexer = Lexer::new(content);
    }

    pub fn offset(&self) -> usize {
        self.lexer
            .offset()
    }

    pub fn parse_from_start(&mut self) -> Result<Document<'i>, ParsingError> {
        let mut definitions = Vec::new();

        loop {
            self.lexer
                .trim_trivia();

            if self
                .lexer
                .is_finished()
            {
                break;
            }

            let definition = self.read_definition()?;
            definitions.push(definition);
        }

        Ok(Document { definitions })
    }

    /// Look at the next token and decide which of the definitions is
    /// starting here.
    pub fn read_definition(&mut self) -> Result<Definition<'i>, ParsingError> {
        let token = self
            .lexer
            .peek_token()?;

        match token.kind {
            TokenKind::OpenBracket => self.read_section(),
            TokenKind::DoubleColon => {
                self.lexer
                    .next_token()?;
                Ok(Definition::ScopeReturn)
            }
            TokenKind::Verify => self.read_verify(),
            TokenKind::Import => self.read_import(),
            TokenKind::Dash => self.read_list_item(),
            // booleans are only reserved in value position
            TokenKind::Identifier | TokenKind::True | TokenKind::False => self.read_keyed(),
            TokenKind::Raw => {
                let c = token
                    .text
                    .chars()
                    .next()
                    .unwrap_or(' ');
                Err(ParsingError::Unrecognized(token.span.start, c))
            }
            _ => Err(unexpected(&token, "a definition")),
        }
    }

    /// Consume the next token, which must be of the given kind.
    fn require(&mut self, kind: TokenKind, what: &'static str) -> Result<Token<'i>, ParsingError> {
        let token = self
            .lexer
            .peek_token()?;

        if token.kind == kind {
            self.lexer
                .next_token()
        } else {
            Err(unexpected(&token, what))
        }
    }

    pub fn read_identifier(&mut self, what: &'static str) -> Result<Identifier<'i>, ParsingError> {
        match self
            .lexer
            .read_identifier()
        {
            Some(token) => Ok(Identifier(token.text)),
            None => {
                let token = self
                    .lexer
                    .peek_token()?;
                Err(unexpected(&token, what))
            }
        }
    }

    pub fn read_path(&mut self) -> Result<Path<'i>, ParsingError> {
        match self
            .lexer
            .read_path()
        {
            Some(token) => Ok(Path(token.text)),
            None => {
                let token = self
                    .lexer
                    .peek_token()?;
                Err(unexpected(&token, "a path"))
            }
        }
    }

    // [WORKSPACE]
    pub fn read_section(&mut self) -> Result<Definition<'i>, ParsingError> {
        self.require(TokenKind::OpenBracket, "'['")?;
        let name = self.read_identifier("a section name")?;
        self.require(TokenKind::CloseBracket, "']'")?;

        Ok(Definition::Section { name })
    }

    // verify::mauve/config
    pub fn read_verify(&mut self) -> Result<Definition<'i>, ParsingError> {
        self.require(TokenKind::Verify, "'verify'")?;
        self.require(TokenKind::DoubleColon, "'::'")?;
        let path = self.read_path()?;

        Ok(Definition::Verify { path })
    }

    // import vite::{defineConfig, loadEnv}
    pub fn read_import(&mut self) -> Result<Definition<'i>, ParsingError> {
        self.require(TokenKind::Import, "'import'")?;
        let path = self.read_path()?;
        self.require(TokenKind::DoubleColon, "'::'")?;
        self.require(TokenKind::OpenBrace, "'{'")?;

        let mut names = Vec::new();
        let mut comma: Option<usize> = None;

        loop {
            let token = self
                .lexer
                .peek_token()?;

            if token.kind == TokenKind::CloseBrace {
                if let Some(offset) = comma {
                    return Err(ParsingError::TrailingComma(offset));
                }
                self.lexer
                    .next_token()?;
                break;
            }

            if !names.is_empty() && comma.is_none() {
                return Err(unexpected(&token, "',' or '}'"));
            }

            let name = self.read_identifier("an identifier to import")?;
            names.push(name);
            comma = None;

            let token = self
                .lexer
                .peek_token()?;
            if token.kind == TokenKind::Comma {
                self.lexer
                    .next_token()?;
                comma = Some(token.span.start);
            }
        }

        Ok(Definition::Import { path, names })
    }

    // -- coreWorkspace
    pub fn read_list_item(&mut self) -> Result<Definition<'i>, ParsingError> {
        self.require(TokenKind::Dash, "'--'")?;

        let value = resolve_value(&mut self.lexer)?;
        Ok(Definition::ListItem { value })
    }

    // Both `server::` and `name: orlaya` start with an identifier; the
    // token after it says which one we have.
    pub fn read_keyed(&mut self) -> Result<Definition<'i>, ParsingError> {
        let name = self.read_identifier("an identifier")?;

        let token = self
            .lexer
            .peek_token()?;

        match token.kind {
            TokenKind::DoubleColon => {
                self.lexer
                    .next_token()?;
                Ok(Definition::ScopeEntry { name })
            }
            TokenKind::Colon => {
                self.lexer
                    .next_token()?;
                let value = self.read_assigned_value()?;
                Ok(Definition::Assignment { key: name, value })
            }
            _ => Err(unexpected(&token, "':' or '::'")),
        }
    }

    /// An assignment takes a value if there's anything left on its line;
    /// otherwise (as for a list header like `catalogs:`) it has none.
    fn read_assigned_value(&mut self) -> Result<Option<Value<'i>>, ParsingError> {
        let token = read_value(&mut self.lexer)?;
        Ok(token.map(|token| value_of(&token)))
    }
}

impl<'i> Default for Parser<'i> {
    fn default() -> Self {
        Parser::new()
    }
}

fn unexpected(token: &Token, what: &'static str) -> ParsingError {
    ParsingError::Expected(token.span.start, what, token.describe())
}
