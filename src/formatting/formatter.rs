//! Canonical text output for a parsed Document

use crate::language::*;

/// Turn a Document back into source text. Parsing the result gives a
/// Document equal to the one passed in. Comments are not part of the tree and
/// so don't survive the trip.
pub fn render(document: &Document) -> String {
    let mut output = Formatter::new();

    for definition in &document.definitions {
        output.format_definition(definition);
    }

    output.buffer
}

struct Formatter {
    buffer: String,
    nesting: u8,
    started: bool,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            buffer: String::new(),
            nesting: 0,
            started: false,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.nesting {
            self.buffer
                .push_str("    ");
        }
    }

    fn append_str(&mut self, text: &str) {
        self.buffer
            .push_str(text);
    }

    fn append_char(&mut self, c: char) {
        self.buffer
            .push(c);
    }

    fn format_definition(&mut self, definition: &Definition) {
        match definition {
            Definition::Section { name } => {
                // sections are separated by a blank line
                if self.started {
                    self.append_char('\n');
                }
                self.nesting = 0;
                self.append_char('[');
                self.append_str(name.0);
                self.append_char(']');
            }
            Definition::ScopeEntry { name } => {
                self.nesting = 0;
                self.append_str(name.0);
                self.append_str("::");
                self.nesting = 1;
            }
            Definition::ScopeReturn => {
                self.nesting = 0;
                self.append_str("::");
            }
            Definition::Verify { path } => {
                self.indent();
                self.append_str("verify::");
                self.append_str(path.0);
            }
            Definition::Import { path, names } => {
                self.indent();
                self.append_str("import ");
                self.append_str(path.0);
                self.append_str("::{");
                for (i, name) in names
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        self.append_str(", ");
                    }
                    self.append_str(name.0);
                }
                self.append_char('}');
            }
            Definition::Assignment { key, value } => {
                self.indent();
                self.append_str(key.0);
                self.append_char(':');
                if let Some(value) = value {
                    self.append_char(' ');
                    self.append_value(value);
                }
            }
            Definition::ListItem { value } => {
                self.indent();
                self.append_str("-- ");
                self.append_value(value);
            }
        }

        self.append_char('\n');
        self.started = true;
    }

    fn append_value(&mut self, value: &Value) {
        match value {
            Value::String(text) => {
                self.append_char('"');
                self.append_str(text);
                self.append_char('"');
            }
            Value::Boolean(true) => self.append_str("true"),
            Value::Boolean(false) => self.append_str("false"),
            Value::Version(components) => {
                let text = components
                    .iter()
                    .map(|component| component.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                self.append_str(&text);
            }
            Value::Number(number) => {
                let text = number.to_string();
                self.append_str(&text);
            }
            Value::PathValue(text) => self.append_str(text),
            Value::Identifier(text) => self.append_str(text),
            Value::RawValue(text) => self.append_str(text),
        }
    }
}
