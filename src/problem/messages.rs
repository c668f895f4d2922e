use lmy::formatting::render;
use lmy::language::*;
use lmy::parsing::ParsingError;

/// Render example definitions the same way the serializer would write them,
/// indented for inclusion in an explanation.
fn examples(definitions: Vec<Definition>) -> String {
    let document = Document { definitions };

    render(&document)
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::Unrecognized(_, c) => {
            let sample = examples(vec![
                Definition::Section {
                    name: Identifier("WORKSPACE"),
                },
                Definition::ScopeEntry {
                    name: Identifier("server"),
                },
                Definition::Assignment {
                    key: Identifier("port"),
                    value: Some(Value::Number(3001)),
                },
                Definition::ScopeReturn,
                Definition::ListItem {
                    value: Value::Identifier("coreWorkspace"),
                },
            ]);

            (
                format!("Unrecognized character '{}'", c),
                format!(
                    r#"
Every line must begin a definition: a [section], a scope entry like
«name::», a scope return «::», a «verify::» or «import» statement, a
«key: value» assignment, or a «--» list item. For example:

{}
                    "#,
                    sample
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnterminatedString(_) => (
            "Unterminated string".to_string(),
            r#"
A string that opens with '"' must be closed by another '"' on the same line.
If you meant the quote to be part of free-form text, put something before it
on the line so the value isn't read as a string.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::Expected(_, expected, found) => (
            format!("Expected {}", expected),
            format!(
                "The parser was looking for {} but found {} instead.",
                expected, found
            ),
        ),
        ParsingError::TrailingComma(_) => {
            let sample = examples(vec![
                Definition::Import {
                    path: Path("vite"),
                    names: vec![Identifier("defineConfig"), Identifier("loadEnv")],
                },
                Definition::Import {
                    path: Path("vite"),
                    names: vec![],
                },
            ]);

            (
                "Trailing comma in import list".to_string(),
                format!(
                    r#"
The names imported are separated by commas, but there can't be a comma after
the last one. An empty list is fine:

{}
                    "#,
                    sample
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::MissingValue(_) => {
            let sample = examples(vec![
                Definition::ListItem {
                    value: Value::Identifier("coreWorkspace"),
                },
                Definition::ListItem {
                    value: Value::RawValue("npm run build --watch"),
                },
            ]);

            (
                "List item without a value".to_string(),
                format!(
                    r#"
A list item needs a value on the same line as its «--» marker:

{}
                    "#,
                    sample
                )
                .trim_ascii()
                .to_string(),
            )
        }
    }
}
