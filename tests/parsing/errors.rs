#[cfg(test)]
mod syntax {
    use lmy::parsing::{self, ErrorKind, ParsingError};

    /// Helper function to check if parsing produces the expected error type
    fn expect_error(content: &str, expected: ParsingError) -> ParsingError {
        let result = parsing::parse(content);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
                error
            }
        }
    }

    #[test]
    fn trailing_comma_in_import() {
        let error = expect_error("import vite::{a,}", ParsingError::TrailingComma(0));
        assert_eq!(error.kind(), ErrorKind::Structural);
        assert_eq!(error.offset(), 15);
    }

    #[test]
    fn trailing_comma_across_lines() {
        let error = expect_error(
            r#"
import vite::{
    defineConfig,
    loadEnv,
    // nothing else
}
            "#
            .trim_ascii(),
            ParsingError::TrailingComma(0),
        );

        let position = parsing::position(
            r#"
import vite::{
    defineConfig,
    loadEnv,
            "#
            .trim_ascii(),
            error.offset(),
        );
        assert_eq!(position.line, 3);
        assert_eq!(position.column, 12);
    }

    #[test]
    fn unterminated_string() {
        let error = expect_error(
            "name: \"orlaya\nnext: 1",
            ParsingError::UnterminatedString(0),
        );
        assert_eq!(error.kind(), ErrorKind::UnterminatedString);
        assert_eq!(error.offset(), 6);
    }

    #[test]
    fn unterminated_string_in_list() {
        expect_error("-- \"open", ParsingError::UnterminatedString(0));
    }

    #[test]
    fn empty_list_item() {
        let error = expect_error("-- \n-- next", ParsingError::MissingValue(0));
        assert_eq!(error.kind(), ErrorKind::Structural);

        expect_error("--", ParsingError::MissingValue(0));
        expect_error("-- // only a comment", ParsingError::MissingValue(0));
        expect_error("--\u{a0}", ParsingError::MissingValue(0));
        expect_error("--\u{a0}\u{2003}\n-- next", ParsingError::MissingValue(0));
    }

    #[test]
    fn unclosed_section() {
        let error = expect_error("[WORKSPACE", ParsingError::Expected(0, "", String::new()));
        assert_eq!(
            error,
            ParsingError::Expected(10, "']'", "end of input".to_string())
        );
    }

    #[test]
    fn section_without_name() {
        expect_error("[]", ParsingError::Expected(0, "", String::new()));
        expect_error("[1.0]", ParsingError::Expected(0, "", String::new()));
    }

    #[test]
    fn verify_without_path() {
        let error = expect_error("verify::", ParsingError::Expected(0, "", String::new()));
        assert_eq!(
            error,
            ParsingError::Expected(8, "a path", "end of input".to_string())
        );
    }

    #[test]
    fn verify_with_single_colon() {
        expect_error("verify: mauve", ParsingError::Expected(0, "", String::new()));
    }

    #[test]
    fn import_missing_braces() {
        let error = expect_error(
            "import vite::defineConfig",
            ParsingError::Expected(0, "", String::new()),
        );
        assert_eq!(
            error,
            ParsingError::Expected(13, "'{'", "'defineConfig'".to_string())
        );
    }

    #[test]
    fn identifier_without_separator() {
        let error = expect_error("aft:dev", ParsingError::Expected(0, "", String::new()));
        assert_eq!(
            error.to_string(),
            "expected ':' or '::' but found end of input"
        );
    }

    #[test]
    fn unrecognized_character() {
        let error = expect_error("[A]\n%include x", ParsingError::Unrecognized(0, ' '));
        assert_eq!(error, ParsingError::Unrecognized(4, '%'));
        assert_eq!(error.kind(), ErrorKind::Lexical);
    }

    #[test]
    fn stray_punctuation() {
        expect_error("}", ParsingError::Expected(0, "", String::new()));
        expect_error(",", ParsingError::Expected(0, "", String::new()));
        expect_error("3001", ParsingError::Expected(0, "", String::new()));
    }

    #[test]
    fn fails_at_first_error() {
        let error = expect_error(
            "[A\n-- \nimport x::{a,}",
            ParsingError::Expected(0, "", String::new()),
        );
        assert_eq!(error.offset(), 3);
    }
}
