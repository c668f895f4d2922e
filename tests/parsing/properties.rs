#[cfg(test)]
mod properties {
    use std::path::Path;

    use lmy::formatting::render;
    use lmy::parsing;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    /// Parsing the serialized form of a Document gives back the same
    /// Document.
    fn assert_round_trip(content: &str) {
        let first = parsing::parse(content)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {:?}", content, e));

        let text = render(&first);

        let second = parsing::parse(&text)
            .unwrap_or_else(|e| panic!("Failed to re-parse {:?}: {:?}", text, e));

        assert_eq!(first, second, "round trip through:\n{}", text);
    }

    #[test]
    fn round_trip_samples() {
        for name in ["workspace.lmy", "scopes.lmy", "minimal.lmy"] {
            let filename = Path::new("tests/samples/").join(name);
            let content = parsing::load(&filename)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", filename, e));

            assert_round_trip(&content);
        }
    }

    #[test]
    fn round_trip_values() {
        let cases = [
            "v: \"\"",
            "v: \"a\" and \"b\"",
            "v: 007",
            "v: 01.002.3",
            "v: 99999999999999999999999",
            "v: trueish",
            "v: true story",
            "v: ./relative",
            "v: index.ts",
            "v: https://example.com/a?b=c",
            "v: npm run build --watch   // trailing comment",
            "-- --double-dash",
            "-- :",
            "-- [not a section]",
            "import @scope/pkg-name::{a:b, c-d, e@f}",
        ];

        for content in cases {
            assert_round_trip(content);
        }
    }

    #[test]
    fn trivia_does_not_matter() {
        let plain = trim(
            r#"
[WORKSPACE]
name: orlaya
import vite::{defineConfig, loadEnv}
server::
port: 3001
::
catalogs:
-- coreWorkspace
            "#,
        );

        let noisy = trim(
            r#"
// leading comment

[ // the section
    WORKSPACE
    // still the section
]

    name: orlaya   // trailing comment


import vite :: {
    // the first one
    defineConfig,

    loadEnv // the second
}
server ::
        port: 3001
::   // back to the root
catalogs:   // header only

-- coreWorkspace
// the end
            "#,
        );

        let expected = parsing::parse(plain).unwrap();
        let actual = parsing::parse(noisy).unwrap();

        assert_eq!(expected, actual);
    }
}
