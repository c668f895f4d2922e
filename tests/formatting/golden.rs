#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use lmy::formatting::render;
    use lmy::parsing;

    /// Golden test for the serializer
    ///
    /// This test:
    /// 1. Reads all .lmy files from tests/golden/
    /// 2. Parses each one and serializes the resulting Document
    /// 3. Compares the serialized output with the original input
    /// 4. Shows clear diffs when differences are found
    ///
    /// The files are expected to be in canonical form already. If one fails
    /// this test, either the parser or serializer is wrong, or the file
    /// itself isn't canonical (no comments, one definition per line,
    /// four-space indent inside scopes, a blank line before each section but
    /// the first).

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Serialized");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("lmy")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .lmy files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&original)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {:?}", file, e));

            let result = render(&document);

            if result != original {
                show_diff(&original, &result, &file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "All golden files must serialize unchanged, but {} did not",
                failures.len()
            );
        }
    }
}
