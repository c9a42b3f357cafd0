#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use veralign::config::Config;
    use veralign::formatting;
    use veralign::parsing;

    /// Golden test for the tree formatter
    ///
    /// Each tests/golden/*.json file is a syntax tree as the external
    /// parser writes it; the .sv file with the same stem is the canonical
    /// formatted output under the default configuration. If these fail,
    /// either the formatter changed behaviour (a bug to fix) or the style
    /// deliberately changed and the .sv files need regenerating.

    fn show_diff(expected: &str, actual: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let actual_lines: Vec<&str> = actual
            .lines()
            .collect();
        let max_lines = expected_lines
            .len()
            .max(actual_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Formatted");
        for i in 0..max_lines {
            let expected_line = expected_lines
                .get(i)
                .unwrap_or(&"");
            let actual_line = actual_lines
                .get(i)
                .unwrap_or(&"");
            if expected_line != actual_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", expected_line);
                println!("+ {}", actual_line);
            }
        }
    }

    #[test]
    fn ensure_canonical_output() {
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
                == Some("json")
            {
                files.push(path);
            }
        }
        assert!(!files.is_empty(), "No .json trees found in golden directory");

        let config = Config::default();
        let mut failures = Vec::new();

        for file in &files {
            let root = parsing::load_tree(&file)
                .unwrap_or_else(|e| panic!("Failed to load tree {:?}: {:?}", file, e));
            let expected_path = file.with_extension("sv");
            let expected = fs::read_to_string(&expected_path)
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {:?}", expected_path, e));

            let actual = formatting::format(&root, &config);
            if actual != expected {
                show_diff(&expected, &actual, file);
                failures.push(file.clone());
            }
        }

        assert!(failures.is_empty(), "All golden trees must format to their canonical form");
    }
}
