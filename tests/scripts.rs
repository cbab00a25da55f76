use std::fs;

use luna::{get_output, settings::Settings};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Collects the `// expect: ...` lines of a script, in order.
fn expected_output(content: &str) -> String {
    content.lines()
           .filter_map(|line| line.trim_start().strip_prefix("// expect: "))
           .map(|expected| format!("{expected}\n"))
           .collect()
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "luna"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match get_output(&content, &Settings::default()) {
            Ok(output) => assert_eq!(output, expected_output(&content), "in {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
