use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Lexical heuristics only: matches are a best-effort annotation, not a
// verified file-existence check.
static FILE_REFERENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)file:?\s*([^\s]+)",
        r"(?i)at\s+([^\s]+\.(?:js|ts|jsx|tsx|py|java|cpp|c|h))",
        r"(?i)in\s+([^\s]+\.(?:js|ts|jsx|tsx|py|java|cpp|c|h))",
        r"(?i)([^\s]+\.(?:js|ts|jsx|tsx|py|java|cpp|c|h)):\d+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid file reference pattern"))
    .collect()
});

/// Extracts source-file references mentioned near errors in the
/// original-case log text. Deduplicated by exact string equality and
/// sorted so repeated runs produce identical output.
pub fn extract_affected_files(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();

    for pattern in FILE_REFERENCE_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(reference) = captures.get(1) {
                seen.insert(reference.as_str().to_string());
            }
        }
    }

    let mut files: Vec<String> = seen.into_iter().collect();
    files.sort_unstable();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_file_label_reference() {
        let files = extract_affected_files("Error reading file: src/index.js during build");
        assert_eq!(files, vec!["src/index.js"]);
    }

    #[test]
    fn extracts_stack_frame_references() {
        let files = extract_affected_files("TypeError: boom\n    at src/routes/user.ts line 4");
        assert_eq!(files, vec!["src/routes/user.ts"]);
    }

    #[test]
    fn deduplicates_across_patterns() {
        // Same file hit by the "at" pattern and the ":line" pattern.
        let files = extract_affected_files("at src/app.js\nsrc/app.js:42");
        assert_eq!(files, vec!["src/app.js"]);
    }

    #[test]
    fn ignores_unrecognized_extensions() {
        let files = extract_affected_files("error at notes.txt and in README.md:3");
        assert!(files.is_empty());
    }

    #[test]
    fn empty_text_yields_no_references() {
        assert!(extract_affected_files("").is_empty());
    }
}
