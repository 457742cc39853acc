//! Glob patterns relative to a scan root, backed by [`glob::Pattern`].
//!
//! - `**` matches zero or more directories and must be a whole segment
//! - `*` and `?` never cross a `/`
//! - wildcards never match a leading `.`, so hidden files and directories are
//!   only selected by segments that spell the dot out (e.g. `.config/*.js`)

use crate::error::{Result, WsfixError};
use glob::{MatchOptions, Pattern};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    source: String,
    pattern: Pattern,
}

impl FilePattern {
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |reason: String| WsfixError::Pattern {
            pattern: source.to_string(),
            reason,
        };

        if source.trim().is_empty() {
            return Err(invalid("pattern is empty".to_string()));
        }
        if source.starts_with('/') {
            return Err(invalid(
                "pattern must be relative to the root directory".to_string(),
            ));
        }
        match source.rsplit('/').find(|seg| !seg.is_empty() && *seg != ".") {
            None => return Err(invalid("pattern has no file component".to_string())),
            Some("**") => return Err(invalid("pattern must end with a file name".to_string())),
            Some(_) => {}
        }

        let pattern = Pattern::new(source).map_err(|e| invalid(e.msg.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            pattern,
        })
    }

    /// Whether the pattern can match below the first directory level.
    pub fn is_recursive(&self) -> bool {
        self.source.contains('/')
    }

    /// Tests a path relative to the scan root.
    pub fn matches(&self, relative: &Path) -> bool {
        self.pattern.matches_path_with(relative, MATCH_OPTIONS)
    }
}

impl FromStr for FilePattern {
    type Err = WsfixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn matches(pattern: &str, path: &str) -> bool {
        FilePattern::parse(pattern)
            .unwrap()
            .matches(&PathBuf::from(path))
    }

    #[test]
    fn test_recursive_extension_pattern() {
        assert!(matches("**/*.vue", "App.vue"));
        assert!(matches("**/*.vue", "forms/Input.vue"));
        assert!(matches("**/*.vue", "a/b/c/Deep.vue"));
        assert!(!matches("**/*.vue", "forms/Input.vue.bak"));
        assert!(!matches("**/*.vue", "forms/input.js"));
    }

    #[test]
    fn test_flat_pattern_does_not_descend() {
        assert!(matches("*.vue", "App.vue"));
        assert!(!matches("*.vue", "forms/Input.vue"));
        assert!(!FilePattern::parse("*.vue").unwrap().is_recursive());
    }

    #[test]
    fn test_directory_segments() {
        assert!(matches("forms/**/*.vue", "forms/Input.vue"));
        assert!(matches("forms/**/*.vue", "forms/nested/Input.vue"));
        assert!(!matches("forms/**/*.vue", "layout/Input.vue"));
        assert!(matches("*/index.js", "pkg/index.js"));
        assert!(!matches("*/index.js", "index.js"));
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("file?.txt", "file1.txt"));
        assert!(matches("file?.txt", "fileé.txt"));
        assert!(!matches("file?.txt", "file12.txt"));
    }

    #[test]
    fn test_star_backtracking() {
        assert!(matches("*a*b*.txt", "xxaYYbZZ.txt"));
        assert!(matches("*.config.js", "esbuild.config.js"));
        assert!(!matches("*.config.js", "esbuild.config.ts"));
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        assert!(!matches("**/*.vue", ".Hidden.vue"));
        assert!(!matches("**/*.vue", ".cache/App.vue"));
        assert!(!matches("*", ".env"));
        assert!(matches(".*", ".env"));
        assert!(matches(".cache/*.vue", ".cache/App.vue"));
    }

    #[test]
    fn test_rejects_invalid_patterns() {
        assert!(FilePattern::parse("").is_err());
        assert!(FilePattern::parse("/abs/*.vue").is_err());
        assert!(FilePattern::parse("**").is_err());
        assert!(FilePattern::parse("src/**").is_err());
        assert!(FilePattern::parse("a**b/*.vue").is_err());
        assert!(FilePattern::parse("[unclosed/*.vue").is_err());
    }

    #[test]
    fn test_parse_round_trips_source() {
        let pattern: FilePattern = "**/*.vue".parse().unwrap();
        assert!(pattern.matches(Path::new("x/y.vue")));
        assert_eq!(pattern.to_string(), "**/*.vue");
    }

    #[test]
    fn test_parent_components_never_match() {
        assert!(!matches("**/*.vue", "../App.vue"));
    }
}
