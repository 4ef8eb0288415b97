//! Best-effort `file:line` extraction from captured test output

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Source file suffix used when none is configured (`go test -json`)
pub const DEFAULT_SOURCE_SUFFIX: &str = ".go";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s:]+\.go):(\d*)").expect("Invalid default locator regex"));

/// Location reference found in a line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    /// `None` when the text after the colon is missing, zero, or not a number
    pub line: Option<u32>,
}

/// Finds `<path><suffix>:<line>` references in output text
#[derive(Debug, Clone)]
pub struct SourceLocator {
    suffix: String,
    pattern: Regex,
}

impl SourceLocator {
    /// Build a locator for files ending in `suffix` (e.g. `.go`, `.rs`, `.py`)
    pub fn new(suffix: &str) -> Result<Self> {
        if suffix.is_empty() || suffix.chars().any(char::is_whitespace) {
            return Err(Error::config_invalid(format!(
                "source file suffix must be non-empty and contain no whitespace, got {suffix:?}"
            )));
        }

        // Path characters stop at whitespace and colons; the line part may be empty.
        let source = format!(r"([^\s:]+{}):(\d*)", regex::escape(suffix));
        let pattern = Regex::new(&source).map_err(|e| Error::config_invalid(e.to_string()))?;

        Ok(Self {
            suffix: suffix.to_string(),
            pattern,
        })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// First location reference in `text`, if any
    pub fn locate(&self, text: &str) -> Option<SourceLocation> {
        let caps = self.pattern.captures(text.trim())?;
        let file = caps.get(1)?.as_str().to_string();
        let line = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0);

        Some(SourceLocation { file, line })
    }
}

impl Default for SourceLocator {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(file: &str, line: Option<u32>) -> Option<SourceLocation> {
        Some(SourceLocation {
            file: file.to_string(),
            line,
        })
    }

    #[test]
    fn test_locate_go_style_line() {
        let locator = SourceLocator::default();
        assert_eq!(
            locator.locate("    calc_test.go:42: expected 3, got 4\n"),
            loc("calc_test.go", Some(42))
        );
    }

    #[test]
    fn test_locate_with_directory_prefix() {
        let locator = SourceLocator::new(".rs").unwrap();
        assert_eq!(
            locator.locate("thread 'main' panicked at src/parser/mod.rs:118:5:"),
            loc("src/parser/mod.rs", Some(118))
        );
    }

    #[test]
    fn test_locate_custom_suffix() {
        let locator = SourceLocator::new(".ext").unwrap();
        assert_eq!(
            locator.locate("  file_a.ext:42: boom\n"),
            loc("file_a.ext", Some(42))
        );
        assert_eq!(locator.locate("file_a.go:42: boom"), None);
    }

    #[test]
    fn test_suffix_is_matched_literally() {
        let locator = SourceLocator::new(".go").unwrap();
        // `.` must not act as a wildcard
        assert_eq!(locator.locate("mago:12 something"), None);
    }

    #[test]
    fn test_missing_or_invalid_line_number() {
        let locator = SourceLocator::default();
        assert_eq!(locator.locate("main.go: no line here"), loc("main.go", None));
        assert_eq!(locator.locate("main.go:abc"), loc("main.go", None));
        assert_eq!(locator.locate("main.go:0: zero"), loc("main.go", None));
        assert_eq!(
            locator.locate("main.go:99999999999: overflow"),
            loc("main.go", None)
        );
    }

    #[test]
    fn test_no_reference() {
        let locator = SourceLocator::default();
        assert_eq!(locator.locate("--- FAIL: TestAdd (0.00s)"), None);
        assert_eq!(locator.locate("main.go without colon"), None);
        assert_eq!(locator.locate(""), None);
    }

    #[test]
    fn test_first_reference_wins() {
        let locator = SourceLocator::default();
        assert_eq!(
            locator.locate("a.go:1 called from b.go:2"),
            loc("a.go", Some(1))
        );
    }

    #[test]
    fn test_invalid_suffix_rejected() {
        assert!(SourceLocator::new("").is_err());
        assert!(SourceLocator::new(". go").is_err());
        assert_eq!(SourceLocator::new(".py").unwrap().suffix(), ".py");
    }
}
