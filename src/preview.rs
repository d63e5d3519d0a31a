//! Snippet previews
//!
//! Resolves a snippet's language (detecting it when none is given) and
//! classifies every line for display.

use crate::syntax::{classify_line, detect_language, ClassifiedToken};

/// Display name for snippets stored without a language
pub const PLAINTEXT: &str = "plaintext";

/// A snippet split into classified lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedSnippet {
    /// Lowercase language identifier used for classification
    pub language: String,
    /// Whether the language was detected rather than supplied
    pub detected: bool,
    /// One token sequence per source line
    pub lines: Vec<Vec<ClassifiedToken>>,
}

impl HighlightedSnippet {
    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Pick the language to highlight with; blank or missing means detect
pub fn resolve_language(code: &str, language: Option<&str>) -> (String, bool) {
    match language.map(str::trim).filter(|l| !l.is_empty()) {
        Some(language) => (language.to_lowercase(), false),
        None => (detect_language(code), true),
    }
}

/// Split snippet text into display lines, dropping a trailing `\r` from each
pub fn split_lines(code: &str) -> impl Iterator<Item = &str> {
    code.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Highlight a whole snippet
pub fn highlight_snippet(code: &str, language: Option<&str>) -> HighlightedSnippet {
    let (language, detected) = resolve_language(code, language);
    tracing::debug!(%language, detected, "highlighting snippet");
    let lines = split_lines(code)
        .map(|line| classify_line(line, &language))
        .collect();
    HighlightedSnippet {
        language,
        detected,
        lines,
    }
}
