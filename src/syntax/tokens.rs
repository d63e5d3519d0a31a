//! Style classes for highlighted tokens
//!
//! This module defines the visual categories a token can be assigned
//! and their default terminal styles.

use super::style::{Color, Style};

/// Visual category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Whitespace runs, passed through unstyled
    Whitespace,
    /// Line comments (`//`, `--`, and `#` in Python)
    Comment,
    /// String and template literals
    String,
    /// Numeric literals
    Number,
    /// Keywords from the common or language-specific list
    Keyword,
    /// Standard library / runtime identifiers
    Builtin,
    /// Identifier immediately followed by `(`
    Call,
    /// Structural punctuation
    Punctuation,
    /// `=`, `==` and `===`
    Assignment,
    /// Angle-bracket tokens in markup languages
    Tag,
    /// Everything else
    Plain,
}

impl StyleClass {
    /// Every class, in declaration order
    pub const ALL: [StyleClass; 11] = [
        StyleClass::Whitespace,
        StyleClass::Comment,
        StyleClass::String,
        StyleClass::Number,
        StyleClass::Keyword,
        StyleClass::Builtin,
        StyleClass::Call,
        StyleClass::Punctuation,
        StyleClass::Assignment,
        StyleClass::Tag,
        StyleClass::Plain,
    ];

    /// Get the default style for this class
    pub fn default_style(&self) -> Style {
        match self {
            StyleClass::Whitespace => Style::default(),
            StyleClass::Comment => Style::fg(Color::BrightBlack).with_italic(),
            StyleClass::String => Style::fg(Color::Green).with_italic(),
            StyleClass::Number => Style::fg(Color::Yellow),
            StyleClass::Keyword => Style::fg(Color::Magenta).with_italic(),
            StyleClass::Builtin => Style::fg(Color::Blue),
            StyleClass::Call => Style::fg(Color::BrightCyan),
            StyleClass::Punctuation => Style::fg(Color::White).with_dim(),
            StyleClass::Assignment => Style::fg(Color::BrightMagenta),
            StyleClass::Tag => Style::fg(Color::Red),
            StyleClass::Plain => Style::default(),
        }
    }

    /// Get the config/display name for this class
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Whitespace => "whitespace",
            StyleClass::Comment => "comment",
            StyleClass::String => "string",
            StyleClass::Number => "number",
            StyleClass::Keyword => "keyword",
            StyleClass::Builtin => "builtin",
            StyleClass::Call => "call",
            StyleClass::Punctuation => "punctuation",
            StyleClass::Assignment => "assignment",
            StyleClass::Tag => "tag",
            StyleClass::Plain => "plain",
        }
    }

    /// Parse a class from its name (for the `[palette]` config table)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        assert!(!StyleClass::Comment.default_style().is_default());
        assert!(!StyleClass::String.default_style().is_default());
        assert!(!StyleClass::Keyword.default_style().is_default());
        // Whitespace and plain text render as-is
        assert!(StyleClass::Whitespace.default_style().is_default());
        assert!(StyleClass::Plain.default_style().is_default());
    }

    #[test]
    fn test_from_name() {
        for class in StyleClass::ALL {
            assert_eq!(StyleClass::from_name(class.name()), Some(class));
        }
        assert_eq!(StyleClass::from_name("  Keyword "), Some(StyleClass::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(StyleClass::from_name("Preprocessor"), None);
        assert_eq!(StyleClass::from_name(""), None);
    }
}
