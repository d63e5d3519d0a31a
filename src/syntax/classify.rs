//! Token classification
//!
//! Each token is run through an ordered list of rules; the first rule
//! whose predicate holds decides the token's style class.

use super::lexicon::{lexicon_for, Lexicon};
use super::tokenizer::{tokenize, Token};
use super::tokens::StyleClass;

/// A token paired with its style class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    /// Token text, exactly as it appears in the line
    pub text: String,
    /// Assigned style class
    pub class: StyleClass,
}

impl ClassifiedToken {
    /// Create a classified token
    pub fn new(text: impl Into<String>, class: StyleClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// Everything a rule may look at when classifying one token
pub struct RuleContext<'a> {
    /// Token under inspection
    pub token: &'a str,
    /// Raw next token, if any
    pub next: Option<&'a str>,
    /// Lowercased language identifier
    pub language: &'a str,
    /// Keyword and builtin sets for the language
    pub lexicon: &'a Lexicon,
}

/// One step of the classification cascade
pub struct Rule {
    /// Name for debugging
    pub name: &'static str,
    /// Predicate deciding whether the rule applies
    pub applies: fn(&RuleContext<'_>) -> bool,
    /// Class assigned when it does
    pub class: StyleClass,
}

const PUNCTUATION: &[&str] = &[".", ",", ";", ":", "(", ")", "{", "}", "[", "]", "=>"];

const MARKUP_LANGUAGES: &[&str] = &["html", "jsx", "tsx"];

/// Classification cascade, highest priority first
static RULES: &[Rule] = &[
    Rule {
        name: "empty",
        applies: |cx| cx.token.is_empty(),
        class: StyleClass::Plain,
    },
    Rule {
        name: "whitespace",
        applies: |cx| cx.token.chars().all(char::is_whitespace),
        class: StyleClass::Whitespace,
    },
    Rule {
        name: "line-comment",
        applies: |cx| cx.token.starts_with("//") || cx.token.starts_with("--"),
        class: StyleClass::Comment,
    },
    Rule {
        name: "hash-comment",
        applies: |cx| cx.token.starts_with('#') && cx.language == "python",
        class: StyleClass::Comment,
    },
    Rule {
        name: "string",
        applies: |cx| cx.token.starts_with(['"', '\'', '`']),
        class: StyleClass::String,
    },
    Rule {
        name: "number",
        applies: |cx| cx.token.starts_with(|c: char| c.is_ascii_digit()),
        class: StyleClass::Number,
    },
    Rule {
        name: "keyword",
        applies: |cx| cx.lexicon.is_keyword(cx.token),
        class: StyleClass::Keyword,
    },
    Rule {
        name: "builtin",
        applies: |cx| cx.lexicon.is_builtin(cx.token),
        class: StyleClass::Builtin,
    },
    Rule {
        name: "call",
        applies: |cx| {
            cx.next == Some("(")
                && is_identifier(cx.token)
                && !cx.lexicon.is_keyword(cx.token)
        },
        class: StyleClass::Call,
    },
    Rule {
        name: "punctuation",
        applies: |cx| PUNCTUATION.contains(&cx.token),
        class: StyleClass::Punctuation,
    },
    Rule {
        name: "assignment",
        applies: |cx| matches!(cx.token, "=" | "==" | "==="),
        class: StyleClass::Assignment,
    },
    Rule {
        name: "markup-tag",
        applies: |cx| {
            MARKUP_LANGUAGES.contains(&cx.language)
                && (cx.token.starts_with('<') || cx.token.ends_with('>'))
        },
        class: StyleClass::Tag,
    },
];

/// The classification cascade in priority order
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Letter or underscore, then letters, digits, underscores or hyphens
fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Classify one token given its successor
pub fn classify_token(
    token: &str,
    next: Option<&str>,
    language: &str,
    lexicon: &Lexicon,
) -> StyleClass {
    let cx = RuleContext {
        token,
        next,
        language,
        lexicon,
    };
    RULES
        .iter()
        .find(|rule| (rule.applies)(&cx))
        .map(|rule| rule.class)
        .unwrap_or(StyleClass::Plain)
}

/// Classify an already tokenized line
pub fn classify_tokens(tokens: &[Token<'_>], language: &str) -> Vec<ClassifiedToken> {
    let language = language.to_lowercase();
    let lexicon = lexicon_for(&language);
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let next = tokens.get(i + 1).map(|t| t.text);
            let class = classify_token(token.text, next, &language, lexicon);
            ClassifiedToken::new(token.text, class)
        })
        .collect()
}

/// Split a line into tokens and assign each a style class.
///
/// The token texts concatenate back to `line` exactly.
pub fn classify_line(line: &str, language: &str) -> Vec<ClassifiedToken> {
    classify_tokens(&tokenize(line), language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(line: &str, language: &str) -> Vec<(String, StyleClass)> {
        classify_line(line, language)
            .into_iter()
            .map(|t| (t.text, t.class))
            .collect()
    }

    fn class_of(line: &str, language: &str, token: &str) -> StyleClass {
        classify_line(line, language)
            .into_iter()
            .find(|t| t.text == token)
            .map(|t| t.class)
            .unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "empty",
                "whitespace",
                "line-comment",
                "hash-comment",
                "string",
                "number",
                "keyword",
                "builtin",
                "call",
                "punctuation",
                "assignment",
                "markup-tag",
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(classes("", "rust"), vec![(String::new(), StyleClass::Plain)]);
    }

    #[test]
    fn test_statement() {
        let expected: Vec<(String, StyleClass)> = [
            ("let", StyleClass::Keyword),
            (" ", StyleClass::Whitespace),
            ("x", StyleClass::Plain),
            (" ", StyleClass::Whitespace),
            ("=", StyleClass::Assignment),
            (" ", StyleClass::Whitespace),
            ("42", StyleClass::Number),
            (";", StyleClass::Punctuation),
        ]
        .into_iter()
        .map(|(t, c)| (t.to_string(), c))
        .collect();
        assert_eq!(classes("let x = 42;", "rust"), expected);
    }

    #[test]
    fn test_def_keyword_depends_on_language() {
        assert_eq!(classes("def", "python"), vec![("def".to_string(), StyleClass::Keyword)]);
        assert_eq!(classes("def", "unknown"), vec![("def".to_string(), StyleClass::Plain)]);
    }

    #[test]
    fn test_hash_comment_only_in_python() {
        assert_eq!(
            classes("# comment", "python"),
            vec![("# comment".to_string(), StyleClass::Comment)]
        );
        assert_eq!(
            classes("# comment", "cpp"),
            vec![("# comment".to_string(), StyleClass::Plain)]
        );
        assert_eq!(class_of("#include <stdio.h>", "cpp", "#include <stdio.h>"), StyleClass::Plain);
    }

    #[test]
    fn test_dash_comment() {
        assert_eq!(class_of("x -- note", "sql", "-- note"), StyleClass::Comment);
    }

    #[test]
    fn test_strings_and_numbers() {
        assert_eq!(class_of("x = 'a'", "python", "'a'"), StyleClass::String);
        assert_eq!(class_of("x = `t`", "javascript", "`t`"), StyleClass::String);
        assert_eq!(class_of("x = 0x1F", "c", "0x1F"), StyleClass::Number);
        assert_eq!(class_of("x = 1.5", "c", "1.5"), StyleClass::Number);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            classes("s = \"open", "python").last().cloned(),
            Some(("\"open".to_string(), StyleClass::String))
        );
    }

    #[test]
    fn test_call_target() {
        assert_eq!(class_of("foo(x)", "javascript", "foo"), StyleClass::Call);
        assert_eq!(class_of("foo(x)", "unknown", "foo"), StyleClass::Call);
        // Whitespace before the parenthesis breaks adjacency
        assert_eq!(class_of("foo (x)", "javascript", "foo"), StyleClass::Plain);
    }

    #[test]
    fn test_keyword_beats_call() {
        assert_eq!(class_of("if(x)", "javascript", "if"), StyleClass::Keyword);
    }

    #[test]
    fn test_builtin_beats_call() {
        assert_eq!(class_of("print(x)", "python", "print"), StyleClass::Builtin);
        assert_eq!(class_of("print(x)", "ruby", "print"), StyleClass::Call);
    }

    #[test]
    fn test_case_insensitive_membership() {
        assert_eq!(class_of("RETURN x", "sql", "RETURN"), StyleClass::Keyword);
        assert_eq!(class_of("SELECT x", "SQL", "SELECT"), StyleClass::Keyword);
        assert_eq!(class_of("x = None", "Python", "None"), StyleClass::Keyword);
    }

    #[test]
    fn test_punctuation_and_assignment() {
        assert_eq!(class_of("a => b", "javascript", "=>"), StyleClass::Punctuation);
        assert_eq!(class_of("a == b", "javascript", "=="), StyleClass::Assignment);
        assert_eq!(class_of("a + b", "javascript", "+"), StyleClass::Plain);
    }

    #[test]
    fn test_markup_tags() {
        assert_eq!(class_of("<div>", "html", "<"), StyleClass::Tag);
        assert_eq!(class_of("<div>", "html", ">"), StyleClass::Tag);
        assert_eq!(class_of("<div>", "TSX", "<"), StyleClass::Tag);
        assert_eq!(class_of("<div>", "rust", "<"), StyleClass::Plain);
    }

    #[test]
    fn test_identifier_shape() {
        assert!(is_identifier("foo_bar-2"));
        assert!(is_identifier("_x"));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a.b"));
    }

    #[test]
    fn test_lossless_on_odd_input() {
        for line in ["@@ x ?? é", "\"\\", "a\tb\u{00a0}c", "'"] {
            let joined: String = classify_line(line, "rust").into_iter().map(|t| t.text).collect();
            assert_eq!(joined, line);
        }
    }
}
