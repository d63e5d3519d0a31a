//! Keyword and builtin tables
//!
//! Every language shares a common keyword list and may extend it with
//! its own keywords and builtin identifiers. Sets are stored lowercased
//! and built once per language on first use.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Keywords recognized in every language
pub const COMMON_KEYWORDS: &[&str] = &[
    "const", "let", "var", "fn", "function", "return", "import", "from", "export",
    "default", "async", "await", "class", "if", "else", "for", "while", "switch",
    "case", "break", "continue", "new", "try", "catch", "finally", "throw",
    "extends", "implements", "interface", "type", "enum", "public", "private",
    "protected", "static", "void", "true", "false", "null", "undefined", "this",
    "super", "yield", "in", "of", "with", "as", "not", "and", "or",
];

/// Language-specific keyword extensions
const LANGUAGE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &["console", "window", "document", "setTimeout", "Promise", "Math", "JSON"],
    ),
    (
        "typescript",
        &["interface", "implements", "readonly", "declare", "namespace"],
    ),
    (
        "python",
        &[
            "def", "lambda", "None", "self", "pass", "raise", "yield", "with", "as",
            "async", "await",
        ],
    ),
    (
        "java",
        &[
            "package", "implements", "extends", "boolean", "int", "long", "float",
            "double", "String", "throws",
        ],
    ),
    (
        "go",
        &[
            "package", "import", "func", "defer", "go", "chan", "map", "struct",
            "interface", "type", "var", "range", "select",
        ],
    ),
    (
        "rust",
        &[
            "let", "mut", "impl", "trait", "pub", "crate", "match", "enum", "struct",
            "use", "mod",
        ],
    ),
    (
        "cpp",
        &[
            "#include", "namespace", "std", "auto", "constexpr", "template",
            "typename", "virtual", "override", "delete",
        ],
    ),
    (
        "csharp",
        &[
            "using", "namespace", "async", "await", "partial", "sealed", "override",
            "public", "private", "protected",
        ],
    ),
    (
        "php",
        &["<?php", "echo", "function", "use", "namespace", "class", "array", "foreach"],
    ),
    (
        "ruby",
        &[
            "def", "end", "class", "module", "include", "extend", "self", "begin",
            "rescue", "ensure", "yield", "unless", "elsif",
        ],
    ),
    (
        "swift",
        &[
            "import", "let", "var", "func", "struct", "class", "enum", "protocol",
            "extension", "guard", "defer", "mutating",
        ],
    ),
    (
        "kotlin",
        &[
            "fun", "val", "var", "object", "companion", "when", "sealed", "data",
            "inline", "suspend",
        ],
    ),
    (
        "sql",
        &[
            "select", "from", "where", "insert", "update", "delete", "join", "left",
            "right", "inner", "outer", "group", "by", "order", "limit", "values",
            "into", "create", "table", "primary", "key", "not", "null",
        ],
    ),
    (
        "css",
        &[
            "display", "flex", "grid", "color", "background", "margin", "padding",
            "font", "border", "var", "calc",
        ],
    ),
    (
        "html",
        &[
            "<div", "<span", "<section", "<header", "<footer", "<main", "<button",
            "<input", "</div>", "</span>", "</section>", "</button>",
        ],
    ),
    (
        "bash",
        &[
            "#!/bin/bash", "echo", "fi", "done", "then", "elif", "function", "for",
            "do", "if", "case", "esac",
        ],
    ),
    ("python3", &[]),
];

/// Standard library / runtime identifiers per language
const BUILTIN_IDENTIFIERS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &[
            "console", "Math", "JSON", "Number", "String", "Array", "Promise",
            "document", "window",
        ],
    ),
    ("typescript", &["console", "Math", "JSON", "Record", "Partial"]),
    (
        "python",
        &["print", "range", "len", "dict", "list", "set", "int", "float", "str"],
    ),
    ("java", &["System", "String", "List", "Map"]),
    ("go", &["fmt", "len", "cap", "make", "append"]),
    ("rust", &["println", "format", "Vec"]),
    ("sql", &["count", "sum", "avg", "min", "max"]),
];

/// Keyword and builtin sets for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    keywords: HashSet<String>,
    builtins: HashSet<String>,
}

impl Lexicon {
    /// Build the lexicon for a language from the static tables
    pub fn build(language: &str) -> Self {
        let language = language.to_lowercase();
        let keywords = COMMON_KEYWORDS
            .iter()
            .chain(lookup(LANGUAGE_KEYWORDS, &language))
            .map(|word| word.to_lowercase())
            .collect();
        let builtins = lookup(BUILTIN_IDENTIFIERS, &language)
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { keywords, builtins }
    }

    /// Check keyword membership (case-insensitive)
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.contains(&token.to_lowercase())
    }

    /// Check builtin membership (case-insensitive)
    pub fn is_builtin(&self, token: &str) -> bool {
        self.builtins.contains(&token.to_lowercase())
    }

    /// Lowercased keyword set
    pub fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    /// Lowercased builtin set
    pub fn builtins(&self) -> &HashSet<String> {
        &self.builtins
    }
}

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    language: &str,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Lexicons for every language that has table entries
static LEXICONS: Lazy<HashMap<&'static str, Lexicon>> = Lazy::new(|| {
    LANGUAGE_KEYWORDS
        .iter()
        .chain(BUILTIN_IDENTIFIERS)
        .map(|(name, _)| (*name, Lexicon::build(name)))
        .collect()
});

/// Shared lexicon for languages without table entries
static COMMON_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon::build(""));

/// Get the memoized lexicon for a language
pub fn lexicon_for(language: &str) -> &'static Lexicon {
    let language = language.to_lowercase();
    LEXICONS
        .get(language.as_str())
        .unwrap_or_else(|| &*COMMON_LEXICON)
}

/// Keyword set for a language: common keywords plus its own
pub fn keyword_set(language: &str) -> &'static HashSet<String> {
    lexicon_for(language).keywords()
}

/// Builtin identifier set for a language (empty when unknown)
pub fn builtin_set(language: &str) -> &'static HashSet<String> {
    lexicon_for(language).builtins()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_keywords_everywhere() {
        for language in ["python", "rust", "cobol", ""] {
            let keywords = keyword_set(language);
            assert!(keywords.contains("return"), "{language}");
            assert!(keywords.contains("const"), "{language}");
        }
    }

    #[test]
    fn test_language_extensions() {
        assert!(keyword_set("python").contains("def"));
        assert!(!keyword_set("javascript").contains("def"));
        assert!(!keyword_set("unknown").contains("def"));
        assert!(keyword_set("rust").contains("impl"));
    }

    #[test]
    fn test_sets_are_lowercased() {
        assert!(keyword_set("python").contains("none"));
        assert!(!keyword_set("python").contains("None"));
        assert!(keyword_set("javascript").contains("settimeout"));
        assert!(builtin_set("rust").contains("vec"));
    }

    #[test]
    fn test_language_lookup_is_case_insensitive() {
        assert_eq!(lexicon_for("Python"), lexicon_for("python"));
        assert!(!lexicon_for("GO").is_builtin("Println"));
        assert!(lexicon_for("GO").is_builtin("FMT"));
    }

    #[test]
    fn test_builtins() {
        assert!(builtin_set("python").contains("print"));
        assert!(builtin_set("sql").contains("count"));
        assert!(builtin_set("kotlin").is_empty());
        assert!(builtin_set("unknown").is_empty());
    }

    #[test]
    fn test_memoized() {
        let first = lexicon_for("java") as *const Lexicon;
        let second = lexicon_for("JAVA") as *const Lexicon;
        assert_eq!(first, second);
    }

    #[test]
    fn test_membership_case_insensitive() {
        let lexicon = lexicon_for("java");
        assert!(lexicon.is_keyword("String"));
        assert!(lexicon.is_keyword("RETURN"));
        assert!(lexicon.is_builtin("system"));
        assert!(!lexicon.is_keyword("foo"));
    }
}
