//! Language signatures for content-based detection
//!
//! Each signature pairs structural regex patterns with keyword
//! substrings. The table order is significant: on equal scores the
//! earlier signature wins. Word classes in the patterns are ASCII-only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extra evidence a signature can claim beyond its patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralPrior {
    /// Sample begins (after leading whitespace) with `{` or `[`
    LeadingBracket,
    /// Some line starts with `key:` followed by whitespace
    KeyColonLine,
}

static KEY_COLON_LINE: Lazy<Option<Regex>> =
    Lazy::new(|| compile("yaml", r"(?m)^\s*[[:word:]]+:\s+"));

impl StructuralPrior {
    /// Check whether the prior holds for a sample
    pub fn holds(&self, sample: &str) -> bool {
        match self {
            StructuralPrior::LeadingBracket => sample.trim_start().starts_with(['{', '[']),
            StructuralPrior::KeyColonLine => KEY_COLON_LINE
                .as_ref()
                .is_some_and(|regex| regex.is_match(sample)),
        }
    }
}

/// Detection rules for one language
#[derive(Debug, Clone)]
pub struct LanguageSignature {
    /// Lowercase language identifier
    pub id: &'static str,
    /// Structural patterns, each a presence test
    pub patterns: Vec<Regex>,
    /// Lowercased keyword substrings
    pub keywords: Vec<String>,
    /// Optional bonus evidence
    pub prior: Option<StructuralPrior>,
}

impl LanguageSignature {
    /// Create a signature; patterns that fail to compile are skipped
    pub fn new(id: &'static str, patterns: &[&str], keywords: &[&str]) -> Self {
        Self {
            id,
            patterns: patterns.iter().filter_map(|p| compile(id, p)).collect(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            prior: None,
        }
    }

    /// Builder: attach a structural prior
    pub fn with_prior(mut self, prior: StructuralPrior) -> Self {
        self.prior = Some(prior);
        self
    }

    /// Number of patterns matching the sample
    pub fn pattern_hits(&self, sample: &str) -> usize {
        self.patterns.iter().filter(|p| p.is_match(sample)).count()
    }

    /// Number of keywords contained in the lowercased sample
    pub fn keyword_hits(&self, lower_sample: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| lower_sample.contains(k.as_str()))
            .count()
    }

    /// Whether the signature can contribute any evidence at all
    pub fn is_meaningful(&self) -> bool {
        !self.patterns.is_empty() || !self.keywords.is_empty()
    }
}

fn compile(id: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(language = id, pattern, %err, "skipping invalid signature pattern");
            None
        }
    }
}

static SIGNATURES: Lazy<Vec<LanguageSignature>> = Lazy::new(build_signatures);

/// The registered signatures, in registration order
pub fn signatures() -> &'static [LanguageSignature] {
    &SIGNATURES
}

fn build_signatures() -> Vec<LanguageSignature> {
    vec![
        LanguageSignature::new(
            "typescript",
            &[
                r"(?m)interface\s+[[:word:]]+",
                r"(?m)type\s+[[:word:]]+\s*=",
                r"(?m):\s*(string|number|boolean|unknown|never|any)",
                r"(?m)(?-u:\b)implements(?-u:\b)",
                r"(?m)<[[:word:]]+[,[:word:]\s]*>",
            ],
            &["interface", "type", "enum", "readonly"],
        ),
        LanguageSignature::new(
            "tsx",
            &[r"(?m)<[A-Z][^>]*>", r"(?m):\s*React\.", r"(?m)Props\s*=\s*"],
            &["tsx", "ReactNode"],
        ),
        LanguageSignature::new(
            "javascript",
            &[
                r"(?m)function\s+[[:word:]]+",
                r"(?m)const\s+[[:word:]]+\s*=\s*",
                r"(?m)=>\s*\{",
                r"(?m)console\.log",
                r"(?m)module\.exports",
            ],
            &["require", "document", "window", "Promise"],
        ),
        LanguageSignature::new(
            "jsx",
            &[
                r"(?m)<[[:word:]]+[^>]*>",
                r"(?m)className=",
                r"(?m)onClick=",
                r"(?m)use(State|Effect)",
            ],
            &[],
        ),
        LanguageSignature::new(
            "python",
            &[
                r"(?m)def\s+[[:word:]]+\s*\(",
                r"(?m)class\s+[[:word:]]+",
                r"(?m)import\s+[[:word:].]+",
                r"(?m)print\(",
                r"(?m)if\s+__name__\s*==",
            ],
            &["self", "None", "async", "await", "lambda", "yield"],
        ),
        LanguageSignature::new(
            "go",
            &[
                r"(?m)package\s+[[:word:]]+",
                r"(?m)func\s+[[:word:]]+\s*\(",
                r"(?m)fmt\.Print",
                r"(?m)go\s+func",
            ],
            &["defer", "chan", "struct"],
        ),
        LanguageSignature::new(
            "rust",
            &[
                r"(?m)fn\s+[[:word:]]+\s*\(",
                r"(?m)let\s+mut\s+",
                r"(?m)impl\s+",
                r"(?m)pub\s+fn",
            ],
            &["crate", "match", "Vec", "Result"],
        ),
        LanguageSignature::new(
            "java",
            &[
                r"(?m)package\s+[[:word:].]+;",
                r"(?m)public\s+(class|interface)",
                r"(?m)System\.out\.print",
                r"(?m)@Override",
            ],
            &["implements", "extends", "throws"],
        ),
        LanguageSignature::new(
            "csharp",
            &[
                r"(?m)using\s+[[:word:].]+;",
                r"(?m)namespace\s+[[:word:].]+",
                r"(?m)public\s+(class|interface)",
                r"(?m)async\s+Task",
            ],
            &["Console.WriteLine", "IEnumerable"],
        ),
        LanguageSignature::new(
            "cpp",
            &[r"(?m)#include\s+<[^>]+>", r"(?m)std::", r"(?m)template\s*<[^>]+>"],
            &["cout", "nullptr", "constexpr"],
        ),
        LanguageSignature::new(
            "php",
            &[
                r"(?m)<\?php",
                r"(?m)echo\s+\$",
                r"(?m)function\s+[[:word:]]+\(",
                r"(?m)->",
            ],
            &["use", "namespace", "array"],
        ),
        LanguageSignature::new(
            "ruby",
            &[
                r"(?m)def\s+[[:word:]]+",
                r"(?m)class\s+[[:word:]]+",
                r"(?m)puts\s+",
                r"(?m)end\s*$",
            ],
            &["module", "include", "self"],
        ),
        LanguageSignature::new(
            "swift",
            &[
                r"(?m)import\s+Swift",
                r"(?m)func\s+[[:word:]]+\(",
                r"(?m)let\s+[[:word:]]+\s*=",
                r"(?m)struct\s+[[:word:]]+",
            ],
            &["guard", "defer", "mutating"],
        ),
        LanguageSignature::new(
            "kotlin",
            &[
                r"(?m)fun\s+[[:word:]]+\(",
                r"(?m)val\s+[[:word:]]+",
                r"(?m)var\s+[[:word:]]+",
                r"(?m)data\s+class",
            ],
            &["companion", "suspend", "sealed"],
        ),
        LanguageSignature::new(
            "sql",
            &[
                r"(?im)SELECT\s+[\s\S]+?FROM",
                r"(?im)INSERT\s+INTO",
                r"(?im)CREATE\s+TABLE",
                r"(?im)WHERE\s+",
            ],
            &[],
        ),
        LanguageSignature::new(
            "html",
            &[
                r"(?i)<!(DOCTYPE|--)",
                r"(?i)<html",
                r"(?i)<head>",
                r"(?i)<body>",
                r"(?i)<div",
            ],
            &[],
        ),
        LanguageSignature::new(
            "css",
            &[r"(?m)^[^{]+\{[^}]+\}", r"(?m)@media\s+", r"(?m):[a-z-]+\s*\{"],
            &[],
        ),
        LanguageSignature::new(
            "json",
            &[r"(?m)^\s*\{", r#"(?m)"[[:word:]]+"\s*:"#, r"(?m)^\s*\["],
            &[],
        )
        .with_prior(StructuralPrior::LeadingBracket),
        LanguageSignature::new(
            "yaml",
            &[r"(?m)^\s*[[:word:]]+:\s+", r"(?m)^-\s+[[:word:]]+", r"(?m):\s*\|"],
            &[],
        )
        .with_prior(StructuralPrior::KeyColonLine),
        LanguageSignature::new(
            "markdown",
            &[r"(?m)^#\s+", r"(?m)^\*\s+", r"(?m)```[a-zA-Z]*"],
            &[],
        ),
        LanguageSignature::new(
            "bash",
            &[
                r"(?m)^#!/bin/(bash|sh)",
                r"(?m)^\s*echo\s+",
                r"(?m)\$\{?[[:word:]]+\}?",
                r"(?m)\|\s*grep",
            ],
            &[],
        ),
    ]
}
