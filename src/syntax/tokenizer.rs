//! Line tokenizer
//!
//! Splits one line of source into tokens with a single shared pattern.
//! Characters the pattern does not cover are emitted as their own
//! tokens, so the token texts always concatenate back to the line.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shared lexical grammar, alternatives tried leftmost-first.
///
/// String literals that never close run to the end of the line. Digit
/// classes and word boundaries are ASCII-only.
const TOKEN_PATTERN: &str = concat!(
    r"\s+",
    r"|//.*$",
    r"|--.*$",
    r"|#.*$",
    r#"|"(?:[^"\\]|\\.)*(?:"|\\?$)"#,
    r"|'(?:[^'\\]|\\.)*(?:'|\\?$)",
    r"|`(?:[^`\\]|\\.)*(?:`|\\?$)",
    r"|(?-u:\b)0x[0-9a-fA-F]+(?-u:\b)",
    r"|(?-u:\b)[0-9]+\.[0-9]+(?-u:\b)",
    r"|(?-u:\b)[0-9]+(?-u:\b)",
    r"|==|!=|<=|>=|=>|\&\&|\|\|",
    r"|[(){}\[\].,;:+\-*/=<>!\&|^%]",
    r"|[A-Za-z_][A-Za-z0-9_\-]*",
);

static TOKEN_REGEX: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(TOKEN_PATTERN) {
    Ok(regex) => Some(regex),
    Err(err) => {
        tracing::warn!(%err, "token pattern failed to compile, lines will not be split");
        None
    }
});

/// A token cut from a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Raw token text
    pub text: &'a str,
    /// Position in the token sequence
    pub index: usize,
    /// Byte range within the line
    pub range: Range<usize>,
}

/// Split a line into an exhaustive, ordered sequence of tokens.
///
/// An empty line produces a single empty token.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut pieces: Vec<Range<usize>> = Vec::new();

    match TOKEN_REGEX.as_ref() {
        Some(regex) => {
            let mut pos = 0;
            for m in regex.find_iter(line) {
                if m.start() > pos {
                    // Uncovered run
                    pieces.push(pos..m.start());
                }
                pieces.push(m.range());
                pos = m.end();
            }
            if pos < line.len() {
                pieces.push(pos..line.len());
            }
        }
        None => pieces.push(0..line.len()),
    }

    if pieces.is_empty() {
        pieces.push(0..0);
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(index, range)| Token {
            text: &line[range.clone()],
            index,
            range,
        })
        .collect()
}
