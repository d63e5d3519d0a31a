//! Content-based language detection
//!
//! Scores a bounded sample of the snippet against every registered
//! signature and picks the best one. Scores are kept in tenths so the
//! fractional keyword weight compares exactly.

use super::signatures::{signatures, LanguageSignature};

/// Only this many characters of the input are examined
pub const SAMPLE_LIMIT: usize = 4000;

/// Language returned when nothing else applies
pub const BASELINE_LANGUAGE: &str = "javascript";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Weight of one matching pattern (3.0)
pub const PATTERN_WEIGHT: u32 = 30;
/// Weight of one keyword hit (1.2)
pub const KEYWORD_WEIGHT: u32 = 12;
/// Bonus when a signature's structural prior holds (1.5)
pub const PRIOR_BONUS: u32 = 15;

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Winning language identifier
    pub language: String,
    /// Winning score in tenths of a point (0 when a fallback decided)
    pub score_tenths: u32,
    /// Whether the last-resort substring checks decided the result
    pub fallback: bool,
}

impl Detection {
    /// Winning score in points
    pub fn score(&self) -> f32 {
        self.score_tenths as f32 / 10.0
    }
}

/// Guess the language of a snippet. Always returns a non-empty identifier.
pub fn detect_language(code: &str) -> String {
    detect_language_scored(code).language
}

/// Guess the language of a snippet, reporting how the decision was made
pub fn detect_language_scored(code: &str) -> Detection {
    detect_with(signatures(), code)
}

/// Run detection against an explicit signature table
pub fn detect_with(table: &[LanguageSignature], code: &str) -> Detection {
    let code = code.strip_prefix(BYTE_ORDER_MARK).unwrap_or(code);
    let sample = truncate_chars(code, SAMPLE_LIMIT);
    let lower_sample = sample.to_lowercase();

    let mut best: Option<&LanguageSignature> = None;
    let mut best_score = 0;

    for signature in table {
        let score = score_signature(signature, sample, &lower_sample);
        tracing::trace!(language = signature.id, score, "scored signature");
        // Strictly greater: ties keep the earlier signature
        if score > best_score {
            best_score = score;
            best = Some(signature);
        }
    }

    match best {
        Some(signature) => {
            tracing::debug!(language = signature.id, score = best_score, "language detected");
            Detection {
                language: signature.id.to_string(),
                score_tenths: best_score,
                fallback: false,
            }
        }
        None => {
            let language = fallback_language(sample);
            tracing::debug!(language, "no signature matched, using fallback");
            Detection {
                language: language.to_string(),
                score_tenths: 0,
                fallback: true,
            }
        }
    }
}

/// Score one signature against a sample and its lowercased copy
pub fn score_signature(signature: &LanguageSignature, sample: &str, lower_sample: &str) -> u32 {
    let patterns = signature.pattern_hits(sample) as u32 * PATTERN_WEIGHT;
    let keywords = signature.keyword_hits(lower_sample) as u32 * KEYWORD_WEIGHT;
    let prior = match signature.prior {
        Some(prior) if prior.holds(sample) => PRIOR_BONUS,
        _ => 0,
    };
    patterns + keywords + prior
}

fn fallback_language(sample: &str) -> &'static str {
    if sample.contains('<') && sample.contains('>') {
        "html"
    } else if sample.contains("def ") || sample.contains("import ") {
        "python"
    } else if sample.contains("function") || sample.contains("const ") {
        "javascript"
    } else {
        BASELINE_LANGUAGE
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
