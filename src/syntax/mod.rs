//! Language detection and line highlighting
//!
//! This module provides:
//! - Content-based language detection over a bounded sample
//! - A lossless line tokenizer
//! - A fixed-priority token classifier backed by keyword tables

mod classify;
mod detect;
mod lexicon;
mod signatures;
mod style;
mod tokenizer;
mod tokens;

pub use classify::{
    classify_line, classify_token, classify_tokens, rules, ClassifiedToken, Rule, RuleContext,
};
pub use detect::{
    detect_language, detect_language_scored, detect_with, score_signature, Detection,
    BASELINE_LANGUAGE, KEYWORD_WEIGHT, PATTERN_WEIGHT, PRIOR_BONUS, SAMPLE_LIMIT,
};
pub use lexicon::{builtin_set, keyword_set, lexicon_for, Lexicon, COMMON_KEYWORDS};
pub use signatures::{signatures, LanguageSignature, StructuralPrior};
pub use style::{Color, Palette, Style};
pub use tokenizer::{tokenize, Token};
pub use tokens::StyleClass;
