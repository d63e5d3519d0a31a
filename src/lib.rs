//! snipsight - heuristic language detection and line highlighting
//! for short code snippets
//!
//! The two entry points are [`detect_language`], which guesses a
//! language identifier from raw text, and [`classify_line`], which
//! splits one line into tokens tagged with a [`StyleClass`].

pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};
pub use preview::{highlight_snippet, HighlightedSnippet};
pub use syntax::{classify_line, detect_language, ClassifiedToken, StyleClass};
