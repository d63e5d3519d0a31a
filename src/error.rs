//! Error types for snipsight
//!
//! Detection and classification never fail; these cover the preview
//! binary and its configuration.

use thiserror::Error;

/// Result type alias for snipsight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Preview and configuration errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown style class in palette: {0}")]
    UnknownClass(String),

    #[error("unknown color for {class}: {color}")]
    UnknownColor { class: String, color: String },

    #[error("{0}")]
    Usage(String),
}
