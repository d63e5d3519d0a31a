//! Configuration file support
//!
//! Loads preview settings from ~/.snipsight.toml (or
//! %USERPROFILE%\.snipsight.toml on Windows).
//!
//! Example:
//! ```toml
//! line-numbers = true
//! tab-width = 4
//! color = true
//! max-width = 100
//!
//! [palette]
//! keyword = "bright-magenta"
//! comment = "grey"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::syntax::{Color, Palette, StyleClass};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Whether to emit color escapes
    pub color: bool,
    /// Truncate rendered lines to this many columns
    pub max_width: Option<usize>,
    /// Per-class color overrides
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            tab_width: 4,
            color: true,
            max_width: None,
            palette: BTreeMap::new(),
        }
    }
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    line_numbers: Option<bool>,
    tab_width: Option<usize>,
    color: Option<bool>,
    max_width: Option<usize>,
    #[serde(default)]
    palette: BTreeMap<String, String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipsight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipsight.toml"))
        }
    }

    /// Load configuration from the default path; a missing file gives defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::parse(&contents)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply(raw);
        // Validate palette names
        config.palette()?;
        Ok(config)
    }

    /// Apply settings from a parsed file
    fn apply(&mut self, raw: RawConfig) {
        if let Some(value) = raw.line_numbers {
            self.show_line_numbers = value;
        }

        if let Some(value) = raw.color {
            self.color = value;
        }

        if let Some(value) = raw.tab_width {
            self.tab_width = value.clamp(1, 16); // Between 1 and 16
        }

        if let Some(value) = raw.max_width {
            self.max_width = Some(value.max(8));
        }

        self.palette.extend(raw.palette);
    }

    /// Build the palette, with overrides applied
    pub fn palette(&self) -> Result<Palette> {
        if !self.color {
            return Ok(Palette::plain());
        }

        let mut palette = Palette::default();
        for (class_name, color_name) in &self.palette {
            let class = StyleClass::from_name(class_name)
                .ok_or_else(|| Error::UnknownClass(class_name.clone()))?;
            let color = Color::from_name(color_name).ok_or_else(|| Error::UnknownColor {
                class: class_name.clone(),
                color: color_name.clone(),
            })?;
            palette.set_color(class, color);
        }
        Ok(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
line-numbers = true
tab-width = 2
color = false
max-width = 100
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(config.show_line_numbers);
        assert_eq!(config.tab_width, 2);
        assert!(!config.color);
        assert_eq!(config.max_width, Some(100));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_clamping() {
        let config = Config::parse("tab-width = 0\nmax-width = 1").unwrap();
        assert_eq!(config.tab_width, 1);
        assert_eq!(config.max_width, Some(8));
        let config = Config::parse("tab-width = 99").unwrap();
        assert_eq!(config.tab_width, 16);
    }

    #[test]
    fn test_palette_overrides() {
        let config = Config::parse("[palette]\nkeyword = \"bright-blue\"").unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.style(StyleClass::Keyword).fg, Color::BrightBlue);
        assert_eq!(
            palette.style(StyleClass::String),
            StyleClass::String.default_style()
        );
    }

    #[test]
    fn test_bad_palette_rejected() {
        let err = Config::parse("[palette]\nkeyword = \"ultraviolet\"").unwrap_err();
        assert!(matches!(err, Error::UnknownColor { .. }));
        let err = Config::parse("[palette]\nlifetime = \"red\"").unwrap_err();
        assert!(matches!(err, Error::UnknownClass(_)));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(Config::parse("line-numbers = "), Err(Error::Config(_))));
        assert!(matches!(Config::parse("tabwidth = 4"), Err(Error::Config(_))));
    }

    #[test]
    fn test_no_color_gives_plain_palette() {
        let config = Config::parse("color = false\n[palette]\nkeyword = \"red\"").unwrap();
        assert!(config.palette().unwrap().style(StyleClass::Keyword).is_default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("snipsight-no-such-config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
