//! Style types for highlighted output
//!
//! Colors and attributes are kept terminal-agnostic here; `render`
//! maps them onto crossterm when writing.

use std::collections::HashMap;

use super::tokens::StyleClass;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name such as `"bright-blue"`, `"bright_blue"` or `"grey"`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace(['_', ' '], "-");
        let color = match name.as_str() {
            "default" | "none" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" | "purple" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "grey" | "gray" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" | "pink" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set dim
    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Mapping from style class to the style it is drawn with
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<StyleClass, Style>,
}

impl Palette {
    /// Palette where every class renders unstyled
    pub fn plain() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Look up the style for a class
    pub fn style(&self, class: StyleClass) -> Style {
        self.styles.get(&class).copied().unwrap_or_default()
    }

    /// Whether every class renders unstyled
    pub fn is_plain(&self) -> bool {
        self.styles.values().all(Style::is_default)
    }

    /// Replace the foreground color of a class, keeping its attributes
    pub fn set_color(&mut self, class: StyleClass, color: Color) {
        let style = self.style(class).with_fg(color);
        self.styles.insert(class, style);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: StyleClass::ALL
                .into_iter()
                .map(|class| (class, class.default_style()))
                .collect(),
        }
    }
}
