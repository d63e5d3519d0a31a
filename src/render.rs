//! Terminal rendering using crossterm
//!
//! Writes highlighted snippets to any `Write` sink, mapping palette
//! styles onto crossterm colors and attributes.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::preview::HighlightedSnippet;
use crate::syntax::{ClassifiedToken, Color, Palette, Style, StyleClass};

/// Layout options for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each line with its number
    pub line_numbers: bool,
    /// Columns per tab stop
    pub tab_width: usize,
    /// Truncate lines to this many columns (excluding the gutter)
    pub max_width: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            tab_width: 4,
            max_width: None,
        }
    }
}

/// Map a palette color onto the crossterm palette
fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

/// Expand tabs and cut a token line down to `max_width` display columns
pub fn layout_line(
    tokens: &[ClassifiedToken],
    tab_width: usize,
    max_width: Option<usize>,
) -> Vec<(String, StyleClass)> {
    let tab_width = tab_width.max(1);
    let mut col = 0;
    let mut out = Vec::new();

    'tokens: for token in tokens {
        let mut text = String::new();
        for ch in token.text.chars() {
            let width = if ch == '\t' {
                tab_width - col % tab_width
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(1)
            };
            if max_width.is_some_and(|max| col + width > max) {
                if !text.is_empty() {
                    out.push((text, token.class));
                }
                break 'tokens;
            }
            if ch == '\t' {
                text.extend(std::iter::repeat(' ').take(width));
            } else {
                text.push(ch);
            }
            col += width;
        }
        if !text.is_empty() {
            out.push((text, token.class));
        }
    }

    out
}

/// Styled snippet writer
pub struct Renderer<W: Write> {
    out: W,
    palette: Palette,
    options: RenderOptions,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer over a sink
    pub fn new(out: W, palette: Palette, options: RenderOptions) -> Self {
        Self {
            out,
            palette,
            options,
        }
    }

    /// Give back the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a styled piece of text
    fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        if style.is_default() {
            queue!(self.out, Print(text))?;
            return Ok(());
        }

        if style.fg != Color::Default {
            queue!(self.out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Render every line of a snippet
    pub fn render(&mut self, snippet: &HighlightedSnippet) -> Result<()> {
        let gutter = snippet.line_count().to_string().len();
        let gutter_style = if self.palette.is_plain() {
            Style::default()
        } else {
            Style::default().with_dim()
        };

        for (idx, line) in snippet.lines.iter().enumerate() {
            if self.options.line_numbers {
                let number = format!("{:>width$} | ", idx + 1, width = gutter);
                self.write_styled(&number, gutter_style)?;
            }
            let laid = layout_line(line, self.options.tab_width, self.options.max_width);
            for (text, class) in laid {
                let style = self.palette.style(class);
                self.write_styled(&text, style)?;
            }
            queue!(self.out, Print('\n'))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::highlight_snippet;
    use pretty_assertions::assert_eq;

    fn render_to_string(
        snippet: &HighlightedSnippet,
        palette: Palette,
        options: RenderOptions,
    ) -> String {
        let mut renderer = Renderer::new(Vec::new(), palette, options);
        renderer.render(snippet).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_render_reproduces_text() {
        let snippet = highlight_snippet("let x = 1;\nfoo(x)", Some("rust"));
        let out = render_to_string(&snippet, Palette::plain(), RenderOptions::default());
        assert_eq!(out, "let x = 1;\nfoo(x)\n");
    }

    #[test]
    fn test_line_numbers() {
        let code = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let snippet = highlight_snippet(&code, Some("text"));
        let options = RenderOptions {
            line_numbers: true,
            ..Default::default()
        };
        let out = render_to_string(&snippet, Palette::plain(), options);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], " 1 | 1");
        assert_eq!(lines[9], "10 | 10");
    }

    #[test]
    fn test_colored_render_emits_escapes() {
        let snippet = highlight_snippet("return 1", Some("javascript"));
        let out = render_to_string(&snippet, Palette::default(), RenderOptions::default());
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("return"));
    }

    #[test]
    fn test_tab_expansion() {
        let tokens = vec![
            ClassifiedToken::new("a", StyleClass::Plain),
            ClassifiedToken::new("\t", StyleClass::Whitespace),
            ClassifiedToken::new("b", StyleClass::Plain),
        ];
        let laid = layout_line(&tokens, 4, None);
        let text: String = laid.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(text, "a   b");
    }

    #[test]
    fn test_truncation_by_display_width() {
        let tokens = vec![
            ClassifiedToken::new("ab", StyleClass::Plain),
            ClassifiedToken::new("\"日本\"", StyleClass::String),
        ];
        let laid = layout_line(&tokens, 4, Some(5));
        assert_eq!(
            laid,
            vec![
                ("ab".to_string(), StyleClass::Plain),
                ("\"日".to_string(), StyleClass::String),
            ]
        );
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(term_color(Color::BrightBlack), style::Color::DarkGrey);
        assert_eq!(term_color(Color::Default), style::Color::Reset);
    }
}
