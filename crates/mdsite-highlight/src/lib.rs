//! Syntax highlighting and terminal styling for mdsite.
//!
//! The CLI prints rendered HTML, effective TOML settings and JSON output. When stdout is a
//! terminal these are highlighted with [`Highlighter`]; status lines use the small styling
//! helpers at the bottom of this module.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Languages emitted by the mdsite CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Rendered document fragments.
    Html,
    /// Configuration files.
    Toml,
    /// Machine-readable command output.
    Json,
}

impl Language {
    /// File extension used to look up the syntax definition.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// A syntax highlighter that produces 24-bit ANSI colored text.
pub struct Highlighter {
    /// The syntax set containing language definitions (including TOML).
    syntax_set: SyntaxSet,
    /// The theme set containing color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme to use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a new highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights content in one of the CLI's output languages.
    pub fn highlight_as(&self, content: &str, language: Language) -> String {
        self.highlight(content, language.extension())
    }

    /// Highlights content with the syntax matching an extension or name.
    ///
    /// Unknown syntaxes fall back to plain text, so the content is still reset-terminated.
    fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self.find_syntax(syntax_name);
        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Looks up a syntax by extension, then by name, then falls back to plain text.
    fn find_syntax(&self, syntax_name: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Indentation for a TOC entry of the given heading depth (two spaces per level below 1).
pub fn depth_indent(depth: u8) -> String {
    "  ".repeat(usize::from(depth.saturating_sub(1)))
}
