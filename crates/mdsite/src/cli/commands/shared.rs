//! Shared helpers for command implementations.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use mdsite_highlight::{Highlighter, Language};
use serde::Serialize;

/// Returns true when output goes to a terminal and should be colored.
pub fn color_enabled() -> bool {
    io::stdout().is_terminal()
}

/// Prints content, highlighted when stdout is a terminal.
///
/// A trailing newline is added if the content lacks one.
pub fn print_content(content: &str, language: Language) {
    let content = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };
    if color_enabled() {
        print!("{}", Highlighter::new().highlight_as(&content, language));
    } else {
        print!("{content}");
    }
}

/// Serializes a value as pretty JSON and prints it.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            print_content(&json, Language::Json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Applies a styling function only when color is enabled.
pub fn styled(text: &str, style: fn(&str) -> String) -> String {
    if color_enabled() {
        style(text)
    } else {
        text.to_string()
    }
}
