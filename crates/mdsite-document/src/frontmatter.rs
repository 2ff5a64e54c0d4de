//! YAML front matter splitting for markdown documents.
//!
//! Front matter is optional metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Getting Started
//! tags: [guide, setup]
//! ---
//!
//! # Content starts here
//! ```
//!
//! The renderer only needs the body. The metadata is kept as a raw YAML mapping so callers
//! that do care about it (page titles, listings) can read whatever keys they use.

use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Metadata parsed from a document's front matter block.
///
/// Empty when the document has no front matter or the block could not be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// All key/value pairs from the YAML block, in source order.
    data: Mapping,
}

impl FrontMatter {
    /// Returns true if no metadata was found.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw YAML mapping.
    pub fn mapping(&self) -> &Mapping {
        &self.data
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the `title` key if it is a string.
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Returns the `tags` key as a list of strings.
    ///
    /// Accepts either a YAML sequence or a single comma-separated string.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(inline)) => inline
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Splits a document into its front matter and body.
///
/// Returns the parsed metadata and the remaining content after the closing delimiter.
/// If no front matter is present, the block is never closed, or the YAML is malformed,
/// returns empty metadata and the original content. This never fails.
///
/// Front matter must:
/// - Start at the beginning of the content (a UTF-8 BOM is skipped)
/// - Be delimited by `---` on its own line
/// - Contain a YAML mapping (an empty block is allowed)
pub fn split_front_matter(content: &str) -> (FrontMatter, &str) {
    let content = content.trim_start_matches('\u{feff}');

    let (first_line, after_opening) = split_first_line(content);
    if first_line.trim_end_matches('\r') != "---" {
        return (FrontMatter::default(), content);
    }

    let Some((yaml_end, body_start)) = find_closing_delimiter(after_opening) else {
        debug!("front matter opened but never closed, treating as body");
        return (FrontMatter::default(), content);
    };

    let yaml = &after_opening[..yaml_end];
    let body = &after_opening[body_start..];
    // Common pattern: closing --- followed by a blank line before content
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(data)) => (FrontMatter { data }, body),
        Ok(Value::Null) => (FrontMatter::default(), body),
        Ok(_) => {
            debug!("front matter is not a mapping, treating as body");
            (FrontMatter::default(), content)
        }
        Err(e) => {
            debug!(error = %e, "malformed front matter, treating as body");
            (FrontMatter::default(), content)
        }
    }
}

/// Splits off the first line, dropping its `\n` terminator.
fn split_first_line(content: &str) -> (&str, &str) {
    match content.find('\n') {
        Some(pos) => (&content[..pos], &content[pos + 1..]),
        None => (content, ""),
    }
}

/// Finds the closing `---` delimiter line.
///
/// Returns the byte offset where the delimiter line starts (end of the YAML) and the
/// offset just past its line terminator (start of the body).
fn find_closing_delimiter(content: &str) -> Option<(usize, usize)> {
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((pos, pos + line.len()));
        }
        pos += line.len();
    }
    None
}
