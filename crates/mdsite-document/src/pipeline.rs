//! The rendering pipeline.
//!
//! Stages run strictly in order:
//! 1. Split off front matter
//! 2. Parse the body to a markdown tree
//! 3. Extract the table of contents
//! 4. Convert to an HTML tree
//! 5. Assign heading ids
//! 6. Rewrite document links
//! 7. Serialize
//!
//! Every invocation owns all of its intermediate state, so documents can be rendered
//! concurrently from different threads.

use std::{fs, path::Path};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::DocumentError,
    frontmatter::split_front_matter,
    ids::assign_heading_ids,
    links::rewrite_links,
    markdown::{self, ParseOptions},
    serialize,
    toc::{TocItem, extract_toc},
    transform::to_html,
};

/// Options controlling a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for rewritten document links. Used verbatim; the default is empty.
    pub links_base_path: String,
    /// Markdown extensions to enable.
    pub parse: ParseOptions,
}

impl RenderOptions {
    /// Returns options with the given links base path.
    pub fn with_links_base_path(mut self, base: impl Into<String>) -> Self {
        self.links_base_path = base.into();
        self
    }
}

/// The output of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// HTML fragment for the document body.
    pub content_html: String,
    /// Headings in document order.
    pub toc: Vec<TocItem>,
}

/// Renders markdown text.
///
/// Never fails: malformed front matter and markdown degrade to text. The same input and
/// options always produce byte-identical output.
pub fn render_markdown(text: &str, options: &RenderOptions) -> RenderedDocument {
    let (_, body) = split_front_matter(text);
    let markdown = markdown::parse(body, &options.parse);
    let toc = extract_toc(&markdown);

    let mut html = to_html(&markdown);
    let headings = assign_heading_ids(&mut html);
    let links = rewrite_links(&mut html, &options.links_base_path);
    let content_html = serialize::to_string(&html);

    debug!(
        headings,
        links_rewritten = links,
        bytes = content_html.len(),
        "rendered markdown"
    );
    RenderedDocument { content_html, toc }
}

/// Reads a markdown file and renders it.
///
/// Reading the file is the only fallible step. On failure nothing is rendered.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn process_markdown(
    path: &Path,
    options: &RenderOptions,
) -> Result<RenderedDocument, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_markdown(&text, options))
}
