//! Markdown rendering for mdsite.
//!
//! This crate turns markdown source documents into embeddable HTML fragments. A render:
//! - Drops YAML front matter
//! - Extracts a table of contents from the headings
//! - Gives every heading element an `id` matching its TOC entry
//! - Rewrites links between documents into site routes under a base path
//!
//! [`process_markdown`] renders a file, [`render_markdown`] renders text, and [`DocsRoot`]
//! lists and renders the documents of a category directory.

#![warn(missing_docs)]

pub mod docs;
mod error;
mod frontmatter;
pub mod html;
pub mod ids;
pub mod links;
pub mod markdown;
mod pipeline;
pub mod serialize;
mod slug;
pub mod toc;
pub mod transform;

pub use docs::{DocData, DocsRoot, slug_of};
pub use error::DocumentError;
pub use frontmatter::{FrontMatter, split_front_matter};
pub use links::{LinkKind, classify, rewrite_href};
pub use markdown::ParseOptions;
pub use pipeline::{RenderOptions, RenderedDocument, process_markdown, render_markdown};
pub use slug::{Slugifier, slug};
pub use toc::{TocItem, TocNode, extract_toc, nest_toc};
