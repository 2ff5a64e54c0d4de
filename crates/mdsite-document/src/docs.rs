//! Access to a tree of markdown documents.
//!
//! Documents live under a docs root, grouped into category subdirectories:
//!
//! ```text
//! docs/
//!   intro.md            category "", slug "intro"
//!   guides/
//!     setup.md          category "guides", slug "setup"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::{
    error::DocumentError,
    pipeline::{RenderOptions, process_markdown},
    toc::TocItem,
};

/// A rendered document together with the slug it was requested by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocData {
    /// The slug the document was requested by.
    pub slug: String,
    /// HTML fragment for the document body.
    pub content_html: String,
    /// Headings in document order.
    pub toc: Vec<TocItem>,
}

/// A directory of markdown documents grouped into categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsRoot {
    /// The docs directory.
    root: PathBuf,
}

impl DocsRoot {
    /// Creates a docs root. The directory is not checked until it is read.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the docs directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Returns the directory of a category. The empty category is the root itself.
    pub fn category_dir(&self, category: &str) -> PathBuf {
        if category.is_empty() {
            self.root.clone()
        } else {
            self.root.join(category)
        }
    }

    /// Returns the source path of a document.
    pub fn doc_path(&self, category: &str, slug: &str) -> PathBuf {
        self.category_dir(category).join(format!("{slug}.md"))
    }

    /// Lists the names of all entries directly inside a category directory, sorted.
    ///
    /// Entries are not filtered: subdirectories and non-markdown files are included.
    pub fn list(&self, category: &str) -> Result<Vec<String>, DocumentError> {
        let dir = self.category_dir(category);
        let read_dir_err = |source| DocumentError::ReadDir {
            path: dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        debug!(dir = %dir.display(), count = names.len(), "listed documents");
        Ok(names)
    }

    /// Renders the document `slug` of `category`.
    pub fn get(
        &self,
        category: &str,
        slug: &str,
        options: &RenderOptions,
    ) -> Result<DocData, DocumentError> {
        let rendered = process_markdown(&self.doc_path(category, slug), options)?;
        Ok(DocData {
            slug: slug.to_string(),
            content_html: rendered.content_html,
            toc: rendered.toc,
        })
    }
}

/// Returns the slug of a listed file name: the name without its `.md` extension.
///
/// Returns `None` for entries that are not markdown documents.
pub fn slug_of(name: &str) -> Option<&str> {
    name.strip_suffix(".md").filter(|s| !s.is_empty())
}
