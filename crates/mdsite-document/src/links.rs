//! Link rewriting.
//!
//! Documents link to each other by source path (`guide/setup.md`). Served pages live at
//! routes without the `.md` extension, below a base path. This pass rewrites anchors that
//! point at other documents and leaves every other link alone.

use tracing::trace;
use url::Url;

use crate::html::Node;

/// Markdown file extension stripped from document links.
const MARKDOWN_EXT: &str = ".md";

/// Directory index document stripped from document links, along with its separator.
const INDEX_DOC: &str = "/index.md";

/// What an `href` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Starts with `http`: an external URL.
    External,
    /// Starts with `#`: a fragment within the current page.
    Anchor,
    /// Another URI scheme (`mailto:`), protocol-relative, site-absolute or query-only.
    NonDocument,
    /// A relative path to another source document.
    Document,
}

impl LinkKind {
    /// Returns true if hrefs of this kind are rewritten.
    pub fn is_rewritten(self) -> bool {
        self == Self::Document
    }
}

/// URI schemes that never name a document, whatever their path looks like.
const NON_DOCUMENT_SCHEMES: &[&str] = &[
    "mailto",
    "tel",
    "sms",
    "data",
    "javascript",
    "ftp",
    "file",
];

/// Classifies an `href` value.
///
/// An href that parses as an absolute URL carries a scheme and is left alone, so
/// `mailto:` and `tel:` links pass through. A relative document name containing a colon
/// also parses that way (`notes:v2.md` has the scheme `notes`). Such an href is still a
/// document when its path ends in `.md`, unless the scheme is a known non-document one
/// (`mailto:`, `ftp:`, ...).
pub fn classify(href: &str) -> LinkKind {
    if href
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
    {
        return LinkKind::External;
    }
    if href.starts_with('#') {
        return LinkKind::Anchor;
    }
    if href.is_empty()
        || href.starts_with('/')
        || href.starts_with('?')
        || has_uri_scheme(href)
    {
        return LinkKind::NonDocument;
    }
    LinkKind::Document
}

/// Returns true if the href names a resource under a URI scheme rather than a document.
fn has_uri_scheme(href: &str) -> bool {
    let Ok(url) = Url::parse(href) else {
        return false;
    };
    if NON_DOCUMENT_SCHEMES.contains(&url.scheme()) {
        return true;
    }
    let path = href.find(['?', '#']).map_or(href, |pos| &href[..pos]);
    !path.ends_with(MARKDOWN_EXT)
}

/// Computes the rewritten form of an `href`, or `None` if it is left as-is.
///
/// Document links keep their query and fragment. The path loses leading `./`, then a
/// trailing `/index.md`, then a trailing `.md`, and is joined to `base_path` with `/`.
/// The base path is used verbatim.
pub fn rewrite_href(href: &str, base_path: &str) -> Option<String> {
    if !classify(href).is_rewritten() {
        return None;
    }

    let (mut path, suffix) = match href.find(['?', '#']) {
        Some(pos) => href.split_at(pos),
        None => (href, ""),
    };
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    let path = path.strip_suffix(INDEX_DOC).unwrap_or(path);
    let path = path.strip_suffix(MARKDOWN_EXT).unwrap_or(path);

    Some(format!("{base_path}/{path}{suffix}"))
}

/// Rewrites the `href` of every `a` element that links to another document.
///
/// Only `href` is modified. Returns the number of links rewritten.
pub fn rewrite_links(root: &mut Node, base_path: &str) -> usize {
    let mut rewritten = 0;
    root.visit_elements_mut(&mut |element| {
        if element.tag != "a" {
            return;
        }
        let Some(href) = element.property("href").filter(|h| !h.is_empty()) else {
            return;
        };
        match rewrite_href(href, base_path) {
            Some(target) => {
                trace!(from = href, to = %target, "rewrote link");
                element.set_property("href", target);
                rewritten += 1;
            }
            None => trace!(href, kind = ?classify(href), "link left untouched"),
        }
    });
    rewritten
}
