//! Table of contents extraction.
//!
//! The TOC is a flat list of headings in document order. Ids are generated with the same
//! [`Slugifier`] rule the heading id pass uses, so TOC links always land on the rendered
//! heading. [`nest_toc`] groups the flat list into a tree for nested navigation.

use serde::{Deserialize, Serialize};

use crate::{markdown::Node, slug::Slugifier};

/// One heading in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Flattened heading text.
    pub value: String,
    /// Anchor id of the heading element.
    pub id: String,
    /// Heading level, 1-6.
    pub depth: u8,
}

/// A TOC entry with the entries nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    /// The heading itself.
    #[serde(flatten)]
    pub item: TocItem,
    /// Deeper headings that follow this one, before the next heading of equal or lower depth.
    pub children: Vec<Self>,
}

impl TocNode {
    /// Creates a node with no children.
    fn leaf(item: TocItem) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }
}

/// Collects every heading of a markdown tree in pre-order.
///
/// The tree is not modified. The result has exactly one entry per heading node.
pub fn extract_toc(root: &Node) -> Vec<TocItem> {
    let mut slugifier = Slugifier::new();
    collect(root, &mut slugifier, Vec::new())
}

/// Pre-order walk that threads the accumulated items through the recursion.
fn collect(node: &Node, slugifier: &mut Slugifier, mut items: Vec<TocItem>) -> Vec<TocItem> {
    if let Node::Heading { depth, .. } = node {
        let value = node.text_content();
        let id = slugifier.slugify(&value);
        items.push(TocItem {
            value,
            id,
            depth: *depth,
        });
        // Headings cannot contain headings.
        return items;
    }
    node.children()
        .iter()
        .fold(items, |acc, child| collect(child, slugifier, acc))
}

/// Groups a flat TOC into a tree by depth.
///
/// Each entry becomes a child of the nearest preceding entry with a smaller depth. Entries
/// with no such predecessor are roots. Skipped levels (an h3 directly under an h1) nest
/// directly without placeholders.
pub fn nest_toc(items: &[TocItem]) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = Vec::new();
    // Open ancestors, shallowest first.
    let mut open: Vec<TocNode> = Vec::new();

    for item in items {
        close_until(&mut open, &mut roots, item.depth);
        open.push(TocNode::leaf(item.clone()));
    }
    close_until(&mut open, &mut roots, 0);
    roots
}

/// Pops open nodes whose depth is at least `depth`, attaching each to its parent.
fn close_until(open: &mut Vec<TocNode>, roots: &mut Vec<TocNode>, depth: u8) {
    while open.last().is_some_and(|node| node.item.depth >= depth) {
        let Some(node) = open.pop() else {
            break;
        };
        attach(open, roots, node);
    }
}

/// Attaches a finished node to the innermost open node, or to the roots.
fn attach(open: &mut [TocNode], roots: &mut Vec<TocNode>, node: TocNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
