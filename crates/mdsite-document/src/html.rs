//! HTML syntax tree.
//!
//! The HTML tree is what the post-processing passes (heading ids, link rewriting) mutate
//! before serialization. Elements carry a tag name, string-valued properties and children.

use std::collections::BTreeMap;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// A node in the HTML syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The fragment root.
    Root {
        /// Top-level nodes.
        children: Vec<Self>,
    },
    /// An element with a tag, properties and children.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Raw HTML passed through verbatim on output.
    Raw(String),
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attribute values keyed by name, serialized in name order.
    pub properties: BTreeMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no properties or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Builder-style children setter.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Returns a property value.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Sets a property, replacing any existing value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Returns the heading level for `h1`..`h6` elements.
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// Returns true for elements serialized without a closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Returns the concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// Returns the children of roots and elements, or an empty slice for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Root { children } => children,
            Self::Element(element) => &element.children,
            Self::Text(_) | Self::Raw(_) => &[],
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the concatenated text of this node and its descendants. Raw HTML is skipped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    /// Appends this node's text content to `out`.
    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Raw(_) => {}
            Self::Root { children } => children.iter().for_each(|c| c.push_text(out)),
            Self::Element(element) => element.children.iter().for_each(|c| c.push_text(out)),
        }
    }

    /// Returns an iterator over this node and all descendants in pre-order (depth-first).
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Returns an iterator over all elements in this subtree, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.iter_preorder().filter_map(Self::as_element)
    }

    /// Calls `visit` on every element in this subtree in pre-order.
    ///
    /// The visitor may modify an element's properties and children; modified children are
    /// visited after the parent returns.
    pub fn visit_elements_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Element),
    {
        match self {
            Self::Root { children } => {
                for child in children {
                    child.visit_elements_mut(visit);
                }
            }
            Self::Element(element) => {
                visit(element);
                for child in &mut element.children {
                    child.visit_elements_mut(visit);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }
}

/// Iterator for pre-order traversal of nodes.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so leftmost child is processed first
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
