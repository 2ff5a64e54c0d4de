//! HTML serialization.

use crate::html::{Element, Node};

/// Serializes an HTML tree to a string.
///
/// Text is escaped for element content and property values for double-quoted attributes.
/// Raw nodes are written verbatim. Output is deterministic: properties are written in name
/// order.
pub fn to_string(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Appends one node to `out`.
fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root { children } => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Raw(raw) => out.push_str(raw),
    }
}

/// Appends an element, its children and its closing tag.
fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.properties {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
