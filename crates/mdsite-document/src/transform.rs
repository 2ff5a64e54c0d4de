//! Markdown syntax tree to HTML syntax tree conversion.
//!
//! The mapping is purely structural. Heading ids and link targets are left alone here and
//! filled in by later passes over the HTML tree.

use crate::{
    html::{self, Element},
    markdown::{Align, Node},
};

/// Converts a markdown tree into an HTML tree rooted at [`html::Node::Root`].
///
/// Block-level siblings are separated by newline text nodes so the serialized output has
/// one block per line.
pub fn to_html(root: &Node) -> html::Node {
    let children = match root {
        Node::Root { children } => wrap(convert_all(children), false),
        other => convert(other),
    };
    html::Node::Root { children }
}

/// Converts a sequence of sibling nodes.
fn convert_all(nodes: &[Node]) -> Vec<html::Node> {
    nodes.iter().flat_map(convert).collect()
}

/// Joins block nodes with newline text nodes.
///
/// Loose containers (block quotes, lists) also get a newline after the opening tag and
/// before the closing tag.
fn wrap(nodes: Vec<html::Node>, loose: bool) -> Vec<html::Node> {
    let count = nodes.len();
    let mut out = Vec::with_capacity(count * 2 + 1);
    if loose {
        out.push(newline());
    }
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            out.push(newline());
        }
        out.push(node);
    }
    if loose && count > 0 {
        out.push(newline());
    }
    out
}

/// A newline text node.
fn newline() -> html::Node {
    html::Node::Text("\n".to_string())
}

/// Shorthand for an element with converted inline children.
fn element(tag: &str, children: &[Node]) -> html::Node {
    Element::new(tag).with_children(convert_all(children)).into()
}

/// Converts one markdown node into zero or more HTML nodes.
fn convert(node: &Node) -> Vec<html::Node> {
    let converted = match node {
        Node::Root { children } => return wrap(convert_all(children), false),
        Node::Heading { depth, children } => element(&format!("h{depth}"), children),
        Node::Paragraph { children } => element("p", children),
        Node::BlockQuote { children } => Element::new("blockquote")
            .with_children(wrap(convert_all(children), true))
            .into(),
        Node::List { start, children } => list(*start, children),
        Node::ListItem { children } => list_item(children),
        Node::TaskListMarker { checked } => {
            let mut input = Element::new("input")
                .with_property("type", "checkbox")
                .with_property("disabled", "");
            if *checked {
                input.set_property("checked", "");
            }
            return vec![input.into(), html::Node::Text(" ".to_string())];
        }
        Node::CodeBlock { lang, value } => code_block(lang.as_deref(), value),
        Node::Html(raw) => html::Node::Raw(raw.trim_end_matches(['\r', '\n']).to_string()),
        Node::InlineHtml(raw) => html::Node::Raw(raw.clone()),
        Node::ThematicBreak => Element::new("hr").into(),
        Node::Table { align, children } => table(align, children),
        // Rows are only reachable through their table.
        Node::TableHead { children } | Node::TableRow { children } => {
            element("tr", children)
        }
        Node::TableCell { children } => element("td", children),
        Node::Emphasis { children } => element("em", children),
        Node::Strong { children } => element("strong", children),
        Node::Strikethrough { children } => element("del", children),
        Node::Link {
            url,
            title,
            children,
        } => {
            let mut anchor = Element::new("a")
                .with_property("href", url.as_str())
                .with_children(convert_all(children));
            if let Some(title) = title {
                anchor.set_property("title", title.as_str());
            }
            anchor.into()
        }
        Node::Image { url, title, alt } => {
            let mut image = Element::new("img")
                .with_property("src", url.as_str())
                .with_property("alt", alt.as_str());
            if let Some(title) = title {
                image.set_property("title", title.as_str());
            }
            image.into()
        }
        Node::Text(text) => html::Node::Text(text.clone()),
        Node::InlineCode(code) => Element::new("code")
            .with_children(vec![html::Node::Text(code.clone())])
            .into(),
        Node::SoftBreak => newline(),
        // The line feed after a break is layout, not heading text.
        Node::HardBreak => return vec![Element::new("br").into(), html::Node::Raw("\n".into())],
    };
    vec![converted]
}

/// Converts a list into `ul` or `ol`.
fn list(start: Option<u64>, items: &[Node]) -> html::Node {
    let children = wrap(convert_all(items), true);
    match start {
        None => Element::new("ul").with_children(children).into(),
        Some(start) => {
            let mut ol = Element::new("ol").with_children(children);
            if start != 1 {
                ol.set_property("start", start.to_string());
            }
            ol.into()
        }
    }
}

/// Converts a list item.
///
/// Tight items hold inline content and render on one line. Block children (paragraphs of
/// loose items, nested lists) are each placed on their own line.
fn list_item(children: &[Node]) -> html::Node {
    let mut out = Vec::new();
    let mut last_was_block = false;
    for child in children {
        last_was_block = child.is_block();
        if last_was_block {
            out.push(newline());
        }
        out.extend(convert(child));
    }
    if last_was_block {
        out.push(newline());
    }
    Element::new("li").with_children(out).into()
}

/// Converts a code block into `pre > code`.
fn code_block(lang: Option<&str>, value: &str) -> html::Node {
    let mut code = Element::new("code").with_children(vec![html::Node::Text(value.to_string())]);
    if let Some(lang) = lang {
        code.set_property("class", format!("language-{lang}"));
    }
    Element::new("pre").with_children(vec![code.into()]).into()
}

/// Converts a table into `table > thead/tbody > tr > th/td`.
fn table(align: &[Align], rows: &[Node]) -> html::Node {
    let mut head = None;
    let mut body = Vec::new();
    for row in rows {
        match row {
            Node::TableHead { children } => head = Some(table_row(align, children, "th")),
            Node::TableRow { children } => body.push(table_row(align, children, "td")),
            other => body.extend(convert(other)),
        }
    }

    let mut sections = Vec::new();
    if let Some(head) = head {
        sections.push(
            Element::new("thead")
                .with_children(wrap(vec![head], true))
                .into(),
        );
    }
    if !body.is_empty() {
        sections.push(Element::new("tbody").with_children(wrap(body, true)).into());
    }
    Element::new("table")
        .with_children(wrap(sections, true))
        .into()
}

/// Converts one table row, applying column alignment to each cell.
fn table_row(align: &[Align], cells: &[Node], cell_tag: &str) -> html::Node {
    let cells = cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            let mut el = Element::new(cell_tag).with_children(convert_all(cell.children()));
            if let Some(value) = align.get(column).and_then(|a| text_align(*a)) {
                el.set_property("style", format!("text-align: {value}"));
            }
            el.into()
        })
        .collect();
    Element::new("tr").with_children(wrap(cells, true)).into()
}

/// CSS `text-align` value for a column alignment.
fn text_align(align: Align) -> Option<&'static str> {
    match align {
        Align::None => None,
        Align::Left => Some("left"),
        Align::Center => Some("center"),
        Align::Right => Some("right"),
    }
}
