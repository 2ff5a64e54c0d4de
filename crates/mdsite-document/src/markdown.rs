//! Markdown syntax tree.
//!
//! The parser turns pulldown-cmark's event stream into an owned tree. Every node kind is a
//! variant of [`Node`], so passes over the tree are exhaustive matches rather than shape
//! checks. Each node exclusively owns its children.

use pulldown_cmark::{
    Alignment, CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag,
};

/// Column alignment of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// No explicit alignment.
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

/// A node in the markdown syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The document root.
    Root {
        /// Top-level blocks.
        children: Vec<Self>,
    },
    /// An ATX or setext heading.
    Heading {
        /// Heading level, 1-6.
        depth: u8,
        /// Inline content.
        children: Vec<Self>,
    },
    /// A paragraph.
    Paragraph {
        /// Inline content.
        children: Vec<Self>,
    },
    /// A block quote.
    BlockQuote {
        /// Quoted blocks.
        children: Vec<Self>,
    },
    /// An ordered or bullet list.
    List {
        /// Start number for ordered lists, `None` for bullet lists.
        start: Option<u64>,
        /// List items.
        children: Vec<Self>,
    },
    /// A list item. Tight items hold inline content directly, loose items hold paragraphs.
    ListItem {
        /// Item content.
        children: Vec<Self>,
    },
    /// A task list checkbox at the start of a list item.
    TaskListMarker {
        /// Whether the box is ticked.
        checked: bool,
    },
    /// A fenced or indented code block.
    CodeBlock {
        /// First word of the fence info string, if any.
        lang: Option<String>,
        /// Literal code.
        value: String,
    },
    /// A block of raw HTML.
    Html(String),
    /// Inline raw HTML.
    InlineHtml(String),
    /// A thematic break (`---`).
    ThematicBreak,
    /// A table. The first child is the header row, the rest are body rows.
    Table {
        /// Per-column alignment.
        align: Vec<Align>,
        /// Header and body rows.
        children: Vec<Self>,
    },
    /// The header row of a table.
    TableHead {
        /// Header cells.
        children: Vec<Self>,
    },
    /// A body row of a table.
    TableRow {
        /// Row cells.
        children: Vec<Self>,
    },
    /// A table cell.
    TableCell {
        /// Inline content.
        children: Vec<Self>,
    },
    /// Emphasis (`*text*`).
    Emphasis {
        /// Inline content.
        children: Vec<Self>,
    },
    /// Strong emphasis (`**text**`).
    Strong {
        /// Inline content.
        children: Vec<Self>,
    },
    /// Strikethrough (`~~text~~`).
    Strikethrough {
        /// Inline content.
        children: Vec<Self>,
    },
    /// A link.
    Link {
        /// Destination as written (e-mail autolinks get a `mailto:` prefix).
        url: String,
        /// Optional link title.
        title: Option<String>,
        /// Link text.
        children: Vec<Self>,
    },
    /// An image.
    Image {
        /// Image source.
        url: String,
        /// Optional image title.
        title: Option<String>,
        /// Flattened alt text.
        alt: String,
    },
    /// Literal text.
    Text(String),
    /// Inline code span.
    InlineCode(String),
    /// A soft line break inside a paragraph.
    SoftBreak,
    /// A hard line break.
    HardBreak,
}

impl Node {
    /// Returns the children of container nodes, or an empty slice for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Root { children }
            | Self::Heading { children, .. }
            | Self::Paragraph { children }
            | Self::BlockQuote { children }
            | Self::List { children, .. }
            | Self::ListItem { children }
            | Self::Table { children, .. }
            | Self::TableHead { children }
            | Self::TableRow { children }
            | Self::TableCell { children }
            | Self::Emphasis { children }
            | Self::Strong { children }
            | Self::Strikethrough { children }
            | Self::Link { children, .. } => children,
            Self::TaskListMarker { .. }
            | Self::CodeBlock { .. }
            | Self::Html(_)
            | Self::InlineHtml(_)
            | Self::ThematicBreak
            | Self::Image { .. }
            | Self::Text(_)
            | Self::InlineCode(_)
            | Self::SoftBreak
            | Self::HardBreak => &[],
        }
    }

    /// Returns true for block-level nodes.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Root { .. }
                | Self::Heading { .. }
                | Self::Paragraph { .. }
                | Self::BlockQuote { .. }
                | Self::List { .. }
                | Self::ListItem { .. }
                | Self::CodeBlock { .. }
                | Self::Html(_)
                | Self::ThematicBreak
                | Self::Table { .. }
                | Self::TableHead { .. }
                | Self::TableRow { .. }
                | Self::TableCell { .. }
        )
    }

    /// Returns the concatenated text of this node and its descendants.
    ///
    /// Text and inline code contribute their content, soft breaks a newline. Markup
    /// wrappers (emphasis, links) contribute their children's text. Images, raw HTML,
    /// hard breaks and task markers contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    /// Appends this node's text content to `out`.
    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::InlineCode(text) => out.push_str(text),
            Self::CodeBlock { value, .. } => out.push_str(value),
            Self::SoftBreak => out.push('\n'),
            Self::Html(_)
            | Self::InlineHtml(_)
            | Self::Image { .. }
            | Self::HardBreak
            | Self::ThematicBreak
            | Self::TaskListMarker { .. } => {}
            container => {
                for child in container.children() {
                    child.push_text(out);
                }
            }
        }
    }

    /// Counts the heading nodes in this subtree.
    pub fn heading_count(&self) -> usize {
        let own = usize::from(matches!(self, Self::Heading { .. }));
        own + self.children().iter().map(Self::heading_count).sum::<usize>()
    }
}

/// Markdown extensions enabled when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// GitHub-style pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `- [ ]` task list items.
    pub tasklists: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
        }
    }
}

impl ParseOptions {
    /// Converts to pulldown-cmark option flags.
    fn to_cmark(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options
    }
}

/// Parses markdown text into a syntax tree.
///
/// Parsing never fails: constructs that are not valid markdown are kept as text.
pub fn parse(body: &str, options: &ParseOptions) -> Node {
    let parser = Parser::new_ext(body, options.to_cmark());
    let mut builder = TreeBuilder::new();
    for event in parser {
        builder.push_event(event);
    }
    builder.finish()
}

/// A container whose end event has not been seen yet.
#[derive(Debug)]
enum Pending {
    /// The document root.
    Root,
    /// Heading of the given level.
    Heading(u8),
    /// Paragraph.
    Paragraph,
    /// Block quote.
    BlockQuote,
    /// List with optional start number.
    List(Option<u64>),
    /// List item.
    Item,
    /// Code block with optional language.
    CodeBlock(Option<String>),
    /// Raw HTML block.
    HtmlBlock,
    /// Table with column alignments.
    Table(Vec<Align>),
    /// Table header row.
    TableHead,
    /// Table body row.
    TableRow,
    /// Table cell.
    TableCell,
    /// Emphasis.
    Emphasis,
    /// Strong emphasis.
    Strong,
    /// Strikethrough.
    Strikethrough,
    /// Link.
    Link {
        /// Destination.
        url: String,
        /// Optional title.
        title: Option<String>,
    },
    /// Image.
    Image {
        /// Source.
        url: String,
        /// Optional title.
        title: Option<String>,
    },
    /// A container with no node kind of its own; its children are spliced into the parent.
    Transparent,
}

impl Pending {
    /// Maps a start tag to the container it opens.
    fn from_tag(tag: Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => Self::Paragraph,
            Tag::Heading { level, .. } => Self::Heading(heading_level_to_u8(level)),
            Tag::BlockQuote(_) => Self::BlockQuote,
            Tag::CodeBlock(kind) => Self::CodeBlock(code_block_lang(kind)),
            Tag::HtmlBlock => Self::HtmlBlock,
            Tag::List(start) => Self::List(start),
            Tag::Item => Self::Item,
            Tag::Table(alignments) => Self::Table(alignments.into_iter().map(Align::from).collect()),
            Tag::TableHead => Self::TableHead,
            Tag::TableRow => Self::TableRow,
            Tag::TableCell => Self::TableCell,
            Tag::Emphasis => Self::Emphasis,
            Tag::Strong => Self::Strong,
            Tag::Strikethrough => Self::Strikethrough,
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => Self::Link {
                url: link_url(link_type, dest_url),
                title: non_empty(title),
            },
            Tag::Image {
                dest_url, title, ..
            } => Self::Image {
                url: dest_url.into_string(),
                title: non_empty(title),
            },
            _ => Self::Transparent,
        }
    }
}

impl From<Alignment> for Align {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::None => Self::None,
            Alignment::Left => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::Right => Self::Right,
        }
    }
}

/// An open container and the children collected for it so far.
#[derive(Debug)]
struct Frame {
    /// What the container will become once closed.
    kind: Pending,
    /// Children in document order.
    children: Vec<Node>,
}

impl Frame {
    /// Creates an empty frame.
    fn new(kind: Pending) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Appends a child, merging adjacent text nodes.
    fn push(&mut self, node: Node) {
        if let (Node::Text(text), Some(Node::Text(last))) = (&node, self.children.last_mut()) {
            last.push_str(text);
            return;
        }
        self.children.push(node);
    }

    /// Closes the frame, producing the nodes it contributes to its parent.
    fn close(self) -> Vec<Node> {
        let children = self.children;
        let node = match self.kind {
            Pending::Transparent => return children,
            Pending::Root => Node::Root { children },
            Pending::Heading(depth) => Node::Heading { depth, children },
            Pending::Paragraph => Node::Paragraph { children },
            Pending::BlockQuote => Node::BlockQuote { children },
            Pending::List(start) => Node::List { start, children },
            Pending::Item => Node::ListItem { children },
            Pending::CodeBlock(lang) => Node::CodeBlock {
                lang,
                value: concat_literals(&children),
            },
            Pending::HtmlBlock => Node::Html(concat_literals(&children)),
            Pending::Table(align) => Node::Table { align, children },
            Pending::TableHead => Node::TableHead { children },
            Pending::TableRow => Node::TableRow { children },
            Pending::TableCell => Node::TableCell { children },
            Pending::Emphasis => Node::Emphasis { children },
            Pending::Strong => Node::Strong { children },
            Pending::Strikethrough => Node::Strikethrough { children },
            Pending::Link { url, title } => Node::Link {
                url,
                title,
                children,
            },
            Pending::Image { url, title } => {
                let alt = children.iter().map(Node::text_content).collect();
                Node::Image { url, title, alt }
            }
        };
        vec![node]
    }
}

/// Assembles the event stream into an owned tree using an explicit stack of open containers.
struct TreeBuilder {
    /// Open containers; the bottom entry is always the root.
    stack: Vec<Frame>,
}

impl TreeBuilder {
    /// Creates a builder with an open root.
    fn new() -> Self {
        Self {
            stack: vec![Frame::new(Pending::Root)],
        }
    }

    /// Appends a finished node to the innermost open container.
    fn push_node(&mut self, node: Node) {
        if let Some(frame) = self.stack.last_mut() {
            frame.push(node);
        }
    }

    /// Closes the innermost container and attaches it to its parent.
    fn close_frame(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        for node in frame.close() {
            self.push_node(node);
        }
    }

    /// Feeds one parser event into the tree.
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(Frame::new(Pending::from_tag(tag))),
            Event::End(_) => self.close_frame(),
            Event::Text(text) => self.push_node(Node::Text(text.into_string())),
            Event::Code(code) => self.push_node(Node::InlineCode(code.into_string())),
            Event::Html(html) => self.push_node(Node::Html(html.into_string())),
            Event::InlineHtml(html) => self.push_node(Node::InlineHtml(html.into_string())),
            Event::SoftBreak => self.push_node(Node::SoftBreak),
            Event::HardBreak => self.push_node(Node::HardBreak),
            Event::Rule => self.push_node(Node::ThematicBreak),
            Event::TaskListMarker(checked) => self.push_node(Node::TaskListMarker { checked }),
            // Extensions that are never enabled; degrade to their source text.
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push_node(Node::Text(math.into_string()));
            }
            Event::FootnoteReference(label) => {
                self.push_node(Node::Text(format!("[^{label}]")));
            }
        }
    }

    /// Closes any containers left open and returns the root.
    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close_frame();
        }
        let children = self
            .stack
            .pop()
            .map(|root| root.children)
            .unwrap_or_default();
        Node::Root { children }
    }
}

/// Concatenates the literal content of text-like children.
fn concat_literals(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| match child {
            Node::Text(text) | Node::Html(text) | Node::InlineHtml(text) => text.clone(),
            other => other.text_content(),
        })
        .collect()
}

/// Converts a pulldown_cmark HeadingLevel to a u8 (1-6).
fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extracts the language from a code block's fence info string.
fn code_block_lang(kind: CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}

/// Returns the link destination, restoring the `mailto:` scheme of e-mail autolinks.
fn link_url(link_type: LinkType, dest_url: CowStr<'_>) -> String {
    match link_type {
        LinkType::Email => format!("mailto:{dest_url}"),
        _ => dest_url.into_string(),
    }
}

/// Converts an empty title to `None`.
fn non_empty(title: CowStr<'_>) -> Option<String> {
    if title.is_empty() {
        None
    } else {
        Some(title.into_string())
    }
}
