//! Implementation of `mdsite inspect`.

use std::{fs, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use mdsite_document::{
    FrontMatter, LinkKind, TocItem, classify, extract_toc, html, markdown, rewrite_href,
    split_front_matter, transform::to_html,
};
use mdsite_highlight::{dim, header, subheader};

use crate::cli::{args::InspectCommand, commands::shared::styled, context::CommandContext};

/// A link found in a document, before rewriting.
struct LinkInfo {
    /// The `href` as written.
    href: String,
    /// How the link is classified.
    kind: LinkKind,
    /// The rewritten `href`, if the link is rewritten.
    target: Option<String>,
}

/// Shows how a markdown file is parsed: front matter, headings and links.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let path = ctx.resolve(&cmd.file);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let options = ctx.render_options(cmd.base.base.as_deref());
    let (front_matter, body) = split_front_matter(&content);
    let tree = markdown::parse(body, &options.parse);
    let toc = extract_toc(&tree);
    let links = collect_links(&to_html(&tree), &options.links_base_path);

    println!("--- {} ---", styled(&cmd.file.display().to_string(), header));
    println!();
    print_front_matter(&front_matter);
    print_headings(&toc);
    print_links(&links);

    ExitCode::SUCCESS
}

/// Prints the front matter summary.
fn print_front_matter(front_matter: &FrontMatter) {
    println!("{}", styled("Front matter:", subheader));
    if front_matter.is_empty() {
        println!("  {}", styled("(none)", dim));
        println!();
        return;
    }
    if let Some(title) = front_matter.title() {
        println!("  title: {title}");
    }
    let tags = front_matter.tags();
    if !tags.is_empty() {
        println!("  tags: {}", tags.join(", "));
    }
    let keys: Vec<&str> = front_matter
        .mapping()
        .keys()
        .filter_map(|k| k.as_str())
        .collect();
    println!("  {}", styled(&format!("keys: {}", keys.join(", ")), dim));
    println!();
}

/// Prints the headings table.
fn print_headings(toc: &[TocItem]) {
    println!(
        "{}",
        styled(&format!("Headings ({}):", toc.len()), subheader)
    );
    if toc.is_empty() {
        println!("  {}", styled("(none)", dim));
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Depth", "Id", "Text"]);
        for item in toc {
            table.add_row(vec![
                Cell::new(item.depth.to_string()),
                Cell::new(&item.id),
                Cell::new(&item.value),
            ]);
        }
        println!("{table}");
    }
    println!();
}

/// Prints the links table.
fn print_links(links: &[LinkInfo]) {
    println!(
        "{}",
        styled(&format!("Links ({}):", links.len()), subheader)
    );
    if links.is_empty() {
        println!("  {}", styled("(none)", dim));
        return;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Href", "Kind", "Target"]);
    for link in links {
        table.add_row(vec![
            Cell::new(&link.href),
            Cell::new(kind_label(link.kind)),
            Cell::new(link.target.as_deref().unwrap_or("(unchanged)")),
        ]);
    }
    println!("{table}");
}

/// Collects every anchor with an `href`, in document order.
fn collect_links(root: &html::Node, base_path: &str) -> Vec<LinkInfo> {
    root.elements()
        .filter(|el| el.tag == "a")
        .filter_map(|el| el.property("href"))
        .map(|href| LinkInfo {
            href: href.to_string(),
            kind: classify(href),
            target: rewrite_href(href, base_path),
        })
        .collect()
}

/// Short display name for a link kind.
fn kind_label(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::External => "external",
        LinkKind::Anchor => "anchor",
        LinkKind::NonDocument => "other",
        LinkKind::Document => "document",
    }
}

#[cfg(test)]
mod tests {
    use mdsite_document::ParseOptions;

    use super::*;

    #[test]
    fn test_collect_links() {
        let tree = markdown::parse(
            "[a](guide/setup.md#install) [b](https://example.com) [c](#top) [d](mailto:x@y.z)",
            &ParseOptions::default(),
        );
        let links = collect_links(&to_html(&tree), "/docs");

        let summary: Vec<(&str, LinkKind, Option<&str>)> = links
            .iter()
            .map(|l| (l.href.as_str(), l.kind, l.target.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (
                    "guide/setup.md#install",
                    LinkKind::Document,
                    Some("/docs/guide/setup#install")
                ),
                ("https://example.com", LinkKind::External, None),
                ("#top", LinkKind::Anchor, None),
                ("mailto:x@y.z", LinkKind::NonDocument, None),
            ]
        );
    }

    #[test]
    fn test_kind_labels_distinct() {
        let labels = [
            kind_label(LinkKind::External),
            kind_label(LinkKind::Anchor),
            kind_label(LinkKind::NonDocument),
            kind_label(LinkKind::Document),
        ];
        for (i, a) in labels.iter().enumerate() {
            assert!(labels[i + 1..].iter().all(|b| a != b));
        }
    }
}
