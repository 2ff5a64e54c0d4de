//! Integration tests for mdsite-document.
//!
//! Exercises the full pipeline through the public API: file -> front matter -> markdown ->
//! TOC -> HTML -> ids -> links -> string.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use mdsite_document::{
    DocsRoot, DocumentError, RenderOptions, TocItem, html, ids, links, markdown, nest_toc,
    process_markdown, render_markdown, transform,
};

/// Test helper holding a temporary docs tree.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

/// Heading ids in the rendered HTML, in order.
fn heading_ids(content_html: &str) -> Vec<String> {
    content_html
        .split("<h")
        .skip(1)
        .filter(|s| s.starts_with(|c: char| ('1'..='6').contains(&c)))
        .filter_map(|s| {
            let start = s.find("id=\"")? + 4;
            let end = s[start..].find('"')?;
            Some(s[start..start + end].to_string())
        })
        .collect()
}

#[test]
fn test_render_file_end_to_end() {
    let env = TestEnv::new();
    let path = env.create_file("page.md", "# Hello World\n\nSee [other](other.md).");

    let doc = process_markdown(&path, &RenderOptions::default().with_links_base_path("/docs"))
        .unwrap();

    assert_eq!(
        doc.toc,
        vec![TocItem {
            value: "Hello World".into(),
            id: "hello-world".into(),
            depth: 1,
        }]
    );
    assert!(doc.content_html.contains("<h1 id=\"hello-world\">Hello World</h1>"));
    assert!(doc.content_html.contains("<a href=\"/docs/other\">other</a>"));
}

#[test]
fn test_toc_ids_match_heading_ids() {
    let text = r#"---
title: Reference
---

# Overview

Intro text with a [link](#overview).

## Install
### From source
## Install

> ## Quoted *heading*

- item
- ### Heading in a list

## `code` & symbols!!
## Overview
"#;
    let doc = render_markdown(text, &RenderOptions::default());

    let toc_ids: Vec<String> = doc.toc.iter().map(|t| t.id.clone()).collect();
    assert_eq!(toc_ids, heading_ids(&doc.content_html));
    assert_eq!(
        toc_ids,
        vec![
            "overview",
            "install",
            "from-source",
            "install-1",
            "quoted-heading",
            "heading-in-a-list",
            "code--symbols",
            "overview-1",
        ]
    );
}

#[test]
fn test_toc_length_matches_heading_count() {
    let text = "# a\n\ntext\n\n## b\n\n> ### c\n\nd\n-\n";
    let tree = markdown::parse(text, &markdown::ParseOptions::default());
    let doc = render_markdown(text, &RenderOptions::default());
    assert_eq!(doc.toc.len(), tree.heading_count());

    let depths: Vec<u8> = doc.toc.iter().map(|t| t.depth).collect();
    assert_eq!(depths, vec![1, 2, 3, 2]);
}

#[test]
fn test_no_headings_still_renders() {
    let env = TestEnv::new();
    let path = env.create_file("plain.md", "Just a paragraph with [a link](a.md).");

    let doc = process_markdown(&path, &RenderOptions::default()).unwrap();
    assert!(doc.toc.is_empty());
    assert_eq!(doc.content_html, "<p>Just a paragraph with <a href=\"/a\">a link</a>.</p>");
}

#[test]
fn test_unreadable_path_is_read_error() {
    let env = TestEnv::new();
    let err = process_markdown(&env.path().join("nope.md"), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, DocumentError::ReadFile { .. }));
    assert!(err.to_string().starts_with("failed to read file"));
}

#[test]
fn test_directory_is_read_error() {
    let env = TestEnv::new();
    let err = process_markdown(env.path(), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, DocumentError::ReadFile { .. }));
}

#[test]
fn test_idempotent_renders() {
    let env = TestEnv::new();
    let path = env.create_file(
        "guide.md",
        "# Guide\n## Step\n## Step\n\n[next](next.md#top) [up](../index.md) [web](https://x.y)",
    );
    let options = RenderOptions::default().with_links_base_path("/guides");

    let first = process_markdown(&path, &options).unwrap();
    let second = process_markdown(&path, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_link_classes_in_rendered_html() {
    let text = "[a](sub/page.md) [b](sub/index.md) [c](https://e.com/x.md) [d](#frag) \
                [e](mailto:me@e.com) [f](/abs/path) [g](//cdn.e.com/x)";
    let doc = render_markdown(text, &RenderOptions::default().with_links_base_path("/docs"));
    for expected in [
        "href=\"/docs/sub/page\"",
        "href=\"/docs/sub\"",
        "href=\"https://e.com/x.md\"",
        "href=\"#frag\"",
        "href=\"mailto:me@e.com\"",
        "href=\"/abs/path\"",
        "href=\"//cdn.e.com/x\"",
    ] {
        assert!(doc.content_html.contains(expected), "missing {expected} in {}", doc.content_html);
    }
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let doc = render_markdown(
        "# Fish & Chips\n\n[q](a.md \"say \\\"hi\\\"\") 1 < 2",
        &RenderOptions::default(),
    );
    assert!(doc.content_html.contains("<h1 id=\"fish--chips\">Fish &amp; Chips</h1>"));
    assert!(doc.content_html.contains("title=\"say &quot;hi&quot;\""));
    assert!(doc.content_html.contains("1 &lt; 2"));
}

#[test]
fn test_docs_root_lists_and_renders() {
    let env = TestEnv::new();
    env.create_file("docs/index.md", "# Home");
    env.create_file("docs/guides/b.md", "# B");
    env.create_file("docs/guides/a.md", "# A\n\n[home](../index.md)");

    let docs = DocsRoot::new(env.path().join("docs"));
    assert_eq!(docs.list("guides").unwrap(), vec!["a.md", "b.md"]);
    assert_eq!(docs.list("").unwrap(), vec!["guides", "index.md"]);

    let data = docs
        .get("guides", "a", &RenderOptions::default().with_links_base_path("/docs"))
        .unwrap();
    assert_eq!(data.slug, "a");
    assert_eq!(data.toc[0].id, "a");
    assert!(data.content_html.contains("href=\"/docs/..\""));

    let home = docs.get("", "index", &RenderOptions::default()).unwrap();
    assert_eq!(home.content_html, "<h1 id=\"home\">Home</h1>");
}

#[test]
fn test_nested_toc_from_document() {
    let doc = render_markdown("# A\n## B\n### C\n## D\n# E", &RenderOptions::default());
    let tree = nest_toc(&doc.toc);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].children.len(), 2);
    assert_eq!(tree[0].children[0].children[0].item.value, "C");
}

#[test]
fn test_stages_compose_through_public_modules() {
    let tree = markdown::parse("## Part [x](x.md)", &markdown::ParseOptions::default());
    let mut root = transform::to_html(&tree);
    ids::assign_heading_ids(&mut root);
    links::rewrite_links(&mut root, "/base");

    let anchor = root.elements().find(|e| e.tag == "a").and_then(|e| e.property("href"));
    assert_eq!(anchor, Some("/base/x"));
    let heading: Option<&html::Element> = root.elements().next();
    assert_eq!(heading.and_then(|h| h.property("id")), Some("part-x"));
}

#[test]
fn test_rendered_document_serializes() {
    let doc = render_markdown("# T", &RenderOptions::default());
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["content_html"], "<h1 id=\"t\">T</h1>");
    assert_eq!(json["toc"][0]["id"], "t");
    assert_eq!(json["toc"][0]["depth"], 1);
}
