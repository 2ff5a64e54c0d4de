//! Implementation of `mdsite toc`.

use std::process::ExitCode;

use mdsite_document::{TocItem, nest_toc, process_markdown};
use mdsite_highlight::{depth_indent, dim};

use crate::cli::{
    args::TocCommand,
    commands::shared::{print_json, styled},
    context::CommandContext,
};

/// Prints the table of contents of a markdown file.
pub fn run(ctx: &CommandContext, cmd: &TocCommand) -> ExitCode {
    let options = ctx.render_options(None);
    let rendered = match process_markdown(&ctx.resolve(&cmd.file), &options) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return if cmd.nested {
            print_json(&nest_toc(&rendered.toc))
        } else {
            print_json(&rendered.toc)
        };
    }

    if rendered.toc.is_empty() {
        println!("{}", styled("No headings.", dim));
        return ExitCode::SUCCESS;
    }
    for item in &rendered.toc {
        println!("{}", format_entry(item));
    }
    ExitCode::SUCCESS
}

/// Formats one TOC entry as an indented list line.
fn format_entry(item: &TocItem) -> String {
    format!(
        "{}- {} {}",
        depth_indent(item.depth),
        item.value,
        styled(&format!("#{}", item.id), dim)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_indents_by_depth() {
        let item = TocItem {
            value: "Install".into(),
            id: "install".into(),
            depth: 3,
        };
        let line = format_entry(&item);
        assert!(line.starts_with("    - Install "));
        assert!(line.contains("#install"));
    }
}
