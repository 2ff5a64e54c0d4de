//! Implementation of `mdsite render`.

use std::process::ExitCode;

use mdsite_document::process_markdown;
use mdsite_highlight::Language;

use crate::cli::{
    args::RenderCommand,
    commands::shared::{print_content, print_json},
    context::CommandContext,
};

/// Renders a markdown file and prints the HTML fragment or JSON document.
pub fn run(ctx: &CommandContext, cmd: &RenderCommand) -> ExitCode {
    let options = ctx.render_options(cmd.base.base.as_deref());
    let rendered = match process_markdown(&ctx.resolve(&cmd.file), &options) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&rendered);
    }

    if !rendered.content_html.is_empty() {
        print_content(&rendered.content_html, Language::Html);
    }
    ExitCode::SUCCESS
}
