//! Implementation of `mdsite get`.

use std::process::ExitCode;

use mdsite_highlight::Language;

use crate::cli::{
    args::GetCommand,
    commands::shared::{print_content, print_json},
    context::CommandContext,
};

/// Renders a document of the docs root by category and slug.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
    let docs = ctx.docs_root();
    let options = ctx.render_options(cmd.base.base.as_deref());

    let doc = match docs.get(&cmd.category, &cmd.slug, &options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&doc);
    }

    if !doc.content_html.is_empty() {
        print_content(&doc.content_html, Language::Html);
    }
    ExitCode::SUCCESS
}
