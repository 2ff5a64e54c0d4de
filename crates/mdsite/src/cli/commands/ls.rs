//! Implementation of `mdsite ls`.

use std::process::ExitCode;

use mdsite_document::slug_of;
use mdsite_highlight::dim;

use crate::cli::{args::LsCommand, commands::shared::styled, context::CommandContext};

/// Lists the entries of a category directory under the docs root.
///
/// Markdown documents are shown by slug; other entries are shown dimmed by name.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let docs = ctx.docs_root();
    let names = match docs.list(&cmd.category) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if names.is_empty() {
        println!("{}", styled("No documents found.", dim));
        return ExitCode::SUCCESS;
    }

    for name in &names {
        match slug_of(name) {
            Some(slug) => println!("{slug}"),
            None => println!("{}", styled(name, dim)),
        }
    }
    ExitCode::SUCCESS
}
