//! Implementation of `mdsite config`.

use std::process::ExitCode;

use mdsite_highlight::Language;

use crate::cli::{commands::shared::print_content, context::CommandContext};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    match ctx.config.settings_to_toml(&ctx.cwd) {
        Ok(toml) => {
            print_content(&toml, Language::Toml);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
