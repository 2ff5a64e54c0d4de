//! Implementation of `mdsite check`.

use std::process::ExitCode;

use mdsite_config::{ConfigWarning, discover_config_files};
use mdsite_highlight::{dim, subheader, success, warning};

use crate::cli::{commands::shared::styled, context::CommandContext};

/// Shows configuration files, the docs root and validation warnings.
///
/// Exits with failure when any warning is reported.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    let config_files = discover_config_files(cwd);
    println!("{}", styled("Config files:", subheader));
    if config_files.is_empty() {
        println!("   {}", styled("(none found, using defaults)", dim));
    } else {
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    println!("{}", styled("Docs root:", subheader));
    println!("   {}", config.docs_root(cwd).display());
    println!();

    let warnings = config.validate(cwd);
    if warnings.is_empty() {
        println!("{}", styled("No issues found.", success));
        return ExitCode::SUCCESS;
    }

    println!(
        "{}",
        styled(&format!("Warnings ({}):", warnings.len()), subheader)
    );
    for w in &warnings {
        println!("   {}", styled(&w.to_string(), warning));
    }
    println!();

    for hint in hints(&warnings) {
        println!("{}", styled(hint, dim));
    }

    ExitCode::FAILURE
}

/// Returns hints for resolving common warnings, one per warning kind.
fn hints(warnings: &[ConfigWarning]) -> Vec<&'static str> {
    let mut hints = Vec::new();
    for w in warnings {
        let hint = match w {
            ConfigWarning::DocsRootMissing { .. } | ConfigWarning::DocsRootNotDirectory { .. } => {
                "Hint: set [site] docs_root in .mdsite.toml or create a docs/ directory"
            }
            ConfigWarning::BasePathTrailingSlash { .. }
            | ConfigWarning::BasePathNotAbsolute { .. } => {
                "Hint: links_base_path should look like \"/docs\""
            }
        };
        if !hints.contains(&hint) {
            hints.push(hint);
        }
    }
    hints
}
