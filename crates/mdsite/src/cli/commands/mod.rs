//! Command implementations for the `mdsite` CLI.

use std::process::ExitCode;

use crate::cli::{args::Commands, context::CommandContext};

mod check;
mod config;
mod get;
mod init;
mod inspect;
mod ls;
mod render;
mod shared;
mod toc;

/// Runs a parsed CLI command.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Render(cmd) => render::run(ctx, &cmd),
        Commands::Toc(cmd) => toc::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
