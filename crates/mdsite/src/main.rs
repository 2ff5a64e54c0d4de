//! Command-line interface for the `mdsite` markdown renderer.

use std::process::ExitCode;

mod cli;

use cli::{CommandContext, args::Commands, commands, logging};

fn main() -> ExitCode {
    let cli = cli::args::parse_cli();
    logging::init_tracing(cli.verbose, cli.log_format);

    // `init` must work even when an existing config file is invalid.
    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
