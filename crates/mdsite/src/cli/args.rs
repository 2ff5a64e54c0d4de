//! Clap argument definitions for the `mdsite` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::cli::logging::LogFormat;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Render markdown documents to HTML fragments with a table of contents")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flag for overriding the configured links base path.
#[derive(Args, Debug, Clone, Default)]
pub struct BaseArgs {
    /// Prefix for rewritten document links [default: from configuration]
    #[arg(long)]
    pub base: Option<String>,
}

/// Arguments for `mdsite render`.
#[derive(Args, Debug, Clone)]
pub struct RenderCommand {
    /// Markdown file to render
    pub file: PathBuf,

    #[command(flatten)]
    /// Links base path override.
    pub base: BaseArgs,

    /// Output `{content_html, toc}` as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mdsite toc`.
#[derive(Args, Debug, Clone)]
pub struct TocCommand {
    /// Markdown file to read headings from
    pub file: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Nest entries under their parent headings (requires --json)
    #[arg(long, requires = "json")]
    pub nested: bool,
}

/// Arguments for `mdsite ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Category directory under the docs root [default: the docs root itself]
    #[arg(default_value = "")]
    pub category: String,
}

/// Arguments for `mdsite get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Document slug (file name without `.md`)
    pub slug: String,

    /// Category directory under the docs root
    #[arg(short = 'c', long, default_value = "")]
    pub category: String,

    #[command(flatten)]
    /// Links base path override.
    pub base: BaseArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mdsite inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Markdown file to inspect
    pub file: PathBuf,

    #[command(flatten)]
    /// Links base path override.
    pub base: BaseArgs,
}

/// Arguments for `mdsite init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.mdsite.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `mdsite` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a markdown file to an HTML fragment
    #[command(after_help = "\
LINKS:
  Relative links to other documents are rewritten to routes below the base path:
    guide/setup.md      -> <base>/guide/setup
    guide/index.md      -> <base>/guide
  External (http...), anchor (#...), site-absolute (/...) and scheme links
  (mailto:...) are left untouched.

EXAMPLES:
  mdsite render docs/intro.md
  mdsite render docs/intro.md --base /docs
  mdsite render docs/intro.md --json")]
    Render(RenderCommand),

    /// Print the table of contents of a markdown file
    Toc(TocCommand),

    /// List documents in a category of the docs root
    Ls(LsCommand),

    /// Render a document from the docs root by slug
    Get(GetCommand),

    /// Show front matter, headings and links of a markdown file
    Inspect(InspectCommand),

    /// Initialize mdsite configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration
    Check,
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mdsite", "render", "a.md", "-vv", "--log-format", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
        let Commands::Render(cmd) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(cmd.file, PathBuf::from("a.md"));
        assert!(cmd.base.base.is_none());
    }

    #[test]
    fn test_get_defaults_to_root_category() {
        let cli = Cli::try_parse_from(["mdsite", "get", "intro", "--base", "/docs"]).unwrap();
        let Commands::Get(cmd) = cli.command else {
            panic!("expected get");
        };
        assert_eq!(cmd.slug, "intro");
        assert_eq!(cmd.category, "");
        assert_eq!(cmd.base.base.as_deref(), Some("/docs"));
    }

    #[test]
    fn test_ls_category_optional() {
        let cli = Cli::try_parse_from(["mdsite", "ls"]).unwrap();
        let Commands::Ls(cmd) = cli.command else {
            panic!("expected ls");
        };
        assert_eq!(cmd.category, "");
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Cli::try_parse_from(["mdsite", "--log-format", "xml", "check"]).is_err());
    }

    #[test]
    fn test_nested_requires_json() {
        assert!(Cli::try_parse_from(["mdsite", "toc", "a.md", "--nested"]).is_err());

        let cli = Cli::try_parse_from(["mdsite", "toc", "a.md", "--json", "--nested"]).unwrap();
        let Commands::Toc(args) = cli.command else {
            panic!("expected toc command");
        };
        assert!(args.json);
        assert!(args.nested);
    }
}
