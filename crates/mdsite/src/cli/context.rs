//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mdsite_config::Config;
use mdsite_document::{DocsRoot, ParseOptions, RenderOptions};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(
            cwd = %cwd.display(),
            config_root = ?config.config_root,
            docs_root = %config.docs_root(&cwd).display(),
            links_base_path = %config.site.links_base_path,
            "loaded configuration"
        );
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds render options from the configuration, with an optional base path override.
    pub fn render_options(&self, base_override: Option<&str>) -> RenderOptions {
        let render = self.config.render;
        RenderOptions {
            links_base_path: base_override
                .unwrap_or(&self.config.site.links_base_path)
                .to_string(),
            parse: ParseOptions {
                tables: render.tables,
                strikethrough: render.strikethrough,
                tasklists: render.tasklists,
            },
        }
    }

    /// Returns the configured docs root.
    pub fn docs_root(&self) -> DocsRoot {
        DocsRoot::new(self.config.docs_root(&self.cwd))
    }

    /// Resolves a command-line path against the working directory.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.cwd.join(file)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use mdsite_config::{RenderSettings, SiteSettings};

    use super::*;

    fn context(base: &str) -> CommandContext {
        CommandContext {
            cwd: PathBuf::from("/work"),
            config: Config {
                site: SiteSettings {
                    docs_root: None,
                    links_base_path: base.into(),
                },
                render: RenderSettings {
                    tables: false,
                    ..RenderSettings::default()
                },
                config_root: None,
            },
        }
    }

    #[test]
    fn test_render_options_from_config() {
        let options = context("/docs").render_options(None);
        assert_eq!(options.links_base_path, "/docs");
        assert!(!options.parse.tables);
        assert!(options.parse.strikethrough);
        assert!(options.parse.tasklists);
    }

    #[test]
    fn test_base_override_wins() {
        let options = context("/docs").render_options(Some("/guide"));
        assert_eq!(options.links_base_path, "/guide");

        let options = context("/docs").render_options(Some(""));
        assert_eq!(options.links_base_path, "");
    }

    #[test]
    fn test_docs_root_defaults_under_cwd() {
        let ctx = context("");
        assert_eq!(ctx.docs_root().path(), Path::new("/work/docs"));
        assert_eq!(ctx.resolve(Path::new("a.md")), PathBuf::from("/work/a.md"));
        assert_eq!(ctx.resolve(Path::new("/abs/a.md")), PathBuf::from("/abs/a.md"));
    }
}
