//! Configuration system for mdsite.
//!
//! mdsite uses TOML configuration files named `.mdsite.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.mdsite.toml` files found, then loading `~/.mdsite.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawRenderSettings, RawSiteSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Docs directory name used when no `docs_root` is configured.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Top-level merged configuration for mdsite.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.mdsite.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Site layout settings.
    pub site: SiteSettings,
    /// Markdown rendering settings.
    pub render: RenderSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.mdsite.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.mdsite.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.mdsite.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the effective docs root.
    ///
    /// Uses the configured `docs_root` if set, else `docs` next to the closest config file,
    /// else `docs` under `cwd`.
    pub fn docs_root(&self, cwd: &Path) -> PathBuf {
        match (&self.site.docs_root, &self.config_root) {
            (Some(root), _) => root.clone(),
            (None, Some(config_root)) => config_root.join(DEFAULT_DOCS_DIR),
            (None, None) => cwd.join(DEFAULT_DOCS_DIR),
        }
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A docs root that doesn't exist or isn't a directory
    /// - A links base path with a trailing slash or without a leading slash
    pub fn validate(&self, cwd: &Path) -> Vec<ConfigWarning> {
        validate_config(self, cwd)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration in the same format as a `.mdsite.toml` file,
    /// with the docs root fully resolved.
    pub fn settings_to_toml(&self, cwd: &Path) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            site: SerializableSite {
                docs_root: self.docs_root(cwd).display().to_string(),
                links_base_path: &self.site.links_base_path,
            },
            render: &self.render,
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// Site layout settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    /// Resolved docs directory, if configured.
    pub docs_root: Option<PathBuf>,
    /// Prefix for rewritten document links, used verbatim.
    pub links_base_path: String,
}

/// Markdown rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Enable pipe tables.
    pub tables: bool,
    /// Enable `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Enable task list checkboxes.
    pub tasklists: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Site layout settings.
    site: SerializableSite<'a>,
    /// Rendering settings.
    render: &'a RenderSettings,
}

/// Site settings with the docs root resolved.
#[derive(Serialize)]
struct SerializableSite<'a> {
    /// Effective docs directory.
    docs_root: String,
    /// Prefix for rewritten document links.
    links_base_path: &'a str,
}
