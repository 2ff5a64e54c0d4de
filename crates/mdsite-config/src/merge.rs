//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, RenderSettings, SiteSettings,
    parse::{RawConfig, RawRenderSettings, RawSiteSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `docs_root`: first definition wins, resolved relative to the file that defined it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let site = merge_site_settings(configs)?;
    let render = merge_render_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        site,
        render,
        config_root,
    })
}

/// Merges site settings.
fn merge_site_settings(configs: &[ParsedConfig]) -> Result<SiteSettings, ConfigError> {
    let mut result = SiteSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref site) = parsed.config.site {
            apply_raw_site(&mut result, site, parsed.dir())?;
        }
    }

    Ok(result)
}

/// Applies raw site settings to result, overwriting any present values.
fn apply_raw_site(
    result: &mut SiteSettings,
    raw: &RawSiteSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.docs_root {
        result.docs_root = Some(resolve_path(v, config_dir)?);
    }
    if let Some(ref v) = raw.links_base_path {
        result.links_base_path = v.clone();
    }
    Ok(())
}

/// Merges render settings.
fn merge_render_settings(configs: &[ParsedConfig]) -> RenderSettings {
    let mut result = RenderSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref render) = parsed.config.render {
            apply_raw_render(&mut result, render);
        }
    }

    result
}

/// Applies raw render settings to result.
fn apply_raw_render(result: &mut RenderSettings, raw: &RawRenderSettings) {
    if let Some(v) = raw.tables {
        result.tables = v;
    }
    if let Some(v) = raw.strikethrough {
        result.strikethrough = v;
    }
    if let Some(v) = raw.tasklists {
        result.tasklists = v;
    }
}
