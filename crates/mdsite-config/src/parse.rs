//! Configuration file parsing.
//!
//! Parses individual `.mdsite.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Site layout section.
    pub site: Option<RawSiteSettings>,
    /// Markdown rendering section.
    pub render: Option<RawRenderSettings>,
}

/// Raw site settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteSettings {
    /// Directory holding the document categories, relative to the config file.
    pub docs_root: Option<String>,
    /// Prefix for rewritten document links.
    pub links_base_path: Option<String>,
}

/// Raw render settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRenderSettings {
    /// Enable pipe tables.
    pub tables: Option<bool>,
    /// Enable `~~strikethrough~~`.
    pub strikethrough: Option<bool>,
    /// Enable task list checkboxes.
    pub tasklists: Option<bool>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.site.is_none());
        assert!(config.render.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[site]
docs_root = "./content"
links_base_path = "/docs"

[render]
tables = false
tasklists = true
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));

        let site = config.site.unwrap();
        assert_eq!(site.docs_root.as_deref(), Some("./content"));
        assert_eq!(site.links_base_path.as_deref(), Some("/docs"));

        let render = config.render.unwrap();
        assert_eq!(render.tables, Some(false));
        assert_eq!(render.strikethrough, None);
        assert_eq!(render.tasklists, Some(true));
    }

    #[test]
    fn test_parse_partial_site() {
        let toml = "[site]\nlinks_base_path = \"\"\n";
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let site = config.site.unwrap();
        assert!(site.docs_root.is_none());
        assert_eq!(site.links_base_path.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[site\nbroken", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { path, .. }) if path == Path::new("bad.toml")));
    }

    #[test]
    fn test_parse_wrong_type() {
        let result = parse_config_str("[render]\ntables = \"yes\"\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_config_file(Path::new("/nonexistent/dir/.mdsite.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_is_root_config() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root.toml");
        let plain = tmp.path().join("plain.toml");
        let broken = tmp.path().join("broken.toml");
        fs::write(&root, "root = true\n").unwrap();
        fs::write(&plain, "[site]\nlinks_base_path = \"/d\"\n").unwrap();
        fs::write(&broken, "root = [\n").unwrap();

        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&broken));
        assert!(!is_root_config(&tmp.path().join("missing.toml")));
    }
}
