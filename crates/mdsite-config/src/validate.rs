//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The docs root does not exist.
    DocsRootMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The docs root exists but is not a directory.
    DocsRootNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The links base path ends with `/`, which doubles the separator in rewritten links.
    BasePathTrailingSlash {
        /// The configured base path.
        base: String,
    },
    /// The links base path does not start with `/`, so rewritten links are page-relative.
    BasePathNotAbsolute {
        /// The configured base path.
        base: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocsRootMissing { path } => {
                write!(f, "docs root does not exist: {path}")
            }
            Self::DocsRootNotDirectory { path } => {
                write!(f, "docs root is not a directory: {path}")
            }
            Self::BasePathTrailingSlash { base } => {
                write!(
                    f,
                    "links base path '{base}' ends with '/'; links will contain '//'"
                )
            }
            Self::BasePathNotAbsolute { base } => {
                write!(f, "links base path '{base}' does not start with '/'")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A docs root that doesn't exist or isn't a directory
/// - A links base path that would produce malformed links
pub fn validate_config(config: &Config, cwd: &Path) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let docs_root = config.docs_root(cwd);
    if !docs_root.exists() {
        warnings.push(ConfigWarning::DocsRootMissing {
            path: docs_root.display().to_string(),
        });
    } else if !docs_root.is_dir() {
        warnings.push(ConfigWarning::DocsRootNotDirectory {
            path: docs_root.display().to_string(),
        });
    }

    warnings.extend(validate_base_path(&config.site.links_base_path));
    warnings
}

/// Checks the links base path. The empty base path is valid.
fn validate_base_path(base: &str) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if base.is_empty() {
        return warnings;
    }

    if !base.starts_with('/') {
        warnings.push(ConfigWarning::BasePathNotAbsolute {
            base: base.to_string(),
        });
    }
    if base.ends_with('/') {
        warnings.push(ConfigWarning::BasePathTrailingSlash {
            base: base.to_string(),
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::SiteSettings;

    fn config_with(docs_root: &Path, base: &str) -> Config {
        Config {
            site: SiteSettings {
                docs_root: Some(docs_root.to_path_buf()),
                links_base_path: base.into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with(tmp.path(), "/docs");
        assert!(config.validate(tmp.path()).is_empty());
    }

    #[test]
    fn test_docs_root_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with(&tmp.path().join("nope"), "");

        let warnings = config.validate(tmp.path());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigWarning::DocsRootMissing { .. }));
    }

    #[test]
    fn test_default_docs_root_uses_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let warnings = Config::default().validate(tmp.path());
        assert!(
            warnings.iter().any(
                |w| matches!(w, ConfigWarning::DocsRootMissing { path } if path.ends_with("docs"))
            )
        );

        fs::create_dir(tmp.path().join("docs")).unwrap();
        assert!(Config::default().validate(tmp.path()).is_empty());
    }

    #[test]
    fn test_docs_root_not_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("docs.md");
        fs::write(&file, "# not a dir").unwrap();

        let warnings = config_with(&file, "").validate(tmp.path());
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::DocsRootNotDirectory { .. }]
        ));
    }

    #[test]
    fn test_base_path_checks() {
        assert!(validate_base_path("").is_empty());
        assert!(validate_base_path("/docs").is_empty());
        assert_eq!(
            validate_base_path("docs/"),
            vec![
                ConfigWarning::BasePathNotAbsolute {
                    base: "docs/".into()
                },
                ConfigWarning::BasePathTrailingSlash {
                    base: "docs/".into()
                },
            ]
        );
        assert_eq!(
            validate_base_path("/"),
            vec![ConfigWarning::BasePathTrailingSlash { base: "/".into() }]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::DocsRootMissing {
            path: "/some/path".into(),
        };
        assert_eq!(warning.to_string(), "docs root does not exist: /some/path");

        let warning = ConfigWarning::BasePathNotAbsolute { base: "docs".into() };
        assert_eq!(
            warning.to_string(),
            "links base path 'docs' does not start with '/'"
        );
    }
}
