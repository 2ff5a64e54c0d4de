//! Path resolution for configured directories.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths. Paths are not required to
//! exist; missing directories are reported by validation instead.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path against the directory of the file that defined it.
///
/// Handles three cases:
/// - Tilde paths (`~/docs`) - expanded to home directory
/// - Relative paths (`./docs`, `../shared`) - joined to `config_dir`
/// - Absolute paths (`/srv/docs`) - returned as-is
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(strip_cur_dir(&expanded)))
    }
}

/// Drops a leading `./` so joined paths read naturally.
fn strip_cur_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./docs", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_path("content/docs", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/content/docs"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved = resolve_path("../shared", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/../shared"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/srv/docs", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_resolve_missing_path_is_not_an_error() {
        let resolved = resolve_path("./does/not/exist", Path::new("/nowhere")).unwrap();
        assert_eq!(resolved, PathBuf::from("/nowhere/does/not/exist"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_path("~/notes", Path::new("/project")).unwrap();
        assert_eq!(resolved, home.join("notes"));
    }

    #[test]
    fn test_expand_tilde_alone() {
        let result = expand_tilde("~").unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(result, home);
    }

    #[test]
    fn test_expand_tilde_not_at_start() {
        let result = expand_tilde("foo/~/bar").unwrap();
        assert_eq!(result, PathBuf::from("foo/~/bar"));
    }
}
