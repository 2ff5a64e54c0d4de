//! Configuration file discovery.
//!
//! A docs tree can carry several `.mdsite.toml` files: one per project, one per
//! subsite, and a per-user `~/.mdsite.toml`. Discovery finds the ones in effect for a
//! working directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".mdsite.toml";

/// Returns the config files that apply to `cwd`, highest precedence first.
///
/// Every `.mdsite.toml` in `cwd` and its ancestors is collected, closest first. A file with
/// `root = true` ends the walk and also excludes `~/.mdsite.toml`; otherwise the global file
/// is appended last when it exists.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file() && !configs.contains(p)) {
        configs.push(global);
    }
    configs
}

/// Returns the path to the global configuration file (`~/.mdsite.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
