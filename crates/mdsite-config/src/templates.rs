//! Starter files written by `mdsite init`.
//!
//! The sources under `templates/` are live TOML so tests can check every documented key
//! still parses. `init` writes them with each setting commented out: a fresh file changes
//! nothing until the user uncomments a line.

/// Project-level starter (`.mdsite.toml` next to the docs).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Per-user starter (`~/.mdsite.toml`).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project starter file with all settings commented out.
pub fn local_template() -> String {
    disable_settings(LOCAL_TEMPLATE)
}

/// Returns the per-user starter file with all settings commented out.
pub fn global_template() -> String {
    disable_settings(GLOBAL_TEMPLATE)
}

/// Prefixes every non-blank, non-comment line with `# `.
fn disable_settings(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            if line.trim().is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
