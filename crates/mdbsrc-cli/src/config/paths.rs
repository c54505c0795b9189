//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application directory name under the config root.
const APP_DIR: &str = "mdbsrc";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// Lookup order:
/// 1. `{dir}/config.toml` when `dir` is given.
/// 2. `$XDG_CONFIG_HOME/mdbsrc/config.toml` when set and non-empty.
/// 3. `~/.config/mdbsrc/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let xdg = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty());
    let root = match xdg {
        Some(xdg) => PathBuf::from(xdg),
        None => {
            let home = std::env::var("HOME").context("HOME environment variable is not set")?;
            Path::new(&home).join(".config")
        }
    };

    Ok(root.join(APP_DIR).join(CONFIG_FILE))
}
