//! Platform directory lookups.
//!
//! `directories::BaseDirs` follows the XDG Base Directory convention on Linux
//! and the native locations elsewhere.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "armory";
const CONFIG_FILE: &str = "config.toml";

/// Current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Platform config home (`$XDG_CONFIG_HOME`, or `~/.config` on Linux).
pub fn config_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// `<config home>/armory/config.toml`
pub fn global_config_file() -> Option<PathBuf> {
    config_home().map(|home| home.join(APP_DIR).join(CONFIG_FILE))
}

/// `<workspace>/.armory/config.toml`
pub fn workspace_config_file(workspace_root: &Path) -> PathBuf {
    workspace_root
        .join(format!(".{}", APP_DIR))
        .join(CONFIG_FILE)
}
