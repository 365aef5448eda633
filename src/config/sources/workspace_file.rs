//! Workspace config file: `<workspace>/.armory/config.toml`.

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add the workspace config file to the builder. A missing file is not an error.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = xdg_root::workspace_config_file(workspace_root);
    Ok(builder.add_source(File::from(path).required(false)))
}
