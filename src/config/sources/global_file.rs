//! Global config file: `<platform config dir>/armory/config.toml`.

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file to the builder if the platform has a config dir.
/// A missing file is not an error.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg_root::global_config_file() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Global config source");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        None => Ok(builder),
    }
}
