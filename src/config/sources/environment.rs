//! Environment variable source: ARMORY prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `ARMORY__DISCOVERY__SKILLS_DIR=caps` sets `discovery.skills_dir`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("ARMORY")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
