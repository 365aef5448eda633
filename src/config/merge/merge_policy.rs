//! Built-in defaults every configuration starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults for every key a config file may omit.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("discovery.claude_dir", ".claude")?
        .set_default("discovery.skills_dir", "skills")?
        .set_default("discovery.agents_dir", "agents")?
        .set_default("discovery.include_user_roots", true)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
