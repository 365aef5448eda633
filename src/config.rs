//! Configuration
//!
//! Layered configuration for discovery and logging. Sources, lowest to highest
//! precedence: built-in defaults, the global config file, the workspace config
//! file, then `ARMORY__SECTION__KEY` environment variables.

pub mod discovery;
pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use discovery::DiscoveryConfig;
pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmoryConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
