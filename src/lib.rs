//! Armory: Capability Resource Discovery
//!
//! Discovers `SKILL.md` skills and `AGENT.md` subagents across prioritized
//! search roots, keeps a metadata-only catalog per kind, and loads resource
//! bodies on first use.

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod resource;
pub mod tooling;
pub mod types;

pub use catalog::{CapabilityPort, Catalog, SkillCatalog, SubagentCatalog};
pub use discovery::DiscoveryResult;
pub use error::{ApiError, CatalogError, ErrorKind, FrontmatterError, NameError};
pub use resource::{
    validate_name, CapabilityResource, Resource, ResourceInfo, ResourceKind, ResourceSummary,
    Skill, SkillExtension, Subagent, SubagentExtension,
};
pub use types::{SearchRoot, SourceType};
