//! Tooling & Integration Layer
//!
//! Command-line access to the skill and subagent catalogs.

pub mod cli;

pub use cli::{CatalogCommands, Cli, CliContext, Commands};
