//! CLI Tooling
//!
//! Workspace-scoped commands over the skill and subagent catalogs. Every
//! invocation builds fresh catalogs and runs discovery, so activation state
//! is never exposed here.

use crate::catalog::{CapabilityPort, Catalog, SkillCatalog, SubagentCatalog};
use crate::config::{ArmoryConfig, ConfigLoader};
use crate::discovery::DiscoveryResult;
use crate::error::{ApiError, CatalogError};
use crate::logging::LoggingConfig;
use crate::resource::{Resource, ResourceInfo, ResourceKind, Skill, Subagent};
use crate::types::SearchRoot;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Armory CLI - discover and inspect skills and subagents
#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(about = "Discover and inspect SKILL.md skills and AGENT.md subagents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the loaded configuration.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Skills (SKILL.md)
    Skills {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Subagents (AGENT.md)
    Agents {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CatalogCommands {
    /// Discover and list resources
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Load one resource in full and print it
    Show {
        /// Resource name
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Discover and validate every resource; fails if any is invalid
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show search roots in priority order
    Roots,
}

/// CLI context holding the loaded configuration and both catalogs
pub struct CliContext {
    config: ArmoryConfig,
    skills: SkillCatalog,
    agents: SubagentCatalog,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create a context from an already loaded configuration
    pub fn with_config(workspace_root: PathBuf, config: ArmoryConfig) -> Self {
        let skills = Catalog::new(config.discovery.roots::<Skill>(&workspace_root));
        let agents = Catalog::new(config.discovery.roots::<Subagent>(&workspace_root));
        Self {
            config,
            skills,
            agents,
        }
    }

    pub fn config(&self) -> &ArmoryConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Skills { command } => {
                run::<Skill, _>(&self.skills, self.skills.roots(), command)
            }
            Commands::Agents { command } => {
                run::<Subagent, _>(&self.agents, self.agents.roots(), command)
            }
        }
    }
}

fn run<K, P>(port: &P, roots: &[SearchRoot], command: &CatalogCommands) -> Result<String, ApiError>
where
    K: ResourceKind,
    P: CapabilityPort<K> + ?Sized,
{
    match command {
        CatalogCommands::List { format } => {
            let format = OutputFormat::parse(format)?;
            port.discover()?;
            format_list::<K>(&port.list_all()?, format)
        }
        CatalogCommands::Show { name, format } => {
            let format = OutputFormat::parse(format)?;
            port.discover()?;
            let resource = port.load_full_metadata(name)?;
            format_resource::<K>(&resource, format)
        }
        CatalogCommands::Validate { format } => {
            let format = OutputFormat::parse(format)?;
            let discovered = port.discover()?;
            let failures = port.validate_all()?;
            format_validation::<K>(&discovered, &failures, format)
        }
        CatalogCommands::Roots => Ok(format_roots(roots)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(format: &str) -> Result<Self, ApiError> {
        match format {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

fn format_list<K: ResourceKind>(
    resources: &[ResourceInfo<K::Extension>],
    format: OutputFormat,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(resources)?);
    }
    if resources.is_empty() {
        return Ok(format!("No {}s found.", K::LABEL));
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Source", "Description"]);
    for r in resources {
        table.add_row(vec![r.name.as_str(), r.source.as_str(), r.description.as_str()]);
    }
    Ok(table.to_string())
}

fn format_resource<K: ResourceKind>(
    resource: &Resource<K>,
    format: OutputFormat,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(resource)?);
    }

    let mut output = format!("Name: {}\n", resource.name);
    output.push_str(&format!("Description: {}\n", resource.description));
    output.push_str(&format!("Source: {}\n", resource.source));
    if let Some(path) = resource.spec_path(K::SPEC_FILE) {
        output.push_str(&format!("Path: {}\n", path.display()));
    }
    if !resource.allowed_tools.is_empty() {
        output.push_str(&format!("Allowed tools: {}\n", resource.allowed_tools.join(", ")));
    }
    output.push('\n');
    output.push_str(&resource.body);
    Ok(output)
}

fn format_validation<K: ResourceKind>(
    discovered: &DiscoveryResult,
    failures: &BTreeMap<String, CatalogError>,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let count = discovered.skipped.len() + failures.len();
    let report = match format {
        OutputFormat::Json => {
            let by_name: BTreeMap<&str, String> = failures
                .iter()
                .map(|(name, e)| (name.as_str(), e.to_string()))
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "discovered": discovered.total_count,
                "skipped": discovered.skipped,
                "failures": by_name,
            }))?
        }
        OutputFormat::Text => discovered
            .skipped
            .iter()
            .map(|s| format!("  {}: {}", s.path.display(), s.reason))
            .chain(failures.iter().map(|(name, e)| format!("  {}: {}", name, e)))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if count > 0 {
        return Err(ApiError::ValidationFailed { count, report });
    }
    Ok(match format {
        OutputFormat::Json => report,
        OutputFormat::Text => format!("All {} {}s valid.", discovered.total_count, K::LABEL),
    })
}

fn format_roots(roots: &[SearchRoot]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Priority", "Source", "Path", "Exists"]);
    for (i, root) in roots.iter().enumerate() {
        let exists = if root.path.is_dir() { "yes" } else { "no" };
        table.add_row(vec![
            (i + 1).to_string(),
            root.source.to_string(),
            root.path.display().to_string(),
            exists.to_string(),
        ]);
    }
    table.to_string()
}
