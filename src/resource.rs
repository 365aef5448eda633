//! Capability resources: the entity shared by skills and subagents.

pub mod kind;
pub mod name;

pub use kind::{ResourceKind, Skill, SkillExtension, Subagent, SubagentExtension};
pub use name::{validate_name, MAX_NAME_LEN};

use crate::error::CatalogError;
use crate::types::SourceType;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A named, directory-backed (or programmatic) capability resource.
///
/// `body` is empty until the resource is loaded in full; once filled it is
/// never cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityResource<X> {
    pub name: String,
    pub description: String,
    pub allowed_tools: Vec<String>,
    pub extension: X,
    pub source: SourceType,
    /// Resource directory; empty for programmatic resources.
    pub directory: PathBuf,
    /// Verbatim frontmatter block, kept for diagnostics.
    pub raw_frontmatter: String,
    pub body: String,
}

/// A resource of kind `K`.
pub type Resource<K> = CapabilityResource<<K as ResourceKind>::Extension>;

impl<X: Default> CapabilityResource<X> {
    /// Build an in-memory resource for programmatic registration.
    pub fn programmatic(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            allowed_tools: Vec::new(),
            extension: X::default(),
            source: SourceType::Programmatic,
            directory: PathBuf::new(),
            raw_frontmatter: String::new(),
            body: String::new(),
        }
    }
}

impl<X> CapabilityResource<X> {
    pub fn with_allowed_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extension(mut self, extension: X) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Record which root produced this resource and where it lives.
    pub(crate) fn with_origin(mut self, source: SourceType, directory: PathBuf) -> Self {
        self.source = source;
        self.directory = directory;
        self
    }

    pub fn is_loaded(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn is_programmatic(&self) -> bool {
        self.source == SourceType::Programmatic
    }

    /// Whether this resource permits `tool`. An empty allowlist permits all.
    pub fn allows_tool(&self, tool: &str) -> bool {
        self.allowed_tools.is_empty() || self.allowed_tools.iter().any(|t| t == tool)
    }

    /// Path of the spec file, `None` for programmatic resources.
    pub fn spec_path(&self, spec_file: &str) -> Option<PathBuf> {
        if self.directory.as_os_str().is_empty() {
            None
        } else {
            Some(self.directory.join(spec_file))
        }
    }

    /// Entity validation: name grammar, required fields, directory name.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_name(&self.name).map_err(|source| CatalogError::InvalidName {
            name: self.name.clone(),
            source,
        })?;

        if self.description.trim().is_empty() {
            return Err(CatalogError::MissingField {
                name: self.name.clone(),
                field: "description",
            });
        }

        if !self.is_programmatic() {
            let directory = directory_name(&self.directory);
            if directory != self.name {
                return Err(CatalogError::DirectoryMismatch {
                    name: self.name.clone(),
                    directory,
                });
            }
        }

        Ok(())
    }
}

fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// One row of a discovery report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
    pub name: String,
    pub description: String,
    pub source: SourceType,
    pub path: PathBuf,
}

/// Snapshot of a cataloged resource as seen by consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceInfo<X> {
    pub name: String,
    pub description: String,
    pub allowed_tools: Vec<String>,
    pub extension: X,
    pub source: SourceType,
    pub directory: PathBuf,
    pub active: bool,
    pub body_loaded: bool,
}

impl<X: Clone> ResourceInfo<X> {
    pub fn from_resource(resource: &CapabilityResource<X>, active: bool) -> Self {
        Self {
            name: resource.name.clone(),
            description: resource.description.clone(),
            allowed_tools: resource.allowed_tools.clone(),
            extension: resource.extension.clone(),
            source: resource.source,
            directory: resource.directory.clone(),
            active,
            body_loaded: resource.is_loaded(),
        }
    }
}
