//! Core types shared by discovery and the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which search root produced a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// `<workspace>/skills` or `<workspace>/agents`
    Project,
    /// `<workspace>/.claude/skills` or `<workspace>/.claude/agents`
    ProjectClaude,
    /// `~/.claude/skills` or `~/.claude/agents`
    User,
    /// Registered in memory, not backed by a file
    Programmatic,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Project => "project",
            SourceType::ProjectClaude => "project-claude",
            SourceType::User => "user",
            SourceType::Programmatic => "programmatic",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directory searched during discovery, tagged with the source it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    pub path: PathBuf,
    pub source: SourceType,
}

impl SearchRoot {
    pub fn new(path: impl Into<PathBuf>, source: SourceType) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
