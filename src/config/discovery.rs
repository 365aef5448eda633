//! Discovery settings and search-root derivation.

use super::paths::xdg_root;
use crate::resource::{ResourceKind, Skill, Subagent};
use crate::types::{SearchRoot, SourceType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_claude_dir() -> String {
    ".claude".to_string()
}

fn default_skills_dir() -> String {
    Skill::DIR_NAME.to_string()
}

fn default_agents_dir() -> String {
    Subagent::DIR_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Where to look for resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Hidden tool directory, both in the workspace and under the home directory
    #[serde(default = "default_claude_dir")]
    pub claude_dir: String,

    /// Directory holding skills under each base
    #[serde(default = "default_skills_dir")]
    pub skills_dir: String,

    /// Directory holding subagents under each base
    #[serde(default = "default_agents_dir")]
    pub agents_dir: String,

    /// Whether to search the user's home directory
    #[serde(default = "default_true")]
    pub include_user_roots: bool,

    /// Home directory override; None means the platform home
    #[serde(default)]
    pub user_home: Option<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            claude_dir: default_claude_dir(),
            skills_dir: default_skills_dir(),
            agents_dir: default_agents_dir(),
            include_user_roots: default_true(),
            user_home: None,
        }
    }
}

impl DiscoveryConfig {
    /// Search roots for kind `K`, highest priority first:
    /// `<ws>/<dir>`, `<ws>/.claude/<dir>`, `<home>/.claude/<dir>`.
    ///
    /// The user root is omitted when disabled or when no home directory is known.
    pub fn roots<K: ResourceKind>(&self, workspace_root: &Path) -> Vec<SearchRoot> {
        let dir = self.kind_dir::<K>();
        let mut roots = vec![
            SearchRoot::new(workspace_root.join(dir), SourceType::Project),
            SearchRoot::new(
                workspace_root.join(&self.claude_dir).join(dir),
                SourceType::ProjectClaude,
            ),
        ];

        if self.include_user_roots {
            match self.user_home.clone().or_else(xdg_root::home_dir) {
                Some(home) => roots.push(SearchRoot::new(
                    home.join(&self.claude_dir).join(dir),
                    SourceType::User,
                )),
                None => tracing::debug!("No home directory; skipping user {} root", K::LABEL),
            }
        }

        roots
    }

    fn kind_dir<K: ResourceKind>(&self) -> &str {
        if K::DIR_NAME == Skill::DIR_NAME {
            self.skills_dir.as_str()
        } else if K::DIR_NAME == Subagent::DIR_NAME {
            self.agents_dir.as_str()
        } else {
            K::DIR_NAME
        }
    }
}
