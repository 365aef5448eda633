//! Resource kinds: what distinguishes a skill from a subagent.

use crate::frontmatter::fields;
use serde::Serialize;
use serde_yaml::Mapping;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A family of capability resources sharing one spec file convention.
///
/// The discovery and catalog engine is generic over this trait; each kind
/// contributes its file name, directory name, and extension fields.
pub trait ResourceKind: Send + Sync + 'static {
    /// Kind-specific frontmatter fields, carried through unchanged.
    type Extension: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static;

    /// Spec file inside each resource directory.
    const SPEC_FILE: &'static str;

    /// Directory name under each search base (`skills`, `agents`).
    const DIR_NAME: &'static str;

    /// Human-readable kind name used in logs and CLI output.
    const LABEL: &'static str;

    fn decode_extension(fields: &Mapping) -> Self::Extension;
}

/// Skills: `SKILL.md` under `skills/`.
#[derive(Debug, Clone, Copy)]
pub struct Skill;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ResourceKind for Skill {
    type Extension = SkillExtension;

    const SPEC_FILE: &'static str = "SKILL.md";
    const DIR_NAME: &'static str = "skills";
    const LABEL: &'static str = "skill";

    fn decode_extension(fields: &Mapping) -> SkillExtension {
        SkillExtension {
            license: fields::string(fields, "license"),
            compatibility: fields::string(fields, "compatibility"),
            metadata: fields::string_map(fields, "metadata"),
        }
    }
}

/// Subagents: `AGENT.md` under `agents/`.
#[derive(Debug, Clone, Copy)]
pub struct Subagent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubagentExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_actions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

impl ResourceKind for Subagent {
    type Extension = SubagentExtension;

    const SPEC_FILE: &'static str = "AGENT.md";
    const DIR_NAME: &'static str = "agents";
    const LABEL: &'static str = "subagent";

    fn decode_extension(fields: &Mapping) -> SubagentExtension {
        SubagentExtension {
            model: fields::string(fields, "model"),
            max_actions: fields::uint(fields, "max_actions"),
            thinking_enabled: fields::flag(fields, "thinking_enabled"),
            thinking_budget: fields::uint(fields, "thinking_budget"),
        }
    }
}
