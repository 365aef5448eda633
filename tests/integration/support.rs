//! Shared fixtures: a temporary workspace and home directory.

use armory::config::DiscoveryConfig;
use armory::{Catalog, ResourceKind};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Workspace {
    _temp: TempDir,
    pub project: PathBuf,
    pub home: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("proj");
        let home = temp.path().join("home");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&home).unwrap();
        Self {
            _temp: temp,
            project,
            home,
        }
    }

    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            user_home: Some(self.home.clone()),
            ..Default::default()
        }
    }

    pub fn catalog<K: ResourceKind>(&self) -> Catalog<K> {
        Catalog::new(self.discovery_config().roots::<K>(&self.project))
    }

    /// `<project>/<kind dir>`
    pub fn project_root<K: ResourceKind>(&self) -> PathBuf {
        self.project.join(K::DIR_NAME)
    }

    /// `<project>/.claude/<kind dir>`
    pub fn claude_root<K: ResourceKind>(&self) -> PathBuf {
        self.project.join(".claude").join(K::DIR_NAME)
    }

    /// `<home>/.claude/<kind dir>`
    pub fn user_root<K: ResourceKind>(&self) -> PathBuf {
        self.home.join(".claude").join(K::DIR_NAME)
    }
}

/// Write `<root>/<dir>/<spec file>` with the given frontmatter fields and body.
pub fn write_spec<K: ResourceKind>(
    root: &Path,
    dir: &str,
    frontmatter: &str,
    body: &str,
) -> PathBuf {
    let resource_dir = root.join(dir);
    fs::create_dir_all(&resource_dir).unwrap();
    let path = resource_dir.join(K::SPEC_FILE);
    fs::write(&path, format!("---\n{}\n---\n{}", frontmatter.trim(), body)).unwrap();
    path
}

/// Write a resource whose directory matches its name.
pub fn write_resource<K: ResourceKind>(root: &Path, name: &str, description: &str) -> PathBuf {
    write_spec::<K>(
        root,
        name,
        &format!("name: {}\ndescription: {}", name, description),
        &format!("Instructions for {}.\n", name),
    )
}
