//! Resource catalog: discovered resources, activation state, and
//! programmatic registrations behind one reader/writer lock.
//!
//! Each catalog instance is independent; skills and subagents each get their
//! own. Activation state is kept in a set beside the resource map, not on the
//! resources, and survives rediscovery.

mod loader;
pub mod port;

pub use port::CapabilityPort;

use crate::discovery::{self, DiscoveryResult};
use crate::error::CatalogError;
use crate::resource::{
    validate_name, CapabilityResource, Resource, ResourceInfo, ResourceKind, Skill, Subagent,
};
use crate::types::{SearchRoot, SourceType};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Catalog of skills.
pub type SkillCatalog = Catalog<Skill>;

/// Catalog of subagents.
pub type SubagentCatalog = Catalog<Subagent>;

struct CatalogState<X> {
    discovered: HashMap<String, CapabilityResource<X>>,
    active: HashSet<String>,
    programmatic: HashMap<String, CapabilityResource<X>>,
}

impl<X> Default for CatalogState<X> {
    fn default() -> Self {
        Self {
            discovered: HashMap::new(),
            active: HashSet::new(),
            programmatic: HashMap::new(),
        }
    }
}

/// Concurrency-safe catalog for one resource kind.
pub struct Catalog<K: ResourceKind> {
    roots: Vec<SearchRoot>,
    state: RwLock<CatalogState<K::Extension>>,
}

pub(crate) fn check_name(name: &str) -> Result<(), CatalogError> {
    validate_name(name).map_err(|source| CatalogError::InvalidName {
        name: name.to_string(),
        source,
    })
}

impl<K: ResourceKind> Catalog<K> {
    /// Create an empty catalog over `roots`, highest priority first.
    pub fn new(roots: Vec<SearchRoot>) -> Self {
        Self {
            roots,
            state: RwLock::new(CatalogState::default()),
        }
    }

    pub fn roots(&self) -> &[SearchRoot] {
        &self.roots
    }

    /// Rebuild the catalog from disk.
    ///
    /// Active resources survive even if their spec file is gone; a re-found
    /// active resource is replaced by its freshly scanned metadata.
    pub fn discover(&self) -> Result<DiscoveryResult, CatalogError> {
        let (mut fresh, result) = discovery::resolve::<K>(&self.roots);

        let mut state = self.state.write();
        let CatalogState {
            discovered, active, ..
        } = &mut *state;
        for name in active.iter() {
            if fresh.contains_key(name) {
                continue;
            }
            if let Some(previous) = discovered.remove(name) {
                tracing::debug!(name = %name, "Carrying over active {} missing from disk", K::LABEL);
                fresh.insert(name.clone(), previous);
            }
        }
        *discovered = fresh;
        drop(state);

        tracing::info!(
            count = result.total_count,
            roots = result.roots_searched.len(),
            "Discovered {} resources",
            K::LABEL
        );
        Ok(result)
    }

    /// Mark a discovered resource active. Returns `false` if it already was.
    pub fn activate(&self, name: &str) -> Result<bool, CatalogError> {
        check_name(name)?;
        let mut state = self.state.write();
        if !state.discovered.contains_key(name) {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        let newly = state.active.insert(name.to_string());
        if newly {
            tracing::debug!(name = %name, "Activated {}", K::LABEL);
        }
        Ok(newly)
    }

    pub fn deactivate(&self, name: &str) -> Result<bool, CatalogError> {
        check_name(name)?;
        if self.state.write().active.remove(name) {
            tracing::debug!(name = %name, "Deactivated {}", K::LABEL);
            Ok(true)
        } else {
            Err(CatalogError::NotFound(name.to_string()))
        }
    }

    /// Register an in-memory resource. It shadows any discovered resource of
    /// the same name until unregistered.
    pub fn register(&self, resource: Resource<K>) -> Result<(), CatalogError> {
        let resource = resource.with_origin(SourceType::Programmatic, Default::default());
        resource.validate()?;

        let mut state = self.state.write();
        if state.programmatic.contains_key(&resource.name) {
            return Err(CatalogError::AlreadyRegistered(resource.name));
        }
        tracing::debug!(name = %resource.name, "Registered {}", K::LABEL);
        state.programmatic.insert(resource.name.clone(), resource);
        Ok(())
    }

    pub fn unregister(&self, name: &str) -> Result<(), CatalogError> {
        check_name(name)?;
        match self.state.write().programmatic.remove(name) {
            Some(_) => Ok(()),
            None => Err(CatalogError::NotFound(name.to_string())),
        }
    }

    /// Look up a resource; programmatic registrations take precedence.
    pub fn get_by_name(&self, name: &str) -> Result<ResourceInfo<K::Extension>, CatalogError> {
        check_name(name)?;
        let state = self.state.read();
        if let Some(r) = state.programmatic.get(name) {
            return Ok(ResourceInfo::from_resource(r, true));
        }
        state
            .discovered
            .get(name)
            .map(|r| ResourceInfo::from_resource(r, state.active.contains(name)))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn is_active(&self, name: &str) -> bool {
        let state = self.state.read();
        state.programmatic.contains_key(name) || state.active.contains(name)
    }

    /// Active discovered resources plus every programmatic one, by name.
    pub fn list_active(&self) -> Vec<ResourceInfo<K::Extension>> {
        let state = self.state.read();
        let mut listed: BTreeMap<&str, ResourceInfo<K::Extension>> = state
            .active
            .iter()
            .filter_map(|name| state.discovered.get(name))
            .map(|r| (r.name.as_str(), ResourceInfo::from_resource(r, true)))
            .collect();
        for r in state.programmatic.values() {
            listed.insert(r.name.as_str(), ResourceInfo::from_resource(r, true));
        }
        listed.into_values().collect()
    }

    /// Every cataloged resource, by name.
    pub fn list_all(&self) -> Vec<ResourceInfo<K::Extension>> {
        let state = self.state.read();
        let mut listed: BTreeMap<&str, ResourceInfo<K::Extension>> = state
            .discovered
            .values()
            .map(|r| {
                let active = state.active.contains(&r.name);
                (r.name.as_str(), ResourceInfo::from_resource(r, active))
            })
            .collect();
        for r in state.programmatic.values() {
            listed.insert(r.name.as_str(), ResourceInfo::from_resource(r, true));
        }
        listed.into_values().collect()
    }

    /// Validate every cataloged resource and report failures by name.
    ///
    /// File-backed resources must also still have their spec file on disk.
    pub fn validate_all(&self) -> BTreeMap<String, CatalogError> {
        let snapshot: Vec<Resource<K>> = {
            let state = self.state.read();
            state
                .discovered
                .values()
                .filter(|r| !state.programmatic.contains_key(&r.name))
                .chain(state.programmatic.values())
                .cloned()
                .collect()
        };

        snapshot
            .into_iter()
            .filter_map(|r| {
                let outcome = r.validate().and_then(|()| match r.spec_path(K::SPEC_FILE) {
                    Some(path) if !path.is_file() => Err(CatalogError::FileNotFound {
                        name: r.name.clone(),
                        path,
                    }),
                    _ => Ok(()),
                });
                outcome.err().map(|e| (r.name, e))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        let state = self.state.read();
        state.discovered.len()
            + state
                .programmatic
                .keys()
                .filter(|name| !state.discovered.contains_key(*name))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
