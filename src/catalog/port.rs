//! Port consumed by callers outside the catalog (tool layer, CLI, tests).

use super::Catalog;
use crate::discovery::DiscoveryResult;
use crate::error::CatalogError;
use crate::resource::{Resource, ResourceInfo, ResourceKind};
use std::collections::BTreeMap;

/// Capability catalog operations for one resource kind.
pub trait CapabilityPort<K: ResourceKind>: Send + Sync {
    fn discover(&self) -> Result<DiscoveryResult, CatalogError>;

    fn load_full_metadata(&self, name: &str) -> Result<Resource<K>, CatalogError>;

    fn activate(&self, name: &str) -> Result<bool, CatalogError>;

    fn deactivate(&self, name: &str) -> Result<bool, CatalogError>;

    fn register(&self, resource: Resource<K>) -> Result<(), CatalogError>;

    fn unregister(&self, name: &str) -> Result<(), CatalogError>;

    fn get_by_name(&self, name: &str) -> Result<ResourceInfo<K::Extension>, CatalogError>;

    fn list_active(&self) -> Result<Vec<ResourceInfo<K::Extension>>, CatalogError>;

    fn list_all(&self) -> Result<Vec<ResourceInfo<K::Extension>>, CatalogError>;

    /// Per-name validation failures; one bad resource does not stop the rest.
    fn validate_all(&self) -> Result<BTreeMap<String, CatalogError>, CatalogError>;
}

impl<K: ResourceKind> CapabilityPort<K> for Catalog<K> {
    fn discover(&self) -> Result<DiscoveryResult, CatalogError> {
        Catalog::discover(self)
    }

    fn load_full_metadata(&self, name: &str) -> Result<Resource<K>, CatalogError> {
        self.load_full(name)
    }

    fn activate(&self, name: &str) -> Result<bool, CatalogError> {
        Catalog::activate(self, name)
    }

    fn deactivate(&self, name: &str) -> Result<bool, CatalogError> {
        Catalog::deactivate(self, name)
    }

    fn register(&self, resource: Resource<K>) -> Result<(), CatalogError> {
        Catalog::register(self, resource)
    }

    fn unregister(&self, name: &str) -> Result<(), CatalogError> {
        Catalog::unregister(self, name)
    }

    fn get_by_name(&self, name: &str) -> Result<ResourceInfo<K::Extension>, CatalogError> {
        Catalog::get_by_name(self, name)
    }

    fn list_active(&self) -> Result<Vec<ResourceInfo<K::Extension>>, CatalogError> {
        Ok(Catalog::list_active(self))
    }

    fn list_all(&self) -> Result<Vec<ResourceInfo<K::Extension>>, CatalogError> {
        Ok(Catalog::list_all(self))
    }

    fn validate_all(&self) -> Result<BTreeMap<String, CatalogError>, CatalogError> {
        Ok(Catalog::validate_all(self))
    }
}
