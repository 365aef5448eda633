//! Priority resolution across search roots.

use super::scanner;
use super::DiscoveryResult;
use crate::resource::{Resource, ResourceKind};
use crate::types::SearchRoot;
use std::collections::{HashMap, HashSet};

/// Scan `roots` in order; the first root to yield a name wins.
///
/// Returns the rebuilt catalog alongside the discovery report. Every root is
/// listed in `roots_searched`, including ones that do not exist.
pub fn resolve<K: ResourceKind>(
    roots: &[SearchRoot],
) -> (HashMap<String, Resource<K>>, DiscoveryResult) {
    let mut seen = HashSet::new();
    let mut catalog = HashMap::new();
    let mut resources = Vec::new();
    let mut skipped = Vec::new();

    for root in roots {
        resources.extend(scanner::scan::<K>(root, &mut seen, &mut catalog, &mut skipped));
    }

    let result = DiscoveryResult {
        total_count: resources.len(),
        resources,
        roots_searched: roots.iter().map(|r| r.path.clone()).collect(),
        skipped,
    };
    (catalog, result)
}
