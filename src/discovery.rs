//! Discovery: walk the configured search roots in priority order and build a
//! metadata-only catalog.

pub mod resolver;
pub mod scanner;

pub use resolver::resolve;
pub use scanner::scan;

use crate::resource::ResourceSummary;
use serde::Serialize;
use std::path::PathBuf;

/// Report of one discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    pub resources: Vec<ResourceSummary>,
    pub roots_searched: Vec<PathBuf>,
    pub total_count: usize,
    /// Spec files that were found but rejected.
    pub skipped: Vec<SkippedSpec>,
}

/// A spec file left out of the catalog, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSpec {
    pub path: PathBuf,
    pub reason: String,
}
