//! Single-root scanner: finds spec files and decodes their metadata.

use super::SkippedSpec;
use crate::error::CatalogError;
use crate::frontmatter::{decode_metadata_only, read_frontmatter};
use crate::resource::{validate_name, Resource, ResourceKind, ResourceSummary};
use crate::types::SearchRoot;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use walkdir::WalkDir;

/// Scan one root for resources of kind `K`.
///
/// Names already in `seen` came from a higher-priority root and are skipped.
/// Accepted resources are inserted into `catalog` and reported as summaries.
/// A missing root yields nothing; a malformed spec file is recorded in
/// `skipped` and never fails the scan.
pub fn scan<K: ResourceKind>(
    root: &SearchRoot,
    seen: &mut HashSet<String>,
    catalog: &mut HashMap<String, Resource<K>>,
    skipped: &mut Vec<SkippedSpec>,
) -> Vec<ResourceSummary> {
    if !root.path.is_dir() {
        tracing::debug!(root = %root.path.display(), "{} root does not exist", K::LABEL);
        return Vec::new();
    }

    // Resolve the root but keep the path under it as found, so a symlinked
    // resource directory keeps the name the directory check saw.
    let base = dunce::canonicalize(&root.path).unwrap_or_else(|_| root.path.clone());
    let mut found = Vec::new();
    let walker = WalkDir::new(&root.path)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Failed to walk {}: {}", root.path.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != K::SPEC_FILE {
            continue;
        }

        let resource = match read_spec_metadata::<K>(entry.path(), root, &base) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), "Skipping {}: {}", K::LABEL, e);
                skipped.push(SkippedSpec {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !seen.insert(resource.name.clone()) {
            tracing::debug!(
                name = %resource.name,
                path = %entry.path().display(),
                "{} shadowed by higher-priority root",
                K::LABEL
            );
            continue;
        }

        found.push(ResourceSummary {
            name: resource.name.clone(),
            description: resource.description.clone(),
            source: resource.source,
            path: entry.path().to_path_buf(),
        });
        catalog.insert(resource.name.clone(), resource);
    }

    tracing::debug!(
        root = %root.path.display(),
        count = found.len(),
        "scanned {} root",
        K::LABEL
    );
    found
}

/// Read and validate the metadata of one spec file.
fn read_spec_metadata<K: ResourceKind>(
    spec_path: &Path,
    root: &SearchRoot,
    base: &Path,
) -> Result<Resource<K>, CatalogError> {
    let frontmatter_error = |source| CatalogError::Frontmatter {
        path: spec_path.to_path_buf(),
        source,
    };

    let file = File::open(spec_path).map_err(|source| CatalogError::Io {
        path: spec_path.to_path_buf(),
        source,
    })?;
    let frontmatter = read_frontmatter(BufReader::new(file)).map_err(frontmatter_error)?;
    let resource = decode_metadata_only::<K>(&frontmatter).map_err(frontmatter_error)?;

    validate_name(&resource.name).map_err(|source| CatalogError::InvalidName {
        name: resource.name.clone(),
        source,
    })?;

    let directory = spec_path.parent().unwrap_or(&root.path);
    let directory_name = directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if directory_name != resource.name {
        return Err(CatalogError::DirectoryMismatch {
            name: resource.name,
            directory: directory_name,
        });
    }

    let directory = match directory.strip_prefix(&root.path) {
        Ok(relative) => base.join(relative),
        Err(_) => directory.to_path_buf(),
    };
    Ok(resource.with_origin(root.source, directory))
}
