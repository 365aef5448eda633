//! Progressive loading: fetch a resource's full body on first use.

use super::{check_name, Catalog};
use crate::error::CatalogError;
use crate::frontmatter::decode_full;
use crate::resource::{Resource, ResourceKind};
use crate::types::SourceType;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

impl<K: ResourceKind> Catalog<K> {
    /// Return the resource with its body loaded.
    ///
    /// A cataloged resource is loaded at most once; later calls return the
    /// cached copy without touching disk. A name not yet cataloged is looked
    /// up directly under each root, in priority order, and returned without
    /// being added; if no root has it the error is `FileNotFound`.
    pub fn load_full(&self, name: &str) -> Result<Resource<K>, CatalogError> {
        check_name(name)?;

        loop {
            let known = {
                let state = self.state.read();
                if let Some(r) = state.programmatic.get(name) {
                    return Ok(r.clone());
                }
                match state.discovered.get(name) {
                    Some(r) if r.is_loaded() => return Ok(r.clone()),
                    Some(r) => Some((r.directory.clone(), r.source)),
                    None => None,
                }
            };

            let Some((directory, source)) = known else {
                return self.load_uncataloged(name);
            };

            let loaded = read_full::<K>(name, &directory.join(K::SPEC_FILE))?;
            if let Some(resource) = self.merge_loaded(name, directory, source, loaded) {
                return Ok(resource);
            }
            tracing::debug!(name = %name, "{} moved during load, retrying", K::LABEL);
        }
    }

    /// Merge a freshly read body into the cataloged entry.
    ///
    /// Returns `None` when a rediscovery moved the entry to another directory
    /// after `loaded` was read.
    fn merge_loaded(
        &self,
        name: &str,
        directory: PathBuf,
        source: SourceType,
        loaded: Resource<K>,
    ) -> Option<Resource<K>> {
        let mut state = self.state.write();
        match state.discovered.get_mut(name) {
            Some(entry) if entry.is_loaded() => Some(entry.clone()),
            Some(entry) if entry.directory == directory => {
                entry.body = loaded.body;
                entry.raw_frontmatter = loaded.raw_frontmatter;
                tracing::debug!(name = %name, "Loaded {} body", K::LABEL);
                Some(entry.clone())
            }
            Some(_) => None,
            None => Some(loaded.with_origin(source, directory)),
        }
    }

    fn load_uncataloged(&self, name: &str) -> Result<Resource<K>, CatalogError> {
        for root in &self.roots {
            let spec_path = root.path.join(name).join(K::SPEC_FILE);
            if !spec_path.is_file() {
                continue;
            }
            let loaded = read_full::<K>(name, &spec_path)?;
            let directory = dunce::canonicalize(&root.path)
                .unwrap_or_else(|_| root.path.clone())
                .join(name);
            tracing::debug!(name = %name, root = %root.path.display(), "Loaded uncataloged {}", K::LABEL);
            return Ok(loaded.with_origin(root.source, directory));
        }
        let path = self
            .roots
            .first()
            .map(|root| root.path.join(name).join(K::SPEC_FILE))
            .unwrap_or_else(|| Path::new(name).join(K::SPEC_FILE));
        Err(CatalogError::FileNotFound {
            name: name.to_string(),
            path,
        })
    }
}

fn read_full<K: ResourceKind>(name: &str, spec_path: &Path) -> Result<Resource<K>, CatalogError> {
    let document = fs::read_to_string(spec_path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                name: name.to_string(),
                path: spec_path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: spec_path.to_path_buf(),
                source,
            }
        }
    })?;

    let loaded = decode_full::<K>(&document).map_err(|source| CatalogError::Frontmatter {
        path: PathBuf::from(spec_path),
        source,
    })?;

    if loaded.name != name {
        return Err(CatalogError::NameMismatch {
            expected: name.to_string(),
            found: loaded.name,
        });
    }
    Ok(loaded)
}
