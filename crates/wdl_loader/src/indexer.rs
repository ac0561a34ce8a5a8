//! Resource indexing: raw entries to a deduplicated id map.
//!
//! [`index_data_resources`] enumerates every data file a provider exposes,
//! derives each entry's logical id (raw path minus the `root/` prefix and
//! the `suffix` extension), and collects them into one map. The provider
//! returns entries in overlay precedence order, lowest precedence first, so
//! a plain last-insert-wins map resolves duplicate ids deterministically:
//! the highest-precedence source survives, and the collision is logged.
//!
//! Indexing never fails as a whole. A malformed entry is logged and skipped;
//! a failing provider yields an empty index.

use crate::error::{Error, Result};
use std::collections::HashMap;
use wdl_resource::{ResourceEntry, ResourceId, ResourceProvider};

/// Flat index: logical id to the winning entry. Rebuilt wholesale on every
/// reload, never updated incrementally.
pub type IndexedResources = HashMap<ResourceId, ResourceEntry>;

/// Index all data files under `root` with the given `suffix`.
pub fn index_data_resources(
    provider: &dyn ResourceProvider,
    root: &str,
    suffix: &str,
) -> IndexedResources {
    let raw_entries = match provider.list_entries(root, suffix) {
        Ok(raw_entries) => raw_entries,
        Err(err) => {
            tracing::error!("Couldn't list data files under {root}: {err}");
            return IndexedResources::new();
        }
    };

    let mut indexed = IndexedResources::new();
    for (raw_id, entry) in raw_entries {
        let id = match derive_resource_id(&raw_id, root, suffix) {
            Ok(id) => id,
            Err(err) => {
                tracing::error!("Couldn't read data file {raw_id} from {}: {err}", entry.origin());
                continue;
            }
        };
        let origin = entry.origin().to_owned();
        if let Some(superseded) = indexed.insert(id.clone(), entry) {
            tracing::warn!(
                "Duplicate data file {id}: {} superseded by {origin}",
                superseded.origin()
            );
        }
    }
    indexed
}

/// Derive the logical id from a raw entry id by stripping the directory
/// prefix and the extension suffix.
fn derive_resource_id(raw: &ResourceId, root: &str, suffix: &str) -> Result<ResourceId> {
    let malformed = |reason| Error::MalformedPath {
        path: raw.to_string(),
        reason,
    };

    let path = raw
        .path()
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| malformed("missing directory prefix"))?;
    let path = path
        .strip_suffix(suffix)
        .ok_or_else(|| malformed("missing extension suffix"))?;
    if path.is_empty() {
        return Err(malformed("empty path after stripping"));
    }

    Ok(ResourceId::new(raw.namespace(), path)?)
}
