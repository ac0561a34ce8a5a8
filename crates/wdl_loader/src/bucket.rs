//! Per-dimension grouping of indexed data files.
//!
//! [`BucketedIndex`] regroups the flat [`IndexedResources`] map by dimension:
//! the first segment of a logical id's path names the owning dimension, the
//! remainder is the file name the entry will materialize under. An id with a
//! single-segment path names no dimension; such entries are logged and
//! excluded here (they stay in the flat index but are never materialized).
//!
//! The index is a value type built completely before use. The loader facade
//! swaps a fully-built replacement in a single assignment on every reload,
//! so readers never observe a partially-rebuilt index.

use crate::error::Error;
use crate::indexer::IndexedResources;
use std::collections::HashMap;
use wdl_resource::{ResourceEntry, ResourceId};

/// Files registered for one dimension, keyed by file name.
///
/// File names may contain `/`; nested names materialize into subdirectories
/// of the dimension's data folder.
pub type DimensionFiles = HashMap<String, ResourceEntry>;

/// Indexed data files grouped by dimension id.
#[derive(Debug, Default)]
pub struct BucketedIndex {
    dimensions: HashMap<ResourceId, DimensionFiles>,
}

impl BucketedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat index by dimension.
    ///
    /// Entries whose id has no dimension segment are logged and dropped.
    /// Distinct logical ids can never collide on the same
    /// `(dimension, file name)` pair, so insertion order does not matter.
    pub fn from_indexed(indexed: IndexedResources) -> Self {
        let mut dimensions: HashMap<ResourceId, DimensionFiles> = HashMap::new();
        for (id, entry) in indexed {
            let Some((dimension_name, file_name)) = id.split_first_segment() else {
                tracing::error!(
                    "Couldn't read world data file: {}",
                    Error::MissingDimension(id)
                );
                continue;
            };
            let dimension = match ResourceId::new(id.namespace(), dimension_name) {
                Ok(dimension) => dimension,
                Err(err) => {
                    tracing::error!("Couldn't read world data file {id}: {err}");
                    continue;
                }
            };
            tracing::info!("Registering world data file {id}");
            dimensions
                .entry(dimension)
                .or_default()
                .insert(file_name.to_string(), entry);
        }
        Self { dimensions }
    }

    /// Files registered for the given dimension, if any.
    pub fn get(&self, dimension: &ResourceId) -> Option<&DimensionFiles> {
        self.dimensions.get(dimension)
    }

    /// All dimensions with at least one registered file.
    pub fn dimensions(&self) -> impl Iterator<Item = &ResourceId> {
        self.dimensions.keys()
    }

    /// Total number of registered files across all dimensions.
    pub fn file_count(&self) -> usize {
        self.dimensions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
