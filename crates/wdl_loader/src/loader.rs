//! The loader facade: reload and dimension-load handling.
//!
//! [`WorldDataLoader`] ties the pipeline together for a host. Per reload
//! cycle it moves through `Idle -> Indexing -> Rebuilding -> Ready`: the
//! reload handler indexes the provider's entries, groups them by dimension,
//! and publishes the result by swapping the previous index out in a single
//! assignment. Dimension-load handling only ever reads the published index.
//!
//! # Ordering contract
//!
//! The host must run [`on_reload`](WorldDataLoader::on_reload) to completion
//! before dispatching any [`on_dimension_load`](WorldDataLoader::on_dimension_load)
//! that should observe the new packs. The loader performs no internal
//! synchronization; Rust's borrow rules already prevent a reload (`&mut self`)
//! from overlapping a dimension load (`&self`) within one host thread, which
//! is exactly the single-threaded sequencing the original event pipeline
//! guarantees.
//!
//! # Failure policy
//!
//! Neither handler returns an error. Every failure (enumeration, malformed
//! entries, storage resolution, per-file writes) is logged where it occurs
//! and never aborts the host's reload or load pipeline.

use crate::bucket::{BucketedIndex, DimensionFiles};
use crate::error::Result;
use crate::indexer::index_data_resources;
use crate::materialize::{materialize_dimension, MaterializeStats};
use crate::{DATA_DIRECTORY, DATA_SUFFIX};
use camino::Utf8PathBuf;
use wdl_resource::{ResourceId, ResourceProvider};

/// Which side of the host issued a dimension load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Client-side loads carry no authoritative storage; they are ignored.
    Client,
    Server,
}

/// A host signal that a dimension instance has become active.
#[derive(Debug, Clone)]
pub struct DimensionLoadEvent {
    pub dimension: ResourceId,
    pub side: Side,
}

impl DimensionLoadEvent {
    pub fn server(dimension: ResourceId) -> Self {
        Self {
            dimension,
            side: Side::Server,
        }
    }
}

/// Resolves the persistent-data folder of an active dimension.
///
/// The host passes an implementation per dimension load; the loader never
/// reaches into host internals for the folder.
pub trait DimensionStorage {
    fn data_folder(&self) -> Result<Utf8PathBuf>;
}

/// Indexes pack data files on reload and copies them into dimension data
/// folders on dimension load.
#[derive(Debug)]
pub struct WorldDataLoader {
    root: String,
    suffix: String,
    index: BucketedIndex,
}

impl Default for WorldDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldDataLoader {
    /// A loader over the default `world/` directory and `.dat` suffix.
    pub fn new() -> Self {
        Self::with_config(DATA_DIRECTORY, DATA_SUFFIX)
    }

    /// A loader over a custom data directory and file suffix.
    pub fn with_config(root: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
            index: BucketedIndex::new(),
        }
    }

    /// Rebuild the dimension index from the provider's current entries.
    ///
    /// The previous index stays in place until the replacement is fully
    /// built, then is swapped out in one assignment.
    pub fn on_reload(&mut self, provider: &dyn ResourceProvider) {
        tracing::info!("Indexing world data files under {}/", self.root);
        let indexed = index_data_resources(provider, &self.root, &self.suffix);
        let rebuilt = BucketedIndex::from_indexed(indexed);
        tracing::info!(
            "Indexed {} world data file(s) across {} dimension(s)",
            rebuilt.file_count(),
            rebuilt.dimensions().count()
        );
        self.index = rebuilt;
    }

    /// Materialize the registered files of the event's dimension.
    ///
    /// Client-side events are ignored. An unknown dimension is the normal
    /// case for dimensions without data files and is only debug-logged.
    pub fn on_dimension_load(
        &self,
        event: &DimensionLoadEvent,
        storage: &dyn DimensionStorage,
    ) -> MaterializeStats {
        if event.side == Side::Client {
            return MaterializeStats::default();
        }

        tracing::debug!("Searching for data files for dimension {}", event.dimension);
        let Some(files) = self.index.get(&event.dimension) else {
            tracing::debug!("Nothing found");
            return MaterializeStats::default();
        };

        let data_folder = match storage.data_folder() {
            Ok(data_folder) => data_folder,
            Err(err) => {
                tracing::error!(
                    "Couldn't resolve data folder for dimension {}: {err}",
                    event.dimension
                );
                return MaterializeStats::default();
            }
        };

        let stats = materialize_dimension(files, &data_folder);
        tracing::info!(
            "Wrote {} data file(s) ({} bytes) for dimension {} to {data_folder}",
            stats.files_written,
            stats.bytes_written,
            event.dimension
        );
        stats
    }

    /// Dimensions with at least one registered data file.
    pub fn dimensions(&self) -> impl Iterator<Item = &ResourceId> {
        self.index.dimensions()
    }

    /// Registered files for a dimension, if any.
    pub fn files_for(&self, dimension: &ResourceId) -> Option<&DimensionFiles> {
        self.index.get(dimension)
    }
}
