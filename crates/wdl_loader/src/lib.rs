//! World data indexing and materialization.
//!
//! This crate copies namespaced data files bundled in content packs into the
//! persistent-data folder of whichever dimension they belong to. It supports:
//!
//! - **Overlay precedence**: later packs supersede earlier ones per id
//! - **Deterministic dedup**: exactly one winner per logical id, logged
//! - **Per-dimension grouping**: the first path segment names the dimension
//! - **Fault isolation**: one bad entry or failing file never stops the rest
//!
//! # Example
//!
//! ```no_run
//! use camino::{Utf8Path, Utf8PathBuf};
//! use wdl_loader::{DimensionLoadEvent, DimensionStorage, WorldDataLoader};
//! use wdl_resource::{PackStack, ResourceId};
//!
//! struct WorldStorage(Utf8PathBuf);
//!
//! impl DimensionStorage for WorldStorage {
//!     fn data_folder(&self) -> wdl_loader::Result<Utf8PathBuf> {
//!         Ok(self.0.join("data"))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let packs = PackStack::discover(Utf8Path::new("content_packs"))?;
//!
//! let mut loader = WorldDataLoader::new();
//! loader.on_reload(&packs);
//!
//! let overworld = ResourceId::parse("overworld")?;
//! let storage = WorldStorage(Utf8PathBuf::from("saves/my_world"));
//! loader.on_dimension_load(&DimensionLoadEvent::server(overworld), &storage);
//! # Ok(())
//! # }
//! ```

pub mod bucket;
pub mod error;
pub mod indexer;
pub mod loader;
pub mod materialize;

/// Directory inside each pack namespace that holds world data files.
pub const DATA_DIRECTORY: &str = "world";

/// File extension of world data files, kept on materialized output.
pub const DATA_SUFFIX: &str = ".dat";

// Re-export main types
pub use bucket::{BucketedIndex, DimensionFiles};
pub use error::{Error, Result};
pub use indexer::{index_data_resources, IndexedResources};
pub use loader::{DimensionLoadEvent, DimensionStorage, Side, WorldDataLoader};
pub use materialize::{materialize_dimension, write_data_file, MaterializeStats};
