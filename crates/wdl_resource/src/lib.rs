//! Resource identifiers and content pack sources for world-data.
//!
//! This crate models the *input* side of the world-data pipeline:
//!
//! - [`ResourceId`] — validated, namespaced identifiers (`namespace:path`)
//! - [`ResourceEntry`] — lazily-openable byte sources with provenance
//! - [`ResourceProvider`] — the overlay-aware enumeration boundary
//! - [`PackStack`] — the shipped filesystem provider over content packs
//!
//! The indexing and materialization pipeline itself lives in `wdl_loader`.

mod entry;
mod error;
mod id;
mod pack;
mod provider;

pub use entry::ResourceEntry;
pub use error::{Error, Result};
pub use id::{ResourceId, DEFAULT_NAMESPACE};
pub use pack::{DiscoveredPack, PackManifest, PackStack, PACK_MANIFEST_FILE};
pub use provider::{MemoryProvider, ResourceProvider};
