//! Resource provider abstraction.
//!
//! [`ResourceProvider`] is the boundary between the indexing pipeline and
//! whatever supplies resource files: an on-disk [`PackStack`](crate::PackStack),
//! an archive reader, or an in-memory provider in tests. The pipeline never
//! walks a filesystem itself; it only consumes this trait.

use crate::entry::ResourceEntry;
use crate::error::Result;
use crate::id::ResourceId;

/// Supplies raw resource entries from an overlaying set of sources.
///
/// Entries are returned in overlay precedence order, lowest precedence
/// first: when two sources contribute the same id, the entry enumerated
/// *later* supersedes the earlier one. Implementations must keep this order
/// stable across calls so duplicate resolution is deterministic.
pub trait ResourceProvider {
    /// List every entry under `root` whose final path component ends with
    /// `suffix`.
    ///
    /// The returned ids are *raw*: they still carry the `root/` directory
    /// prefix and the `suffix` extension. Deriving logical ids is the
    /// indexer's job.
    fn list_entries(&self, root: &str, suffix: &str) -> Result<Vec<(ResourceId, ResourceEntry)>>;
}

/// An in-memory provider holding a fixed, ordered entry list.
///
/// Useful for tests and for hosts that embed resources directly.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    entries: Vec<(ResourceId, ResourceEntry)>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Later entries win overlay conflicts.
    pub fn push(&mut self, id: ResourceId, entry: ResourceEntry) {
        self.entries.push((id, entry));
    }
}

impl ResourceProvider for MemoryProvider {
    fn list_entries(&self, root: &str, suffix: &str) -> Result<Vec<(ResourceId, ResourceEntry)>> {
        let prefix = format!("{root}/");
        Ok(self
            .entries
            .iter()
            .filter(|(id, _)| id.path().starts_with(&prefix) && id.path().ends_with(suffix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_provider_filters_by_root_and_suffix() {
        let mut provider = MemoryProvider::new();
        provider.push(
            ResourceId::parse("world/overworld/spawn.dat").unwrap(),
            ResourceEntry::from_bytes("a", "memory:1", &b"1"[..]),
        );
        provider.push(
            ResourceId::parse("world/overworld/readme.txt").unwrap(),
            ResourceEntry::from_bytes("a", "memory:2", &b"2"[..]),
        );
        provider.push(
            ResourceId::parse("structures/village.dat").unwrap(),
            ResourceEntry::from_bytes("a", "memory:3", &b"3"[..]),
        );

        let entries = provider.list_entries("world", ".dat").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.path(), "world/overworld/spawn.dat");
    }
}
