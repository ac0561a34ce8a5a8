//! Filesystem-backed content packs.
//!
//! A content pack is a directory with an optional `pack.json` manifest and
//! one subdirectory per namespace:
//!
//! ```text
//! my_pack/
//!   pack.json                    # Optional manifest (enablement, priority)
//!   mypack/                      # Namespace directory
//!     world/                     # Data root (the indexer's `root`)
//!       overworld/
//!         spawn.dat              # Data file (the indexer's `suffix`)
//! ```
//!
//! A [`PackStack`] is an ordered list of packs implementing
//! [`ResourceProvider`]. Packs later in the stack have higher overlay
//! precedence: their entries supersede same-id entries from earlier packs.
//! Discovery order is deterministic — packs sort by `(priority, id)`
//! ascending, so the highest-priority pack enumerates last and wins.

use crate::entry::ResourceEntry;
use crate::error::{Error, Result};
use crate::id::ResourceId;
use crate::provider::ResourceProvider;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use walkdir::WalkDir;

/// Content pack manifest file name.
pub const PACK_MANIFEST_FILE: &str = "pack.json";

/// Manifest controlling pack enablement and overlay ordering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackManifest {
    /// Human-friendly pack name (defaults to the directory name).
    pub name: Option<String>,
    /// Optional description, purely informational.
    pub description: Option<String>,
    /// If false, the pack is ignored.
    pub enabled: bool,
    /// Overlay ordering (higher priority enumerates later and wins).
    pub priority: i32,
}

impl Default for PackManifest {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            enabled: true,
            priority: 0,
        }
    }
}

/// A pack found during discovery.
#[derive(Debug, Clone)]
pub struct DiscoveredPack {
    pub id: String,
    pub dir: Utf8PathBuf,
    pub manifest: PackManifest,
}

/// An ordered stack of content packs.
#[derive(Debug, Default)]
pub struct PackStack {
    packs: Vec<DiscoveredPack>,
}

impl PackStack {
    /// Discover packs under `root`, applying manifest enablement and ordering.
    ///
    /// Discovery is lenient: a pack with an unreadable or invalid manifest is
    /// skipped with a warning rather than failing the whole stack. A missing
    /// `root` yields an empty stack.
    pub fn discover(root: &Utf8Path) -> Result<Self> {
        let dirs = match pack_dirs(root) {
            Ok(dirs) => dirs,
            Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err),
        };

        let mut packs = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let id = dir
                .file_name()
                .map(str::to_string)
                .unwrap_or_else(|| dir.to_string());
            let manifest = match load_manifest(&dir) {
                Ok(manifest) => manifest,
                Err(err) => {
                    tracing::warn!("Skipping pack {dir} due to invalid manifest: {err}");
                    continue;
                }
            };
            if !manifest.enabled {
                tracing::debug!("Pack {id} is disabled, skipping");
                continue;
            }
            packs.push(DiscoveredPack { id, dir, manifest });
        }

        packs.sort_by(|a, b| {
            a.manifest
                .priority
                .cmp(&b.manifest.priority)
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::info!("Discovered {} content pack(s) under {root}", packs.len());
        Ok(Self { packs })
    }

    /// Build a stack from explicitly ordered pack directories.
    ///
    /// No manifest filtering is applied; the given order is the overlay
    /// order (last wins). Each directory must exist.
    pub fn from_dirs(dirs: Vec<Utf8PathBuf>) -> Result<Self> {
        let mut packs = Vec::with_capacity(dirs.len());
        for dir in dirs {
            if !dir.as_std_path().is_dir() {
                return Err(Error::InvalidPackDir(dir));
            }
            let id = dir
                .file_name()
                .map(str::to_string)
                .unwrap_or_else(|| dir.to_string());
            packs.push(DiscoveredPack {
                id,
                dir,
                manifest: PackManifest::default(),
            });
        }
        Ok(Self { packs })
    }

    /// The packs in overlay order (lowest precedence first).
    pub fn packs(&self) -> &[DiscoveredPack] {
        &self.packs
    }
}

impl ResourceProvider for PackStack {
    fn list_entries(&self, root: &str, suffix: &str) -> Result<Vec<(ResourceId, ResourceEntry)>> {
        let mut entries = Vec::new();
        for pack in &self.packs {
            list_pack_entries(pack, root, suffix, &mut entries)?;
        }
        Ok(entries)
    }
}

fn pack_dirs(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root.as_std_path())? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match Utf8PathBuf::from_path_buf(path) {
            Ok(path) => dirs.push(path),
            Err(path) => {
                tracing::warn!("Skipping non-UTF-8 pack path: {}", path.display());
            }
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn load_manifest(dir: &Utf8Path) -> Result<PackManifest> {
    let manifest_path = dir.join(PACK_MANIFEST_FILE);
    if !manifest_path.as_std_path().exists() {
        return Ok(PackManifest::default());
    }
    let contents = fs::read_to_string(manifest_path.as_std_path())?;
    Ok(serde_json::from_str(&contents)?)
}

/// Enumerate one pack's data files into `entries`, in sorted path order.
fn list_pack_entries(
    pack: &DiscoveredPack,
    root: &str,
    suffix: &str,
    entries: &mut Vec<(ResourceId, ResourceEntry)>,
) -> Result<()> {
    for namespace_dir in pack_dirs(&pack.dir)? {
        let Some(namespace) = namespace_dir.file_name().map(str::to_string) else {
            continue;
        };
        let data_root = namespace_dir.join(root);
        if !data_root.as_std_path().is_dir() {
            continue;
        }

        for file in WalkDir::new(data_root.as_std_path()).sort_by_file_name() {
            let file = match file {
                Ok(file) => file,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry under {data_root}: {err}");
                    continue;
                }
            };
            if !file.file_type().is_file() {
                continue;
            }
            let path = match Utf8PathBuf::from_path_buf(file.path().to_path_buf()) {
                Ok(path) => path,
                Err(path) => {
                    tracing::warn!("Skipping non-UTF-8 path: {}", path.display());
                    continue;
                }
            };
            let Some(name) = path.file_name() else {
                continue;
            };
            if !name.ends_with(suffix) {
                continue;
            }

            let rel = path.strip_prefix(&data_root).unwrap_or(&path);
            let raw_path = format!("{root}/{}", rel.as_str().replace('\\', "/"));
            let id = match ResourceId::new(namespace.clone(), raw_path) {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!("Skipping data file with invalid id at {path}: {err}");
                    continue;
                }
            };
            entries.push((id, ResourceEntry::from_file(pack.id.clone(), path)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    fn write_data_file(pack_dir: &std::path::Path, rel: &str, contents: &[u8]) {
        let path = pack_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn manifests_control_order_and_enablement() {
        let root = tempdir().unwrap();

        let pack_b = root.path().join("b_pack");
        fs::create_dir_all(&pack_b).unwrap();
        fs::write(pack_b.join(PACK_MANIFEST_FILE), r#"{"priority":-5}"#).unwrap();

        let pack_a = root.path().join("a_pack");
        fs::create_dir_all(&pack_a).unwrap();
        fs::write(pack_a.join(PACK_MANIFEST_FILE), r#"{"priority":10}"#).unwrap();

        // No manifest, defaults apply.
        fs::create_dir_all(root.path().join("c_pack")).unwrap();

        // Disabled pack is ignored.
        let pack_d = root.path().join("d_pack");
        fs::create_dir_all(&pack_d).unwrap();
        fs::write(
            pack_d.join(PACK_MANIFEST_FILE),
            r#"{"enabled":false,"priority":-100}"#,
        )
        .unwrap();

        let stack = PackStack::discover(&utf8(root.path())).unwrap();
        let ids: Vec<&str> = stack.packs().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b_pack", "c_pack", "a_pack"]);
    }

    #[test]
    fn discover_missing_root_yields_empty_stack() {
        let root = tempdir().unwrap();
        let missing = utf8(root.path()).join("nonexistent");
        let stack = PackStack::discover(&missing).unwrap();
        assert!(stack.packs().is_empty());
    }

    #[test]
    fn invalid_manifest_skips_pack() {
        let root = tempdir().unwrap();
        let pack = root.path().join("broken");
        fs::create_dir_all(&pack).unwrap();
        fs::write(pack.join(PACK_MANIFEST_FILE), b"{ invalid json }").unwrap();

        let stack = PackStack::discover(&utf8(root.path())).unwrap();
        assert!(stack.packs().is_empty());
    }

    #[test]
    fn list_entries_filters_by_root_and_suffix() {
        let root = tempdir().unwrap();
        let pack = root.path().join("pack_a");
        write_data_file(&pack, "mypack/world/overworld/spawn.dat", b"spawn");
        write_data_file(&pack, "mypack/world/overworld/notes.txt", b"ignored");
        write_data_file(&pack, "mypack/structures/village.dat", b"ignored");

        let stack = PackStack::discover(&utf8(root.path())).unwrap();
        let entries = stack.list_entries("world", ".dat").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.to_string(), "mypack:world/overworld/spawn.dat");
        assert_eq!(entries[0].1.pack(), "pack_a");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_does_not_wipe_other_entries() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap();
        let pack = root.path().join("pack_a");
        write_data_file(&pack, "mypack/world/overworld/spawn.dat", b"spawn");

        let locked = pack.join("mypack/world/locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("hidden.dat"), b"hidden").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Root ignores directory permissions, so check whether the lock took.
        let locked_out = fs::read_dir(&locked).is_err();

        let stack = PackStack::discover(&utf8(root.path())).unwrap();
        let entries = stack.list_entries("world", ".dat");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let entries = entries.unwrap();
        if locked_out {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].0.to_string(), "mypack:world/overworld/spawn.dat");
        } else {
            assert_eq!(entries.len(), 2);
        }
    }

    #[test]
    fn later_packs_enumerate_after_earlier_ones() {
        let root = tempdir().unwrap();
        let low = root.path().join("low");
        fs::create_dir_all(&low).unwrap();
        fs::write(low.join(PACK_MANIFEST_FILE), r#"{"priority":0}"#).unwrap();
        write_data_file(&low, "mypack/world/overworld/spawn.dat", b"low");

        let high = root.path().join("high");
        fs::create_dir_all(&high).unwrap();
        fs::write(high.join(PACK_MANIFEST_FILE), r#"{"priority":1}"#).unwrap();
        write_data_file(&high, "mypack/world/overworld/spawn.dat", b"high");

        let stack = PackStack::discover(&utf8(root.path())).unwrap();
        let entries = stack.list_entries("world", ".dat").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.pack(), "low");
        assert_eq!(entries[1].1.pack(), "high");
    }

    #[test]
    fn from_dirs_preserves_given_order() {
        let root = tempdir().unwrap();
        let first = root.path().join("zzz");
        let second = root.path().join("aaa");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();

        let stack = PackStack::from_dirs(vec![utf8(&first), utf8(&second)]).unwrap();
        let ids: Vec<&str> = stack.packs().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["zzz", "aaa"]);
    }

    #[test]
    fn from_dirs_rejects_missing_directory() {
        let root = tempdir().unwrap();
        let missing = utf8(root.path()).join("nope");
        assert!(PackStack::from_dirs(vec![missing]).is_err());
    }
}
