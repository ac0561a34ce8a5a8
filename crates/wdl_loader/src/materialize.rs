//! Materialization: copying indexed data files into a dimension's data folder.
//!
//! Every file is written with truncate-and-overwrite semantics — the data
//! folder always ends up holding exactly the bytes the winning pack entry
//! provides, never a merge with a previous run. A failure on one file is
//! logged and does not stop the remaining files in the dimension.

use crate::bucket::DimensionFiles;
use crate::error::Result;
use crate::DATA_SUFFIX;
use camino::Utf8Path;
use std::fs::{self, File};
use std::io::{Read, Write};
use wdl_resource::ResourceEntry;

const COPY_BUFFER_SIZE: usize = 8192;

/// Summary of one dimension materialization. Informational only; failures
/// are already logged by the time this is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Number of files written successfully.
    pub files_written: usize,
    /// Number of files that failed to write.
    pub files_failed: usize,
    /// Total bytes copied into the data folder.
    pub bytes_written: u64,
}

/// Write every registered file of one dimension into `dest`.
pub fn materialize_dimension(files: &DimensionFiles, dest: &Utf8Path) -> MaterializeStats {
    let mut stats = MaterializeStats::default();
    for (file_name, entry) in files {
        let dest_file = dest.join(format!("{file_name}{DATA_SUFFIX}"));
        tracing::debug!("Writing world data file {file_name}");
        match write_data_file(entry, &dest_file) {
            Ok(bytes) => {
                stats.files_written += 1;
                stats.bytes_written += bytes;
            }
            Err(err) => {
                tracing::error!(
                    "Couldn't write world data file {file_name} (from {}) to {dest_file}: {err}",
                    entry.origin()
                );
                stats.files_failed += 1;
            }
        }
    }
    stats
}

/// Stream an entry's bytes into `dest`, overwriting any existing file.
///
/// Parent directories are created for nested file names. The source reader
/// and destination file are dropped on every exit path.
pub fn write_data_file(entry: &ResourceEntry, dest: &Utf8Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent.as_std_path())?;
    }

    let mut reader = entry.open()?;
    // File::create truncates, so a shorter copy never leaves stale bytes.
    let mut writer = File::create(dest.as_std_path())?;

    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
        written += read as u64;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::tempdir;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    fn entry(bytes: &[u8]) -> ResourceEntry {
        ResourceEntry::from_bytes("test", "memory:entry", bytes)
    }

    #[test]
    fn writes_all_bytes() {
        let dir = tempdir().unwrap();
        let dest = utf8(dir.path()).join("spawn.dat");

        let payload = vec![0xABu8; COPY_BUFFER_SIZE * 2 + 17];
        let written = write_data_file(&entry(&payload), &dest).unwrap();
        assert_eq!(written, payload.len() as u64);
        assert_eq!(fs::read(dest.as_std_path()).unwrap(), payload);
    }

    #[test]
    fn overwrites_and_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let dest = utf8(dir.path()).join("spawn.dat");

        write_data_file(&entry(b"a longer first payload"), &dest).unwrap();
        write_data_file(&entry(b"short"), &dest).unwrap();
        assert_eq!(fs::read(dest.as_std_path()).unwrap(), b"short");
    }

    #[test]
    fn materialization_is_idempotent() {
        let dir = tempdir().unwrap();
        let dest = utf8(dir.path());

        let mut files = DimensionFiles::new();
        files.insert("spawn".to_string(), entry(b"spawn bytes"));
        files.insert("villages".to_string(), entry(b"village bytes"));

        let first = materialize_dimension(&files, &dest);
        let second = materialize_dimension(&files, &dest);
        assert_eq!(first, second);
        assert_eq!(first.files_written, 2);
        assert_eq!(first.files_failed, 0);
        assert_eq!(
            fs::read(dest.join("spawn.dat").as_std_path()).unwrap(),
            b"spawn bytes"
        );
        assert_eq!(
            fs::read(dest.join("villages.dat").as_std_path()).unwrap(),
            b"village bytes"
        );
    }

    #[test]
    fn one_failing_file_does_not_block_siblings() {
        let dir = tempdir().unwrap();
        let dest = utf8(dir.path());

        let mut files = DimensionFiles::new();
        files.insert(
            "broken".to_string(),
            ResourceEntry::from_file("test", Utf8PathBuf::from("/nonexistent/broken.dat")),
        );
        files.insert("spawn".to_string(), entry(b"spawn bytes"));
        files.insert("villages".to_string(), entry(b"village bytes"));

        let stats = materialize_dimension(&files, &dest);
        assert_eq!(stats.files_written, 2);
        assert_eq!(stats.files_failed, 1);
        assert!(dest.join("spawn.dat").as_std_path().exists());
        assert!(dest.join("villages.dat").as_std_path().exists());
        assert!(!dest.join("broken.dat").as_std_path().exists());
    }

    #[test]
    fn nested_file_names_create_subdirectories() {
        let dir = tempdir().unwrap();
        let dest = utf8(dir.path());

        let mut files = DimensionFiles::new();
        files.insert("region/chunks".to_string(), entry(b"nested"));

        let stats = materialize_dimension(&files, &dest);
        assert_eq!(stats.files_written, 1);
        assert_eq!(
            fs::read(dest.join("region/chunks.dat").as_std_path()).unwrap(),
            b"nested"
        );
    }
}
