//! Resource entries: lazily-openable byte sources with provenance.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{self, Read};
use std::sync::Arc;

/// A single resource discovered in a content pack.
///
/// The entry records *where* the bytes come from but does not read them until
/// [`open`](Self::open) is called. The provenance fields (`pack`, `origin`)
/// exist purely for diagnostics: duplicate-id warnings and write-failure logs
/// name the contributing pack and concrete file.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pack: String,
    origin: Utf8PathBuf,
    source: EntrySource,
}

#[derive(Debug, Clone)]
enum EntrySource {
    Fs { path: Utf8PathBuf },
    Memory { bytes: Arc<[u8]> },
}

impl ResourceEntry {
    /// An entry backed by a file on disk. The file is opened on each
    /// [`open`](Self::open) call, never eagerly.
    pub fn from_file(pack: impl Into<String>, path: Utf8PathBuf) -> Self {
        Self {
            pack: pack.into(),
            origin: path.clone(),
            source: EntrySource::Fs { path },
        }
    }

    /// An entry backed by in-memory bytes (embedded providers and tests).
    pub fn from_bytes(
        pack: impl Into<String>,
        origin: impl Into<Utf8PathBuf>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            pack: pack.into(),
            origin: origin.into(),
            source: EntrySource::Memory {
                bytes: bytes.into(),
            },
        }
    }

    /// Id of the content pack this entry came from.
    pub fn pack(&self) -> &str {
        &self.pack
    }

    /// Concrete location of the entry, for log messages.
    pub fn origin(&self) -> &Utf8Path {
        &self.origin
    }

    /// Open a fresh reader over the entry's bytes.
    pub fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        match &self.source {
            EntrySource::Fs { path } => {
                let file = File::open(path.as_std_path())?;
                Ok(Box::new(file))
            }
            EntrySource::Memory { bytes } => Ok(Box::new(MemoryReader {
                bytes: Arc::clone(bytes),
                pos: 0,
            })),
        }
    }
}

struct MemoryReader {
    bytes: Arc<[u8]>,
    pos: usize,
}

impl Read for MemoryReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.bytes[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_entry_reads_all_bytes() {
        let entry = ResourceEntry::from_bytes("test", "memory:blob", &b"hello"[..]);
        let mut out = Vec::new();
        entry.open().unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn memory_entry_opens_fresh_reader_each_time() {
        let entry = ResourceEntry::from_bytes("test", "memory:blob", &b"abc"[..]);
        for _ in 0..2 {
            let mut out = Vec::new();
            entry.open().unwrap().read_to_end(&mut out).unwrap();
            assert_eq!(out, b"abc");
        }
    }

    #[test]
    fn fs_entry_open_fails_for_missing_file() {
        let entry = ResourceEntry::from_file("test", Utf8PathBuf::from("/nonexistent/file.dat"));
        assert!(entry.open().is_err());
    }
}
