//! Error types for resource and pack operations.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading content packs and resources.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed (listing packs, opening resource files, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a pack manifest.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A string could not be parsed as a [`ResourceId`](crate::ResourceId).
    #[error("invalid resource id '{value}': {reason}")]
    InvalidId { value: String, reason: &'static str },

    /// A content pack directory is missing or inaccessible.
    #[error("invalid pack directory: {0}")]
    InvalidPackDir(Utf8PathBuf),
}
