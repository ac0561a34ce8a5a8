//! Error types for the loader pipeline.
//!
//! Note that the pipeline's propagation policy is deliberately narrow: no
//! error escapes [`WorldDataLoader`](crate::WorldDataLoader) to the host.
//! These types exist for the lower-level building blocks
//! ([`write_data_file`](crate::materialize::write_data_file), storage
//! resolution) whose failures the loader catches and logs.

use thiserror::Error;
use wdl_resource::ResourceId;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur inside the loader pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed (opening a resource, writing a data file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the resource layer (enumeration, id construction).
    #[error("resource error: {0}")]
    Resource(#[from] wdl_resource::Error),

    /// A raw resource path did not have the expected `root/...suffix` shape.
    #[error("malformed data file path '{path}': {reason}")]
    MalformedPath { path: String, reason: &'static str },

    /// A logical id has no dimension segment (single-segment path).
    #[error("no dimension specified in data file id '{0}'")]
    MissingDimension(ResourceId),

    /// The host storage could not resolve a destination folder.
    #[error("storage error: {0}")]
    Storage(String),
}
