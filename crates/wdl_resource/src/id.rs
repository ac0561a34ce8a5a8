//! Namespaced resource identifiers.
//!
//! A [`ResourceId`] names a resource inside a content pack:
//! `namespace:path/to/resource`. The namespace identifies the pack domain
//! (defaulting to [`DEFAULT_NAMESPACE`]), the path is a slash-separated
//! sequence of lowercase segments. Ids are validated on construction so that
//! every value in circulation is well-formed and usable as a filesystem path
//! fragment.

use crate::error::{Error, Result};
use std::fmt;

/// Namespace assumed when parsing an id without an explicit `namespace:` part.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A validated, namespaced resource identifier (`namespace:path`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Create an id from a namespace and path, validating both parts.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() {
            return Err(invalid(&namespace, &path, "empty namespace"));
        }
        if !namespace.chars().all(is_valid_namespace_char) {
            return Err(invalid(
                &namespace,
                &path,
                "namespace must be [a-z0-9_.-]",
            ));
        }
        if path.is_empty() {
            return Err(invalid(&namespace, &path, "empty path"));
        }
        if !path.chars().all(is_valid_path_char) {
            return Err(invalid(&namespace, &path, "path must be [a-z0-9_.\\-/]"));
        }
        if path.split('/').any(str::is_empty) {
            return Err(invalid(&namespace, &path, "empty path segment"));
        }

        Ok(Self { namespace, path })
    }

    /// Parse a `namespace:path` string. A bare `path` uses
    /// [`DEFAULT_NAMESPACE`].
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, value),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Split the path into its first segment and the remainder.
    ///
    /// Returns `None` when the path consists of a single segment (no `/`).
    pub fn split_first_segment(&self) -> Option<(&str, &str)> {
        self.path.split_once('/')
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn invalid(namespace: &str, path: &str, reason: &'static str) -> Error {
    Error::InvalidId {
        value: format!("{namespace}:{path}"),
        reason,
    }
}

fn is_valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_valid_path_char(c: char) -> bool {
    is_valid_namespace_char(c) || c == '/'
}
