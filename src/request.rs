//! Request specification
//!
//! The ordered set of root type names to extract. Historically this list
//! was hardcoded in the extraction script; here it is an explicit value
//! supplied to the resolver, with the old list kept as the default.
//!
//! A request can come from three places: the built-in default list, an
//! explicit list of names (CLI `--type` flags), or a JSON file. The JSON
//! file accepts either a bare array of names or an object with a `types`
//! key, so both `["A", "B"]` and `{"types": ["A", "B"]}` work.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default root types, carried over from the original extraction workflow
pub const DEFAULT_TYPES: [&str; 2] = ["CustomObject", "CustomAddressFieldSettings"];

/// Ordered set of requested root type names. Immutable input to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpecification {
    roots: Vec<String>,
}

/// Accepted JSON shapes for a request file
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Bare(Vec<String>),
    Keyed { types: Vec<String> },
}

impl RequestSpecification {
    /// Build a request from an explicit ordered list of names
    pub fn new(roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a request from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!(
                "failed to read types file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed: RequestFile = serde_json::from_str(&content).map_err(|e| {
            Error::Resource(format!(
                "invalid types file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let roots = match parsed {
            RequestFile::Bare(types) => types,
            RequestFile::Keyed { types } => types,
        };

        Ok(Self { roots })
    }

    /// The requested names in caller order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Whether the request is empty
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of requested roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }
}

impl Default for RequestSpecification {
    fn default() -> Self {
        Self::new(DEFAULT_TYPES)
    }
}
