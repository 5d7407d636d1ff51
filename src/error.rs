//! Error types for xsd-extract
//!
//! All failures in the extraction pipeline are fatal and detected eagerly:
//! nothing is retried and no partial output is ever written.

use std::fmt;
use thiserror::Error;

/// Result type alias using the xsd-extract Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for extraction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source or template document is malformed or lacks a schema root
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The source schema defines the same top-level type name twice
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// The duplicated type name
        name: String,
    },

    /// A requested or transitively-referenced type has no definition
    #[error("unresolved type: '{name}'{}", referrer_note(.referrer))]
    UnresolvedType {
        /// The missing type name
        name: String,
        /// The type that referenced it (None when requested directly)
        referrer: Option<String>,
    },

    /// Base template lacks the insertion marker
    #[error("template error: {0}")]
    Template(String),

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn referrer_note(referrer: &Option<String>) -> String {
    match referrer {
        Some(r) => format!(" (referenced by '{}')", r),
        None => " (requested directly)".to_string(),
    }
}

/// Schema parsing error with optional context
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Location of the failing document
    pub location: Option<String>,
    /// Source snippet that caused the error
    pub source: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the source snippet
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, "\n\nLocation: {}", loc)?;
        }

        if let Some(ref src) = self.source {
            write!(f, "\n\nSource:\n{}", src)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
