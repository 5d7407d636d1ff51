//! Extraction pipeline
//!
//! Ties the index, resolver and emitter together into a single batch run:
//! read the source schema, build the index, resolve the requested closure,
//! splice it into the base template and write the result.
//!
//! The output file is written only after the entire document has been
//! assembled in memory. Any failure before that point leaves the
//! destination untouched, including a pre-existing file from an earlier
//! run — a truncated fragment would silently break downstream generation.

use std::path::{Path, PathBuf};

use crate::emitter;
use crate::error::{Error, Result};
use crate::index::SchemaIndex;
use crate::request::RequestSpecification;
use crate::resolver::{self, RootReport};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "output.xml";

/// Configuration for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path to the full source schema (metadata WSDL)
    pub source: PathBuf,
    /// Path to the base template schema
    pub template: PathBuf,
    /// Destination for the emitted fragment
    pub output: PathBuf,
    /// Requested root types
    pub request: RequestSpecification,
}

impl ExtractConfig {
    /// Create a configuration with the default output path and request
    pub fn new(source: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            template: template.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            request: RequestSpecification::default(),
        }
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the requested root types
    pub fn with_request(mut self, request: RequestSpecification) -> Self {
        self.request = request;
        self
    }

    /// Run the extraction pipeline
    pub fn run(&self) -> Result<ExtractReport> {
        let index = SchemaIndex::from_file(&self.source)?;
        let resolution = resolver::resolve(self.request.roots(), &index)?;

        let template = read_template(&self.template)?;
        let document = emitter::emit(&resolution.closure, &index, &template)?;

        // Single write of the fully assembled document
        std::fs::write(&self.output, document)?;

        Ok(ExtractReport {
            roots: resolution.roots,
            closure: resolution.closure,
            output: self.output.clone(),
        })
    }
}

/// Summary of a completed extraction run.
///
/// Informational only; the emitted file is the data contract.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Per-root discovery counts, in request order
    pub roots: Vec<RootReport>,
    /// The full resolved closure, in emission order
    pub closure: Vec<String>,
    /// Where the fragment was written
    pub output: PathBuf,
}

impl ExtractReport {
    /// Total number of unique types emitted
    pub fn total(&self) -> usize {
        self.closure.len()
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::Resource(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}
