//! # xsd-extract
//!
//! Extracts a minimal, self-contained subset of type definitions from a
//! large XML Schema (such as the schema embedded in the Salesforce Metadata
//! WSDL) and splices it into a base template schema, ready for downstream
//! code generation.
//!
//! The pipeline has four stages:
//!
//! 1. **Index** ([`index::SchemaIndex`]) — parse the source document and map
//!    every named top-level type to its verbatim source span and direct
//!    dependencies.
//! 2. **Scan** ([`scanner::scan`]) — pure extraction of the type names a
//!    single definition references.
//! 3. **Resolve** ([`resolver::resolve`]) — deterministic breadth-first
//!    closure of the requested roots, cycle-safe, failing fast on any
//!    missing definition.
//! 4. **Emit** ([`emitter::emit`]) — splice the closure, verbatim and in
//!    order, before the template's closing schema tag.
//!
//! ## Example
//!
//! ```rust,ignore
//! use xsd_extract::{ExtractConfig, RequestSpecification};
//!
//! let report = ExtractConfig::new("metadata.xml", "base.xml")
//!     .with_output("output.xml")
//!     .with_request(RequestSpecification::new(["CustomObject"]))
//!     .run()?;
//!
//! println!("emitted {} types", report.total());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod names;

pub mod index;
pub mod scanner;

pub mod resolver;
pub mod request;

pub mod emitter;
pub mod extract;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extract::{ExtractConfig, ExtractReport};
pub use index::{SchemaIndex, TypeDefinition, TypeKind};
pub use request::RequestSpecification;
pub use resolver::{resolve, Resolution};

/// Version of the xsd-extract crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD namespace used for structural schema elements
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Target namespace of the Salesforce Metadata API schema
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";
