//! Schema index
//!
//! Parses the source schema document and builds a read-only mapping from
//! type name to its definition: kind, exact byte span in the source text,
//! and the ordered set of type names it directly references.
//!
//! The span is recorded so definitions can later be emitted verbatim —
//! downstream code generation is sensitive to the original formatting, so
//! definitions are never re-serialized.

use std::ops::Range;
use std::path::Path;

use indexmap::IndexMap;
use roxmltree::{Document, Node};

use crate::error::{Error, ParseError, Result};
use crate::scanner;

/// XSD element local names recognized at the schema top level
mod xsd_elements {
    pub const SCHEMA: &str = "schema";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const SIMPLE_TYPE: &str = "simpleType";
}

/// Kind of a top-level type definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// xsd:simpleType
    Simple,
    /// xsd:complexType
    Complex,
}

impl TypeKind {
    /// Lowercase label used in listings and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Simple => "simple",
            TypeKind::Complex => "complex",
        }
    }
}

/// A single top-level type definition.
///
/// Created once during indexing and immutable thereafter.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    name: String,
    kind: TypeKind,
    span: Range<usize>,
    dependencies: Vec<String>,
}

impl TypeDefinition {
    /// The type's local name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simple or complex
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Byte span of the definition in the source document
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Direct dependencies in textual occurrence order, deduplicated.
    ///
    /// No transitive resolution has been performed; built-in XSD types are
    /// already filtered out.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Read-only index over a source schema document.
///
/// Built once per extraction run, read many times, never mutated after
/// construction.
#[derive(Debug)]
pub struct SchemaIndex {
    source: String,
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaIndex {
    /// Build an index from schema source text.
    ///
    /// The schema element is located by local name anywhere in the document,
    /// so both bare schemas and schemas embedded in a WSDL `definitions`
    /// wrapper are accepted. Fails when the document is not well-formed,
    /// has no schema element, or defines the same top-level type name twice.
    pub fn from_string(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let types = build_type_map(&source)?;
        Ok(Self { source, types })
    }

    /// Build an index from a schema file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("failed to read schema '{}': {}", path.display(), e))
        })?;
        Self::from_string(source).map_err(|e| match e {
            Error::Parse(pe) => Error::Parse(pe.with_location(path.display().to_string())),
            other => other,
        })
    }

    /// Look up a type definition by local name
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Whether a type name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of indexed top-level types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the schema defines no top-level types
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in document order, each exactly once
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Definitions in document order
    pub fn definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// The verbatim source text of a definition
    pub fn definition_text(&self, definition: &TypeDefinition) -> &str {
        &self.source[definition.span()]
    }
}

fn build_type_map(source: &str) -> Result<IndexMap<String, TypeDefinition>> {
    let doc = Document::parse(source)
        .map_err(|e| ParseError::new(format!("not well-formed XML: {}", e)))?;

    let schema = find_schema_element(&doc)?;

    let mut types = IndexMap::new();
    for child in schema.children().filter(Node::is_element) {
        let kind = match child.tag_name().name() {
            xsd_elements::COMPLEX_TYPE => TypeKind::Complex,
            xsd_elements::SIMPLE_TYPE => TypeKind::Simple,
            _ => continue,
        };

        // Anonymous types cannot be referenced and are not indexed
        let name = match child.attribute("name") {
            Some(n) => n.to_string(),
            None => continue,
        };

        let definition = TypeDefinition {
            name: name.clone(),
            kind,
            span: child.range(),
            dependencies: scanner::scan(child),
        };

        if types.insert(name.clone(), definition).is_some() {
            return Err(Error::DuplicateType { name });
        }
    }

    Ok(types)
}

fn find_schema_element<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == xsd_elements::SCHEMA)
        .ok_or_else(|| ParseError::new("could not find schema element in document").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns:xsd="http://www.w3.org/2001/XMLSchema"
             xmlns:tns="http://soap.sforce.com/2006/04/metadata">
    <types>
        <xsd:schema>
            <xsd:complexType name="DeployOptions">
                <xsd:sequence>
                    <xsd:element name="callOptions" type="tns:CallOptions"/>
                    <xsd:element name="checkOnly" type="xsd:boolean"/>
                </xsd:sequence>
            </xsd:complexType>
            <xsd:complexType name="CallOptions">
                <xsd:sequence>
                    <xsd:element name="client" type="xsd:string"/>
                </xsd:sequence>
            </xsd:complexType>
            <xsd:simpleType name="TestLevel">
                <xsd:restriction base="xsd:string">
                    <xsd:enumeration value="RunAllTests"/>
                </xsd:restriction>
            </xsd:simpleType>
        </xsd:schema>
    </types>
</definitions>"#;

    #[test]
    fn test_index_collects_top_level_types() {
        let index = SchemaIndex::from_string(SCHEMA).unwrap();
        assert_eq!(index.len(), 3);
        let names: Vec<_> = index.type_names().collect();
        assert_eq!(names, vec!["DeployOptions", "CallOptions", "TestLevel"]);
    }

    #[test]
    fn test_index_records_kind() {
        let index = SchemaIndex::from_string(SCHEMA).unwrap();
        assert_eq!(index.get("DeployOptions").unwrap().kind(), TypeKind::Complex);
        assert_eq!(index.get("TestLevel").unwrap().kind(), TypeKind::Simple);
    }

    #[test]
    fn test_index_records_dependencies() {
        let index = SchemaIndex::from_string(SCHEMA).unwrap();
        assert_eq!(index.get("DeployOptions").unwrap().dependencies(), ["CallOptions"]);
        assert!(index.get("CallOptions").unwrap().dependencies().is_empty());
    }

    #[test]
    fn test_definition_text_is_verbatim() {
        let index = SchemaIndex::from_string(SCHEMA).unwrap();
        let def = index.get("CallOptions").unwrap();
        let text = index.definition_text(def);
        assert!(text.starts_with(r#"<xsd:complexType name="CallOptions">"#));
        assert!(text.ends_with("</xsd:complexType>"));
        // Exact slice from the source, original whitespace included
        assert!(SCHEMA.contains(text));
    }

    #[test]
    fn test_duplicate_type_name_rejected() {
        let xml = r#"<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema">
            <xsd:complexType name="Twice"/>
            <xsd:complexType name="Twice"/>
        </xsd:schema>"#;
        let err = SchemaIndex::from_string(xml).unwrap_err();
        assert!(matches!(err, Error::DuplicateType { ref name } if name == "Twice"));
    }

    #[test]
    fn test_missing_schema_element() {
        let err = SchemaIndex::from_string("<root><child/></root>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_malformed_document() {
        let err = SchemaIndex::from_string("<xsd:schema>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_anonymous_and_nested_types_not_indexed() {
        let xml = r#"<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema">
            <xsd:complexType name="Outer">
                <xsd:sequence>
                    <xsd:element name="inner">
                        <xsd:complexType>
                            <xsd:sequence/>
                        </xsd:complexType>
                    </xsd:element>
                </xsd:sequence>
            </xsd:complexType>
            <xsd:simpleType/>
        </xsd:schema>"#;
        let index = SchemaIndex::from_string(xml).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains("Outer"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = SchemaIndex::from_file("/nonexistent/metadata.xml").unwrap_err();
        assert!(matches!(err, Error::Resource(_)));
    }
}
