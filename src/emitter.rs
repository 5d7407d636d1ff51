//! Fragment emitter
//!
//! Splices resolved type definitions into a base template schema, producing
//! one fully-formed schema document. Definitions are inserted verbatim, in
//! closure order, immediately before the closing schema tag. The template
//! and source documents are never mutated; the caller decides where the
//! assembled output goes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::index::SchemaIndex;

/// Insertion marker: the closing schema tag with its leading indentation.
/// Accepts any namespace prefix (`xsd:`, `xs:`) or none.
static SCHEMA_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([ \t]*)</(?:\w+:)?schema>").unwrap());

/// Indentation added below the marker's own level for inserted definitions
const CHILD_INDENT: &str = "    ";

/// Produce a new schema document from the template with all closure members
/// spliced in before the closing schema tag.
///
/// Definition bodies are emitted verbatim from the source spans recorded in
/// the index; only the leading indentation of each definition's first line
/// is supplied by the template's conventions. An empty closure returns the
/// template text unchanged.
pub fn emit(closure: &[String], index: &SchemaIndex, template: &str) -> Result<String> {
    let marker = SCHEMA_CLOSE
        .captures(template)
        .ok_or_else(|| Error::Template("no closing schema tag found in base template".to_string()))?;

    if closure.is_empty() {
        return Ok(template.to_string());
    }

    let insert_at = marker.get(1).map(|m| m.start()).unwrap_or(0);
    let indent = format!("{}{}", &marker[1], CHILD_INDENT);

    let mut output = String::with_capacity(template.len() + closure.len() * 256);
    output.push_str(&template[..insert_at]);

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    for name in closure {
        let definition = index.get(name).ok_or_else(|| Error::UnresolvedType {
            name: name.clone(),
            referrer: None,
        })?;
        output.push_str(&indent);
        output.push_str(index.definition_text(definition));
        output.push('\n');
    }

    output.push_str(&template[insert_at..]);
    Ok(output)
}
