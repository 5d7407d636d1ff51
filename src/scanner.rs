//! Reference scanner
//!
//! Pure extraction of type references from a single definition subtree.
//! The scanner never consults the index: it reports what a definition
//! mentions, in the order the document mentions it, and the resolver
//! decides what those mentions mean.

use std::collections::HashSet;

use roxmltree::Node;

use crate::names;

/// Attributes whose values carry type references.
///
/// `type` on elements/attributes, `base` on extension/restriction,
/// `ref` for element/attribute references, `itemType` on lists and
/// `memberTypes` on unions.
const REFERENCE_ATTRS: [&str; 4] = ["type", "base", "ref", "itemType"];

/// Attribute whose value is a whitespace-separated QName list
const MEMBER_TYPES_ATTR: &str = "memberTypes";

/// Collect every type name referenced within a definition subtree.
///
/// Returns local (prefix-stripped) names in textual occurrence order with
/// duplicates removed. XSD built-in primitives are skipped: they have no
/// definition to resolve. Pure function; identical input yields identical
/// output.
pub fn scan(definition: Node) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut references = Vec::new();

    for node in definition.descendants().filter(Node::is_element) {
        for attr in node.attributes() {
            if REFERENCE_ATTRS.contains(&attr.name()) {
                record(attr.value(), &mut seen, &mut references);
            } else if attr.name() == MEMBER_TYPES_ATTR {
                for token in attr.value().split_whitespace() {
                    record(token, &mut seen, &mut references);
                }
            }
        }
    }

    references
}

fn record<'a>(qname: &'a str, seen: &mut HashSet<&'a str>, out: &mut Vec<String>) {
    let local = names::local_name(qname);
    if local.is_empty() || names::is_builtin(local) {
        return;
    }
    if seen.insert(local) {
        out.push(local.to_string());
    }
}
