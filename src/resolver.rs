//! Dependency resolver
//!
//! Computes the transitive closure of requested type names over the index's
//! recorded dependency edges. The traversal is breadth-first with a FIFO
//! queue and a visited set: deterministic output order for reproducible
//! diffs of generated files, and guaranteed termination on the mutually
//! referential type pairs this schema family is known to contain.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::index::SchemaIndex;

/// Dependency discovery summary for one requested root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootReport {
    /// The requested type name
    pub name: String,
    /// Types first discovered while resolving this root (the root included)
    pub discovered: usize,
}

/// Result of a successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    /// All required type names, duplicate-free, in traversal order
    pub closure: Vec<String>,
    /// Per-root discovery counts, in request order
    pub roots: Vec<RootReport>,
}

impl Resolution {
    /// Total number of unique types in the closure
    pub fn total(&self) -> usize {
        self.closure.len()
    }
}

/// Resolve the closure of all types transitively required by `requested`.
///
/// Roots are processed in caller order; each root's subgraph is walked
/// breadth-first, enqueuing dependencies in the scanner's textual-occurrence
/// order. A name missing from the index fails the whole resolution with
/// [`Error::UnresolvedType`] naming the missing type and its referrer —
/// an incomplete fragment would produce invalid generated code downstream,
/// so nothing is silently dropped. An empty request yields an empty closure.
pub fn resolve(requested: &[String], index: &SchemaIndex) -> Result<Resolution> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut closure = Vec::new();
    let mut roots = Vec::with_capacity(requested.len());

    for root in requested {
        let before = closure.len();
        resolve_root(root, index, &mut visited, &mut closure)?;
        roots.push(RootReport {
            name: root.clone(),
            discovered: closure.len() - before,
        });
    }

    Ok(Resolution { closure, roots })
}

fn resolve_root(
    root: &str,
    index: &SchemaIndex,
    visited: &mut HashSet<String>,
    closure: &mut Vec<String>,
) -> Result<()> {
    // Queue entries carry the name that referenced them, for error reporting
    let mut queue: VecDeque<(String, Option<String>)> = VecDeque::new();
    queue.push_back((root.to_string(), None));

    while let Some((name, referrer)) = queue.pop_front() {
        if visited.contains(&name) {
            continue;
        }

        let definition = index
            .get(&name)
            .ok_or_else(|| Error::UnresolvedType { name: name.clone(), referrer })?;

        visited.insert(name.clone());
        closure.push(name.clone());

        for dependency in definition.dependencies() {
            if !visited.contains(dependency) {
                queue.push_back((dependency.clone(), Some(name.clone())));
            }
        }
    }

    Ok(())
}
