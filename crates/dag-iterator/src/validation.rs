//! Input validation for traversal calls.
//!
//! The traversal entry points fail fast on the first structural problem.
//! Callers that want full diagnostics, including an acyclicity check, can
//! run [`validate`] before traversing.

use crate::graph::{Edge, Node};
use crate::{Error, Result};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use std::collections::{HashMap, HashSet};

/// Result of standalone graph validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the input is valid (unique names, declared endpoints, no cycles).
    pub is_valid: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

/// Fail-fast structural check used by the traversal entry points.
///
/// Returns the first duplicate node name or undeclared edge endpoint found.
pub(crate) fn validate_input<T>(nodes: &[Node<T>], edges: &[Edge]) -> Result<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.name.as_str()) {
            return Err(Error::DuplicateNodeName {
                name: node.name.clone(),
            });
        }
    }

    for edge in edges {
        for name in [&edge.src, &edge.dst] {
            if !seen.contains(name.as_str()) {
                return Err(Error::UndeclaredNode {
                    name: name.clone(),
                    src: edge.src.clone(),
                    dst: edge.dst.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validate a node and edge list without traversing it.
///
/// Collects every duplicate name and undeclared endpoint rather than
/// stopping at the first. When the input is structurally sound, also runs
/// a cycle-detection pre-pass. The traversal entry points never check for
/// cycles themselves (they assume acyclic input and merely guarantee
/// termination), so callers that cannot vouch for their edge set should
/// call this first.
#[must_use]
pub fn validate<T>(nodes: &[Node<T>], edges: &[Edge]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.name.as_str()) {
            errors.push(Error::DuplicateNodeName {
                name: node.name.clone(),
            });
        }
    }

    for edge in edges {
        for name in [&edge.src, &edge.dst] {
            if !seen.contains(name.as_str()) {
                errors.push(Error::UndeclaredNode {
                    name: name.clone(),
                    src: edge.src.clone(),
                    dst: edge.dst.clone(),
                });
            }
        }
    }

    // Cycle detection is only meaningful once names and endpoints line up.
    if errors.is_empty() && has_cycles(nodes, edges) {
        errors.push(Error::CycleDetected {
            message: "edge set contains a dependency cycle".to_string(),
        });
    }

    if errors.is_empty() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(errors)
    }
}

/// Cycle check over a throwaway petgraph graph.
fn has_cycles<T>(nodes: &[Node<T>], edges: &[Edge]) -> bool {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let mut name_to_node = HashMap::with_capacity(nodes.len());

    for node in nodes {
        name_to_node.insert(node.name.as_str(), graph.add_node(()));
    }

    for edge in edges {
        if let (Some(&src), Some(&dst)) = (
            name_to_node.get(edge.src.as_str()),
            name_to_node.get(edge.dst.as_str()),
        ) {
            graph.add_edge(src, dst, ());
        }
    }

    is_cyclic_directed(&graph)
}
