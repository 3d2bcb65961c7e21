//! Node and edge input types plus the derived adjacency indexes.
//!
//! The indexes are rebuilt once per traversal call in a single pass over
//! the edge list and are read-only for the rest of the run.

use std::collections::HashMap;

/// A named node carrying an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Name of the node, unique within one traversal call.
    pub name: String,
    /// Caller-supplied payload, handed to the callback by reference.
    pub data: T,
}

impl<T> Node<T> {
    /// Create a node from a name and a payload.
    #[must_use]
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A directed edge meaning "visit `src` before `dst`".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Name of the prerequisite node.
    pub src: String,
    /// Name of the dependent node.
    pub dst: String,
}

impl Edge {
    /// Create an edge between two node names.
    #[must_use]
    pub fn new(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }
}

/// Child and parent adjacency derived from the edge list.
///
/// Neighbour lists preserve edge declaration order with duplicates
/// collapsed, so parent payloads reach the callback in the order their
/// edges were declared. Lookups on unknown names yield empty slices.
#[derive(Debug, Default)]
pub(crate) struct AdjacencyIndex {
    children: HashMap<String, Vec<String>>,
    parents: HashMap<String, Vec<String>>,
}

impl AdjacencyIndex {
    /// Build both indexes in a single pass over the edges.
    pub(crate) fn build(edges: &[Edge]) -> Self {
        let mut index = Self::default();

        for edge in edges {
            let children = index.children.entry(edge.src.clone()).or_default();
            if !children.contains(&edge.dst) {
                children.push(edge.dst.clone());
            }

            let parents = index.parents.entry(edge.dst.clone()).or_default();
            if !parents.contains(&edge.src) {
                parents.push(edge.src.clone());
            }
        }

        index
    }

    /// Names reachable from `name` by one outgoing edge.
    pub(crate) fn children(&self, name: &str) -> &[String] {
        self.children.get(name).map_or(&[], Vec::as_slice)
    }

    /// Names reaching `name` by one incoming edge.
    pub(crate) fn parents(&self, name: &str) -> &[String] {
        self.parents.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct outgoing edges; used only for tie-breaking.
    pub(crate) fn child_count(&self, name: &str) -> usize {
        self.children(name).len()
    }
}
