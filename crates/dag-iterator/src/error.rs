//! Error types for DAG iteration.

use thiserror::Error;

/// Result type for DAG iteration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or traversing a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The same node name was declared more than once in the node list.
    #[error("Duplicate node name '{name}' in node list")]
    DuplicateNodeName {
        /// The name that was declared more than once.
        name: String,
    },

    /// An edge references a name absent from the node list.
    #[error("Edge '{src}' -> '{dst}' references undeclared node '{name}'")]
    UndeclaredNode {
        /// The endpoint that is not in the node list.
        name: String,
        /// Source name of the offending edge.
        src: String,
        /// Destination name of the offending edge.
        dst: String,
    },

    /// The edge set contains a dependency cycle.
    #[error("Cycle detected in graph: {message}")]
    CycleDetected {
        /// Human-readable description of the cycle.
        message: String,
    },
}
