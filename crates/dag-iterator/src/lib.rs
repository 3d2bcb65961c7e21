//! Deterministic dependency-order iteration over directed acyclic graphs.
//!
//! This crate provides a single traversal engine that walks a DAG in
//! depth-first or breadth-first dependency order, invoking a caller-supplied
//! callback once per node with that node's payload, its parents' payloads,
//! a monotonic sequence index, and a computed dependency depth. A node is
//! only ever processed after all of its parents have been processed, which
//! is the ordering schedulers, build systems, and layout engines need.
//!
//! # Key Types
//!
//! - [`Node`]: a named, caller-supplied payload carrier
//! - [`Edge`]: an ordered "visit `src` before `dst`" pair between node names
//! - [`IterationMode`]: worklist discipline (depth-first or breadth-first)
//!
//! # Entry Points
//!
//! - [`traverse`]: the engine, with an explicit [`IterationMode`]
//! - [`iterate_dfs`] / [`iterate_bfs`]: mode-fixed wrappers
//! - [`iterate`]: mode-less compatibility entry point that keeps the
//!   discovery ordering of the earliest version of this library
//! - [`validate`]: standalone input diagnostics including a cycle check
//!
//! # Example
//!
//! ```ignore
//! use dag_iterator::{iterate_dfs, Edge, Node};
//!
//! let nodes = vec![
//!     Node::new("build", "compile the sources"),
//!     Node::new("test", "run the suite"),
//! ];
//! let edges = vec![Edge::new("build", "test")];
//!
//! iterate_dfs(&nodes, &edges, |data, parents, index, depth| {
//!     println!("{index}: {data} at depth {depth} ({} parents)", parents.len());
//! }, None)?;
//! ```

mod error;
mod graph;
mod traversal;
mod validation;

pub use error::{Error, Result};
pub use graph::{Edge, Node};
pub use traversal::{IterationMode, iterate, iterate_bfs, iterate_dfs, traverse};
pub use validation::{ValidationResult, validate};
