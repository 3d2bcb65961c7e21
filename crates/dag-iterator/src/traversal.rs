//! The traversal engine.
//!
//! Walks a DAG in dependency order: a node enters the worklist only once
//! every one of its parents has been visited, so the callback always sees
//! fully-processed parent data. The worklist is a stack in depth-first
//! mode and a queue in breadth-first mode; all ordering decisions go
//! through explicit tie-break rules, never unordered map iteration, so a
//! given input always produces the same callback sequence.

use crate::Result;
use crate::graph::{AdjacencyIndex, Edge, Node};
use crate::validation::validate_input;
use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Worklist discipline for the traversal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationMode {
    /// Last-in-first-out: a branch is fully explored before its siblings.
    DepthFirst,
    /// First-in-first-out: nodes are visited level by level.
    BreadthFirst,
}

/// How newly-ready siblings are ordered before entering the worklist.
#[derive(Debug, Clone, Copy)]
enum SiblingOrder {
    /// Pure discovery order: node input order for start nodes, edge
    /// declaration order for children. Behavior of the earliest version
    /// of this library, kept alive through [`iterate`].
    Discovery,
    /// Child-count tie-break: ascending for depth-first, descending for
    /// breadth-first, ties broken by node input order.
    ChildCount,
}

/// Traverse a DAG in dependency order, invoking `visit` once per node.
///
/// The callback receives the node payload, the payloads of the node's
/// parents in edge declaration order, a monotonic sequence index starting
/// at 0, and the node's dependency depth (one plus the maximum depth of
/// its parents; 0 for start nodes). Payloads are passed by reference and
/// are never cloned, so a node handed to the callback as a parent is the
/// same referent the node's own invocation saw.
///
/// Traversal begins at every pure source (a node with at least one
/// outgoing edge and no incoming edges) and stops early after processing
/// `until`, if set. Empty `nodes` or `edges` is a no-op.
///
/// # Errors
///
/// Returns an error if a node name is declared twice or an edge
/// references an undeclared name. Cycles are not detected here; a cyclic
/// edge set starves worklist admission and simply ends the traversal
/// short (see [`validate`](crate::validate) for an explicit check).
pub fn traverse<T, F>(
    nodes: &[Node<T>],
    edges: &[Edge],
    mode: IterationMode,
    visit: F,
    until: Option<&str>,
) -> Result<()>
where
    F: FnMut(&T, &[&T], usize, usize),
{
    run(nodes, edges, mode, SiblingOrder::ChildCount, visit, until)
}

/// Depth-first traversal with child-count tie-break ordering.
///
/// Equivalent to [`traverse`] with [`IterationMode::DepthFirst`].
///
/// # Errors
///
/// Same as [`traverse`].
pub fn iterate_dfs<T, F>(
    nodes: &[Node<T>],
    edges: &[Edge],
    visit: F,
    until: Option<&str>,
) -> Result<()>
where
    F: FnMut(&T, &[&T], usize, usize),
{
    traverse(nodes, edges, IterationMode::DepthFirst, visit, until)
}

/// Breadth-first traversal with child-count tie-break ordering.
///
/// Equivalent to [`traverse`] with [`IterationMode::BreadthFirst`].
///
/// # Errors
///
/// Same as [`traverse`].
pub fn iterate_bfs<T, F>(
    nodes: &[Node<T>],
    edges: &[Edge],
    visit: F,
    until: Option<&str>,
) -> Result<()>
where
    F: FnMut(&T, &[&T], usize, usize),
{
    traverse(nodes, edges, IterationMode::BreadthFirst, visit, until)
}

/// Mode-less compatibility entry point: depth-first, discovery ordering.
///
/// Callers written against the earliest version of this library depend on
/// its ordering: start nodes seeded purely in node input order and ready
/// children appended purely in edge declaration order, with no child-count
/// tie-break. Validation, depth, and early-stop semantics match
/// [`traverse`].
///
/// # Errors
///
/// Same as [`traverse`].
pub fn iterate<T, F>(
    nodes: &[Node<T>],
    edges: &[Edge],
    visit: F,
    until: Option<&str>,
) -> Result<()>
where
    F: FnMut(&T, &[&T], usize, usize),
{
    run(
        nodes,
        edges,
        IterationMode::DepthFirst,
        SiblingOrder::Discovery,
        visit,
        until,
    )
}

fn run<T, F>(
    nodes: &[Node<T>],
    edges: &[Edge],
    mode: IterationMode,
    order: SiblingOrder,
    mut visit: F,
    until: Option<&str>,
) -> Result<()>
where
    F: FnMut(&T, &[&T], usize, usize),
{
    if nodes.is_empty() || edges.is_empty() {
        return Ok(());
    }
    validate_input(nodes, edges)?;

    let index = AdjacencyIndex::build(edges);
    let payloads: HashMap<&str, &T> = nodes
        .iter()
        .map(|node| (node.name.as_str(), &node.data))
        .collect();
    let input_order: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(position, node)| (node.name.as_str(), position))
        .collect();

    // Pure sources: at least one outgoing edge, no incoming edges.
    let mut start_nodes: Vec<&str> = nodes
        .iter()
        .map(|node| node.name.as_str())
        .filter(|name| index.child_count(name) > 0 && index.parents(name).is_empty())
        .collect();
    order_siblings(&mut start_nodes, mode, order, &index, &input_order);
    debug!("Seeding worklist with {} start node(s)", start_nodes.len());

    let mut worklist: VecDeque<&str> = start_nodes.into_iter().collect();
    let mut visited: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    let mut sequence = 0_usize;

    loop {
        let next = match mode {
            IterationMode::DepthFirst => worklist.pop_back(),
            IterationMode::BreadthFirst => worklist.pop_front(),
        };
        let Some(name) = next else {
            break;
        };

        let parents = index.parents(name);

        // Every parent is already in the visited map by the readiness rule.
        let depth = parents
            .iter()
            .filter_map(|parent| visited.get(parent.as_str()))
            .max()
            .map_or(0, |deepest| deepest + 1);
        visited.insert(name, depth);

        let parent_data: Vec<&T> = parents
            .iter()
            .filter_map(|parent| payloads.get(parent.as_str()).copied())
            .collect();
        if let Some(&data) = payloads.get(name) {
            visit(data, &parent_data, sequence, depth);
            sequence += 1;
        }

        if until == Some(name) {
            debug!("Stopping at '{}' after {} visit(s)", name, sequence);
            break;
        }

        // A child becomes ready when the node just processed was its last
        // unvisited parent, so it enters the worklist exactly once.
        let mut ready: Vec<&str> = index
            .children(name)
            .iter()
            .map(String::as_str)
            .filter(|child| !visited.contains_key(child))
            .filter(|child| {
                index
                    .parents(child)
                    .iter()
                    .all(|parent| visited.contains_key(parent.as_str()))
            })
            .collect();
        order_siblings(&mut ready, mode, order, &index, &input_order);
        worklist.extend(ready);
    }

    Ok(())
}

/// Order start nodes or newly-ready siblings before they enter the worklist.
///
/// Depth-first sorts by child count ascending so the heavier branch sits
/// deeper in the stack; breadth-first sorts descending so wide branches
/// broaden earliest. Ties fall back to node input order. The sort is
/// skipped entirely in discovery order.
fn order_siblings(
    names: &mut [&str],
    mode: IterationMode,
    order: SiblingOrder,
    index: &AdjacencyIndex,
    input_order: &HashMap<&str, usize>,
) {
    if matches!(order, SiblingOrder::Discovery) {
        return;
    }

    let position = |name: &str| input_order.get(name).copied().unwrap_or(usize::MAX);
    match mode {
        IterationMode::DepthFirst => {
            names.sort_by_key(|name| (index.child_count(name), position(name)));
        }
        IterationMode::BreadthFirst => {
            names.sort_by_key(|name| (Reverse(index.child_count(name)), position(name)));
        }
    }
}
