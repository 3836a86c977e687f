//! Execution-order resolution.
//!
//! Two traversals share the same depth-first discipline over the graph. The
//! flat motion order below feeds the kinematic waypoint builder; the code
//! generator performs the branching walk itself by recursing over the
//! adjacency queries on [`Graph`]. Both are pure functions of the graph
//! snapshot they are handed.

use crate::error::CompileError;
use crate::graph::{Graph, Node, NodeId};
use ahash::AHashSet;

/// Collects the motion-kind nodes reachable from the start node over
/// untagged edges, in depth-first visit order.
///
/// Tagged branch edges are not followed; the bodies of `ifBranch`/`loop`
/// blocks belong to the generated program, not to the previewed trajectory.
/// The visited set guards against revisits even though the validator already
/// rejects cycles at connection time. Dangling edge targets and a missing
/// start node both degrade to shorter (possibly empty) output, never an
/// error.
pub fn flat_motion_order(graph: &Graph) -> Vec<NodeId> {
    let Some(start) = graph.start_node() else {
        return Vec::new();
    };

    let mut order = Vec::new();
    let mut visited: AHashSet<NodeId> = AHashSet::new();
    let mut stack = vec![start.id.clone()];

    while let Some(id) = stack.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        let Some(node) = graph.node(&id) else {
            // Transiently dangling target; end this branch of the walk.
            continue;
        };
        if node.kind.is_motion() {
            order.push(id.clone());
        }

        // Reverse push so the first-connected edge is visited first.
        let successors: Vec<&NodeId> = graph.untagged_successors(&id).collect();
        for target in successors.into_iter().rev() {
            stack.push(target.clone());
        }
    }

    order
}

/// Looks up the unique start node, surfacing the one caller contract the
/// compiler enforces with a typed error instead of degraded output.
pub fn single_start(graph: &Graph) -> Result<&Node, CompileError> {
    match graph.start_count() {
        0 => Err(CompileError::MissingStartNode),
        1 => graph
            .start_node()
            .ok_or(CompileError::MissingStartNode),
        count => Err(CompileError::MultipleStartNodes { count }),
    }
}
