//! Tests for execution-order resolution.
mod common;
use common::*;
use fieldpath::prelude::*;
use fieldpath::resolver::single_start;

#[test]
fn test_flat_order_collects_motion_nodes_in_visit_order() {
    let graph = simple_motion_graph();
    assert_eq!(flat_motion_order(&graph), vec!["fwd", "turn"]);
}

#[test]
fn test_flat_order_skips_non_motion_kinds() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new("wait", NodeKind::Wait { seconds: 2.0 }));
    graph.add_node(Node::new(
        "fwd",
        NodeKind::Forward {
            distance: 24.0,
            power: 0.5,
        },
    ));
    graph.try_connect("start", None, "wait").unwrap();
    graph.try_connect("wait", None, "fwd").unwrap();

    assert_eq!(flat_motion_order(&graph), vec!["fwd"]);
}

#[test]
fn test_flat_order_ignores_tagged_branch_edges() {
    // The forward/backward bodies of the conditional are program-only; the
    // previewed trajectory follows the untagged continuation.
    let graph = branching_graph();
    assert_eq!(flat_motion_order(&graph), vec!["turn"]);
}

#[test]
fn test_empty_graph_yields_empty_order() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    assert!(flat_motion_order(&graph).is_empty());
}

#[test]
fn test_missing_start_yields_empty_order() {
    let mut graph = Graph::new();
    graph.add_node(Node::new(
        "fwd",
        NodeKind::Forward {
            distance: 24.0,
            power: 0.5,
        },
    ));
    assert!(flat_motion_order(&graph).is_empty());
}

#[test]
fn test_dangling_edge_terminates_branch_without_error() {
    let mut graph = simple_motion_graph();
    graph.try_connect("turn", None, "ghost").unwrap();
    assert_eq!(flat_motion_order(&graph), vec!["fwd", "turn"]);
}

#[test]
fn test_fanout_follows_connection_order() {
    let graph = parallel_graph();
    // Only "fwd" is a motion kind, but it must come from the first edge.
    assert_eq!(flat_motion_order(&graph), vec!["fwd"]);
}

#[test]
fn test_single_start_contract() {
    let graph = simple_motion_graph();
    assert_eq!(single_start(&graph).unwrap().id, "start");

    let mut no_start = Graph::new();
    no_start.add_node(Node::new("fwd", NodeKind::TurnLeft { angle: 10.0 }));
    assert_eq!(
        single_start(&no_start).unwrap_err(),
        CompileError::MissingStartNode
    );

    let mut two_starts = simple_motion_graph();
    two_starts.add_node(Node::new("start2", NodeKind::Start));
    assert_eq!(
        single_start(&two_starts).unwrap_err(),
        CompileError::MultipleStartNodes { count: 2 }
    );
}
