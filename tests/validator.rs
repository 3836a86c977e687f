//! Tests for connection-time graph validation rules.
mod common;
use common::*;
use fieldpath::prelude::*;

#[test]
fn test_rejects_self_connection() {
    let mut graph = simple_motion_graph();
    let result = graph.try_connect("fwd", None, "fwd");
    assert_eq!(
        result.unwrap_err(),
        ConnectionError::SelfConnection {
            node_id: "fwd".to_string()
        }
    );
}

#[test]
fn test_rejects_cycle_back_to_start() {
    let mut graph = simple_motion_graph();
    let before = graph.edges().len();

    let result = graph.try_connect("turn", None, "start");
    assert!(matches!(
        result.unwrap_err(),
        ConnectionError::CycleDetected { .. }
    ));
    assert_eq!(graph.edges().len(), before, "rejected edge must not be added");
}

#[test]
fn test_rejects_indirect_cycle() {
    let mut graph = simple_motion_graph();
    graph.add_node(Node::new("extra", NodeKind::TurnLeft { angle: 30.0 }));
    graph.try_connect("turn", None, "extra").unwrap();

    let result = graph.try_connect("extra", None, "fwd");
    assert!(matches!(
        result.unwrap_err(),
        ConnectionError::CycleDetected { .. }
    ));
}

#[test]
fn test_branch_handle_is_single_use() {
    let mut graph = branching_graph();
    graph.add_node(Node::new(
        "fwd2",
        NodeKind::Forward {
            distance: 6.0,
            power: 0.5,
        },
    ));
    let before = graph.edges().len();

    let result = graph.try_connect("if", Some(Handle::True), "fwd2");
    assert_eq!(
        result.unwrap_err(),
        ConnectionError::HandleAlreadyConnected {
            source_id: "if".to_string(),
            handle: Handle::True,
        }
    );
    assert_eq!(graph.edges().len(), before);
}

#[test]
fn test_rejects_same_category_fanout() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new(
        "fwd1",
        NodeKind::Forward {
            distance: 24.0,
            power: 0.5,
        },
    ));
    graph.add_node(Node::new(
        "fwd2",
        NodeKind::Forward {
            distance: 12.0,
            power: 0.5,
        },
    ));

    graph.try_connect("start", None, "fwd1").unwrap();
    let result = graph.try_connect("start", None, "fwd2");
    assert_eq!(
        result.unwrap_err(),
        ConnectionError::DuplicateCategoryFanout {
            source_id: "start".to_string(),
            category: Category::Movement,
        }
    );
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn test_allows_cross_category_fanout() {
    // forward (movement) and setServo (mechanism) may run concurrently.
    let graph = parallel_graph();
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn test_category_override_changes_fanout_verdict() {
    // Re-assigning setServo into the movement category makes the same
    // fan-out that parallel_graph() builds a duplicate.
    let categories = CategoryMap::new().with_override("setServo", Category::Movement);
    let mut graph = Graph::new().with_categories(categories);
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new(
        "fwd",
        NodeKind::Forward {
            distance: 24.0,
            power: 0.5,
        },
    ));
    graph.add_node(Node::new(
        "claw",
        NodeKind::SetServo {
            servo: "claw".to_string(),
            position: 0.5,
        },
    ));

    graph.try_connect("start", None, "fwd").unwrap();
    let result = graph.try_connect("start", None, "claw");
    assert!(matches!(
        result.unwrap_err(),
        ConnectionError::DuplicateCategoryFanout { .. }
    ));
}

#[test]
fn test_tagged_handles_stay_unique_per_source() {
    let graph = loop_graph();
    for handle in [Handle::Loop, Handle::Next] {
        let count = graph
            .edges()
            .iter()
            .filter(|e| e.source == "loop" && e.handle == Some(handle))
            .count();
        assert_eq!(count, 1, "handle {handle} must carry exactly one edge");
    }
}

#[test]
fn test_rejects_tagged_handle_on_non_branch_source() {
    let mut graph = simple_motion_graph();
    graph.add_node(Node::new("extra", NodeKind::TurnLeft { angle: 30.0 }));
    let before = graph.edges().len();

    let result = graph.try_connect("fwd", Some(Handle::True), "extra");
    assert_eq!(
        result.unwrap_err(),
        ConnectionError::UnsupportedHandle {
            source_id: "fwd".to_string(),
            handle: Handle::True,
        }
    );
    assert_eq!(graph.edges().len(), before);
}

#[test]
fn test_loop_connections_must_carry_handles() {
    // An untagged successor of a loop block would never be scheduled; the
    // validator rejects it instead of letting it go silently dead.
    let mut graph = loop_graph();
    graph.add_node(Node::new("wait2", NodeKind::Wait { seconds: 0.5 }));

    let result = graph.try_connect("loop", None, "wait2");
    assert_eq!(
        result.unwrap_err(),
        ConnectionError::HandleRequired {
            source_id: "loop".to_string(),
        }
    );
}

#[test]
fn test_for_each_connections_must_carry_handles() {
    let mut graph = Graph::new();
    graph.add_node(Node::new(
        "each",
        NodeKind::ForEach {
            collection: "samples".to_string(),
        },
    ));
    graph.add_node(Node::new("wait", NodeKind::Wait { seconds: 1.0 }));

    assert!(graph.try_connect("each", None, "wait").is_err());
    assert!(graph.try_connect("each", Some(Handle::Loop), "wait").is_ok());
}

#[test]
fn test_if_branch_keeps_its_untagged_continuation() {
    // branching_graph wires `if -> turn` without a handle; that edge is the
    // after-branch continuation and must stay legal.
    let graph = branching_graph();
    assert!(
        graph
            .edges()
            .iter()
            .any(|e| e.source == "if" && e.target == "turn" && e.handle.is_none())
    );
}

#[test]
fn test_dangling_target_is_tolerated() {
    // The UI may reference a node mid-delete; connecting to an id that is
    // not (or no longer) in the node set is not a shape violation.
    let mut graph = simple_motion_graph();
    let result = graph.try_connect("turn", None, "ghost");
    assert!(result.is_ok());
}

#[test]
fn test_disconnect_removes_only_matching_edge() {
    let mut graph = branching_graph();
    let before = graph.edges().len();

    assert!(graph.disconnect("if", Some(Handle::True), "fwd"));
    assert_eq!(graph.edges().len(), before - 1);
    assert!(!graph.disconnect("if", Some(Handle::True), "fwd"));
}

#[test]
fn test_remove_node_drops_touching_edges() {
    let mut graph = branching_graph();
    graph.remove_node("if");
    assert!(graph.edges().iter().all(|e| e.source != "if" && e.target != "if"));
}
