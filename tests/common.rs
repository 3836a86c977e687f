//! Common test utilities for building block graphs and hardware configs.
use fieldpath::prelude::*;

/// Creates the canonical two-motion graph:
/// `start -> forward(24) -> turnRight(90)`.
#[allow(dead_code)]
pub fn simple_motion_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new(
        "fwd",
        NodeKind::Forward {
            distance: 24.0,
            power: 0.5,
        },
    ));
    graph.add_node(Node::new("turn", NodeKind::TurnRight { angle: 90.0 }));

    graph
        .try_connect("start", None, "fwd")
        .expect("start -> fwd");
    graph.try_connect("fwd", None, "turn").expect("fwd -> turn");
    graph
}

/// Creates a graph with a conditional:
/// `start -> if(sensorDistance < 10.0) { forward } else { backward }; turnRight`.
#[allow(dead_code)]
pub fn branching_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new(
        "if",
        NodeKind::IfBranch {
            condition: "sensorDistance < 10.0".to_string(),
        },
    ));
    graph.add_node(Node::new(
        "fwd",
        NodeKind::Forward {
            distance: 12.0,
            power: 0.5,
        },
    ));
    graph.add_node(Node::new(
        "back",
        NodeKind::Backward {
            distance: 12.0,
            power: 0.5,
        },
    ));
    graph.add_node(Node::new("turn", NodeKind::TurnRight { angle: 45.0 }));

    graph.try_connect("start", None, "if").expect("start -> if");
    graph
        .try_connect("if", Some(Handle::True), "fwd")
        .expect("if true -> fwd");
    graph
        .try_connect("if", Some(Handle::False), "back")
        .expect("if false -> back");
    graph.try_connect("if", None, "turn").expect("if -> turn");
    graph
}

/// Creates a graph with a bounded loop wrapping a single wait:
/// `start -> loop(3) { wait(1s) } -> end`.
#[allow(dead_code)]
pub fn loop_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::new("start", NodeKind::Start));
    graph.add_node(Node::new("loop", NodeKind::Loop { count: 3 }));
    graph.add_node(Node::new("wait", NodeKind::Wait { seconds: 1.0 }));
    graph.add_node(Node::new("end", NodeKind::End));

    graph
        .try_connect("start", None, "loop")
        .expect("start -> loop");
    graph
        .try_connect("loop", Some(Handle::Loop), "wait")
        .expect("loop body");
    graph
        .try_connect("loop", Some(Handle::Next), "end")
        .expect("loop next");
    graph
}

/// Creates a graph with untagged fan-out into two different categories:
/// a movement block and a mechanism block running concurrently.
#[allow(dead_code)]
pub fn parallel_graph() -> Graph {
    let mut graph = Graph::new();
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

    graph
        .try_connect("start", None, "fwd")
        .expect("start -> fwd");
    graph
        .try_connect("start", None, "claw")
        .expect("start -> claw");
    graph
}

/// The hardware configuration used by codegen tests.
#[allow(dead_code)]
pub fn test_hardware() -> HardwareConfig {
    HardwareConfig::new().motor("lift").servo("claw")
}

/// The field-center origin used across trajectory tests.
#[allow(dead_code)]
pub fn field_origin() -> Pose {
    Pose::new(72.0, 72.0, 0.0)
}
