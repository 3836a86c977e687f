use super::{Pose, Waypoint};
use crate::graph::{ArcDirection, Graph, NodeId, NodeKind};

/// Integrates the motion deltas of a flat motion order into absolute field
/// poses, starting from the robot's current pose.
///
/// The result is the origin waypoint followed by exactly one waypoint per
/// motion node, so `waypoints[k + 1]` always corresponds to the k-th node of
/// `order`. Zero-distance motions still append their waypoint; the preview
/// drag interaction depends on the correspondence staying 1:1.
pub fn build_waypoints(graph: &Graph, order: &[NodeId], origin: Pose) -> Vec<Waypoint> {
    let mut waypoints = Vec::with_capacity(order.len() + 1);
    waypoints.push(Waypoint::origin(origin));

    let mut pose = origin;
    for id in order {
        let Some(node) = graph.node(id) else {
            continue;
        };
        pose = advance(pose, &node.kind);
        waypoints.push(Waypoint::at_node(id.clone(), pose));
    }

    waypoints
}

/// Applies one motion block to the running pose.
///
/// Heading grows clockwise (turnRight is positive), matching the field
/// preview's screen coordinates. Non-motion kinds pass the pose through
/// unchanged; the resolver has already filtered them out of the order.
pub fn advance(pose: Pose, kind: &NodeKind) -> Pose {
    match kind {
        NodeKind::Forward { distance, .. } => translate(pose, *distance, pose.heading),
        NodeKind::Backward { distance, .. } => translate(pose, -*distance, pose.heading),
        NodeKind::StrafeLeft { distance, .. } => {
            translate(pose, *distance, pose.heading - 90.0)
        }
        NodeKind::StrafeRight { distance, .. } => {
            translate(pose, *distance, pose.heading + 90.0)
        }
        NodeKind::TurnLeft { angle } => Pose {
            heading: pose.heading - angle,
            ..pose
        },
        NodeKind::TurnRight { angle } => Pose {
            heading: pose.heading + angle,
            ..pose
        },
        NodeKind::TurnToHeading { heading } => Pose {
            heading: *heading,
            ..pose
        },
        NodeKind::MoveTo { x, y, heading } => Pose {
            x: *x,
            y: *y,
            heading: heading.unwrap_or(pose.heading),
        },
        NodeKind::SplineTo { x, y, heading } => Pose {
            x: *x,
            y: *y,
            heading: *heading,
        },
        NodeKind::Arc {
            radius,
            angle,
            direction,
        } => {
            // Sweep the heading by the arc angle and advance along the chord
            // of the swept circle, aimed halfway into the turn.
            let sweep = match direction {
                ArcDirection::Right => *angle,
                ArcDirection::Left => -*angle,
            };
            let chord = 2.0 * radius * (angle.abs().to_radians() / 2.0).sin();
            let moved = translate(pose, chord, pose.heading + sweep / 2.0);
            Pose {
                heading: pose.heading + sweep,
                ..moved
            }
        }
        _ => pose,
    }
}

fn translate(pose: Pose, distance: f64, along_heading: f64) -> Pose {
    let rad = along_heading.to_radians();
    Pose {
        x: pose.x + distance * rad.cos(),
        y: pose.y + distance * rad.sin(),
        heading: pose.heading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backward_inverts_forward() {
        let pose = Pose::new(10.0, 20.0, 30.0);
        let out = advance(
            advance(
                pose,
                &NodeKind::Forward {
                    distance: 12.0,
                    power: 0.5,
                },
            ),
            &NodeKind::Backward {
                distance: 12.0,
                power: 0.5,
            },
        );
        assert!((out.x - pose.x).abs() < 1e-9);
        assert!((out.y - pose.y).abs() < 1e-9);
        assert_eq!(out.heading, pose.heading);
    }

    #[test]
    fn arc_quarter_turn_right_sweeps_heading() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        let out = advance(
            pose,
            &NodeKind::Arc {
                radius: 24.0,
                angle: 90.0,
                direction: ArcDirection::Right,
            },
        );
        assert_eq!(out.heading, 90.0);
        // Chord of a 90° arc at r=24 is 24*sqrt(2), aimed 45° into the turn.
        let chord = 2.0 * 24.0 * (45.0f64).to_radians().sin();
        assert!((out.x - chord * (45.0f64).to_radians().cos()).abs() < 1e-9);
        assert!((out.y - chord * (45.0f64).to_radians().sin()).abs() < 1e-9);
    }
}
