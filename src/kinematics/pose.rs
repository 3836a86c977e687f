use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Robot position and orientation on the field, in inches and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Component-wise linear blend toward `other` at parameter `t`.
    pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
        Pose {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            heading: self.heading + (other.heading - self.heading) * t,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}°)", self.x, self.y, self.heading)
    }
}

/// Which part of the program a waypoint belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointSource {
    /// The robot's field pose before the first motion block runs.
    Origin,
    /// The pose after the named motion block completes.
    Node(NodeId),
}

/// A pose attributed to its originating motion block.
///
/// The attribution is what lets the field preview map a dragged waypoint back
/// to the block whose parameters it rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub pose: Pose,
    pub source: WaypointSource,
}

impl Waypoint {
    pub fn origin(pose: Pose) -> Self {
        Self {
            pose,
            source: WaypointSource::Origin,
        }
    }

    pub fn at_node(id: impl Into<NodeId>, pose: Pose) -> Self {
        Self {
            pose,
            source: WaypointSource::Node(id.into()),
        }
    }
}
