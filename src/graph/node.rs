use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a node within a graph, assigned by the editor.
pub type NodeId = String;

/// Documented fallback values for numeric parameters the editor may omit.
pub mod defaults {
    pub fn distance() -> f64 {
        24.0
    }
    pub fn angle() -> f64 {
        90.0
    }
    pub fn power() -> f64 {
        0.5
    }
    pub fn servo_position() -> f64 {
        0.5
    }
    pub fn wait_seconds() -> f64 {
        1.0
    }
    pub fn loop_count() -> u32 {
        3
    }
}

/// Sweep direction of an `arc` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    Left,
    Right,
}

impl Default for ArcDirection {
    fn default() -> Self {
        ArcDirection::Right
    }
}

/// The closed set of block kinds the compiler understands, with their
/// kind-specific parameter records.
///
/// The tag names match the node types emitted by the editor, so a graph
/// definition deserializes directly from the editor's JSON. Parameter fields
/// the editor leaves out fall back to the values in [`defaults`]; absence is
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeKind {
    Start,
    MoveTo {
        x: f64,
        y: f64,
        #[serde(default)]
        heading: Option<f64>,
    },
    SplineTo {
        x: f64,
        y: f64,
        heading: f64,
    },
    Forward {
        #[serde(default = "defaults::distance")]
        distance: f64,
        #[serde(default = "defaults::power")]
        power: f64,
    },
    Backward {
        #[serde(default = "defaults::distance")]
        distance: f64,
        #[serde(default = "defaults::power")]
        power: f64,
    },
    StrafeLeft {
        #[serde(default = "defaults::distance")]
        distance: f64,
        #[serde(default = "defaults::power")]
        power: f64,
    },
    StrafeRight {
        #[serde(default = "defaults::distance")]
        distance: f64,
        #[serde(default = "defaults::power")]
        power: f64,
    },
    TurnLeft {
        #[serde(default = "defaults::angle")]
        angle: f64,
    },
    TurnRight {
        #[serde(default = "defaults::angle")]
        angle: f64,
    },
    TurnToHeading {
        heading: f64,
    },
    Arc {
        #[serde(default = "defaults::distance")]
        radius: f64,
        #[serde(default = "defaults::angle")]
        angle: f64,
        #[serde(default)]
        direction: ArcDirection,
    },
    Wait {
        #[serde(default = "defaults::wait_seconds")]
        seconds: f64,
    },
    SetServo {
        servo: String,
        #[serde(default = "defaults::servo_position")]
        position: f64,
    },
    RunMotor {
        motor: String,
        #[serde(default = "defaults::power")]
        power: f64,
    },
    StopMotor {
        motor: String,
    },
    IfBranch {
        condition: String,
    },
    Loop {
        #[serde(default = "defaults::loop_count")]
        count: u32,
    },
    Parallel,
    ForEach {
        collection: String,
    },
    Custom {
        code: String,
    },
    End,
}

impl NodeKind {
    /// The editor-facing tag name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::MoveTo { .. } => "moveTo",
            NodeKind::SplineTo { .. } => "splineTo",
            NodeKind::Forward { .. } => "forward",
            NodeKind::Backward { .. } => "backward",
            NodeKind::StrafeLeft { .. } => "strafeLeft",
            NodeKind::StrafeRight { .. } => "strafeRight",
            NodeKind::TurnLeft { .. } => "turnLeft",
            NodeKind::TurnRight { .. } => "turnRight",
            NodeKind::TurnToHeading { .. } => "turnToHeading",
            NodeKind::Arc { .. } => "arc",
            NodeKind::Wait { .. } => "wait",
            NodeKind::SetServo { .. } => "setServo",
            NodeKind::RunMotor { .. } => "runMotor",
            NodeKind::StopMotor { .. } => "stopMotor",
            NodeKind::IfBranch { .. } => "ifBranch",
            NodeKind::Loop { .. } => "loop",
            NodeKind::Parallel => "parallel",
            NodeKind::ForEach { .. } => "forEach",
            NodeKind::Custom { .. } => "custom",
            NodeKind::End => "end",
        }
    }

    /// Whether this kind contributes a waypoint to the kinematic chain.
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            NodeKind::MoveTo { .. }
                | NodeKind::SplineTo { .. }
                | NodeKind::Forward { .. }
                | NodeKind::Backward { .. }
                | NodeKind::StrafeLeft { .. }
                | NodeKind::StrafeRight { .. }
                | NodeKind::TurnLeft { .. }
                | NodeKind::TurnRight { .. }
                | NodeKind::TurnToHeading { .. }
                | NodeKind::Arc { .. }
        )
    }

    /// Branch-style kinds whose outgoing edges may carry handle tags.
    pub fn supports_handles(&self) -> bool {
        matches!(
            self,
            NodeKind::IfBranch { .. } | NodeKind::Loop { .. } | NodeKind::ForEach { .. }
        )
    }

    /// Kinds whose every outgoing edge must be tagged. `ifBranch` is not one
    /// of them: its untagged edge is the after-branch continuation.
    pub fn requires_handles(&self) -> bool {
        matches!(self, NodeKind::Loop { .. } | NodeKind::ForEach { .. })
    }
}

/// A single block placed by the user.
///
/// `position` is the editor's canvas layout and is carried only so that a
/// round-tripped graph re-opens where the user left it; the compiler never
/// reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: (f64, f64),
}

impl Node {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: (0.0, 0.0),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = (x, y);
        self
    }
}

/// Coarse grouping of node kinds used by the fan-out rule: untagged edges
/// from one node may run concurrently only when their targets belong to
/// different categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movement,
    Mechanism,
    Sensor,
    Control,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Movement => write!(f, "movement"),
            Category::Mechanism => write!(f, "mechanism"),
            Category::Sensor => write!(f, "sensor"),
            Category::Control => write!(f, "control"),
        }
    }
}

/// Maps node kinds to categories.
///
/// The partition is editor policy rather than anything derivable from the
/// kinds themselves, so it stays overridable: the defaults below mirror the
/// editor's palette grouping, and `with_override` re-assigns a single kind by
/// its tag name. `Sensor` has no default members.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    overrides: AHashMap<String, Category>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, kind_name: &str, category: Category) -> Self {
        self.overrides.insert(kind_name.to_string(), category);
        self
    }

    pub fn category_of(&self, kind: &NodeKind) -> Category {
        if let Some(category) = self.overrides.get(kind.name()) {
            return *category;
        }
        if kind.is_motion() {
            return Category::Movement;
        }
        match kind {
            NodeKind::Wait { .. }
            | NodeKind::SetServo { .. }
            | NodeKind::RunMotor { .. }
            | NodeKind::StopMotor { .. }
            | NodeKind::Custom { .. } => Category::Mechanism,
            _ => Category::Control,
        }
    }
}
