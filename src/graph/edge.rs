use super::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag on an outgoing edge of a branch-style node, naming which branch the
/// edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    True,
    False,
    Loop,
    Next,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::True => write!(f, "true"),
            Handle::False => write!(f, "false"),
            Handle::Loop => write!(f, "loop"),
            Handle::Next => write!(f, "next"),
        }
    }
}

/// A directed connection between two nodes.
///
/// `handle` is `None` for ordinary sequential edges; branch-style sources tag
/// each outgoing edge with the branch it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub handle: Option<Handle>,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            handle: None,
        }
    }

    pub fn tagged(source: impl Into<NodeId>, target: impl Into<NodeId>, handle: Handle) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            handle: Some(handle),
        }
    }
}
