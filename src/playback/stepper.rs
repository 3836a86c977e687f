use crate::kinematics::{Pose, Waypoint};
use std::time::Duration;

/// Default length of one eased step transition.
pub const STEP_DURATION: Duration = Duration::from_millis(400);

/// A bounded preview transition between two waypoint poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTransition {
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
}

impl StepTransition {
    /// Pose at clamped transition progress, eased with `1 - (1 - p)^3` so
    /// the preview settles rather than snaps.
    pub fn sample(&self, progress: f64) -> Pose {
        let p = progress.clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - p).powi(3);
        self.from.lerp(&self.to, eased)
    }
}

/// Discrete node-by-node stepping through the flat motion order.
///
/// Stepping only moves the preview; it never touches the compiled program.
/// The index wraps at both ends.
#[derive(Debug, Clone)]
pub struct NodeStepper {
    waypoints: Vec<Waypoint>,
    index: usize,
    step_duration: Duration,
}

impl NodeStepper {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            index: 0,
            step_duration: STEP_DURATION,
        }
    }

    pub fn with_step_duration(mut self, duration: Duration) -> Self {
        self.step_duration = duration;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.index)
    }

    /// Advances to the next waypoint, wrapping past the end.
    pub fn next(&mut self) -> Option<StepTransition> {
        if self.waypoints.is_empty() {
            return None;
        }
        let from = self.waypoints[self.index].pose;
        self.index = (self.index + 1) % self.waypoints.len();
        Some(StepTransition {
            from,
            to: self.waypoints[self.index].pose,
            duration: self.step_duration,
        })
    }

    /// Steps back to the previous waypoint, wrapping before the start.
    pub fn previous(&mut self) -> Option<StepTransition> {
        if self.waypoints.is_empty() {
            return None;
        }
        let from = self.waypoints[self.index].pose;
        self.index = match self.index {
            0 => self.waypoints.len() - 1,
            i => i - 1,
        };
        Some(StepTransition {
            from,
            to: self.waypoints[self.index].pose,
            duration: self.step_duration,
        })
    }
}
