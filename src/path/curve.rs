use crate::kinematics::Pose;
use serde::{Deserialize, Serialize};

/// One sample of an interpolated path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub pose: Pose,
    /// Global curve parameter in `[0, 1]`.
    pub t: f64,
}

/// A dense, parametrically indexed sequence of poses.
///
/// Recomputed whenever the waypoints or the curve mode change; consumed by
/// canvas rendering and playback and discarded otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampledCurve {
    pub samples: Vec<CurveSample>,
}

impl SampledCurve {
    pub fn new(samples: Vec<CurveSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&CurveSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&CurveSample> {
        self.samples.last()
    }

    /// Pose at a clamped progress value, linearly blended between the two
    /// nearest samples for sub-sample smoothness.
    pub fn pose_at_progress(&self, progress: f64) -> Option<Pose> {
        if self.samples.is_empty() {
            return None;
        }
        if self.samples.len() == 1 {
            return Some(self.samples[0].pose);
        }
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return self.samples.last().map(|s| s.pose);
        }
        let scaled = progress * (self.samples.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(self.samples.len() - 2);
        let local = scaled - index as f64;
        Some(
            self.samples[index]
                .pose
                .lerp(&self.samples[index + 1].pose, local),
        )
    }
}
