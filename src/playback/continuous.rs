use crate::kinematics::Pose;
use crate::path::SampledCurve;
use std::time::Duration;

/// Default wall-clock length of a full playback run at speed 1.0.
pub const BASE_DURATION: Duration = Duration::from_secs(5);

/// One computed playback frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackFrame {
    pub pose: Pose,
    pub progress: f64,
    pub finished: bool,
}

/// Continuous time-driven playback over a sampled curve.
///
/// The controller owns no timer: the surrounding frame loop calls
/// [`tick`](Self::tick) with the time elapsed since the previous frame and
/// applies the returned pose. Cancellation is a flag checked at the top of
/// each tick; stopping leaves the robot pose at the last computed sample,
/// with no partial-frame state to roll back.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    curve: SampledCurve,
    speed: f64,
    base_duration: Duration,
    elapsed: Duration,
    cancelled: bool,
    last_pose: Option<Pose>,
}

impl PlaybackController {
    pub fn new(curve: SampledCurve, speed: f64) -> Self {
        Self {
            curve,
            // A non-positive speed would stall progress forever.
            speed: if speed > 0.0 { speed } else { 1.0 },
            base_duration: BASE_DURATION,
            elapsed: Duration::ZERO,
            cancelled: false,
            last_pose: None,
        }
    }

    pub fn with_base_duration(mut self, duration: Duration) -> Self {
        self.base_duration = duration;
        self
    }

    /// Advances playback by `frame_time` and computes the new pose.
    ///
    /// Returns `None` once cancelled or when the curve has no samples.
    pub fn tick(&mut self, frame_time: Duration) -> Option<PlaybackFrame> {
        if self.cancelled || self.curve.is_empty() {
            return None;
        }

        self.elapsed += frame_time;
        let duration = self.base_duration.as_secs_f64() / self.speed;
        let progress = if duration > 0.0 {
            (self.elapsed.as_secs_f64() / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let pose = self.curve.pose_at_progress(progress)?;
        self.last_pose = Some(pose);
        Some(PlaybackFrame {
            pose,
            progress,
            finished: progress >= 1.0,
        })
    }

    /// Cancels playback; subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// The pose of the most recent computed frame, where a stopped preview
    /// stays.
    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }
}
