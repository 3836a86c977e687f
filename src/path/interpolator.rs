use super::{CurveSample, SampledCurve};
use crate::kinematics::{Pose, Waypoint};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How waypoints are joined into a renderable curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    /// Straight segments between consecutive waypoints.
    Linear,
    /// Catmull-Rom spline through the waypoints.
    Smooth,
}

/// Sample-count configuration.
///
/// Linear mode emits `steps_per_segment` samples per waypoint pair; smooth
/// mode divides `total_steps` across the segments so the output length stays
/// stable as waypoints are added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDensity {
    pub steps_per_segment: usize,
    pub total_steps: usize,
}

impl Default for SampleDensity {
    fn default() -> Self {
        Self {
            steps_per_segment: 20,
            total_steps: 100,
        }
    }
}

/// Converts a waypoint sequence into a dense sampled curve.
///
/// Zero or one waypoint yields an empty or singleton curve; smooth mode falls
/// back to linear below three waypoints. Duplicate consecutive waypoints are
/// kept as zero-length sub-segments; every blend here is affine in the
/// control poses and never normalized by segment length, so they cost
/// nothing and divide by nothing.
pub fn interpolate(waypoints: &[Waypoint], mode: CurveMode, density: &SampleDensity) -> SampledCurve {
    debug!(
        waypoints = waypoints.len(),
        mode = ?mode,
        "interpolating path"
    );
    match waypoints {
        [] => SampledCurve::default(),
        [only] => SampledCurve::new(vec![CurveSample {
            pose: only.pose,
            t: 0.0,
        }]),
        _ => match mode {
            CurveMode::Smooth if waypoints.len() >= 3 => catmull_rom(waypoints, density),
            _ => linear(waypoints, density),
        },
    }
}

fn linear(waypoints: &[Waypoint], density: &SampleDensity) -> SampledCurve {
    let steps = density.steps_per_segment.max(1);
    let segments = waypoints.len() - 1;
    let mut samples = Vec::with_capacity(segments * steps + 1);

    for (segment, (a, b)) in waypoints.iter().tuple_windows().enumerate() {
        for step in 0..steps {
            let local = step as f64 / steps as f64;
            samples.push(CurveSample {
                pose: a.pose.lerp(&b.pose, local),
                t: (segment as f64 + local) / segments as f64,
            });
        }
    }
    // Close with the exact final waypoint rather than an interpolated value.
    samples.push(CurveSample {
        pose: waypoints[waypoints.len() - 1].pose,
        t: 1.0,
    });

    SampledCurve::new(samples)
}

fn catmull_rom(waypoints: &[Waypoint], density: &SampleDensity) -> SampledCurve {
    let segments = waypoints.len() - 1;
    let steps = density.total_steps.div_ceil(segments).max(1);
    let mut samples = Vec::with_capacity(segments * steps + 1);

    let pose_at = |index: isize| -> Pose {
        let clamped = index.clamp(0, waypoints.len() as isize - 1) as usize;
        waypoints[clamped].pose
    };

    for segment in 0..segments {
        let p0 = pose_at(segment as isize - 1);
        let p1 = pose_at(segment as isize);
        let p2 = pose_at(segment as isize + 1);
        let p3 = pose_at(segment as isize + 2);

        for step in 0..steps {
            let local = step as f64 / steps as f64;
            let (x, y) = catmull_rom_point(&p0, &p1, &p2, &p3, local);
            samples.push(CurveSample {
                pose: Pose {
                    x,
                    y,
                    // Heading blends between the segment's own endpoints;
                    // spline-interpolating it would reintroduce unwrapping
                    // discontinuities at multi-turn waypoints.
                    heading: p1.heading + (p2.heading - p1.heading) * local,
                },
                t: (segment as f64 + local) / segments as f64,
            });
        }
    }
    samples.push(CurveSample {
        pose: waypoints[waypoints.len() - 1].pose,
        t: 1.0,
    });

    SampledCurve::new(samples)
}

/// Standard cubic Catmull-Rom blend of four control poses at parameter `t`.
fn catmull_rom_point(p0: &Pose, p1: &Pose, p2: &Pose, p3: &Pose, t: f64) -> (f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |v0: f64, v1: f64, v2: f64, v3: f64| {
        0.5 * ((2.0 * v1)
            + (-v0 + v2) * t
            + (2.0 * v0 - 5.0 * v1 + 4.0 * v2 - v3) * t2
            + (-v0 + 3.0 * v1 - 3.0 * v2 + v3) * t3)
    };
    (
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}

/// Evaluates one explicitly marked cubic Bézier segment with two
/// user-authored control points.
///
/// Marked segments are sampled on their own and do not participate in the
/// Catmull-Rom pass. The heading blends linearly between the endpoints.
pub fn cubic_bezier(
    start: &Waypoint,
    end: &Waypoint,
    control1: (f64, f64),
    control2: (f64, f64),
    steps: usize,
) -> SampledCurve {
    let steps = steps.max(1);
    let mut samples = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let u = 1.0 - t;
        let basis = |v0: f64, v1: f64, v2: f64, v3: f64| {
            u * u * u * v0 + 3.0 * u * u * t * v1 + 3.0 * u * t * t * v2 + t * t * t * v3
        };
        samples.push(CurveSample {
            pose: Pose {
                x: basis(start.pose.x, control1.0, control2.0, end.pose.x),
                y: basis(start.pose.y, control1.1, control2.1, end.pose.y),
                heading: start.pose.heading + (end.pose.heading - start.pose.heading) * t,
            },
            t,
        });
    }

    SampledCurve::new(samples)
}
