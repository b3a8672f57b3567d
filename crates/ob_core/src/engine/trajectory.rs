//! Trajectory construction
//!
//! Turns a throw profile plus start/target into a discretized flight path:
//! evenly spaced `(position, time)` samples along the analytical solution,
//! with a two-segment composition for bounce passes. Sampling is
//! damped-horizontal / ballistic-vertical: drag shapes the court-plane
//! travel while the vertical arc keeps the exact profile apex.
//!
//! An out-of-range throw is a routine absence (`None`), not an error.

use serde::{Deserialize, Serialize};

use super::analytic::{self, LaunchSolution};
use super::physics_constants::{ball, bounce, court, gravity};
use super::throw_profile::ThrowType;
use super::types::Vec3;
use crate::error::{CoreError, Result};

/// Injected environment for trajectory construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    pub gravity: f64,
    pub drag: f64,
    pub ground_y: f64,
    pub ball_radius_m: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: gravity::STANDARD_MPS2,
            drag: ball::DRAG_COEFFICIENT,
            ground_y: court::GROUND_Y_M,
            ball_radius_m: ball::RADIUS_M,
        }
    }
}

/// One point on a discretized flight path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub position: Vec3,
    /// Seconds from release
    pub time_s: f64,
}

/// Discretized flight path for one throw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
    pub flight_time_s: f64,
    pub initial_velocity: Vec3,
    pub throw_type: ThrowType,
    /// Floor contact for bounce passes
    pub bounce_point: Option<Vec3>,
    /// Index of the sample marking the bounce
    pub bounce_index: Option<usize>,
}

impl Trajectory {
    /// Interpolated position `t` seconds after release, clamped to the
    /// sampled span.
    pub fn position_at_time(&self, t: f64) -> Vec3 {
        match self.samples.as_slice() {
            [] => Vec3::ZERO,
            [only] => only.position,
            samples => {
                if t <= samples[0].time_s {
                    return samples[0].position;
                }
                let last = samples[samples.len() - 1];
                if t >= last.time_s {
                    return last.position;
                }
                let upper = samples.partition_point(|s| s.time_s <= t);
                let a = samples[upper - 1];
                let b = samples[upper];
                let span = b.time_s - a.time_s;
                if span <= ball::MIN_FLIGHT_TIME_S {
                    return a.position;
                }
                a.position.lerp(b.position, (t - a.time_s) / span)
            }
        }
    }

    /// Structural invariant check used by tests and debug assertions.
    pub fn validate(&self) -> Result<()> {
        let first = self
            .samples
            .first()
            .ok_or_else(|| CoreError::InvalidParameter("trajectory has no samples".into()))?;
        if first.time_s != 0.0 {
            return Err(CoreError::InvalidParameter(format!(
                "first sample time must be 0, got {}",
                first.time_s
            )));
        }
        for pair in self.samples.windows(2) {
            if pair[1].time_s < pair[0].time_s {
                return Err(CoreError::InvalidParameter("sample times decrease".into()));
            }
        }
        let last = self.samples.last().unwrap();
        if (last.time_s - self.flight_time_s).abs() > 1e-9 {
            return Err(CoreError::InvalidParameter(format!(
                "last sample time {} != flight time {}",
                last.time_s, self.flight_time_s
            )));
        }
        match (self.bounce_point, self.bounce_index) {
            (None, None) => {}
            (Some(point), Some(index)) => {
                let marker = self.samples.get(index).ok_or_else(|| {
                    CoreError::InvalidParameter("bounce index out of range".into())
                })?;
                if marker.position.distance(point) > 1e-9 {
                    return Err(CoreError::InvalidParameter(
                        "bounce marker does not sit on the bounce point".into(),
                    ));
                }
            }
            _ => {
                return Err(CoreError::InvalidParameter(
                    "bounce point and bounce index must be set together".into(),
                ))
            }
        }
        Ok(())
    }
}

/// Build a discretized trajectory, or `None` when the horizontal distance
/// falls outside the profile's range.
///
/// `sample_count` is the number of intervals; the result carries
/// `sample_count + 1` samples (bounce passes split the count between the
/// two segments).
pub fn build(
    start: Vec3,
    target: Vec3,
    throw_type: ThrowType,
    sample_count: usize,
    params: &PhysicsParams,
) -> Option<Trajectory> {
    let profile = throw_type.profile();
    let distance = start.horizontal_distance(target);
    if distance < profile.min_distance_m || distance > profile.max_distance_m {
        log::debug!(
            "{:?} rejected: {:.2} m outside [{:.1}, {:.1}]",
            throw_type,
            distance,
            profile.min_distance_m,
            profile.max_distance_m
        );
        return None;
    }

    // speed_multiplier compresses the timeline by scaling effective
    // gravity, keeping the apex geometry: T_eff = T / multiplier.
    let g_eff = params.gravity * profile.speed_multiplier * profile.speed_multiplier;
    let intervals = sample_count.max(2);

    let trajectory = match profile.bounce_ratio {
        Some(ratio) => build_bounce(start, target, throw_type, ratio, intervals, g_eff, params),
        None => build_direct(start, target, throw_type, intervals, g_eff, params),
    };
    debug_assert!(trajectory.validate().is_ok());
    Some(trajectory)
}

/// Damped court-plane travel, ballistic vertical arc.
fn sample_solution(
    start: Vec3,
    target: Vec3,
    arc_height_m: f64,
    g_eff: f64,
    drag: f64,
) -> LaunchSolution {
    let plain = analytic::solve(start, target, arc_height_m, g_eff);
    if drag < ball::DRAG_EPSILON {
        return plain;
    }
    let damped = analytic::solve_damped(start, target, arc_height_m, g_eff, drag);
    LaunchSolution {
        velocity: Vec3::new(damped.velocity.x, plain.velocity.y, damped.velocity.z),
        flight_time_s: plain.flight_time_s,
    }
}

fn sample_position(start: Vec3, velocity: Vec3, g_eff: f64, drag: f64, t: f64) -> Vec3 {
    let planar = analytic::position_at_damped(start, velocity, g_eff, drag, t);
    let vertical = analytic::position_at(start, velocity, g_eff, t);
    Vec3::new(planar.x, vertical.y, planar.z)
}

fn segment_samples(
    start: Vec3,
    target: Vec3,
    arc_height_m: f64,
    intervals: usize,
    g_eff: f64,
    params: &PhysicsParams,
) -> (Vec<TrajectorySample>, LaunchSolution) {
    let solution = sample_solution(start, target, arc_height_m, g_eff, params.drag);
    let floor = params.ground_y + params.ball_radius_m;
    let mut samples = Vec::with_capacity(intervals + 1);
    for i in 0..=intervals {
        let t = solution.flight_time_s * i as f64 / intervals as f64;
        let position = sample_position(start, solution.velocity, g_eff, params.drag, t);
        samples.push(TrajectorySample { position: position.with_y(position.y.max(floor)), time_s: t });
    }
    (samples, solution)
}

fn build_direct(
    start: Vec3,
    target: Vec3,
    throw_type: ThrowType,
    intervals: usize,
    g_eff: f64,
    params: &PhysicsParams,
) -> Trajectory {
    let (samples, solution) = segment_samples(
        start,
        target,
        throw_type.profile().arc_height_m,
        intervals,
        g_eff,
        params,
    );
    if solution.flight_time_s <= ball::MIN_FLIGHT_TIME_S {
        return zero_length(start, throw_type);
    }
    Trajectory {
        samples,
        flight_time_s: solution.flight_time_s,
        initial_velocity: solution.velocity,
        throw_type,
        bounce_point: None,
        bounce_index: None,
    }
}

fn build_bounce(
    start: Vec3,
    target: Vec3,
    throw_type: ThrowType,
    ratio: f64,
    intervals: usize,
    g_eff: f64,
    params: &PhysicsParams,
) -> Trajectory {
    let profile = throw_type.profile();
    let bounce_point = Vec3::new(
        start.x + (target.x - start.x) * ratio,
        params.ground_y + params.ball_radius_m,
        start.z + (target.z - start.z) * ratio,
    );

    let per_segment = (intervals / 2).max(1);
    let (mut samples, first) =
        segment_samples(start, bounce_point, profile.arc_height_m, per_segment, g_eff, params);
    let bounce_index = samples.len() - 1;

    // Post-bounce arc loses height to the floor contact
    let second_arc = profile.arc_height_m * bounce::PASS_RESTITUTION;
    let (second_samples, second) =
        segment_samples(bounce_point, target, second_arc, per_segment, g_eff, params);

    let first_flight = first.flight_time_s;
    // The seam sample is the bounce marker; the second segment's t=0 sample
    // duplicates it and is dropped.
    samples.extend(second_samples.into_iter().skip(1).map(|s| TrajectorySample {
        position: s.position,
        time_s: s.time_s + first_flight,
    }));

    Trajectory {
        samples,
        flight_time_s: first_flight + second.flight_time_s,
        initial_velocity: first.velocity,
        throw_type,
        bounce_point: Some(bounce_point),
        bounce_index: Some(bounce_index),
    }
}

/// Degenerate throw (coincident endpoints, zero flight time): a single
/// sample at the start, never NaN.
fn zero_length(start: Vec3, throw_type: ThrowType) -> Trajectory {
    Trajectory {
        samples: vec![TrajectorySample { position: start, time_s: 0.0 }],
        flight_time_s: 0.0,
        initial_velocity: Vec3::ZERO,
        throw_type,
        bounce_point: None,
        bounce_index: None,
    }
}
