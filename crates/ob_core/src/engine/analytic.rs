//! Analytical projectile solver
//!
//! Closed-form ballistics for a throw from `start` to `target` passing
//! through an apex `arc_height` above the straight chord between them.
//! Vertical-offset model: `y_offset(t) = v_y·t − ½·g·t²`, solved so the
//! peak offset equals the requested arc height, which gives
//! `T = sqrt(8·h/g)` and `v_y = (Δy + 4·h)/T`.
//!
//! The damped variants model linear drag (force ∝ −k·v):
//! `pos(t) = pos₀ + v₀·(1−e^{−kt})/k` horizontally and the
//! gravity-augmented equivalent vertically. Flight time deliberately
//! reuses the no-drag `T` rather than re-solving the damped case; the
//! interception model downstream is tuned against this approximation, so
//! it is a modeling choice, not a shortcut to fix. Below `DRAG_EPSILON`
//! the damped path evaluates the no-drag formulas directly, so the two
//! variants agree exactly at the boundary.
//!
//! Preconditions: `arc_height > 0`, `gravity > 0`. Callers (the trajectory
//! builder, the profile table) guarantee both; the solver itself is total
//! over that domain and never divides by zero.

use serde::{Deserialize, Serialize};

use super::physics_constants::ball;
use super::types::Vec3;

/// Initial velocity and flight time for one throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSolution {
    pub velocity: Vec3,
    pub flight_time_s: f64,
}

/// Flight time for an apex `arc_height` meters above the chord.
///
/// Apex is reached at `T/2` with `h = v_y²/(2g)`, which collapses to
/// `T = sqrt(8h/g)`.
#[inline]
pub fn flight_time(arc_height_m: f64, gravity: f64) -> f64 {
    debug_assert!(arc_height_m > 0.0 && gravity > 0.0);
    (8.0 * arc_height_m / gravity).sqrt()
}

/// Initial velocity that lands on `target` after `flight_time(arc_height)`.
pub fn solve(start: Vec3, target: Vec3, arc_height_m: f64, gravity: f64) -> LaunchSolution {
    let t = flight_time(arc_height_m, gravity);
    let delta = target - start;
    LaunchSolution {
        velocity: Vec3::new(
            delta.x / t,
            (delta.y + 4.0 * arc_height_m) / t,
            delta.z / t,
        ),
        flight_time_s: t,
    }
}

/// Ballistic position `t` seconds after release (no drag).
pub fn position_at(start: Vec3, velocity: Vec3, gravity: f64, t: f64) -> Vec3 {
    Vec3::new(
        start.x + velocity.x * t,
        start.y + velocity.y * t - 0.5 * gravity * t * t,
        start.z + velocity.z * t,
    )
}

/// Initial velocity under linear drag `k`, reusing the no-drag flight time.
pub fn solve_damped(
    start: Vec3,
    target: Vec3,
    arc_height_m: f64,
    gravity: f64,
    drag: f64,
) -> LaunchSolution {
    if drag < ball::DRAG_EPSILON {
        return solve(start, target, arc_height_m, gravity);
    }

    let t = flight_time(arc_height_m, gravity);
    let delta = target - start;
    // decay = (1 − e^{−kT}) / k, the damped analogue of elapsed time
    let decay = (1.0 - (-drag * t).exp()) / drag;
    LaunchSolution {
        velocity: Vec3::new(
            delta.x / decay,
            (delta.y + gravity * t / drag) / decay - gravity / drag,
            delta.z / decay,
        ),
        flight_time_s: t,
    }
}

/// Position `t` seconds after release under linear drag `k`.
pub fn position_at_damped(start: Vec3, velocity: Vec3, gravity: f64, drag: f64, t: f64) -> Vec3 {
    if drag < ball::DRAG_EPSILON {
        return position_at(start, velocity, gravity, t);
    }

    let decay = (1.0 - (-drag * t).exp()) / drag;
    Vec3::new(
        start.x + velocity.x * decay,
        start.y + (velocity.y + gravity / drag) * decay - gravity * t / drag,
        start.z + velocity.z * decay,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics_constants::gravity;

    const G: f64 = gravity::STANDARD_MPS2;

    #[test]
    fn test_flight_time_formula() {
        let t = flight_time(2.4, G);
        assert!((t - (8.0 * 2.4 / G).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_round_trip_lands_on_target() {
        let start = Vec3::new(0.0, 2.0, 0.0);
        let target = Vec3::new(6.75, 3.05, 0.0);
        let solution = solve(start, target, 2.4, G);
        let landed = position_at(start, solution.velocity, G, solution.flight_time_s);
        assert!(landed.distance(target) < 1e-9, "round trip error: {}", landed.distance(target));
    }

    #[test]
    fn test_apex_offset_matches_arc_height() {
        let start = Vec3::new(0.0, 1.5, 0.0);
        let target = Vec3::new(8.0, 1.8, 2.0);
        let arc = 1.2;
        let solution = solve(start, target, arc, G);

        // Peak chord offset occurs at T/2
        let t_apex = solution.flight_time_s / 2.0;
        let at_apex = position_at(start, solution.velocity, G, t_apex);
        let chord_y = start.y + (target.y - start.y) * 0.5;
        assert!((at_apex.y - chord_y - arc).abs() < 1e-9);
    }

    #[test]
    fn test_damped_round_trip_lands_on_target() {
        let start = Vec3::new(-1.0, 1.9, 3.0);
        let target = Vec3::new(9.0, 1.2, -2.0);
        let drag = 0.08;
        let solution = solve_damped(start, target, 1.0, G, drag);
        let landed =
            position_at_damped(start, solution.velocity, G, drag, solution.flight_time_s);
        assert!(landed.distance(target) < 1e-9);
    }

    #[test]
    fn test_no_drag_degeneracy() {
        // k below DRAG_EPSILON must follow the no-drag path exactly
        let start = Vec3::new(0.0, 2.0, 0.0);
        let target = Vec3::new(6.75, 3.05, 0.0);
        let plain = solve_damped(start, target, 2.4, G, 0.0);
        let tiny = solve_damped(start, target, 2.4, G, 1e-7);
        assert_eq!(plain, tiny);

        let end_plain = position_at_damped(start, plain.velocity, G, 0.0, plain.flight_time_s);
        let end_tiny = position_at_damped(start, tiny.velocity, G, 1e-7, tiny.flight_time_s);
        assert!(end_plain.distance(end_tiny) < 1e-4);
    }

    #[test]
    fn test_damped_flight_time_reuses_no_drag_value() {
        let start = Vec3::ZERO.with_y(2.0);
        let target = Vec3::new(10.0, 2.0, 0.0);
        let plain = solve(start, target, 1.5, G);
        let damped = solve_damped(start, target, 1.5, G, 0.3);
        assert_eq!(plain.flight_time_s, damped.flight_time_s);
    }

    #[test]
    fn test_drag_slows_horizontal_travel() {
        // Same velocity, drag on: the ball falls short of the no-drag point
        let start = Vec3::new(0.0, 2.0, 0.0);
        let velocity = Vec3::new(8.0, 5.0, 0.0);
        let free = position_at(start, velocity, G, 1.0);
        let damped = position_at_damped(start, velocity, G, 0.2, 1.0);
        assert!(damped.x < free.x);
    }

    mod round_trip_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn solve_then_position_at_recovers_target(
                dx in -20.0..20.0f64,
                dy in -3.0..3.0f64,
                dz in -20.0..20.0f64,
                start_y in 0.5..3.0f64,
                arc in 0.2..3.0f64,
            ) {
                let start = Vec3::new(0.0, start_y, 0.0);
                let target = Vec3::new(dx, start_y + dy, dz);
                let solution = solve(start, target, arc, G);
                let landed = position_at(start, solution.velocity, G, solution.flight_time_s);
                prop_assert!(landed.distance(target) < 1e-9);
            }

            #[test]
            fn damped_solve_then_position_at_recovers_target(
                dx in -15.0..15.0f64,
                dy in -2.0..2.0f64,
                arc in 0.2..2.5f64,
                drag in 0.01..0.5f64,
            ) {
                let start = Vec3::new(0.0, 1.8, 0.0);
                let target = Vec3::new(dx, 1.8 + dy, 0.0);
                let solution = solve_damped(start, target, arc, G, drag);
                let landed = position_at_damped(
                    start, solution.velocity, G, drag, solution.flight_time_s,
                );
                prop_assert!(landed.distance(target) < 1e-9);
            }
        }
    }
}
