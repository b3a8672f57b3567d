//! Velocity-Verlet point-mass integrator
//!
//! Validation oracle for the closed-form solver - it is not on the runtime
//! scoring path. The integrator advances a single point mass under gravity
//! plus linear drag and records, per step, the energy budget and the
//! cumulative deviation from the analytical position at the same elapsed
//! time. Divergence beyond the documented tolerances is a test failure,
//! never a runtime error.
//!
//! The run is a pure function of its inputs: no randomness, no clock, no
//! allocation-order dependence. Repeated runs produce bit-identical state.

use serde::{Deserialize, Serialize};

use super::analytic;
use super::physics_constants::{ball, court, gravity};
use super::types::Vec3;

/// Point-mass state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub time_s: f64,
}

/// Kinetic/potential/total energy at one step (Joules)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    pub time_s: f64,
    pub kinetic_j: f64,
    pub potential_j: f64,
    pub total_j: f64,
}

/// Integration inputs; gravity and drag are injected, not hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParams {
    pub gravity: f64,
    pub drag: f64,
    pub mass_kg: f64,
    pub timestep_s: f64,
    pub max_time_s: f64,
    pub ground_y: f64,
}

impl Default for IntegrationParams {
    fn default() -> Self {
        Self {
            gravity: gravity::STANDARD_MPS2,
            drag: 0.0,
            mass_kg: ball::MASS_KG,
            timestep_s: 1.0 / 120.0,
            max_time_s: 5.0,
            ground_y: court::GROUND_Y_M,
        }
    }
}

/// Full diagnostics for one integration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationResult {
    pub final_state: SimulationState,
    pub steps: usize,
    pub energy: Vec<EnergySample>,
    /// Cumulative max |simulated − analytical| position error (m)
    pub max_analytic_deviation_m: f64,
    /// Cumulative max relative total-energy drift; only meaningful when
    /// drag ≈ 0 (drag legitimately dissipates energy)
    pub max_energy_drift_rel: f64,
}

#[inline]
fn acceleration(velocity: Vec3, gravity: f64, drag: f64) -> Vec3 {
    Vec3::new(
        -drag * velocity.x,
        -gravity - drag * velocity.y,
        -drag * velocity.z,
    )
}

fn energy_sample(state: &SimulationState, params: &IntegrationParams) -> EnergySample {
    let kinetic = 0.5 * params.mass_kg * state.velocity.length_squared();
    let potential = params.mass_kg * params.gravity * state.position.y;
    EnergySample {
        time_s: state.time_s,
        kinetic_j: kinetic,
        potential_j: potential,
        total_j: kinetic + potential,
    }
}

/// Advance `{position, velocity}` until `max_time_s` or ground contact.
///
/// Velocity Verlet: position advances by `v·dt + ½·a·dt²`; the
/// acceleration is then re-evaluated at the provisional end-of-step
/// velocity and the two accelerations are averaged for the velocity
/// update. The last step is shortened to land on `max_time_s` exactly so
/// the final state is comparable against `analytic::position_at_damped`
/// at the same instant.
pub fn integrate(
    initial_position: Vec3,
    initial_velocity: Vec3,
    params: &IntegrationParams,
) -> IntegrationResult {
    let mut state = SimulationState {
        position: initial_position,
        velocity: initial_velocity,
        time_s: 0.0,
    };

    let mut energy = Vec::new();
    let initial_energy = energy_sample(&state, params);
    energy.push(initial_energy);
    let energy_scale = initial_energy.total_j.abs().max(1e-12);

    let drag_free = params.drag < ball::DRAG_EPSILON;
    let mut max_deviation: f64 = 0.0;
    let mut max_drift: f64 = 0.0;
    let mut steps = 0usize;

    while state.time_s < params.max_time_s && state.position.y >= params.ground_y {
        let dt = params.timestep_s.min(params.max_time_s - state.time_s);
        if dt <= 0.0 {
            break;
        }

        let a0 = acceleration(state.velocity, params.gravity, params.drag);
        state.position += state.velocity * dt + a0 * (0.5 * dt * dt);

        let provisional = state.velocity + a0 * dt;
        let a1 = acceleration(provisional, params.gravity, params.drag);
        state.velocity += (a0 + a1) * (0.5 * dt);
        state.time_s += dt;
        steps += 1;

        let sample = energy_sample(&state, params);
        if drag_free {
            let drift = (sample.total_j - initial_energy.total_j).abs() / energy_scale;
            max_drift = max_drift.max(drift);
        }
        energy.push(sample);

        let reference = analytic::position_at_damped(
            initial_position,
            initial_velocity,
            params.gravity,
            params.drag,
            state.time_s,
        );
        max_deviation = max_deviation.max(state.position.distance(reference));
    }

    IntegrationResult {
        final_state: state,
        steps,
        energy,
        max_analytic_deviation_m: max_deviation,
        max_energy_drift_rel: max_drift,
    }
}
