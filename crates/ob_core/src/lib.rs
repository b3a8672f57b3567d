//! # ob_core - Deterministic Basketball Trajectory & Risk Engine
//!
//! This library computes the flight path of a thrown or shot ball under
//! gravity with optional linear drag, and scores how likely a roster of
//! defenders is to intercept or block that path before it arrives. A
//! decision layer uses the scores to choose between candidate actions -
//! which pass lane, which shot, whether to wait - from quantified risk
//! rather than fixed rules.
//!
//! ## Features
//! - Closed-form projectile solver (no-drag and linear-drag variants)
//! - Fixed-timestep velocity-Verlet integrator cross-validating the
//!   closed form (bit-identical reruns, energy diagnostics)
//! - Discretized trajectories from data-driven throw profiles, including
//!   two-segment bounce passes
//! - Per-defender interception probabilities with a configurable
//!   timing→probability curve, aggregated to a single risk level
//! - Shot-block estimates per shot distance band
//!
//! Everything is synchronous and allocation-light; each query takes value
//! snapshots and returns a fresh result, so callers can fan out scoring
//! across lanes however they like.

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]

pub mod engine;
pub mod error;

// Re-export the main API surface
pub use engine::{
    build, score_block, score_trajectory, select_safest, AggregateRisk, BlockConfig,
    BlockEstimate, DefenderSnapshot, InterceptionRisk, PhysicsParams, RiskConfig, RiskLevel,
    ShotBand, TeamSide, ThrowProfile, ThrowType, TimingCurve, Trajectory, TrajectorySample, Vec3,
};
pub use error::{CoreError, Result};
