//! Trajectory and risk engine
//!
//! Leaf-first: the analytical solver and Verlet integrator underpin the
//! trajectory builder; the risk and block scorers consume built
//! trajectories plus defender snapshots. Data flows one way - builder →
//! scorer → caller - and every query is a pure function of its inputs.

pub mod analytic;
pub mod block;
pub mod config;
pub mod defender;
pub mod integrator;
pub mod physics_constants;
pub mod risk;
pub mod throw_profile;
pub mod trajectory;
pub mod types;

pub use analytic::LaunchSolution;
pub use block::{score_block, BlockEstimate, ShotBand};
pub use config::{BlockConfig, RiskConfig, TimingCurve};
pub use defender::{DefenderSnapshot, TeamSide};
pub use integrator::{integrate, IntegrationParams, IntegrationResult, SimulationState};
pub use risk::{
    score_trajectory, select_safest, AggregateRisk, InterceptionRisk, RiskLevel,
};
pub use throw_profile::{ThrowProfile, ThrowType};
pub use trajectory::{build, PhysicsParams, Trajectory, TrajectorySample};
pub use types::Vec3;
