//! Defender snapshots
//!
//! The scorers never read live game state: the caller captures each
//! defender into a value snapshot at the start of a scoring pass, so a
//! concurrently updating roster owner cannot race a query. The snapshot
//! carries everything the interception and block models consume -
//! kinematics, reaction, reach, and readiness flags.

use serde::{Deserialize, Serialize};

use super::types::Vec3;

/// Side tag as supplied by the caller's roster filter. The core compares
/// tags; it never decides which side an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Read-only view of one defending agent, captured by value per query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderSnapshot {
    pub id: u32,
    pub side: TeamSide,
    pub position: Vec3,
    /// Current world velocity (m/s), used for the forecast query
    pub velocity: Vec3,
    /// Seconds before the defender starts moving toward an interception
    pub reaction_time_s: f64,
    /// Top closing speed (m/s)
    pub speed_mps: f64,
    /// Radius within which the defender can touch the ball without moving (m)
    pub intercept_radius_m: f64,
    /// False while off-balance, recovering, or boxed out
    pub can_act_now: bool,
    /// False while landing or otherwise unable to leave the floor
    pub can_jump: bool,
    pub height_m: f64,
    /// Fingertip height with arms raised, standing (m)
    pub standing_reach_m: f64,
    /// Additional reach from a full jump (m)
    pub jump_height_m: f64,
}

impl DefenderSnapshot {
    /// Forecast position after `elapsed_s` seconds of current motion.
    #[inline]
    pub fn predicted_position(&self, elapsed_s: f64) -> Vec3 {
        self.position + self.velocity * elapsed_s
    }
}

impl Default for DefenderSnapshot {
    fn default() -> Self {
        Self {
            id: 0,
            side: TeamSide::Away,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            reaction_time_s: 0.25,
            speed_mps: 7.0,
            intercept_radius_m: 0.9,
            can_act_now: true,
            can_jump: true,
            height_m: 1.98,
            standing_reach_m: 2.63,
            jump_height_m: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicted_position_extrapolates_linearly() {
        let defender = DefenderSnapshot {
            position: Vec3::new(1.0, 0.0, 2.0),
            velocity: Vec3::new(2.0, 0.0, -1.0),
            ..DefenderSnapshot::default()
        };
        let predicted = defender.predicted_position(0.5);
        assert_eq!(predicted, Vec3::new(2.0, 0.0, 1.5));
        assert_eq!(defender.predicted_position(0.0), defender.position);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
    }
}
