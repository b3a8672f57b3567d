//! Shot-block scoring
//!
//! Stationary-to-goal contests: given a shooter, a defender snapshot, and
//! the shot's distance band, estimate the chance the defender gets a hand
//! on the release. The model is three multiplicative factors - reach over
//! release height, contest distance, balance - with a forward-looking
//! correction for defenders closing in during the shot motion.

use serde::{Deserialize, Serialize};

use super::config::BlockConfig;
use super::defender::DefenderSnapshot;
use super::physics_constants::court;
use super::types::Vec3;

/// Shot distance band; determines the contest threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotBand {
    Layup,
    MidRange,
    ThreePoint,
}

impl ShotBand {
    pub const ALL: [ShotBand; 3] = [ShotBand::Layup, ShotBand::MidRange, ShotBand::ThreePoint];

    /// Classify a shot by its horizontal distance to the basket.
    pub fn from_shot_distance(distance_m: f64) -> ShotBand {
        if distance_m <= court::RESTRICTED_AREA_RADIUS_M + 0.75 {
            ShotBand::Layup
        } else if distance_m < court::THREE_POINT_RADIUS_M {
            ShotBand::MidRange
        } else {
            ShotBand::ThreePoint
        }
    }
}

/// Block probability and the contest point it was judged at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockEstimate {
    /// Block probability in [0, 1]
    pub probability: f64,
    /// Where the defender's hand contests the release
    pub block_point: Vec3,
}

/// Estimate the chance `defender` blocks a shot released by a shooter of
/// `shooter_height_m` standing at `shooter_pos`.
pub fn score_block(
    shooter_pos: Vec3,
    shooter_height_m: f64,
    defender: &DefenderSnapshot,
    band: ShotBand,
    config: &BlockConfig,
) -> BlockEstimate {
    let threshold = config.threshold_for(band);
    let distance = shooter_pos.horizontal_distance(defender.position);

    let release_height =
        config.release_height_ratio * shooter_height_m + config.release_height_offset_m;

    if distance > config.out_of_reach_multiple * threshold {
        // Out of the play entirely
        return BlockEstimate { probability: 0.0, block_point: defender.position.with_y(release_height) };
    }

    // Reach over the estimated release point
    let jump = if defender.can_jump {
        defender.jump_height_m
    } else {
        defender.jump_height_m * config.grounded_jump_factor
    };
    let effective_reach = defender.standing_reach_m + jump;
    let reach_margin = effective_reach - release_height;
    let height_factor = if reach_margin >= config.full_reach_margin_m {
        1.0
    } else if reach_margin >= config.partial_reach_margin_m {
        config.partial_height_factor
    } else if reach_margin >= config.marginal_reach_margin_m {
        config.marginal_height_factor
    } else {
        0.0
    };

    let mut distance_factor = if distance <= threshold {
        1.0
    } else if distance <= 1.5 * threshold {
        config.mid_distance_factor
    } else {
        config.far_distance_factor
    };

    // A defender closing in during the shot motion contests tighter than
    // the current distance suggests
    let predicted = defender.predicted_position(config.shot_motion_time_s);
    if predicted.horizontal_distance(shooter_pos) < distance {
        distance_factor = (distance_factor + config.closing_bonus).min(1.0);
    }

    let balance_factor = if defender.can_jump { 1.0 } else { config.off_balance_factor };

    let probability = (height_factor * distance_factor * balance_factor).clamp(0.0, 1.0);

    // Contest point: a half-step from the defender toward the shooter, at
    // whichever is lower of the hand and the release
    let toward = (shooter_pos - defender.position).with_y(0.0).normalized();
    let lunge = (distance * 0.5).min(0.6);
    let block_point =
        (defender.position + toward * lunge).with_y(effective_reach.min(release_height));

    BlockEstimate { probability, block_point }
}
