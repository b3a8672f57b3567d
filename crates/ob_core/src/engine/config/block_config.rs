//! Shot-block scoring configuration

use serde::{Deserialize, Serialize};

use crate::engine::block::ShotBand;
use crate::engine::physics_constants::release;

/// Thresholds and factors for the contest/block model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Contest distance for shots at the rim (m)
    pub layup_threshold_m: f64,
    /// Contest distance for mid-range shots (m)
    pub mid_range_threshold_m: f64,
    /// Contest distance for three-point shots (m)
    pub three_point_threshold_m: f64,
    /// Beyond `multiple × threshold` the defender is out of the play
    pub out_of_reach_multiple: f64,
    /// Release height ≈ ratio × shooter height + offset
    pub release_height_ratio: f64,
    pub release_height_offset_m: f64,
    /// Jump contribution retained while unable to leave the floor
    pub grounded_jump_factor: f64,
    /// Reach margins (effective reach − release height, m) and the height
    /// factor credited at each tier
    pub full_reach_margin_m: f64,
    pub partial_reach_margin_m: f64,
    pub marginal_reach_margin_m: f64,
    pub partial_height_factor: f64,
    pub marginal_height_factor: f64,
    /// Distance factor inside 1.5× / 2× the band threshold
    pub mid_distance_factor: f64,
    pub far_distance_factor: f64,
    /// How far ahead the closing-in correction looks (s)
    pub shot_motion_time_s: f64,
    /// Distance-factor bonus when the defender is closing in
    pub closing_bonus: f64,
    /// Balance factor while the defender cannot jump
    pub off_balance_factor: f64,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            layup_threshold_m: 1.0,
            mid_range_threshold_m: 1.5,
            three_point_threshold_m: 2.0,
            out_of_reach_multiple: 2.0,
            release_height_ratio: release::HEIGHT_RATIO,
            release_height_offset_m: release::HEIGHT_OFFSET_M,
            grounded_jump_factor: 0.35,
            full_reach_margin_m: 0.3,
            partial_reach_margin_m: 0.0,
            marginal_reach_margin_m: -0.2,
            partial_height_factor: 0.7,
            marginal_height_factor: 0.4,
            mid_distance_factor: 0.5,
            far_distance_factor: 0.2,
            shot_motion_time_s: 0.4,
            closing_bonus: 0.2,
            off_balance_factor: 0.3,
        }
    }
}

impl BlockConfig {
    /// Contest distance for a shot band (m).
    #[inline]
    pub fn threshold_for(&self, band: ShotBand) -> f64 {
        match band {
            ShotBand::Layup => self.layup_threshold_m,
            ShotBand::MidRange => self.mid_range_threshold_m,
            ShotBand::ThreePoint => self.three_point_threshold_m,
        }
    }
}
