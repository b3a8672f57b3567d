//! Interception risk scoring
//!
//! Scores how likely each opposing defender is to reach a thrown ball
//! before it arrives, then aggregates across the roster into a single
//! risk level for the decision layer. All inputs are value snapshots;
//! a scoring call reads nothing mutable and owns nothing afterwards.

use serde::{Deserialize, Serialize};

use super::config::RiskConfig;
use super::defender::{DefenderSnapshot, TeamSide};
use super::trajectory::Trajectory;
use super::types::Vec3;

/// One defender's chance of touching this throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptionRisk {
    /// Interception probability in [0, 1]
    pub probability: f64,
    pub defender_id: u32,
    /// Representative point on the trajectory the defender attacks
    pub intercept_point: Vec3,
    /// Defender arrival − ball arrival at that point (s); negative means
    /// the defender gets there first
    pub timing_margin_s: f64,
}

/// Overall danger bucket for a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
    HighDanger,
}

impl RiskLevel {
    /// Bucket a probability against the configured cut points.
    pub fn from_probability(probability: f64, config: &RiskConfig) -> RiskLevel {
        if probability >= config.high_danger_threshold {
            RiskLevel::HighDanger
        } else if probability >= config.danger_threshold {
            RiskLevel::Danger
        } else if probability >= config.caution_threshold {
            RiskLevel::Caution
        } else {
            RiskLevel::Safe
        }
    }

    /// Caller-facing action tag for this bucket.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "throw",
            RiskLevel::Caution => "throw_with_care",
            RiskLevel::Danger => "consider_alternative",
            RiskLevel::HighDanger => "hold",
        }
    }
}

/// Roster-wide risk for one throw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRisk {
    /// Most dangerous defender, if any opposes the throw
    pub max_risk: Option<InterceptionRisk>,
    /// One entry per opposing defender, in roster order
    pub per_defender: Vec<InterceptionRisk>,
    pub level: RiskLevel,
}

impl AggregateRisk {
    /// Probability of the most dangerous defender, 0.0 with none.
    #[inline]
    pub fn max_probability(&self) -> f64 {
        self.max_risk.as_ref().map(|r| r.probability).unwrap_or(0.0)
    }
}

/// Score a built trajectory against a defender roster.
///
/// Defenders on the throwing side are skipped; for bounce passes, samples
/// before the floor contact are invisible to every defender.
pub fn score_trajectory(
    trajectory: &Trajectory,
    defenders: &[DefenderSnapshot],
    throwing_side: TeamSide,
    config: &RiskConfig,
) -> AggregateRisk {
    let mut per_defender = Vec::new();
    for defender in defenders {
        if defender.side == throwing_side {
            continue;
        }
        if let Some(risk) = score_defender(trajectory, defender, config) {
            per_defender.push(risk);
        }
    }

    let mut max_risk: Option<InterceptionRisk> = None;
    for risk in &per_defender {
        let higher = match &max_risk {
            None => true,
            // Strictly greater: an equal-probability defender later in the
            // roster never displaces the first
            Some(current) => risk.probability > current.probability,
        };
        if higher {
            max_risk = Some(*risk);
        }
    }

    let level = RiskLevel::from_probability(
        max_risk.as_ref().map(|r| r.probability).unwrap_or(0.0),
        config,
    );
    AggregateRisk { max_risk, per_defender, level }
}

struct Candidate {
    margin_s: f64,
    distance_m: f64,
    point: Vec3,
}

fn score_defender(
    trajectory: &Trajectory,
    defender: &DefenderSnapshot,
    config: &RiskConfig,
) -> Option<InterceptionRisk> {
    // A defender cannot intercept a bounce pass before it leaves the floor
    let start_index = trajectory.bounce_index.unwrap_or(0);
    let samples = trajectory.samples.get(start_index..)?;

    let mut best: Option<Candidate> = None;
    let mut best_abs_margin = f64::INFINITY;
    let mut best_distance = f64::INFINITY;

    for sample in samples {
        let current = defender.position.distance(sample.position);
        let predicted = defender.predicted_position(sample.time_s).distance(sample.position);
        // Credit defenders already moving the right way
        let effective = current.min(predicted);

        let travel = (effective - defender.intercept_radius_m).max(0.0);
        let arrival = defender.reaction_time_s + travel / defender.speed_mps.max(1e-6);
        let margin = arrival - sample.time_s;

        // Representative point: margin closest to zero OR smallest raw
        // distance, whichever improves the running best first. The dual
        // rule favors points that are both about right in time and
        // physically close over the merely nearest-to-zero margin.
        let improves_margin = margin.abs() < best_abs_margin;
        let improves_distance = current < best_distance;
        if improves_margin || improves_distance {
            if improves_margin {
                best_abs_margin = margin.abs();
            }
            if improves_distance {
                best_distance = current;
            }
            best = Some(Candidate { margin_s: margin, distance_m: current, point: sample.position });
        }
    }

    let candidate = best?;
    let mut probability = config.curve.probability(candidate.margin_s);
    if candidate.distance_m < config.close_range_m {
        probability = (probability * config.close_range_boost).min(1.0);
    } else if candidate.distance_m > config.far_range_m {
        probability *= config.far_range_damping;
    }
    if !defender.can_act_now {
        probability *= config.off_balance_factor;
    }

    Some(InterceptionRisk {
        probability: probability.clamp(0.0, 1.0),
        defender_id: defender.id,
        intercept_point: candidate.point,
        timing_margin_s: candidate.margin_s,
    })
}

/// Score every candidate and keep the one with the lowest peak risk.
///
/// Ties keep the first candidate supplied - selection is stable, never
/// random - so callers can order candidates by preference.
pub fn select_safest(
    trajectories: &[Trajectory],
    defenders: &[DefenderSnapshot],
    throwing_side: TeamSide,
    config: &RiskConfig,
) -> Option<(usize, AggregateRisk)> {
    let mut best: Option<(usize, AggregateRisk)> = None;
    for (index, trajectory) in trajectories.iter().enumerate() {
        let aggregate = score_trajectory(trajectory, defenders, throwing_side, config);
        log::trace!("candidate {}: max risk {:.3}", index, aggregate.max_probability());
        let lower = match &best {
            None => true,
            Some((_, current)) => aggregate.max_probability() < current.max_probability(),
        };
        if lower {
            best = Some((index, aggregate));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::throw_profile::ThrowType;
    use crate::engine::trajectory::{self, PhysicsParams};

    fn chest_pass() -> Trajectory {
        trajectory::build(
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(6.0, 1.5, 0.0),
            ThrowType::Chest,
            24,
            &PhysicsParams::default(),
        )
        .unwrap()
    }

    fn defender_at(x: f64, y: f64, z: f64) -> DefenderSnapshot {
        DefenderSnapshot {
            side: TeamSide::Away,
            position: Vec3::new(x, y, z),
            ..DefenderSnapshot::default()
        }
    }

    #[test]
    fn test_on_path_defender_is_high_danger() {
        let pass = chest_pass();
        let mut lurker = defender_at(3.0, 1.8, 0.0);
        lurker.reaction_time_s = 0.0;

        let aggregate =
            score_trajectory(&pass, &[lurker], TeamSide::Home, &RiskConfig::default());
        let top = aggregate.max_risk.unwrap();
        assert!(top.probability >= 0.8, "lurker probability: {}", top.probability);
        assert_eq!(aggregate.level, RiskLevel::HighDanger);
    }

    #[test]
    fn test_distant_defender_is_safe() {
        let pass = chest_pass();
        let spectator = defender_at(3.0, 1.5, 15.0);

        let aggregate =
            score_trajectory(&pass, &[spectator], TeamSide::Home, &RiskConfig::default());
        assert!(aggregate.max_probability() < 0.3);
        assert_eq!(aggregate.level, RiskLevel::Safe);
    }

    #[test]
    fn test_early_defender_outscores_late_defender() {
        let pass = chest_pass();
        // Both off the lane at the same spot; only reaction differs
        let mut early = defender_at(3.0, 1.5, 2.5);
        early.id = 1;
        early.reaction_time_s = 0.0;
        let mut late = defender_at(3.0, 1.5, 2.5);
        late.id = 2;
        late.reaction_time_s = 1.0;

        let aggregate =
            score_trajectory(&pass, &[early, late], TeamSide::Home, &RiskConfig::default());
        assert_eq!(aggregate.per_defender.len(), 2);
        let p_early = aggregate.per_defender[0].probability;
        let p_late = aggregate.per_defender[1].probability;
        assert!(p_early > p_late, "early {} vs late {}", p_early, p_late);
        assert_eq!(aggregate.max_risk.unwrap().defender_id, 1);
    }

    #[test]
    fn test_throwing_side_defenders_are_ignored() {
        let pass = chest_pass();
        let mut teammate = defender_at(3.0, 1.8, 0.0);
        teammate.side = TeamSide::Home;

        let aggregate =
            score_trajectory(&pass, &[teammate], TeamSide::Home, &RiskConfig::default());
        assert!(aggregate.per_defender.is_empty());
        assert!(aggregate.max_risk.is_none());
        assert_eq!(aggregate.level, RiskLevel::Safe);
        assert_eq!(aggregate.max_probability(), 0.0);
    }

    #[test]
    fn test_off_balance_defender_is_discounted() {
        let pass = chest_pass();
        // Placed so every sample sits between the close and far ranges:
        // no distance adjustment, the ratio isolates the balance factor
        let ready = defender_at(3.0, 1.6, 3.5);
        let mut stumbling = defender_at(3.0, 1.6, 3.5);
        stumbling.id = 1;
        stumbling.can_act_now = false;

        let config = RiskConfig::default();
        let aggregate =
            score_trajectory(&pass, &[ready, stumbling], TeamSide::Home, &config);
        let p_ready = aggregate.per_defender[0].probability;
        let p_stumbling = aggregate.per_defender[1].probability;
        assert!(
            (p_stumbling - p_ready * config.off_balance_factor).abs() < 1e-12,
            "balance factor should be the only difference"
        );
    }

    #[test]
    fn test_moving_defender_gets_prediction_credit() {
        let pass = chest_pass();
        let standing = defender_at(3.0, 1.5, 4.0);
        let mut closing = defender_at(3.0, 1.5, 4.0);
        closing.id = 1;
        closing.velocity = Vec3::new(0.0, 0.0, -6.0); // sprinting at the lane

        let aggregate = score_trajectory(
            &pass,
            &[standing, closing],
            TeamSide::Home,
            &RiskConfig::default(),
        );
        assert!(
            aggregate.per_defender[1].probability > aggregate.per_defender[0].probability,
            "a defender already moving the right way must score higher"
        );
    }

    #[test]
    fn test_bounce_pass_hides_pre_bounce_samples() {
        let pass = trajectory::build(
            Vec3::new(0.0, 1.2, 0.0),
            Vec3::new(4.0, 1.0, 0.0),
            ThrowType::Bounce,
            20,
            &PhysicsParams::default(),
        )
        .unwrap();
        let bounce_index = pass.bounce_index.unwrap();

        // Defender parked on the pre-bounce arc
        let mut early_lurker = defender_at(0.8, 1.3, 0.0);
        early_lurker.reaction_time_s = 0.0;

        let aggregate =
            score_trajectory(&pass, &[early_lurker], TeamSide::Home, &RiskConfig::default());
        let risk = aggregate.max_risk.unwrap();
        let post_bounce = &pass.samples[bounce_index..];
        assert!(
            post_bounce.iter().any(|s| s.position == risk.intercept_point),
            "intercept point must come from the post-bounce segment"
        );
    }

    #[test]
    fn test_select_safest_prefers_open_lane() {
        let params = PhysicsParams::default();
        let start = Vec3::new(0.0, 1.5, 0.0);
        let covered = trajectory::build(start, Vec3::new(6.0, 1.5, 0.0), ThrowType::Chest, 24, &params)
            .unwrap();
        let open = trajectory::build(start, Vec3::new(0.0, 1.5, 6.0), ThrowType::Chest, 24, &params)
            .unwrap();

        // Defender guards the first lane only
        let guard = defender_at(3.0, 1.6, 0.0);
        let (index, aggregate) = select_safest(
            &[covered, open],
            &[guard],
            TeamSide::Home,
            &RiskConfig::default(),
        )
        .unwrap();
        assert_eq!(index, 1);
        assert!(aggregate.max_probability() < 0.5);
    }

    #[test]
    fn test_select_safest_tie_keeps_first() {
        let pass = chest_pass();
        let twin = pass.clone();
        let guard = defender_at(3.0, 1.6, 1.0);

        let (index, _) = select_safest(
            &[pass, twin],
            &[guard],
            TeamSide::Home,
            &RiskConfig::default(),
        )
        .unwrap();
        assert_eq!(index, 0, "equal-risk candidates must resolve to the first");
    }

    #[test]
    fn test_select_safest_empty_input() {
        assert!(select_safest(&[], &[], TeamSide::Home, &RiskConfig::default()).is_none());
    }

    #[test]
    fn test_level_bucketing_at_cut_points() {
        let config = RiskConfig::default();
        assert_eq!(RiskLevel::from_probability(0.0, &config), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_probability(0.3, &config), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_probability(0.6, &config), RiskLevel::Danger);
        assert_eq!(RiskLevel::from_probability(0.8, &config), RiskLevel::HighDanger);
        assert_eq!(RiskLevel::from_probability(1.0, &config), RiskLevel::HighDanger);
    }

    #[test]
    fn test_recommendations_escalate() {
        assert_eq!(RiskLevel::Safe.recommendation(), "throw");
        assert_eq!(RiskLevel::HighDanger.recommendation(), "hold");
    }
}
