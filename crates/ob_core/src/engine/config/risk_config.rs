//! Interception risk configuration
//!
//! The timing→probability mapping and the aggregation cut points. The
//! upstream code base this model derives from carried two slightly
//! different coefficient sets on its pass-risk and trajectory-risk paths;
//! that split was an accumulation accident, not a design. Here one
//! canonical curve is the default and the divergent pass-path
//! coefficients survive only as the explicit `legacy_pass` preset.
//!
//! ## Environment Variables
//!
//! - `OB_RISK_PROFILE`: Select preset (aggressive, conservative,
//!   legacy_pass, default)

use serde::{Deserialize, Serialize};
use std::env;

/// Piecewise-linear timing-margin → interception-probability curve.
///
/// Margins are `defender arrival − ball arrival` in seconds; negative
/// means the defender gets there early. Segment boundaries:
///
/// | margin | probability |
/// |---|---|
/// | ≤ early (−0.3 s) | early..saturated (0.9..1.0) |
/// | early..0 | zero..early (0.6..0.9) |
/// | 0..tight (0.2 s) | tight..zero (0.3..0.6) |
/// | tight..late (0.5 s) | late..tight (0.1..0.3) |
/// | > late | exponential tail toward 0 |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingCurve {
    /// Margin at which the curve saturates at `p_saturated` (s, negative)
    pub saturate_margin_s: f64,
    /// Comfortably-early boundary (s, negative)
    pub early_margin_s: f64,
    /// Barely-late boundary (s, positive)
    pub tight_margin_s: f64,
    /// Clearly-late boundary (s, positive)
    pub late_margin_s: f64,
    pub p_saturated: f64,
    pub p_early: f64,
    pub p_zero: f64,
    pub p_tight: f64,
    pub p_late: f64,
    /// Time constant of the tail beyond `late_margin_s` (s)
    pub tail_decay_s: f64,
}

impl TimingCurve {
    /// Canonical coefficients (the trajectory-risk set).
    pub fn canonical() -> Self {
        Self {
            saturate_margin_s: -1.0,
            early_margin_s: -0.3,
            tight_margin_s: 0.2,
            late_margin_s: 0.5,
            p_saturated: 1.0,
            p_early: 0.9,
            p_zero: 0.6,
            p_tight: 0.3,
            p_late: 0.1,
            tail_decay_s: 0.5,
        }
    }

    /// The pass-risk path's historical coefficients, kept for callers
    /// tuned against them.
    pub fn legacy_pass() -> Self {
        Self {
            saturate_margin_s: -1.0,
            early_margin_s: -0.3,
            tight_margin_s: 0.25,
            late_margin_s: 0.5,
            p_saturated: 1.0,
            p_early: 0.85,
            p_zero: 0.65,
            p_tight: 0.35,
            p_late: 0.15,
            tail_decay_s: 0.4,
        }
    }

    /// Interception probability for a timing margin (seconds).
    pub fn probability(&self, margin_s: f64) -> f64 {
        if margin_s <= self.early_margin_s {
            let span = self.early_margin_s - self.saturate_margin_s;
            let depth = ((self.early_margin_s - margin_s) / span).clamp(0.0, 1.0);
            self.p_early + (self.p_saturated - self.p_early) * depth
        } else if margin_s <= 0.0 {
            let t = margin_s / self.early_margin_s;
            self.p_zero + (self.p_early - self.p_zero) * t
        } else if margin_s <= self.tight_margin_s {
            let t = margin_s / self.tight_margin_s;
            self.p_zero + (self.p_tight - self.p_zero) * t
        } else if margin_s <= self.late_margin_s {
            let t = (margin_s - self.tight_margin_s) / (self.late_margin_s - self.tight_margin_s);
            self.p_tight + (self.p_late - self.p_tight) * t
        } else {
            self.p_late * (-(margin_s - self.late_margin_s) / self.tail_decay_s).exp()
        }
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Interception scoring thresholds and adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    pub curve: TimingCurve,
    /// Probability at or above which the level leaves SAFE
    pub caution_threshold: f64,
    pub danger_threshold: f64,
    pub high_danger_threshold: f64,
    /// Defenders closer than this to the interception point get a boost (m)
    pub close_range_m: f64,
    pub close_range_boost: f64,
    /// Defenders farther than this are discounted (m)
    pub far_range_m: f64,
    pub far_range_damping: f64,
    /// Multiplier for defenders that cannot act right now
    pub off_balance_factor: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            curve: TimingCurve::canonical(),
            caution_threshold: 0.3,
            danger_threshold: 0.6,
            high_danger_threshold: 0.8,
            close_range_m: 2.0,
            close_range_boost: 1.2,
            far_range_m: 5.0,
            far_range_damping: 0.8,
            off_balance_factor: 0.7,
        }
    }
}

impl RiskConfig {
    /// Flags danger earlier - for cautious play-calling.
    pub fn aggressive() -> Self {
        Self {
            caution_threshold: 0.25,
            danger_threshold: 0.5,
            high_danger_threshold: 0.7,
            ..Self::default()
        }
    }

    /// Tolerates tighter windows before escalating.
    pub fn conservative() -> Self {
        Self {
            caution_threshold: 0.35,
            danger_threshold: 0.65,
            high_danger_threshold: 0.85,
            ..Self::default()
        }
    }

    /// Default thresholds over the historical pass-risk curve.
    pub fn legacy_pass() -> Self {
        Self { curve: TimingCurve::legacy_pass(), ..Self::default() }
    }

    /// Select a preset from `OB_RISK_PROFILE`, falling back to defaults.
    pub fn from_env_or_default() -> Self {
        match env::var("OB_RISK_PROFILE").as_deref() {
            Ok("aggressive") => Self::aggressive(),
            Ok("conservative") => Self::conservative(),
            Ok("legacy_pass") => Self::legacy_pass(),
            _ => Self::default(),
        }
    }
}
