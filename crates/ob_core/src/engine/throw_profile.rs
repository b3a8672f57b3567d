//! Throw profiles
//!
//! Each pass type is a data row: distance bounds, arc height, speed
//! multiplier, handedness requirement, and (for bounce passes) the floor
//! contact fraction. New throw types are additive table entries; nothing
//! downstream branches on the tag beyond this lookup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pass/throw variant tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThrowType {
    /// Two-hand chest pass - flat, quick, mid distances
    Chest,
    /// Bounce pass - one floor contact on the way to the receiver
    Bounce,
    /// Lob over a defender - high arc, slower
    Lob,
    /// Long outlet / baseball pass - dominant hand, full-court range
    Long,
    /// One-hand push pass - short, fastest release
    OneHand,
}

impl ThrowType {
    pub const ALL: [ThrowType; 5] =
        [ThrowType::Chest, ThrowType::Bounce, ThrowType::Lob, ThrowType::Long, ThrowType::OneHand];

    /// Profile row for this tag.
    #[inline]
    pub fn profile(&self) -> &'static ThrowProfile {
        &PROFILES[self]
    }

    /// Whether this throw has a floor-contact segment.
    #[inline]
    pub fn is_bounce(&self) -> bool {
        self.profile().bounce_ratio.is_some()
    }
}

/// Immutable per-type throw parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowProfile {
    pub throw_type: ThrowType,
    /// Shortest horizontal distance this throw makes sense for (m)
    pub min_distance_m: f64,
    /// Longest horizontal distance this throw can cover (m)
    pub max_distance_m: f64,
    /// Peak vertical offset above the start→target chord (m)
    pub arc_height_m: f64,
    /// Timeline compression: > 1.0 arrives faster than a neutral throw
    pub speed_multiplier: f64,
    /// True for one-hand throws that need the dominant hand
    pub requires_dominant_hand: bool,
    /// Floor-contact point as a fraction of the start→target chord
    pub bounce_ratio: Option<f64>,
}

static PROFILES: Lazy<BTreeMap<ThrowType, ThrowProfile>> = Lazy::new(|| {
    let rows = [
        ThrowProfile {
            throw_type: ThrowType::Chest,
            min_distance_m: 1.0,
            max_distance_m: 9.0,
            arc_height_m: 0.3,
            speed_multiplier: 1.0,
            requires_dominant_hand: false,
            bounce_ratio: None,
        },
        ThrowProfile {
            throw_type: ThrowType::Bounce,
            min_distance_m: 1.0,
            max_distance_m: 7.0,
            arc_height_m: 0.55,
            speed_multiplier: 0.85,
            requires_dominant_hand: false,
            bounce_ratio: Some(0.6),
        },
        ThrowProfile {
            throw_type: ThrowType::Lob,
            min_distance_m: 3.0,
            max_distance_m: 12.0,
            arc_height_m: 2.2,
            speed_multiplier: 0.9,
            requires_dominant_hand: false,
            bounce_ratio: None,
        },
        ThrowProfile {
            throw_type: ThrowType::Long,
            min_distance_m: 8.0,
            max_distance_m: 26.0,
            arc_height_m: 1.6,
            speed_multiplier: 1.25,
            requires_dominant_hand: true,
            bounce_ratio: None,
        },
        ThrowProfile {
            throw_type: ThrowType::OneHand,
            min_distance_m: 0.5,
            max_distance_m: 6.0,
            arc_height_m: 0.25,
            speed_multiplier: 1.1,
            requires_dominant_hand: true,
            bounce_ratio: None,
        },
    ];
    rows.into_iter().map(|p| (p.throw_type, p)).collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_has_a_profile() {
        for tag in ThrowType::ALL {
            let profile = tag.profile();
            assert_eq!(profile.throw_type, tag);
            assert!(profile.min_distance_m < profile.max_distance_m);
            assert!(profile.arc_height_m > 0.0, "{:?} needs a defined apex", tag);
            assert!(profile.speed_multiplier > 0.0);
        }
    }

    #[test]
    fn test_only_bounce_has_contact_fraction() {
        for tag in ThrowType::ALL {
            let has_bounce = tag.profile().bounce_ratio.is_some();
            assert_eq!(has_bounce, tag == ThrowType::Bounce);
        }
        let ratio = ThrowType::Bounce.profile().bounce_ratio.unwrap();
        assert!((0.0..1.0).contains(&ratio));
    }

    #[test]
    fn test_one_hand_throws_need_dominant_hand() {
        assert!(ThrowType::Long.profile().requires_dominant_hand);
        assert!(ThrowType::OneHand.profile().requires_dominant_hand);
        assert!(!ThrowType::Chest.profile().requires_dominant_hand);
    }

    #[test]
    fn test_serde_tag_round_trip() {
        let json = serde_json::to_string(&ThrowType::Bounce).unwrap();
        let back: ThrowType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThrowType::Bounce);
    }
}
