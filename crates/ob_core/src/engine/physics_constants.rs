//! Physics constants for throw and shot simulation
//!
//! Gravity and drag are injected configuration (`PhysicsParams`); the values
//! here are the defaults and the court/ball facts the scorers reference.

// ============================================================
// Gravity
// ============================================================
pub mod gravity {
    /// Standard gravity (m/s²)
    pub const STANDARD_MPS2: f64 = 9.81;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// Size-7 ball mass (kg)
    pub const MASS_KG: f64 = 0.62;

    /// Ball radius (m) - also the minimum sample height above the floor
    pub const RADIUS_M: f64 = 0.12;

    /// Default linear drag coefficient (1/s, force ∝ −k·v)
    pub const DRAG_COEFFICIENT: f64 = 0.05;

    /// Below this the damped formulas degenerate to the no-drag closed form
    pub const DRAG_EPSILON: f64 = 1e-6;

    /// Flight times at or below this are treated as zero-length throws
    pub const MIN_FLIGHT_TIME_S: f64 = 1e-6;
}

// ============================================================
// Court (FIBA dimensions)
// ============================================================
pub mod court {
    /// Rim height (m)
    pub const RIM_HEIGHT_M: f64 = 3.05;

    /// Three-point arc radius from the basket center (m)
    pub const THREE_POINT_RADIUS_M: f64 = 6.75;

    /// Free-throw line distance from the basket center (m)
    pub const FREE_THROW_M: f64 = 4.225;

    /// Restricted-area (no-charge semicircle) radius (m)
    pub const RESTRICTED_AREA_RADIUS_M: f64 = 1.25;

    /// Floor plane height (m)
    pub const GROUND_Y_M: f64 = 0.0;
}

// ============================================================
// Bounce passes
// ============================================================
pub mod bounce {
    /// Fraction of the profile arc height kept by the post-bounce segment.
    /// Hardwood keeps noticeably more energy than grass.
    pub const PASS_RESTITUTION: f64 = 0.55;
}

// ============================================================
// Shot release model
// ============================================================
pub mod release {
    /// Release height ≈ RATIO × shooter height + OFFSET
    pub const HEIGHT_RATIO: f64 = 0.9;

    /// Fixed offset above the scaled body height (m) - raised arms
    pub const HEIGHT_OFFSET_M: f64 = 0.3;
}
