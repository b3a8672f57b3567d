//! Centralized scoring configuration
//!
//! All tunable thresholds for the risk and block scorers live here as
//! data: presets, `Default` impls, and an environment override. Nothing
//! in the scorers hardcodes a cut point.

mod block_config;
mod risk_config;

pub use block_config::BlockConfig;
pub use risk_config::{RiskConfig, TimingCurve};
