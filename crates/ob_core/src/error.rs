//! Crate error type
//!
//! Routine absences (an out-of-range throw, an unreachable block) are
//! expressed as `Option`/zero-probability results, never as errors. The
//! error type covers genuinely invalid inputs and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid throw profile: {0}")]
    InvalidProfile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
