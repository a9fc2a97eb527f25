//! Error types for building and configuring a simulation
//!
//! Stepping never fails; everything here is raised while a scenario is
//! being loaded, validated or constructed.

use thiserror::Error;

/// Result type for simulation setup
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while setting up a simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("frame rate must be at least 1, got {0}")]
    InvalidFrameRate(u32),

    #[error("time multiplier must be finite and positive, got {0}")]
    InvalidTimeMultiplier(f64),

    #[error("ephemerides contain no bodies")]
    NoBodies,

    #[error("body {index} is invalid: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("body tag `{0}` exceeds {cap} bytes", cap = crate::simulation::states::BodyTag::CAPACITY)]
    TagTooLong(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
