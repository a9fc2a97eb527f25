//! High-level runtime engine settings
//!
//! Turns a frame rate and a simulation speed into the fixed time step
//! handed to `SimulationState` at construction.

use crate::error::{SimError, SimResult};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct Engine {
    fps: u32, // frames (and steps) per real second
    time_multiplier: f64, // simulated seconds per real second
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            fps: 60,
            time_multiplier: 100.0 * SECONDS_PER_DAY,
        }
    }
}

impl Engine {
    pub fn new(fps: u32, time_multiplier: f64) -> SimResult<Self> {
        if fps < 1 {
            return Err(SimError::InvalidFrameRate(fps));
        }
        if !(time_multiplier.is_finite() && time_multiplier > 0.0) {
            return Err(SimError::InvalidTimeMultiplier(time_multiplier));
        }
        Ok(Self { fps, time_multiplier })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn time_multiplier(&self) -> f64 {
        self.time_multiplier
    }

    /// Simulated seconds advanced by each frame
    pub fn time_step(&self) -> f64 {
        self.time_multiplier / self.fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_100_days_over_60_frames() {
        let engine = Engine::default();
        assert_eq!(engine.time_step(), 100.0 * SECONDS_PER_DAY / 60.0);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(matches!(Engine::new(0, 1.0), Err(SimError::InvalidFrameRate(0))));
        assert!(matches!(
            Engine::new(30, 0.0),
            Err(SimError::InvalidTimeMultiplier(_))
        ));
    }
}
