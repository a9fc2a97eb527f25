//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the constants fixed at construction:
//! - gravitational constant and the squared-distance floor (softening),
//! - asteroid belt shape, count and per-asteroid attributes,
//! - thrust force for the player craft,
//! - optional RNG seed for a reproducible belt

use crate::error::{SimError, SimResult};
use crate::simulation::states::Color;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravitational_constant: f64, // m^3 kg^-1 s^-2
    pub asteroid_count: usize, // bodies appended after the ephemerides
    pub asteroid_mean_radius: f64, // m, scale of the belt's radial law
    pub asteroid_mass: f64, // kg
    pub asteroid_radius: f64, // m
    pub asteroid_color: Color,
    pub thrust_force: f64, // N, per active axis
    pub min_distance_squared: f64, // m^2, floor on squared separation
    pub seed: Option<u64>, // None -> OS entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.6743e-11,
            asteroid_count: 500,
            asteroid_mean_radius: 4e11,
            asteroid_mass: 1e12,   // about a billion tons
            asteroid_radius: 2e3,
            asteroid_color: Color::GRAY,
            thrust_force: 980.0,
            min_distance_squared: 0.1,
            seed: None,
        }
    }
}

impl Parameters {
    /// Reject constants that would turn the first step into NaN/Inf
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("gravitational_constant", self.gravitational_constant),
            ("asteroid_mean_radius", self.asteroid_mean_radius),
            ("asteroid_mass", self.asteroid_mass),
            ("asteroid_radius", self.asteroid_radius),
            ("min_distance_squared", self.min_distance_squared),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        if !(self.thrust_force.is_finite() && self.thrust_force >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "thrust_force",
                value: self.thrust_force,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn zero_floor_is_rejected() {
        let p = Parameters {
            min_distance_squared: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            p.validate(),
            Err(SimError::InvalidParameter { name: "min_distance_squared", .. })
        ));
    }
}
