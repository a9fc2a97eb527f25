//! Core state types for the orbital simulation.
//!
//! - `Body`: one point mass with display attributes (radius, color, tag)
//! - `SimulationState`: the ordered body sequence plus the clock
//!
//! The first `massive_body_count` bodies are gravity sources; the rest
//! (the asteroid belt) feel gravity but do not exert it.

use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// Tag reserved for the player-controlled craft
pub const PLAYER_CRAFT_TAG: &str = "spaceship";

/// RGBA display color, carried for the renderer only
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const GRAY: Color = Color::rgba(130, 130, 130, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Fixed-capacity name tag. Only used to recognize the player craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyTag {
    bytes: [u8; Self::CAPACITY],
    len: u8,
}

impl BodyTag {
    pub const CAPACITY: usize = 16;

    pub fn new(name: &str) -> SimResult<Self> {
        if name.len() > Self::CAPACITY {
            return Err(SimError::TagTooLong(name.to_string()));
        }
        let mut bytes = [0u8; Self::CAPACITY];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self {
            bytes,
            len: name.len() as u8,
        })
    }

    pub fn as_str(&self) -> &str {
        // Built from a &str and never split mid-character
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    pub fn is_player_craft(&self) -> bool {
        self.as_str() == PLAYER_CRAFT_TAG
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f64, // kg, fixed after creation
    pub radius: f64, // m, display only
    pub color: Color,
    pub position: NVec3, // m
    pub velocity: NVec3, // m/s
    pub name: Option<BodyTag>,
}

impl Body {
    pub fn is_player_craft(&self) -> bool {
        self.name.is_some_and(|tag| tag.is_player_craft())
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn momentum(&self) -> NVec3 {
        self.velocity * self.mass
    }

    /// Checks the static attributes and vectors of a body about to enter a simulation
    pub(crate) fn validate(&self, index: usize) -> SimResult<()> {
        let invalid = |reason: &str| SimError::InvalidBody {
            index,
            reason: reason.to_string(),
        };
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(invalid("mass must be finite and positive"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid("radius must be finite and positive"));
        }
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(invalid("position has non-finite components"));
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(invalid("velocity has non-finite components"));
        }
        Ok(())
    }
}

/// The simulated population and its clock.
///
/// The body sequence never changes length after construction, so an index
/// is a stable identity for the lifetime of the state. Only the integrator
/// mutates positions and velocities; everything else reads.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub(crate) bodies: Vec<Body>,
    time_step: f64,
    pub(crate) time_total: f64,
    massive_body_count: usize,
}

impl SimulationState {
    /// Build a state from an explicit body list.
    ///
    /// The first `massive_body_count` bodies become gravity sources.
    pub fn from_bodies(time_step: f64, bodies: Vec<Body>, massive_body_count: usize) -> SimResult<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(time_step));
        }
        if bodies.is_empty() || massive_body_count == 0 {
            return Err(SimError::NoBodies);
        }
        if massive_body_count > bodies.len() {
            return Err(SimError::InvalidParameter {
                name: "massive_body_count",
                value: massive_body_count as f64,
            });
        }
        for (i, b) in bodies.iter().enumerate() {
            b.validate(i)?;
        }

        Ok(Self {
            bodies,
            time_step,
            time_total: 0.0,
            massive_body_count,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Simulated seconds elapsed since construction
    pub fn time_total(&self) -> f64 {
        self.time_total
    }

    pub fn massive_body_count(&self) -> usize {
        self.massive_body_count
    }

    /// Index of the first body tagged as the player craft, if any
    pub fn craft_index(&self) -> Option<usize> {
        self.bodies.iter().position(Body::is_player_craft)
    }

    pub fn distance_between(&self, i: usize, j: usize) -> f64 {
        (self.bodies[i].position - self.bodies[j].position).norm()
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(NVec3::zeros(), |acc, p| acc + p)
    }

    /// Kinetic energy of every body plus the pairwise potential between massive bodies.
    ///
    /// Asteroids only see the massive bodies, so the potential between two
    /// asteroids is left out to match what the integrator actually simulates.
    pub fn total_energy(&self, g: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();

        let mut potential = 0.0;
        for i in 0..self.bodies.len() {
            let sources = self.massive_body_count.min(i);
            for j in 0..sources {
                let r = self.distance_between(i, j);
                if r > 0.0 {
                    potential -= g * self.bodies[i].mass * self.bodies[j].mass / r;
                }
            }
        }

        kinetic + potential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(mass: f64) -> Body {
        Body {
            mass,
            radius: 1.0,
            color: Color::WHITE,
            position: NVec3::zeros(),
            velocity: NVec3::zeros(),
            name: None,
        }
    }

    #[test]
    fn tag_round_trips_and_rejects_long_names() {
        let tag = BodyTag::new("spaceship").unwrap();
        assert_eq!(tag.as_str(), "spaceship");
        assert!(tag.is_player_craft());
        assert!(!BodyTag::new("earth").unwrap().is_player_craft());
        assert!(matches!(
            BodyTag::new("a-name-that-is-way-too-long"),
            Err(SimError::TagTooLong(_))
        ));
    }

    #[test]
    fn from_bodies_rejects_bad_setup() {
        assert!(matches!(
            SimulationState::from_bodies(0.0, vec![body(1.0)], 1),
            Err(SimError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            SimulationState::from_bodies(-1.0, vec![body(1.0)], 1),
            Err(SimError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            SimulationState::from_bodies(1.0, Vec::new(), 0),
            Err(SimError::NoBodies)
        ));
        assert!(matches!(
            SimulationState::from_bodies(1.0, vec![body(1.0)], 2),
            Err(SimError::InvalidParameter { .. })
        ));
        assert!(matches!(
            SimulationState::from_bodies(1.0, vec![body(0.0)], 1),
            Err(SimError::InvalidBody { index: 0, .. })
        ));
    }

    #[test]
    fn craft_index_finds_tagged_body() {
        let mut craft = body(1000.0);
        craft.name = Some(BodyTag::new(PLAYER_CRAFT_TAG).unwrap());
        let sys = SimulationState::from_bodies(1.0, vec![body(1.0), craft], 2).unwrap();
        assert_eq!(sys.craft_index(), Some(1));
        assert_eq!(sys.time_total(), 0.0);
    }
}
