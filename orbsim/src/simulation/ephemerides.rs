//! Initial state of the real bodies being simulated.
//!
//! The list is ordered and the first entry is the dominant mass: the belt
//! is synthesized around it.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{BodyTag, Color, NVec3};

#[derive(Debug, Clone)]
pub struct EphemerisBody {
    pub name: Option<BodyTag>,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub position: NVec3,
    pub velocity: NVec3,
}

#[derive(Debug, Clone, Default)]
pub struct Ephemerides {
    bodies: Vec<EphemerisBody>,
}

impl Ephemerides {
    pub fn new(bodies: Vec<EphemerisBody>) -> SimResult<Self> {
        if bodies.is_empty() {
            return Err(SimError::NoBodies);
        }
        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[EphemerisBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The body every asteroid orbits
    pub fn central(&self) -> Option<&EphemerisBody> {
        self.bodies.first()
    }
}
