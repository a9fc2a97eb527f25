//! Acceleration contributors for the orbital simulation
//!
//! Gravity only flows from the massive bodies (the ephemerides); asteroids
//! are test particles. Thrust is added on top for the player craft.

use crate::simulation::control::{thrust_acceleration, ControlInput};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, SimulationState};

/// Collection of acceleration terms (gravity, thrust, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Gravity from the massive bodies plus craft thrust, both taken from `params`
    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new()
            .with(NewtonianGravity {
                g: params.gravitational_constant,
                min_distance_squared: params.min_distance_squared,
            })
            .with(CraftThrust {
                thrust_force: params.thrust_force,
            })
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &SimulationState, input: &ControlInput, out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, input, out);
        }
    }
}

/// Acceleration source operating on a [`SimulationState`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &SimulationState, input: &ControlInput, out: &mut [NVec3]);
}

/// Net gravitational acceleration on body `index` from every massive body but itself.
///
/// The squared separation is clamped to `min_distance_squared` so coincident
/// bodies never divide by zero. The direction is `normalize(p_index - p_j)`
/// scaled by the negative magnitude `-G m_j / d2`, which points at `j`.
/// A zero separation normalizes to the zero vector.
pub fn acceleration_on(sys: &SimulationState, index: usize, g: f64, min_distance_squared: f64) -> NVec3 {
    let bodies = sys.bodies();
    let xi = bodies[index].position;

    // Only the leading massive bodies attract; asteroids are passive
    bodies[..sys.massive_body_count()]
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index) // no self-interaction
        .fold(NVec3::zeros(), |total, (_, bj)| {
            // r points from body j to body `index`
            let r = xi - bj.position;

            // Squared separation |r|^2, clamped to the floor so coincident
            // (or nearly coincident) bodies stay finite
            let d2 = r.norm_squared().max(min_distance_squared);

            // Scalar magnitude is negative: -G * m_j / d2
            let magnitude = -g * bj.mass / d2;

            // Unit vector along +r (away from j). Scaling it by the negative
            // magnitude flips it toward j, i.e. attraction.
            // r == 0 has no direction and contributes nothing.
            let normal = r.try_normalize(0.0).unwrap_or_else(NVec3::zeros);

            total + normal * magnitude
        })
}

/// Newtonian gravity from the leading `massive_body_count` bodies
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance_squared: f64, // softening floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &SimulationState, _input: &ControlInput, out: &mut [NVec3]) {
        for (i, a) in out.iter_mut().enumerate().take(sys.body_count()) {
            *a += acceleration_on(sys, i, self.g, self.min_distance_squared);
        }
    }
}

/// Thrust applied to the player craft, the first body carrying the craft tag
pub struct CraftThrust {
    pub thrust_force: f64, // N per axis
}

impl Acceleration for CraftThrust {
    fn acceleration(&self, sys: &SimulationState, input: &ControlInput, out: &mut [NVec3]) {
        if input.is_idle() {
            return;
        }
        // A single designated body: the same one `craft_index` reports
        let Some(i) = sys.craft_index() else {
            return;
        };
        if let Some(a) = out.get_mut(i) {
            *a += thrust_acceleration(input, sys.bodies()[i].mass, self.thrust_force);
        }
    }
}
