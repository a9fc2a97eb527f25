//! Procedural asteroid belt.
//!
//! Radii follow a logit law around `asteroid_mean_radius`: draw x in (0, 1),
//! take l = ln(x) - ln(1 - x) + 1 and place the asteroid at
//! r = mean * sqrt(|l|). That gives a dense ring with a long tail on both
//! sides. Asteroids start on the y = 0 plane moving tangentially at
//! 0.6..1.2 times the circular speed, with a small vertical kick.

use std::f64::consts::TAU;

use rand::Rng;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Range of the factor applied to the ideal circular speed
pub const SPEED_SCATTER: (f64, f64) = (0.6, 1.2);

/// Out-of-plane velocity range, m/s
pub const VERTICAL_SCATTER: f64 = 100.0;

/// Radial distance for a uniform draw `x` in (0, 1)
pub fn logit_radius(x: f64, mean_radius: f64) -> f64 {
    let l = x.ln() - (1.0 - x).ln() + 1.0;
    mean_radius * l.abs().sqrt()
}

/// Speed of a circular orbit of radius `r` around `center_mass`
pub fn circular_speed(g: f64, center_mass: f64, r: f64) -> f64 {
    (g * center_mass / r).sqrt()
}

/// Generate one asteroid orbiting a body of `center_mass` sitting at the origin
pub fn synthesize_asteroid<R: Rng>(rng: &mut R, params: &Parameters, center_mass: f64) -> Body {
    // Open interval, and off the single x where |l| = 0 and the orbit collapses
    let r = loop {
        let x: f64 = rng.random();
        if x > 0.0 && x < 1.0 {
            let r = logit_radius(x, params.asteroid_mean_radius);
            if r > 0.0 {
                break r;
            }
        }
    };
    let phi = rng.random_range(0.0..TAU);

    let v = circular_speed(params.gravitational_constant, center_mass, r)
        * rng.random_range(SPEED_SCATTER.0..=SPEED_SCATTER.1);
    let vy = rng.random_range(-VERTICAL_SCATTER..=VERTICAL_SCATTER);

    let (sin_phi, cos_phi) = phi.sin_cos();

    Body {
        mass: params.asteroid_mass,
        radius: params.asteroid_radius,
        color: params.asteroid_color,
        position: NVec3::new(r * cos_phi, 0.0, r * sin_phi),
        velocity: NVec3::new(-v * sin_phi, vy, v * cos_phi),
        name: None,
    }
}

/// Generate the whole belt, `params.asteroid_count` bodies
pub fn synthesize_belt<R: Rng>(rng: &mut R, params: &Parameters, center_mass: f64) -> Vec<Body> {
    (0..params.asteroid_count)
        .map(|_| synthesize_asteroid(rng, params, center_mass))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn logit_radius_at_half_is_mean() {
        // x = 0.5 -> l = 1 -> r = mean
        assert_relative_eq!(logit_radius(0.5, 4e11), 4e11);
    }

    #[test]
    fn asteroid_starts_on_plane_with_tangential_velocity() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let params = Parameters::default();
        for _ in 0..50 {
            let a = synthesize_asteroid(&mut rng, &params, 2e30);
            assert_eq!(a.position.y, 0.0);
            let radial = NVec3::new(a.position.x, 0.0, a.position.z);
            let planar_v = NVec3::new(a.velocity.x, 0.0, a.velocity.z);
            assert!(radial.dot(&planar_v).abs() <= 1e-6 * radial.norm() * planar_v.norm());
            assert!(a.velocity.y.abs() <= VERTICAL_SCATTER);
            assert_eq!(a.mass, params.asteroid_mass);
            assert_eq!(a.radius, params.asteroid_radius);
            assert!(a.name.is_none());
        }
    }

    #[test]
    fn belt_has_configured_size() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let params = Parameters {
            asteroid_count: 37,
            ..Parameters::default()
        };
        assert_eq!(synthesize_belt(&mut rng, &params, 2e30).len(), 37);
    }
}
