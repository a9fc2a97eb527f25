//! Build fully-initialized simulations
//!
//! The body factory copies the ephemerides verbatim into the leading
//! (massive) bodies, then appends the procedurally generated belt around
//! body 0. `Scenario` bundles the result with its engine settings,
//! parameters and force set, ready to be driven frame by frame.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::configuration::config::{ephemerides_from_config, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::asteroids::synthesize_belt;
use crate::simulation::control::ControlInput;
use crate::simulation::engine::Engine;
use crate::simulation::ephemerides::Ephemerides;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, SimulationState};

impl SimulationState {
    /// Construct the ephemerides bodies plus the asteroid belt.
    ///
    /// The belt is seeded from `params.seed` when set, from OS entropy otherwise.
    pub fn construct(time_step: f64, ephemerides: &Ephemerides, params: &Parameters) -> SimResult<Self> {
        let mut rng = match params.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_os_rng(),
        };
        Self::construct_with_rng(time_step, ephemerides, params, &mut rng)
    }

    /// Same as [`SimulationState::construct`] with an explicit RNG for the belt
    pub fn construct_with_rng<R: Rng>(
        time_step: f64,
        ephemerides: &Ephemerides,
        params: &Parameters,
        rng: &mut R,
    ) -> SimResult<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(time_step));
        }
        params.validate()?;
        let center = ephemerides.central().ok_or(SimError::NoBodies)?;
        let center_mass = center.mass;

        let massive_body_count = ephemerides.len();
        let mut bodies: Vec<Body> = Vec::with_capacity(massive_body_count + params.asteroid_count);

        // Ephemerides: copied as-is, these are the gravity sources
        bodies.extend(ephemerides.bodies().iter().map(|e| Body {
            mass: e.mass,
            radius: e.radius,
            color: e.color,
            position: e.position,
            velocity: e.velocity,
            name: e.name,
        }));

        // Belt: passive bodies orbiting body 0
        bodies.extend(synthesize_belt(rng, params, center_mass));

        info!(
            "constructed simulation: {} massive bodies, {} asteroids, dt = {} s",
            massive_body_count, params.asteroid_count, time_step
        );

        let sys = Self::from_bodies(time_step, bodies, massive_body_count)?;
        if let Some(i) = sys.craft_index() {
            debug!("player craft is body {i}");
        }
        Ok(sys)
    }
}

/// Fully-initialized simulation: settings, current state and force laws
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: SimulationState,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let engine = cfg.engine.to_engine()?;
        let parameters = cfg.parameters.to_parameters()?;
        let ephemerides = ephemerides_from_config(&cfg.bodies)?;
        Self::from_parts(engine, parameters, &ephemerides)
    }

    pub fn from_parts(engine: Engine, parameters: Parameters, ephemerides: &Ephemerides) -> SimResult<Self> {
        let system = SimulationState::construct(engine.time_step(), ephemerides, &parameters)?;
        let forces = AccelSet::from_parameters(&parameters);

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance one frame with this frame's control input
    pub fn step(&mut self, input: &ControlInput) {
        let Scenario { system, forces, .. } = self;
        advance(system, forces, input);
    }
}
