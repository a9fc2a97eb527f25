pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyTag, Color, NVec3, SimulationState, PLAYER_CRAFT_TAG};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::ephemerides::{Ephemerides, EphemerisBody};
pub use simulation::forces::{acceleration_on, AccelSet, Acceleration, CraftThrust, NewtonianGravity};
pub use simulation::control::{thrust_acceleration, ControlInput};
pub use simulation::integrator::{advance, advance_by};
pub use simulation::scenario::Scenario;
pub use simulation::clock::iso_date;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_advance;

#[cfg(feature = "viewer")]
pub use visualization::viewer::run_viewer;
