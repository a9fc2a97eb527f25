//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame rate and simulation speed
//! - [`ParametersConfig`] – physical constants and belt settings
//! - [`BodyConfig`]       – ephemeris entry for each real body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every `engine` and `parameters` field is optional and falls back to the
//! defaults of [`Engine`] and [`Parameters`]:
//!
//! ```yaml
//! engine:
//!   fps: 60
//!   time_multiplier: 8640000.0  # simulated seconds per real second
//!
//! parameters:
//!   gravitational_constant: 6.6743e-11
//!   asteroid_count: 500
//!   asteroid_mean_radius: 4.0e11
//!   seed: 42
//!
//! bodies:
//!   - name: sun                 # first body is the dominant mass
//!     mass: 1.98847e30
//!     radius: 6.957e8
//!     color: [255, 220, 90, 255]
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::ephemerides::{Ephemerides, EphemerisBody};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyTag, Color, NVec3};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub fps: Option<u32>,
    pub time_multiplier: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub gravitational_constant: Option<f64>,
    pub asteroid_count: Option<usize>,
    pub asteroid_mean_radius: Option<f64>,
    pub asteroid_mass: Option<f64>,
    pub asteroid_radius: Option<f64>,
    pub asteroid_color: Option<Color>,
    pub thrust_force: Option<f64>,
    pub min_distance_squared: Option<f64>,
    pub seed: Option<u64>, // deterministic belt when set
}

/// Initial state of one real body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: Option<String>,
    pub mass: f64, // kg
    pub radius: f64, // m
    #[serde(default = "default_body_color")]
    pub color: Color,
    pub position: Vec<f64>, // [x, y, z] in m
    pub velocity: Vec<f64>, // [x, y, z] in m/s
}

fn default_body_color() -> Color {
    Color::WHITE
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> SimResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

impl EngineConfig {
    pub fn to_engine(&self) -> SimResult<Engine> {
        let defaults = Engine::default();
        Engine::new(
            self.fps.unwrap_or(defaults.fps()),
            self.time_multiplier.unwrap_or(defaults.time_multiplier()),
        )
    }
}

impl ParametersConfig {
    pub fn to_parameters(&self) -> SimResult<Parameters> {
        let d = Parameters::default();
        let params = Parameters {
            gravitational_constant: self.gravitational_constant.unwrap_or(d.gravitational_constant),
            asteroid_count: self.asteroid_count.unwrap_or(d.asteroid_count),
            asteroid_mean_radius: self.asteroid_mean_radius.unwrap_or(d.asteroid_mean_radius),
            asteroid_mass: self.asteroid_mass.unwrap_or(d.asteroid_mass),
            asteroid_radius: self.asteroid_radius.unwrap_or(d.asteroid_radius),
            asteroid_color: self.asteroid_color.unwrap_or(d.asteroid_color),
            thrust_force: self.thrust_force.unwrap_or(d.thrust_force),
            min_distance_squared: self.min_distance_squared.unwrap_or(d.min_distance_squared),
            seed: self.seed.or(d.seed),
        };
        params.validate()?;
        Ok(params)
    }
}

fn to_vec3(index: usize, field: &str, v: &[f64]) -> SimResult<NVec3> {
    match v {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::InvalidBody {
            index,
            reason: format!("{field} must have 3 components, got {}", v.len()),
        }),
    }
}

impl BodyConfig {
    pub fn to_ephemeris(&self, index: usize) -> SimResult<EphemerisBody> {
        Ok(EphemerisBody {
            name: self.name.as_deref().map(BodyTag::new).transpose()?,
            mass: self.mass,
            radius: self.radius,
            color: self.color,
            position: to_vec3(index, "position", &self.position)?,
            velocity: to_vec3(index, "velocity", &self.velocity)?,
        })
    }
}

/// Map the `bodies` list into an ordered ephemerides table
pub fn ephemerides_from_config(bodies: &[BodyConfig]) -> SimResult<Ephemerides> {
    let entries = bodies
        .iter()
        .enumerate()
        .map(|(i, bc)| bc.to_ephemeris(i))
        .collect::<SimResult<Vec<_>>>()?;
    Ephemerides::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
bodies:
  - name: sun
    mass: 2.0e30
    radius: 7.0e8
    position: [0.0, 0.0, 0.0]
    velocity: [0.0, 0.0, 0.0]
"#;

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();
        let engine = cfg.engine.to_engine().unwrap();
        let params = cfg.parameters.to_parameters().unwrap();
        assert_eq!(engine.fps(), 60);
        assert_eq!(params.asteroid_count, Parameters::default().asteroid_count);
        assert_eq!(params.seed, None);

        let eph = ephemerides_from_config(&cfg.bodies).unwrap();
        assert_eq!(eph.len(), 1);
        assert_eq!(eph.bodies()[0].color, Color::WHITE);
        assert_eq!(eph.bodies()[0].name.map(|t| t.as_str().to_string()), Some("sun".to_string()));
    }

    #[test]
    fn short_vectors_are_rejected() {
        let yaml = MINIMAL.replace("position: [0.0, 0.0, 0.0]", "position: [0.0, 0.0]");
        let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
        assert!(matches!(
            ephemerides_from_config(&cfg.bodies),
            Err(SimError::InvalidBody { index: 0, .. })
        ));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let yaml = format!("engine:\n  fps: 0\n{MINIMAL}");
        let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
        assert!(matches!(cfg.engine.to_engine(), Err(SimError::InvalidFrameRate(0))));
    }
}
