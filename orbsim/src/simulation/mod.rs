pub mod states;
pub mod params;
pub mod engine;
pub mod ephemerides;
pub mod asteroids;
pub mod forces;
pub mod control;
pub mod integrator;
pub mod scenario;
pub mod clock;
