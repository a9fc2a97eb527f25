use std::time::Instant;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::simulation::control::ControlInput;
use crate::simulation::ephemerides::Ephemerides;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::states::SimulationState;

/// Time one `advance` per frame for growing belts around `ephemerides`
/// Prints CSV (`asteroids,ms_per_step,max_fps`) to paste into a spreadsheet
pub fn bench_advance(ephemerides: &Ephemerides, base: &Parameters, time_step: f64) {
    println!("asteroids,ms_per_step,max_fps");

    for asteroid_count in (0..=20_000).step_by(1000) {
        // Small belts: average over more steps to smooth noise
        let steps = if asteroid_count <= 5000 { 200 } else { 50 };

        let params = Parameters {
            asteroid_count,
            ..base.clone()
        };
        let mut rng = ChaChaRng::seed_from_u64(42);
        let mut sys = match SimulationState::construct_with_rng(time_step, ephemerides, &params, &mut rng) {
            Ok(sys) => sys,
            Err(e) => {
                warn!("benchmark setup failed for {asteroid_count} asteroids: {e}");
                return;
            }
        };
        let forces = AccelSet::from_parameters(&params);

        // Warm-up
        advance(&mut sys, &forces, &ControlInput::IDLE);

        let t0 = Instant::now();
        for _ in 0..steps {
            advance(&mut sys, &forces, &ControlInput::IDLE);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.1}", asteroid_count, ms, 1000.0 / ms);
    }

    info!("benchmark finished");
}
