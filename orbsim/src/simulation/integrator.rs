//! Fixed-step time integrator for the orbital simulation
//!
//! Semi-implicit (symplectic) Euler: kick the velocity with this step's
//! acceleration, then drift the position with the new velocity. Swapping
//! the two updates turns it into explicit Euler and orbits spiral outward.

use log::trace;

use super::control::ControlInput;
use super::forces::AccelSet;
use super::states::{NVec3, SimulationState};

/// Advance `sys` by its own fixed time step
pub fn advance(sys: &mut SimulationState, forces: &AccelSet, input: &ControlInput) {
    let dt = sys.time_step();
    advance_by(sys, forces, input, dt);
}

/// Advance `sys` by an explicit `dt`.
///
/// Every acceleration is computed from the positions at the start of the
/// step before any body moves. Only finite, positive `dt` moves anything:
/// zero, negative and NaN steps leave the state untouched so the clock
/// never runs backwards.
pub fn advance_by(sys: &mut SimulationState, forces: &AccelSet, input: &ControlInput, dt: f64) {
    let n = sys.body_count();
    if n == 0 || !(dt.is_finite() && dt > 0.0) { // no bodies or no forward step, return
        return;
    }

    // Allocate one acceleration per body, initialized to zero
    // accels[i] will hold a_n for body i at the current time t = time_total
    let mut accels = vec![NVec3::zeros(); n];

    // Gravity from the massive bodies plus craft thrust, all taken from
    // the positions x_n, before any body moves this step
    forces.accumulate_accels(&*sys, input, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        // Kick: v_n+1 = v_n + dt * a_n
        b.velocity += *a * dt;

        // Drift with the velocity we just updated (not v_n):
        // x_n+1 = x_n + dt * v_n+1
        // Using v_n here would be explicit Euler, which gains energy every orbit
        b.position += b.velocity * dt;
    }

    // Advance the clock by one full step; dt > 0 keeps it monotonic
    sys.time_total += dt;
    trace!("advanced {n} bodies to t = {:.1} s", sys.time_total);
}
