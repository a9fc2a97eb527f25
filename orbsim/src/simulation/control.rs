//! Thrust for the player craft.
//!
//! The input collaborator hands over one `ControlInput` per frame; nothing
//! here polls a window or keyboard, so the physics can be stepped headless.

use crate::simulation::states::NVec3;

/// Thrust intents for one frame, one pair of flags per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub pos_x: bool,
    pub neg_x: bool,
    pub pos_y: bool,
    pub neg_y: bool,
    pub pos_z: bool,
    pub neg_z: bool,
}

impl ControlInput {
    /// No thrust on any axis
    pub const IDLE: ControlInput = ControlInput {
        pos_x: false,
        neg_x: false,
        pos_y: false,
        neg_y: false,
        pos_z: false,
        neg_z: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

fn axis(pos: bool, neg: bool) -> f64 {
    (pos as i8 - neg as i8) as f64
}

/// Acceleration produced by `input` on a craft of `mass` with engines of `thrust_force` per axis.
///
/// Axes are independent, so two flags on different axes give diagonal thrust
/// and opposing flags on the same axis cancel.
pub fn thrust_acceleration(input: &ControlInput, mass: f64, thrust_force: f64) -> NVec3 {
    let a = thrust_force / mass;
    NVec3::new(
        axis(input.pos_x, input.neg_x),
        axis(input.pos_y, input.neg_y),
        axis(input.pos_z, input.neg_z),
    ) * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn idle_input_gives_no_thrust() {
        assert_eq!(thrust_acceleration(&ControlInput::IDLE, 1000.0, 980.0), NVec3::zeros());
    }

    #[test]
    fn flags_combine_per_axis() {
        let input = ControlInput {
            pos_x: true,
            neg_z: true,
            pos_y: true,
            neg_y: true,
            ..ControlInput::default()
        };
        let a = thrust_acceleration(&input, 1000.0, 980.0);
        assert_relative_eq!(a.x, 0.98);
        assert_eq!(a.y, 0.0);
        assert_relative_eq!(a.z, -0.98);
    }
}
