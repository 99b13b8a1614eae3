//! Input-to-intent mapping for the player.
//!
//! Runs before integration each tick: it only touches the desired
//! acceleration, the jump impulse and the locomotion flags. Forces are
//! left to the force model.

use crate::core::math::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::input::{Action, InputProvider};
use crate::systems::rigid_body::{MotionState, PhysicsState};

/// Apply the held actions to the player's kinematics.
///
/// Roll is cleared first and re-derived from the turn keys, so it never
/// accumulates. Forward/backward only push while grounded and not sliding;
/// jump only fires from the ground.
pub fn apply_intent<I: InputProvider + ?Sized>(
    input: &I,
    physics: &mut PhysicsState,
    motion: &mut MotionState,
    config: &PhysicsConfig,
) {
    motion.roll = 0.0;

    if input.is_held(Action::TurnLeft) {
        motion.yaw += config.rotation_speed;
        motion.roll = config.lean_angle();
    }
    if input.is_held(Action::TurnRight) {
        motion.yaw -= config.rotation_speed;
        motion.roll = -config.lean_angle();
    }

    motion.sliding = input.is_held(Action::Slide);

    if motion.grounded && !motion.sliding {
        let (sin, cos) = motion.yaw.sin_cos();
        let mut push = 0.0;
        if input.is_held(Action::Forward) {
            push += config.forward_accel;
        }
        if input.is_held(Action::Backward) {
            push -= config.forward_accel;
        }
        if push != 0.0 {
            physics.a.x += sin * push;
            physics.a.z += cos * push;
        }
    }

    if motion.grounded && input.is_held(Action::Jump) && physics.has_valid_mass() {
        motion.grounded = false;
        physics.apply_impulse(Vec3::Y * config.jump_force);
    }
}
