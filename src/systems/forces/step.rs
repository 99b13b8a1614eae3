use crate::core::math::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::systems::rigid_body::{MotionState, PhysicsState};

use super::integrate::{
    integrate_horizontal, integrate_vertical, resolve_ground_contact, DragParams, GroundContact,
};

/// Shape-derived inputs of the force model, read from the cached box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyShape {
    /// Distance from the mesh origin to its lowest point
    pub half_height: f32,
    /// Drag reference area
    pub area: f32,
}

/// Advance one entity by `dt`.
///
/// Horizontal axes always integrate (with friction while grounded) from
/// the push left in `physics.a`, which is not overwritten. The vertical
/// axis only integrates while airborne, followed by ground contact.
/// An entity without a usable mass is left untouched.
pub fn step_body(
    id: EntityId,
    physics: &mut PhysicsState,
    motion: &mut MotionState,
    position: &mut Vec3,
    shape: BodyShape,
    dt: f32,
    config: &PhysicsConfig,
) -> Result<GroundContact, EngineError> {
    if !physics.has_valid_mass() {
        return Err(EngineError::NonPositiveMass { id, mass: physics.mass });
    }

    let mass = physics.mass;
    let drag = DragParams {
        air_density: config.air_density,
        drag_coefficient: config.drag_coefficient,
        area: shape.area,
    };
    let friction = motion.grounded.then(|| config.friction_coefficient(motion.sliding));

    let x = integrate_horizontal(
        physics.v.x,
        physics.a.x,
        mass,
        dt,
        &drag,
        friction,
        config.terminal_speed,
    );
    let z = integrate_horizontal(
        physics.v.z,
        physics.a.z,
        mass,
        dt,
        &drag,
        friction,
        config.terminal_speed,
    );

    // Horizontal `a` stays the input push; f / mass never feeds back
    physics.d.x = x.d;
    physics.f.x = x.f;
    physics.v.x = x.v;
    physics.d.z = z.d;
    physics.f.z = z.f;
    physics.v.z = z.v;
    position.x += x.d;
    position.z += z.d;

    if motion.grounded {
        return Ok(GroundContact::Settled);
    }

    let y = integrate_vertical(physics.v.y, physics.a.y, mass, dt, config.gravity, &drag);
    physics.d.y = y.d;
    physics.f.y = y.f;
    physics.a.y = y.a;
    physics.v.y = y.v;
    position.y += y.d;

    let contact = resolve_ground_contact(
        position.y,
        shape.half_height,
        physics.v.y,
        config.restitution,
        config.grounded_threshold,
    );
    position.y = contact.y;
    physics.v.y = contact.v;

    if contact.contact == GroundContact::Settled {
        motion.grounded = true;
        physics.settle_vertical();
    }

    Ok(contact.contact)
}
