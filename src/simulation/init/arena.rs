//! Arena props: ground-resting cubes and spheres scattered inside a
//! rectangular floor centred on the origin.

use std::sync::Arc;

use crate::core::math::Vec3;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::domain::mesh::{Collidable, Geometry, Mesh};
use crate::systems::rigid_body::{MotionState, PhysicsState};

use super::random::bounded_int;
use super::WorldState;

pub const PLAYER_MASS: f32 = 40.0;
pub const CUBE_MASS: f32 = 5.0;
pub const SPHERE_MASS: f32 = 15.0;

const SPHERE_SEGMENTS: u32 = 12;

/// Floor extents in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaBounds {
    pub width: f32,
    pub depth: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self { width: 100.0, depth: 100.0 }
    }
}

impl ArenaBounds {
    /// Integer (x, z) inset by half the mesh width so nothing overhangs
    fn random_position(&self, rng: &mut u32, mesh_width: f32) -> (f32, f32) {
        let inset = mesh_width / 2.0;
        let half_w = self.width / 2.0;
        let half_d = self.depth / 2.0;
        let x = bounded_int(rng, -half_w + inset, half_w - inset);
        let z = bounded_int(rng, -half_d + inset, half_d - inset);
        (x as f32, z as f32)
    }
}

fn spawn_prop(world: &mut WorldState, geometry: Geometry, position: Vec3, mass: f32) -> Result<EntityId, EngineError> {
    let physics = PhysicsState::new(mass);
    if !physics.has_valid_mass() {
        let next = EntityId(world.entity_count() as u32);
        return Err(EngineError::NonPositiveMass { id: next, mass });
    }

    let id = world.create_entity();
    world.set_mesh(id, Mesh::new(Arc::new(geometry), position))?;
    world.set_collidable(id, Collidable::solid())?;
    world.set_physics(id, physics)?;
    world.set_motion(id, MotionState::grounded())?;
    Ok(id)
}

fn check_extent(name: &str, value: f32) -> Result<(), EngineError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidGeometry(format!("{} must be positive, got {}", name, value)))
    }
}

pub(super) fn spawn_cube(world: &mut WorldState, size: f32, x: f32, z: f32, mass: f32) -> Result<EntityId, EngineError> {
    check_extent("cube size", size)?;
    spawn_prop(world, Geometry::cuboid(size, size, size), Vec3::new(x, size / 2.0, z), mass)
}

pub(super) fn spawn_sphere(world: &mut WorldState, radius: f32, x: f32, z: f32, mass: f32) -> Result<EntityId, EngineError> {
    check_extent("sphere radius", radius)?;
    let geometry = Geometry::sphere(radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    spawn_prop(world, geometry, Vec3::new(x, radius, z), mass)
}

pub(super) fn populate_arena(
    world: &mut WorldState,
    seed_value: u32,
    cubes: u32,
    spheres: u32,
) -> Result<Vec<EntityId>, EngineError> {
    let arena = world.arena;
    // 0 continues the world's own stream
    let mut rng = if seed_value == 0 { world.rng_state } else { seed_value };
    let mut ids = Vec::with_capacity((cubes + spheres) as usize);

    for _ in 0..cubes {
        let (x, z) = arena.random_position(&mut rng, 1.0);
        ids.push(spawn_cube(world, 1.0, x, z, CUBE_MASS)?);
    }
    for _ in 0..spheres {
        let (x, z) = arena.random_position(&mut rng, 2.0);
        ids.push(spawn_sphere(world, 1.0, x, z, SPHERE_MASS)?);
    }

    world.rng_state = rng;
    engine_log!("arena populated: {} cubes, {} spheres (seed {})", cubes, spheres, seed_value);
    Ok(ids)
}
