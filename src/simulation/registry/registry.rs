//! Entity registry: one dense slot per id, components optional.
//!
//! Ids are indices into `WorldState::entities` and are never reused
//! (there is no removal), so lookup is a bounds check.

use crate::core::math::Vec3;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::domain::mesh::{BoxKind, Collidable, Mesh};
use crate::systems::collision::CollidableBox;
use crate::systems::geometry::compute_bounding_box;
use crate::systems::rigid_body::{MotionState, PhysicsState};

use super::WorldState;

#[derive(Clone, Debug, Default)]
pub(super) struct EntitySlot {
    pub(super) mesh: Option<Mesh>,
    pub(super) collidable: Option<Collidable>,
    pub(super) physics: Option<PhysicsState>,
    pub(super) motion: MotionState,
    /// World box, `None` once the mesh moved since it was computed
    pub(super) bbox: Option<CollidableBox>,
    /// A skip was already logged for this entity
    pub(super) skip_logged: bool,
}

impl EntitySlot {
    /// Compute the box if the cache is stale. `None` without a mesh or
    /// for geometry without vertices.
    pub(super) fn refresh_box(&mut self, id: EntityId) -> Option<CollidableBox> {
        if self.bbox.is_none() {
            let mesh = self.mesh.as_ref()?;
            let (geometry, kind) = match &self.collidable {
                Some(c) => (c.resolve(mesh), c.kind),
                None => (&*mesh.geometry, BoxKind::Collision),
            };
            self.bbox = compute_bounding_box(id, mesh, geometry, kind);
        }
        self.bbox
    }

    #[inline]
    pub(super) fn invalidate_box(&mut self) {
        self.bbox = None;
    }
}

fn slot(world: &WorldState, id: EntityId) -> Result<&EntitySlot, EngineError> {
    world.entities.get(id.index()).ok_or(EngineError::UnknownEntity(id))
}

fn slot_mut(world: &mut WorldState, id: EntityId) -> Result<&mut EntitySlot, EngineError> {
    world.entities.get_mut(id.index()).ok_or(EngineError::UnknownEntity(id))
}

pub(super) fn create_entity(world: &mut WorldState) -> EntityId {
    let id = EntityId(world.entities.len() as u32);
    world.entities.push(EntitySlot::default());
    id
}

pub(super) fn set_physics(world: &mut WorldState, id: EntityId, physics: PhysicsState) -> Result<(), EngineError> {
    if !physics.has_valid_mass() {
        return Err(EngineError::NonPositiveMass { id, mass: physics.mass });
    }
    slot_mut(world, id)?.physics = Some(physics);
    Ok(())
}

pub(super) fn set_mesh(world: &mut WorldState, id: EntityId, mesh: Mesh) -> Result<(), EngineError> {
    let slot = slot_mut(world, id)?;
    slot.mesh = Some(mesh);
    slot.invalidate_box();
    Ok(())
}

pub(super) fn set_collidable(world: &mut WorldState, id: EntityId, collidable: Collidable) -> Result<(), EngineError> {
    let slot = slot_mut(world, id)?;
    slot.collidable = Some(collidable);
    slot.invalidate_box();
    Ok(())
}

pub(super) fn set_motion(world: &mut WorldState, id: EntityId, motion: MotionState) -> Result<(), EngineError> {
    let slot = slot_mut(world, id)?;
    slot.motion = motion;
    if let Some(mesh) = slot.mesh.as_mut() {
        mesh.transform.rotation = motion.rotation();
        slot.invalidate_box();
    }
    Ok(())
}

pub(super) fn set_position(world: &mut WorldState, id: EntityId, position: Vec3) -> Result<(), EngineError> {
    let slot = slot_mut(world, id)?;
    let mesh = slot.mesh.as_mut().ok_or(EngineError::MissingMesh(id))?;
    mesh.transform.translation = position;
    slot.invalidate_box();
    Ok(())
}

pub(super) fn set_player(world: &mut WorldState, id: EntityId) -> Result<(), EngineError> {
    slot(world, id)?;
    world.player = Some(id);
    Ok(())
}

pub(super) fn position(world: &WorldState, id: EntityId) -> Result<Vec3, EngineError> {
    slot(world, id)?
        .mesh
        .as_ref()
        .map(Mesh::position)
        .ok_or(EngineError::MissingMesh(id))
}

pub(super) fn physics(world: &WorldState, id: EntityId) -> Result<&PhysicsState, EngineError> {
    slot(world, id)?.physics.as_ref().ok_or(EngineError::MissingPhysics(id))
}

pub(super) fn physics_mut(world: &mut WorldState, id: EntityId) -> Result<&mut PhysicsState, EngineError> {
    slot_mut(world, id)?.physics.as_mut().ok_or(EngineError::MissingPhysics(id))
}

pub(super) fn motion(world: &WorldState, id: EntityId) -> Result<MotionState, EngineError> {
    Ok(slot(world, id)?.motion)
}

pub(super) fn mesh(world: &WorldState, id: EntityId) -> Result<&Mesh, EngineError> {
    slot(world, id)?.mesh.as_ref().ok_or(EngineError::MissingMesh(id))
}

pub(super) fn get_bounding_box(world: &mut WorldState, id: EntityId) -> Result<CollidableBox, EngineError> {
    let slot = slot_mut(world, id)?;
    if slot.mesh.is_none() {
        return Err(EngineError::MissingMesh(id));
    }
    slot.refresh_box(id)
        .ok_or_else(|| EngineError::InvalidGeometry(format!("entity {} has no vertices", id)))
}

pub(super) fn player_motion(world: &WorldState) -> Option<MotionState> {
    let id = world.player?;
    world.entities.get(id.index()).map(|s| s.motion)
}

/// Bring every stale box up to date before the sweeps
pub(super) fn refresh_boxes(world: &mut WorldState) {
    for (index, slot) in world.entities.iter_mut().enumerate() {
        slot.refresh_box(EntityId(index as u32));
    }
}
