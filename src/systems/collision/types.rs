use crate::core::math::{Aabb, Vec3};
use crate::domain::entity::EntityId;
use crate::domain::mesh::BoxKind;

/// Cached world-space box of a collidable entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollidableBox {
    pub id: EntityId,
    pub kind: BoxKind,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl CollidableBox {
    pub fn from_aabb(id: EntityId, kind: BoxKind, aabb: Aabb) -> Self {
        Self {
            id,
            kind,
            x_min: aabb.min.x,
            x_max: aabb.max.x,
            y_min: aabb.min.y,
            y_max: aabb.max.y,
            z_min: aabb.min.z,
            z_max: aabb.max.z,
        }
    }

    pub fn to_aabb(&self) -> Aabb {
        Aabb {
            min: Vec3::new(self.x_min, self.y_min, self.z_min),
            max: Vec3::new(self.x_max, self.y_max, self.z_max),
        }
    }

    #[inline]
    pub fn is_collision(&self) -> bool {
        self.kind == BoxKind::Collision
    }
}

/// Broad-phase candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BroadHit {
    /// Entity owning the box
    pub id: EntityId,
    /// Position of the box in the swept slice
    pub index: usize,
}
