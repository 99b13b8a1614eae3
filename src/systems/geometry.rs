//! Geometry utility: world-space extents and collidable boxes.
//!
//! Both scan every vertex, so the tick computes them at most once per
//! entity and caches the box on the registry slot.

use crate::core::math::Vec3;
use crate::domain::entity::EntityId;
use crate::domain::mesh::{BoxKind, Geometry, Mesh};

use super::collision::CollidableBox;

/// Width, height and depth of the mesh's world-space bounds
///
/// Zero for a mesh without vertices.
pub fn compute_world_extent(mesh: &Mesh) -> Vec3 {
    mesh.world_bounds().map(|b| b.size()).unwrap_or(Vec3::ZERO)
}

/// World-space min/max box of `geometry` placed with the mesh's transform
pub fn compute_bounding_box(
    id: EntityId,
    mesh: &Mesh,
    geometry: &Geometry,
    kind: BoxKind,
) -> Option<CollidableBox> {
    let bounds = mesh.world_bounds_of(geometry)?;
    Some(CollidableBox::from_aabb(id, kind, bounds))
}

/// Drag reference area, approximated from the box volume
#[inline]
pub fn reference_area(extent: Vec3, area_scale: f32) -> f32 {
    extent.x * extent.y * extent.z / area_scale
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::math::Quat;

    #[test]
    fn extent_uses_world_transform() {
        let mut mesh = Mesh::new(Arc::new(Geometry::cuboid(2.0, 1.0, 1.0)), Vec3::new(5.0, 0.0, 0.0));
        mesh.transform.scale = Vec3::new(1.0, 3.0, 1.0);
        let extent = compute_world_extent(&mesh);
        assert_eq!(extent, Vec3::new(2.0, 3.0, 1.0));

        mesh.transform.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let rotated = compute_world_extent(&mesh);
        assert!((rotated.x - 1.0).abs() < 1e-5);
        assert!((rotated.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn empty_mesh_has_no_extent_or_box() {
        let mesh = Mesh::new(Arc::new(Geometry::default()), Vec3::ONE);
        assert_eq!(compute_world_extent(&mesh), Vec3::ZERO);
        assert!(compute_bounding_box(EntityId(0), &mesh, &mesh.geometry, BoxKind::Collision).is_none());
    }

    #[test]
    fn bounding_box_is_tagged_and_world_space() {
        let mesh = Mesh::new(Arc::new(Geometry::cuboid(1.0, 2.0, 1.0)), Vec3::new(3.0, 1.0, -2.0));
        let bbox = compute_bounding_box(EntityId(7), &mesh, &mesh.geometry, BoxKind::Collision).unwrap();
        assert_eq!(bbox.id, EntityId(7));
        assert_eq!(bbox.kind, BoxKind::Collision);
        assert_eq!((bbox.x_min, bbox.x_max), (2.5, 3.5));
        assert_eq!((bbox.y_min, bbox.y_max), (0.0, 2.0));
        assert_eq!((bbox.z_min, bbox.z_max), (-2.5, -1.5));
    }

    #[test]
    fn reference_area_scales_volume() {
        assert_eq!(reference_area(Vec3::new(2.0, 5.0, 10.0), 1000.0), 0.1);
    }
}
