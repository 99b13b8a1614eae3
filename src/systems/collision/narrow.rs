use crate::core::math::{Ray, Vec3};
use crate::domain::mesh::{Geometry, Mesh};

/// Player-side input of the narrow sweep: world origin and world vertices.
///
/// Built once per tick and shared by every candidate.
#[derive(Clone, Debug, Default)]
pub struct NarrowProbe {
    pub origin: Vec3,
    pub vertices: Vec<Vec3>,
}

impl NarrowProbe {
    pub fn from_mesh(mesh: &Mesh, geometry: &Geometry) -> Self {
        Self {
            origin: mesh.position(),
            vertices: mesh.world_vertices_of(geometry).collect(),
        }
    }
}

/// Result of sweeping one candidate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NarrowOutcome {
    pub hit: bool,
    /// Rays actually cast (degenerate vertices are skipped)
    pub rays: u32,
}

/// Cast a ray from the probe origin toward each probe vertex against the
/// candidate's world triangles.
///
/// A hit needs the candidate surface strictly closer than the vertex, i.e.
/// inside the player's silhouette rather than merely along the same line.
/// Vertices sitting on the origin have no direction and are skipped, so a
/// fully degenerate probe reports no collision.
pub fn narrow_sweep(probe: &NarrowProbe, target: &[[Vec3; 3]]) -> NarrowOutcome {
    let mut rays = 0u32;
    if target.is_empty() {
        return NarrowOutcome { hit: false, rays };
    }

    for vertex in probe.vertices.iter() {
        let Some((ray, reach)) = Ray::towards(probe.origin, *vertex) else {
            continue;
        };
        rays += 1;

        if let Some(distance) = ray.nearest_hit(target) {
            if distance < reach {
                return NarrowOutcome { hit: true, rays };
            }
        }
    }

    NarrowOutcome { hit: false, rays }
}
