//! Mesh geometry owned by the engine.
//!
//! The renderer keeps its own scene objects; the engine keeps a typed side
//! table of the geometry it needs (local vertices, triangles, world
//! transform) so nothing physics-owned is attached to rendering objects.

use std::f32::consts::PI;
use std::sync::Arc;

use crate::core::math::{Aabb, Mat4, Quat, Vec3};

use super::error::EngineError;

/// Triangle soup in local space
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl Geometry {
    /// Axis-aligned box centred on the origin
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
        let vertices = vec![
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ];
        let indices = vec![
            // -z
            [0, 2, 1],
            [0, 3, 2],
            // +z
            [4, 5, 6],
            [4, 6, 7],
            // -x
            [0, 4, 7],
            [0, 7, 3],
            // +x
            [1, 2, 6],
            [1, 6, 5],
            // -y
            [0, 1, 5],
            [0, 5, 4],
            // +y
            [3, 7, 6],
            [3, 6, 2],
        ];
        Self { vertices, indices }
    }

    /// UV sphere with the same vertex layout as a three.js `SphereGeometry`
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        let mut indices = Vec::with_capacity((ws * hs * 2) as usize);

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                vertices.push(Vec3::new(
                    -radius * (u * 2.0 * PI).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * 2.0 * PI).sin() * (v * PI).sin(),
                ));
            }
        }

        let row = ws + 1;
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.push([a, b, d]);
                }
                if iy != hs - 1 {
                    indices.push([b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Triangle (in the XY plane) extruded along +z by `depth`; used as a slope
    pub fn triangle_prism(a: [f32; 2], b: [f32; 2], c: [f32; 2], depth: f32) -> Self {
        let mut vertices = Vec::with_capacity(6);
        for z in [0.0, depth] {
            for p in [a, b, c] {
                vertices.push(Vec3::new(p[0], p[1], z));
            }
        }
        let indices = vec![
            // caps
            [0, 2, 1],
            [3, 4, 5],
            // sides
            [0, 1, 4],
            [0, 4, 3],
            [1, 2, 5],
            [1, 5, 4],
            [2, 0, 3],
            [2, 3, 5],
        ];
        Self { vertices, indices }
    }

    /// Build from flat buffers (xyz triples and triangle indices).
    ///
    /// An empty index buffer means consecutive vertex triples form triangles.
    pub fn from_buffers(positions: &[f32], indices: &[u32]) -> Result<Self, EngineError> {
        if positions.len() % 3 != 0 {
            return Err(EngineError::InvalidGeometry(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }
        if positions.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidGeometry("non-finite vertex position".into()));
        }

        let vertices: Vec<Vec3> = positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        let vertex_count = vertices.len() as u32;

        let triangles: Vec<[u32; 3]> = if indices.is_empty() {
            if vertex_count % 3 != 0 {
                return Err(EngineError::InvalidGeometry(
                    "non-indexed geometry needs a multiple of 3 vertices".into(),
                ));
            }
            (0..vertex_count / 3)
                .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
                .collect()
        } else {
            if indices.len() % 3 != 0 {
                return Err(EngineError::InvalidGeometry(format!(
                    "index buffer length {} is not a multiple of 3",
                    indices.len()
                )));
            }
            if let Some(bad) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(EngineError::InvalidGeometry(format!(
                    "index {} out of range for {} vertices",
                    bad, vertex_count
                )));
            }
            indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect()
        };

        Ok(Self { vertices, indices: triangles })
    }

    /// Merge child geometries into one composite, each placed by its local matrix
    pub fn merged(parts: &[(&Geometry, Mat4)]) -> Self {
        let mut out = Geometry::default();
        for (geometry, matrix) in parts {
            let base = out.vertices.len() as u32;
            out.vertices
                .extend(geometry.vertices.iter().map(|v| matrix.transform_point3(*v)));
            out.indices.extend(
                geometry
                    .indices
                    .iter()
                    .map(|[a, b, c]| [a + base, b + base, c + base]),
            );
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// World placement of a mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::default() }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Engine-side handle of a rendered object: shared geometry plus placement
#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Arc<Geometry>,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: Arc<Geometry>, translation: Vec3) -> Self {
        Self { geometry, transform: Transform::from_translation(translation) }
    }

    /// World position of the mesh origin
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }

    /// `geometry` (not necessarily our own) placed with this mesh's transform
    pub fn world_vertices_of<'a>(&self, geometry: &'a Geometry) -> impl Iterator<Item = Vec3> + 'a {
        let matrix = self.transform.matrix();
        geometry.vertices.iter().map(move |v| matrix.transform_point3(*v))
    }

    pub fn world_triangles_of(&self, geometry: &Geometry) -> Vec<[Vec3; 3]> {
        let world: Vec<Vec3> = self.world_vertices_of(geometry).collect();
        geometry
            .indices
            .iter()
            .filter_map(|[a, b, c]| {
                Some([
                    *world.get(*a as usize)?,
                    *world.get(*b as usize)?,
                    *world.get(*c as usize)?,
                ])
            })
            .collect()
    }

    pub fn world_bounds_of(&self, geometry: &Geometry) -> Option<Aabb> {
        Aabb::from_points(self.world_vertices_of(geometry))
    }

    pub fn world_bounds(&self) -> Option<Aabb> {
        self.world_bounds_of(&self.geometry)
    }
}

/// Discriminator of a collidable box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// Solid geometry that takes part in collision sweeps ("collision")
    Collision,
    /// Debug wireframes and other geometry the sweeps ignore
    Decorative,
}

impl BoxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BoxKind::Collision => "collision",
            BoxKind::Decorative => "decorative",
        }
    }
}

/// Collision registration of an entity
#[derive(Clone, Debug)]
pub struct Collidable {
    pub kind: BoxKind,
    /// Collision-only geometry (the player's composite); the mesh geometry otherwise
    pub geometry: Option<Arc<Geometry>>,
}

impl Collidable {
    pub fn solid() -> Self {
        Self { kind: BoxKind::Collision, geometry: None }
    }

    pub fn decorative() -> Self {
        Self { kind: BoxKind::Decorative, geometry: None }
    }

    pub fn with_geometry(geometry: Arc<Geometry>) -> Self {
        Self { kind: BoxKind::Collision, geometry: Some(geometry) }
    }

    /// Geometry used for sweeps given the owning mesh
    pub fn resolve<'a>(&'a self, mesh: &'a Mesh) -> &'a Geometry {
        self.geometry.as_deref().unwrap_or(&*mesh.geometry)
    }
}
