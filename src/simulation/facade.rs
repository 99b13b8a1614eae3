use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::core::math::Vec3;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::domain::input::InputState;
use crate::domain::mesh::{BoxKind, Collidable, Geometry, Mesh};
use crate::systems::collision::CollidableBox;
use crate::systems::rigid_body::PhysicsState;

use super::perf_stats::PerfStats;
use super::WorldState;

fn js_err(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// World-space box handed to JS for debug wireframes
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    id: u32,
    decorative: bool,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    z_min: f32,
    z_max: f32,
}

impl From<CollidableBox> for BoundingBox {
    fn from(b: CollidableBox) -> Self {
        Self {
            id: b.id.0,
            decorative: b.kind == BoxKind::Decorative,
            x_min: b.x_min,
            x_max: b.x_max,
            y_min: b.y_min,
            y_max: b.y_max,
            z_min: b.z_min,
            z_max: b.z_max,
        }
    }
}

#[wasm_bindgen]
impl BoundingBox {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 { self.id }
    /// "collision" or "decorative"
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        let kind = if self.decorative { BoxKind::Decorative } else { BoxKind::Collision };
        kind.as_str().to_string()
    }
    #[wasm_bindgen(getter)]
    pub fn x_min(&self) -> f32 { self.x_min }
    #[wasm_bindgen(getter)]
    pub fn x_max(&self) -> f32 { self.x_max }
    #[wasm_bindgen(getter)]
    pub fn y_min(&self) -> f32 { self.y_min }
    #[wasm_bindgen(getter)]
    pub fn y_max(&self) -> f32 { self.y_max }
    #[wasm_bindgen(getter)]
    pub fn z_min(&self) -> f32 { self.z_min }
    #[wasm_bindgen(getter)]
    pub fn z_max(&self) -> f32 { self.z_max }
}

#[wasm_bindgen]
pub struct Engine {
    core: WorldState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Native access to the wrapped world
    pub fn world(&self) -> &WorldState {
        &self.core
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.core
    }
}

#[wasm_bindgen]
impl Engine {
    /// Create an empty world with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldState::new() }
    }

    /// Apply a JSON config override; the previous config stays on error
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(js_err)
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.core.entity_count() as u32 }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (timings are zero when perf is disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === ENTITIES ===

    pub fn create_entity(&mut self) -> u32 {
        self.core.create_entity().0
    }

    pub fn set_physics(&mut self, id: u32, mass: f32) -> Result<(), JsValue> {
        self.core.set_physics(EntityId(id), PhysicsState::new(mass)).map_err(js_err)
    }

    pub fn set_mesh_cuboid(
        &mut self,
        id: u32,
        width: f32,
        height: f32,
        depth: f32,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<(), JsValue> {
        let geometry = Geometry::cuboid(width, height, depth);
        self.set_mesh(id, geometry, Vec3::new(x, y, z))
    }

    pub fn set_mesh_sphere(&mut self, id: u32, radius: f32, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        let geometry = Geometry::sphere(radius, 12, 12);
        self.set_mesh(id, geometry, Vec3::new(x, y, z))
    }

    /// Mesh from a loaded model: flat xyz positions plus triangle indices
    pub fn set_mesh_from_buffers(
        &mut self,
        id: u32,
        positions: &[f32],
        indices: &[u32],
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<(), JsValue> {
        let geometry = Geometry::from_buffers(positions, indices).map_err(js_err)?;
        self.set_mesh(id, geometry, Vec3::new(x, y, z))
    }

    /// Register for collision; `decorative` boxes are never swept
    pub fn set_collidable(&mut self, id: u32, decorative: bool) -> Result<(), JsValue> {
        let collidable = if decorative { Collidable::decorative() } else { Collidable::solid() };
        self.core.set_collidable(EntityId(id), collidable).map_err(js_err)
    }

    pub fn set_player(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.set_player(EntityId(id)).map_err(js_err)
    }

    pub fn set_position(&mut self, id: u32, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.core.set_position(EntityId(id), Vec3::new(x, y, z)).map_err(js_err)
    }

    pub fn report_load_failure(&self, asset: String, message: String) {
        self.core.report_load_failure(&asset, &message);
    }

    // === ARENA ===

    pub fn spawn_cube(&mut self, size: f32, x: f32, z: f32, mass: f32) -> Result<u32, JsValue> {
        self.core.spawn_cube(size, x, z, mass).map(|id| id.0).map_err(js_err)
    }

    pub fn spawn_sphere(&mut self, radius: f32, x: f32, z: f32, mass: f32) -> Result<u32, JsValue> {
        self.core.spawn_sphere(radius, x, z, mass).map(|id| id.0).map_err(js_err)
    }

    /// Returns the ids of the spawned props, cubes first
    pub fn populate_arena(&mut self, seed: u32, cubes: u32, spheres: u32) -> Result<Vec<u32>, JsValue> {
        let ids = self.core.populate_arena(seed, cubes, spheres).map_err(js_err)?;
        Ok(ids.into_iter().map(|id| id.0).collect())
    }

    // === STEP ===

    /// Advance by `dt` seconds; `input_mask` is a set of ACTION_* bits
    pub fn tick(&mut self, dt: f32, input_mask: u8) {
        self.core.tick(dt, &InputState::from_bits(input_mask));
    }

    /// Advance by the wall-clock time since the previous call
    pub fn tick_now(&mut self, input_mask: u8) {
        self.core.tick_now(&InputState::from_bits(input_mask));
    }

    // === READBACK ===

    pub fn position_x(&self, id: u32) -> Option<f32> {
        self.core.position(EntityId(id)).ok().map(|p| p.x)
    }

    pub fn position_y(&self, id: u32) -> Option<f32> {
        self.core.position(EntityId(id)).ok().map(|p| p.y)
    }

    pub fn position_z(&self, id: u32) -> Option<f32> {
        self.core.position(EntityId(id)).ok().map(|p| p.z)
    }

    pub fn yaw(&self, id: u32) -> Option<f32> {
        self.core.motion(EntityId(id)).ok().map(|m| m.yaw)
    }

    pub fn roll(&self, id: u32) -> Option<f32> {
        self.core.motion(EntityId(id)).ok().map(|m| m.roll)
    }

    pub fn get_bounding_box(&mut self, id: u32) -> Result<BoundingBox, JsValue> {
        self.core.get_bounding_box(EntityId(id)).map(BoundingBox::from).map_err(js_err)
    }

    pub fn is_grounded(&self) -> bool {
        self.core.is_grounded()
    }

    pub fn is_sliding(&self) -> bool {
        self.core.is_sliding()
    }

    /// Props confirmed colliding with the player in the last tick
    pub fn collision_count(&self) -> u32 {
        self.core.last_collisions().len() as u32
    }
}

impl Engine {
    fn set_mesh(&mut self, id: u32, geometry: Geometry, position: Vec3) -> Result<(), JsValue> {
        let mesh = Mesh::new(Arc::new(geometry), position);
        self.core.set_mesh(EntityId(id), mesh).map_err(js_err)
    }
}
