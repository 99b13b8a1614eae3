//! World state - the single simulation instance
//!
//! `WorldState` owns the entity registry, the tunables, the clock and the
//! perf counters. Each concern lives in its own file (pulled in with
//! `#[path]`); this file holds the struct and its public surface only.
//!
//! Per tick: clock -> intent -> broad sweep -> narrow sweep -> response ->
//! integration. See `step/step.rs`.

use crate::core::math::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::domain::input::InputProvider;
use crate::domain::mesh::{Collidable, Mesh};
use crate::systems::collision::CollidableBox;
use crate::systems::rigid_body::{MotionState, PhysicsState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/arena.rs"]
mod arena;
#[path = "registry/registry.rs"]
mod registry;
#[path = "step/clock.rs"]
mod clock;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use arena::{ArenaBounds, CUBE_MASS, PLAYER_MASS, SPHERE_MASS};
pub use clock::sanitize_dt;
pub use facade::{BoundingBox, Engine};
pub use perf_stats::PerfStats;

use clock::Clock;
use perf_timer::PerfTimer;
use registry::EntitySlot;

/// The simulation world
pub struct WorldState {
    config: PhysicsConfig,
    entities: Vec<EntitySlot>,
    player: Option<EntityId>,
    arena: ArenaBounds,

    // Clock
    clock: Clock,
    dt: f32,
    frame: u64,

    // Results of the last tick
    last_collisions: Vec<EntityId>,

    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    /// Empty world with default tunables
    pub fn new() -> Self {
        init::create_world_state(PhysicsConfig::default())
    }

    /// Empty world with the given tunables (validated)
    pub fn with_config(config: PhysicsConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_world_state(config))
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the tunables; the world keeps its entities
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), EngineError> {
        settings::set_config(self, config)
    }

    /// Parse, validate and apply a JSON config override
    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn arena(&self) -> ArenaBounds {
        self.arena
    }

    pub fn set_arena(&mut self, arena: ArenaBounds) {
        self.arena = arena;
    }

    /// Seconds used by the last tick, after sanitation
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (timings are zero when perf is disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === REGISTRY ===

    /// Allocate the next entity id with every component empty
    pub fn create_entity(&mut self) -> EntityId {
        registry::create_entity(self)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        id.index() < self.entities.len()
    }

    pub fn set_physics(&mut self, id: EntityId, physics: PhysicsState) -> Result<(), EngineError> {
        registry::set_physics(self, id, physics)
    }

    pub fn set_mesh(&mut self, id: EntityId, mesh: Mesh) -> Result<(), EngineError> {
        registry::set_mesh(self, id, mesh)
    }

    pub fn set_collidable(&mut self, id: EntityId, collidable: Collidable) -> Result<(), EngineError> {
        registry::set_collidable(self, id, collidable)
    }

    pub fn set_motion(&mut self, id: EntityId, motion: MotionState) -> Result<(), EngineError> {
        registry::set_motion(self, id, motion)
    }

    /// Move an entity's mesh; the entity must have one
    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> Result<(), EngineError> {
        registry::set_position(self, id, position)
    }

    /// Designate the entity driven by input and swept for collisions
    pub fn set_player(&mut self, id: EntityId) -> Result<(), EngineError> {
        registry::set_player(self, id)
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    pub fn position(&self, id: EntityId) -> Result<Vec3, EngineError> {
        registry::position(self, id)
    }

    pub fn physics(&self, id: EntityId) -> Result<&PhysicsState, EngineError> {
        registry::physics(self, id)
    }

    pub fn physics_mut(&mut self, id: EntityId) -> Result<&mut PhysicsState, EngineError> {
        registry::physics_mut(self, id)
    }

    pub fn motion(&self, id: EntityId) -> Result<MotionState, EngineError> {
        registry::motion(self, id)
    }

    pub fn mesh(&self, id: EntityId) -> Result<&Mesh, EngineError> {
        registry::mesh(self, id)
    }

    /// World-space box of the entity, computed at most once between moves
    pub fn get_bounding_box(&mut self, id: EntityId) -> Result<CollidableBox, EngineError> {
        registry::get_bounding_box(self, id)
    }

    /// Player grounded flag (false without a player)
    pub fn is_grounded(&self) -> bool {
        registry::player_motion(self).is_some_and(|m| m.grounded)
    }

    /// Player sliding flag (false without a player)
    pub fn is_sliding(&self) -> bool {
        registry::player_motion(self).is_some_and(|m| m.sliding)
    }

    /// Entities whose collision with the player was confirmed last tick
    pub fn last_collisions(&self) -> &[EntityId] {
        &self.last_collisions
    }

    /// Log an asset the host failed to load; the world keeps running
    pub fn report_load_failure(&self, asset: &str, message: &str) {
        settings::report_load_failure(self, asset, message);
    }

    // === ARENA ===

    /// Cube of side `size` resting on the ground at (x, z)
    pub fn spawn_cube(&mut self, size: f32, x: f32, z: f32, mass: f32) -> Result<EntityId, EngineError> {
        arena::spawn_cube(self, size, x, z, mass)
    }

    /// Sphere resting on the ground at (x, z)
    pub fn spawn_sphere(&mut self, radius: f32, x: f32, z: f32, mass: f32) -> Result<EntityId, EngineError> {
        arena::spawn_sphere(self, radius, x, z, mass)
    }

    /// Scatter unit cubes and spheres at reproducible positions inside the arena
    pub fn populate_arena(&mut self, seed: u32, cubes: u32, spheres: u32) -> Result<Vec<EntityId>, EngineError> {
        arena::populate_arena(self, seed, cubes, spheres)
    }

    // === STEP ===

    /// Advance the world by `dt` seconds with the given held actions
    pub fn tick<I: InputProvider + ?Sized>(&mut self, dt: f32, input: &I) {
        step::tick(self, dt, input);
    }

    /// Advance by the wall-clock time since the previous `tick_now`
    pub fn tick_now<I: InputProvider + ?Sized>(&mut self, input: &I) {
        let dt = self.clock.sample();
        step::tick(self, dt, input);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
