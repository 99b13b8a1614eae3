//! Arena Engine - rigid-body and collision core of the arena game, in WASM
//!
//! Architecture:
//! - core/          - Math primitives and logging macros
//! - domain/        - Config, errors, input actions, mesh geometry
//! - systems/       - Per-tick computations (geometry, collision, forces, intent)
//! - simulation/    - World state orchestration and the JS facade

// Logging macros must be declared first so every module sees them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("arena engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::PhysicsConfig;
pub use domain::entity::EntityId;
pub use domain::error::EngineError;
pub use domain::input::{Action, InputProvider, InputState};
pub use domain::mesh::{BoxKind, Collidable, Geometry, Mesh, Transform};
pub use simulation::{ArenaBounds, BoundingBox, Engine, PerfStats, WorldState};
pub use systems::collision::CollidableBox;
pub use systems::rigid_body::{MotionState, PhysicsState};

// Export input bits for JS
#[wasm_bindgen]
pub fn action_forward() -> u8 { domain::input::ACTION_FORWARD }
#[wasm_bindgen]
pub fn action_backward() -> u8 { domain::input::ACTION_BACKWARD }
#[wasm_bindgen]
pub fn action_turn_left() -> u8 { domain::input::ACTION_TURN_LEFT }
#[wasm_bindgen]
pub fn action_turn_right() -> u8 { domain::input::ACTION_TURN_RIGHT }
#[wasm_bindgen]
pub fn action_jump() -> u8 { domain::input::ACTION_JUMP }
#[wasm_bindgen]
pub fn action_slide() -> u8 { domain::input::ACTION_SLIDE }
