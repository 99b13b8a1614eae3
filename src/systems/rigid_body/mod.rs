//! Per-entity kinematic state
//!
//! `PhysicsState` carries the force-model quantities; `MotionState` carries
//! the locomotion flags and heading that the intent mapper and the ground
//! contact resolution read and write.

mod body;

pub use body::{MotionState, PhysicsState};
