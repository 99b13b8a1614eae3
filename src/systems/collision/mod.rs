//! Collision detection and response
//!
//! - broad:    closed-interval AABB sweep of every collidable against the player
//! - narrow:   rays from the player's origin through its vertices, cast at a candidate
//! - response: symmetric elastic velocity exchange between two bodies

mod broad;
mod narrow;
mod response;
mod types;

pub use broad::{broad_overlap, broad_sweep};
pub use narrow::{narrow_sweep, NarrowOutcome, NarrowProbe};
pub use response::{handle_collision, is_approaching};
pub use types::{BroadHit, CollidableBox};
