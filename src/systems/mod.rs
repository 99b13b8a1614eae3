//! Systems: pure per-tick computations over entity components.
//!
//! Nothing in here touches the world registry directly; `simulation`
//! reads components out, calls these, and writes results back.

pub mod collision;
pub mod forces;
pub mod geometry;
pub mod intent;
pub mod rigid_body;
