//! Core primitives shared by every system: math types and logging.

#[macro_use]
pub mod utils;
pub mod math;
