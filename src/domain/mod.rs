//! Domain types: entity handles, tunables, input actions, geometry.

pub mod config;
pub mod entity;
pub mod error;
pub mod input;
pub mod mesh;
