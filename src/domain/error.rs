use thiserror::Error;

use super::entity::EntityId;

/// Errors surfaced by the registry, geometry and config APIs.
///
/// Inside `tick` these never propagate: the offending entity is skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("entity {0} was never created")]
    UnknownEntity(EntityId),
    #[error("entity {0} has no physics state")]
    MissingPhysics(EntityId),
    #[error("entity {0} has no mesh")]
    MissingMesh(EntityId),
    #[error("entity {id} has non-positive mass {mass}")]
    NonPositiveMass { id: EntityId, mass: f32 },
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("invalid config: {0}")]
    Config(String),
}
