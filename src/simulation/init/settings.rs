use crate::domain::config::PhysicsConfig;
use crate::domain::error::EngineError;

use super::perf_stats::PerfStats;
use super::WorldState;

pub(super) fn enable_perf_metrics(world: &mut WorldState, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldState) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_config(world: &mut WorldState, config: PhysicsConfig) -> Result<(), EngineError> {
    config.validate()?;
    world.config = config;
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldState, json: &str) -> Result<(), EngineError> {
    match PhysicsConfig::from_json(json) {
        Ok(config) => {
            world.config = config;
            engine_log!("config loaded");
            Ok(())
        }
        Err(e) => {
            engine_warn!("config rejected, keeping previous: {}", e);
            Err(e)
        }
    }
}

pub(super) fn report_load_failure(world: &WorldState, asset: &str, message: &str) {
    match world.player {
        Some(player) => engine_warn!("failed to load {}: {} (player {})", asset, message, player),
        None => engine_warn!("failed to load {}: {} (no player yet, player systems idle)", asset, message),
    }
}
