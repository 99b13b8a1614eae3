use crate::domain::config::PhysicsConfig;

use super::arena::ArenaBounds;
use super::clock::Clock;
use super::perf_stats::PerfStats;
use super::random::DEFAULT_SEED;
use super::WorldState;

pub(super) fn create_world_state(config: PhysicsConfig) -> WorldState {
    WorldState {
        config,
        entities: Vec::with_capacity(64),
        player: None,
        arena: ArenaBounds::default(),
        clock: Clock::new(),
        dt: 0.0,
        frame: 0,
        last_collisions: Vec::new(),
        rng_state: DEFAULT_SEED,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
