#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::entity::EntityId;
use crate::domain::error::EngineError;
use crate::domain::input::InputProvider;
use crate::systems::collision::{
    broad_sweep, handle_collision, is_approaching, narrow_sweep, CollidableBox, NarrowOutcome,
    NarrowProbe,
};
use crate::systems::forces::{step_body, BodyShape};
use crate::systems::geometry::reference_area;
use crate::systems::intent::apply_intent;
use crate::systems::rigid_body::PhysicsState;

use super::clock::sanitize_dt;
use super::registry::{refresh_boxes, EntitySlot};
use super::{PerfTimer, WorldState};

/// Run `f`, storing its duration into `slot` when perf is on
#[inline]
fn timed<T>(perf_on: bool, slot: &mut f64, f: impl FnOnce() -> T) -> T {
    if perf_on {
        let t0 = PerfTimer::start();
        let out = f();
        *slot = t0.elapsed_ms();
        out
    } else {
        f()
    }
}

pub(super) fn tick<I: InputProvider + ?Sized>(world: &mut WorldState, dt: f32, input: &I) {
    let perf_on = world.perf_enabled;
    world.perf_stats.reset();
    let step_start = perf_on.then(PerfTimer::start);

    let dt = sanitize_dt(dt, world.config.max_dt);
    world.dt = dt;
    world.frame += 1;
    world.last_collisions.clear();

    refresh_boxes(world);
    for physics in world.entities.iter_mut().filter_map(|slot| slot.physics.as_mut()) {
        physics.clear_input();
    }

    // === INTENT ===
    let mut input_ms = 0.0;
    timed(perf_on, &mut input_ms, || apply_player_intent(world, input));

    // === BROAD PHASE ===
    let mut broad_ms = 0.0;
    let candidates = timed(perf_on, &mut broad_ms, || broad_candidates(world));

    // === NARROW PHASE ===
    let mut narrow_ms = 0.0;
    let confirmed = timed(perf_on, &mut narrow_ms, || confirm_candidates(world, &candidates));

    // === RESPONSE ===
    let mut response_ms = 0.0;
    timed(perf_on, &mut response_ms, || respond_to_collisions(world, &confirmed.hits));

    // === INTEGRATION ===
    let mut integrate_ms = 0.0;
    let (integrated, skipped) = timed(perf_on, &mut integrate_ms, || integrate_all(world));

    let stats = &mut world.perf_stats;
    stats.dt = dt;
    stats.candidates = candidates.len() as u32;
    stats.collisions = confirmed.hits.len() as u32;
    stats.rays_cast = confirmed.rays;
    stats.entities_integrated = integrated;
    stats.entities_skipped = skipped;
    if let Some(t0) = step_start {
        stats.input_ms = input_ms;
        stats.broad_ms = broad_ms;
        stats.narrow_ms = narrow_ms;
        stats.response_ms = response_ms;
        stats.integrate_ms = integrate_ms;
        stats.step_ms = t0.elapsed_ms();
    }
    world.last_collisions = confirmed.hits;
}

fn apply_player_intent<I: InputProvider + ?Sized>(world: &mut WorldState, input: &I) {
    let config = &world.config;
    let Some(id) = world.player else {
        return;
    };
    let Some(slot) = world.entities.get_mut(id.index()) else {
        return;
    };
    // No physics yet (model still loading): nothing to steer
    let Some(physics) = slot.physics.as_mut() else {
        return;
    };

    apply_intent(input, physics, &mut slot.motion, config);

    // Heading and lean show up in next tick's box
    if let Some(mesh) = slot.mesh.as_mut() {
        mesh.transform.rotation = slot.motion.rotation();
    }
}

/// Broad sweep of every collidable box against the player's box
fn broad_candidates(world: &WorldState) -> Vec<CollidableBox> {
    let Some(player) = world.player else {
        return Vec::new();
    };
    let Some(player_box) = world.entities.get(player.index()).and_then(|s| s.bbox) else {
        return Vec::new();
    };

    let boxes: Vec<CollidableBox> = world
        .entities
        .iter()
        .filter(|slot| slot.collidable.is_some())
        .filter_map(|slot| slot.bbox)
        .collect();

    broad_sweep(&boxes, &player_box)
        .into_iter()
        .map(|hit| boxes[hit.index])
        .collect()
}

#[derive(Default)]
struct NarrowPass {
    hits: Vec<EntityId>,
    rays: u32,
}

fn confirm_candidates(world: &WorldState, candidates: &[CollidableBox]) -> NarrowPass {
    if candidates.is_empty() {
        return NarrowPass::default();
    }
    let Some(player) = world.player else {
        return NarrowPass::default();
    };
    let Some(slot) = world.entities.get(player.index()) else {
        return NarrowPass::default();
    };
    let Some(mesh) = slot.mesh.as_ref() else {
        return NarrowPass::default();
    };
    let geometry = match &slot.collidable {
        Some(c) => c.resolve(mesh),
        None => &*mesh.geometry,
    };
    let probe = NarrowProbe::from_mesh(mesh, geometry);

    let sweep = |candidate: &CollidableBox| -> NarrowOutcome {
        let Some(target) = world.entities.get(candidate.id.index()) else {
            return NarrowOutcome::default();
        };
        let (Some(mesh), Some(collidable)) = (target.mesh.as_ref(), target.collidable.as_ref()) else {
            return NarrowOutcome::default();
        };
        let triangles = mesh.world_triangles_of(collidable.resolve(mesh));
        narrow_sweep(&probe, &triangles)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<NarrowOutcome> = candidates.par_iter().map(sweep).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<NarrowOutcome> = candidates.iter().map(sweep).collect();

    let mut pass = NarrowPass::default();
    for (candidate, outcome) in candidates.iter().zip(outcomes) {
        pass.rays += outcome.rays;
        if outcome.hit {
            pass.hits.push(candidate.id);
        }
    }
    pass
}

/// Elastic exchange between the player and each confirmed prop.
///
/// Both velocities are copied out before either is written back, and
/// pairs that are already separating are left alone.
fn respond_to_collisions(world: &mut WorldState, hits: &[EntityId]) {
    let Some(player) = world.player else {
        return;
    };

    for &other in hits {
        let (Some(a), Some(b)) = (body_snapshot(world, player), body_snapshot(world, other)) else {
            continue;
        };
        let (pos_a, mut phys_a) = a;
        let (pos_b, mut phys_b) = b;
        if !is_approaching(pos_a, phys_a.v, pos_b, phys_b.v) {
            continue;
        }

        handle_collision(&mut phys_a, &mut phys_b);

        if let Some(p) = world.entities[player.index()].physics.as_mut() {
            *p = phys_a;
        }
        if let Some(p) = world.entities[other.index()].physics.as_mut() {
            *p = phys_b;
        }
    }
}

fn body_snapshot(world: &WorldState, id: EntityId) -> Option<(Vec3, PhysicsState)> {
    let slot = world.entities.get(id.index())?;
    Some((slot.mesh.as_ref()?.position(), slot.physics?))
}

fn integrate_slot(id: EntityId, slot: &mut EntitySlot, dt: f32, config: &PhysicsConfig) -> Result<(), EngineError> {
    let bbox = slot.bbox;
    let physics = slot.physics.as_mut().ok_or(EngineError::MissingPhysics(id))?;
    let mesh = slot.mesh.as_mut().ok_or(EngineError::MissingMesh(id))?;
    let bbox = bbox.ok_or_else(|| EngineError::InvalidGeometry(format!("entity {} has no vertices", id)))?;

    let shape = BodyShape {
        half_height: mesh.transform.translation.y - bbox.y_min,
        area: reference_area(bbox.to_aabb().size(), config.area_scale),
    };
    step_body(id, physics, &mut slot.motion, &mut mesh.transform.translation, shape, dt, config)?;
    slot.invalidate_box();
    Ok(())
}

/// Integrate every entity; returns (integrated, skipped)
fn integrate_all(world: &mut WorldState) -> (u32, u32) {
    let config = &world.config;
    let dt = world.dt;
    let mut integrated = 0u32;
    let mut skipped = 0u32;

    for (index, slot) in world.entities.iter_mut().enumerate() {
        let id = EntityId(index as u32);
        match integrate_slot(id, slot, dt, config) {
            Ok(()) => {
                integrated += 1;
                slot.skip_logged = false;
            }
            Err(e) => {
                skipped += 1;
                if !slot.skip_logged {
                    engine_warn!("skipping entity {}: {}", id, e);
                    slot.skip_logged = true;
                }
            }
        }
    }

    (integrated, skipped)
}
