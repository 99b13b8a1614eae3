use std::collections::HashSet;
use std::sync::Arc;

use super::*;
use crate::domain::input::{Action, InputState};
use crate::domain::mesh::{BoxKind, Geometry};

const DT: f32 = 1.0 / 60.0;

fn cube_entity(world: &mut WorldState, size: f32, position: Vec3, mass: f32) -> EntityId {
    let id = world.create_entity();
    world
        .set_mesh(id, Mesh::new(Arc::new(Geometry::cuboid(size, size, size)), position))
        .unwrap();
    world.set_physics(id, PhysicsState::new(mass)).unwrap();
    world.set_collidable(id, Collidable::solid()).unwrap();
    id
}

fn grounded_player(world: &mut WorldState) -> EntityId {
    let player = cube_entity(world, 2.0, Vec3::new(0.0, 1.0, 0.0), PLAYER_MASS);
    world.set_motion(player, MotionState::grounded()).unwrap();
    world.set_player(player).unwrap();
    player
}

#[test]
fn free_fall_settles_at_half_height() {
    let config = PhysicsConfig { restitution: -0.4, ..PhysicsConfig::default() };
    let mut world = WorldState::with_config(config).unwrap();
    let body = cube_entity(&mut world, 2.0, Vec3::new(0.0, 10.0, 0.0), 40.0);
    world.set_player(body).unwrap();

    let mut ticks = 0;
    while !world.is_grounded() {
        world.tick(DT, &InputState::NONE);
        let p = world.position(body).unwrap();
        assert!(p.is_finite(), "NaN at tick {}", ticks);
        ticks += 1;
        assert!(ticks < 2000, "never settled");
    }

    assert_eq!(world.position(body).unwrap().y, 1.0);
    let physics = world.physics(body).unwrap();
    assert_eq!((physics.a.y, physics.f.y, physics.d.y), (0.0, 0.0, 0.0));
}

#[test]
fn grounded_entity_stays_grounded_without_jump() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);

    for _ in 0..120 {
        world.tick(DT, &InputState::NONE);
        assert!(world.is_grounded());
        let physics = world.physics(player).unwrap();
        assert_eq!((physics.a.y, physics.f.y, physics.d.y), (0.0, 0.0, 0.0));
    }
    assert_eq!(world.position(player).unwrap().y, 1.0);
}

#[test]
fn jump_leaves_the_ground_and_comes_back() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);

    world.tick(DT, &InputState::NONE.with(Action::Jump));
    assert!(!world.is_grounded());
    assert!(world.physics(player).unwrap().v.y > 0.0);

    for _ in 0..600 {
        world.tick(DT, &InputState::NONE);
        if world.is_grounded() {
            break;
        }
    }
    assert!(world.is_grounded());
    assert_eq!(world.position(player).unwrap().y, 1.0);
}

#[test]
fn forward_moves_player_along_heading() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);
    let held: HashSet<Action> = [Action::Forward].into_iter().collect();

    for _ in 0..30 {
        world.tick(DT, &held);
    }

    let p = world.position(player).unwrap();
    assert!(p.z > 0.0);
    assert_eq!(p.x, 0.0);
    assert!(world.physics(player).unwrap().v.z > 0.0);
}

#[test]
fn forward_push_lasts_one_tick() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);
    let forward_accel = world.config().forward_accel;

    world.tick(DT, &InputState::NONE.with(Action::Forward));
    let a = world.physics(player).unwrap().a;
    assert_eq!(a.z, forward_accel);
    assert_eq!(a.x, 0.0);

    // held for many ticks it does not build up
    for _ in 0..30 {
        world.tick(DT, &InputState::NONE.with(Action::Forward));
    }
    assert_eq!(world.physics(player).unwrap().a.z, forward_accel);

    world.tick(DT, &InputState::NONE);
    let a = world.physics(player).unwrap().a;
    assert_eq!((a.x, a.z), (0.0, 0.0));
}

#[test]
fn released_input_does_not_accelerate_in_the_air() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);

    for _ in 0..30 {
        world.tick(DT, &InputState::NONE.with(Action::Forward));
    }
    world.tick(DT, &InputState::NONE.with(Action::Jump));
    assert!(!world.is_grounded());

    let mut previous = world.physics(player).unwrap().v.z;
    assert!(previous > 0.0);
    let mut airborne_ticks = 0;
    while !world.is_grounded() {
        world.tick(DT, &InputState::NONE);
        let physics = world.physics(player).unwrap();
        assert_eq!(physics.a.z, 0.0);
        assert!(physics.v.z <= previous, "v.z grew from {} to {}", previous, physics.v.z);
        previous = physics.v.z;
        airborne_ticks += 1;
        assert!(airborne_ticks < 2000, "never landed");
    }
    assert!(airborne_ticks > 1);
}

#[test]
fn turning_rotates_the_player_mesh() {
    let mut world = WorldState::new();
    let player = grounded_player(&mut world);

    world.tick(DT, &InputState::NONE.with(Action::TurnLeft));
    let motion = world.motion(player).unwrap();
    assert_eq!(motion.yaw, world.config().rotation_speed);
    assert!(motion.roll > 0.0);
    assert_eq!(world.mesh(player).unwrap().transform.rotation, motion.rotation());

    world.tick(DT, &InputState::NONE);
    assert_eq!(world.motion(player).unwrap().roll, 0.0);
}

#[test]
fn identical_runs_are_bit_identical() {
    fn run() -> Vec<Vec3> {
        let mut world = WorldState::new();
        let player = grounded_player(&mut world);
        let props = world.populate_arena(42, 10, 10).unwrap();
        let inputs = [
            InputState::NONE.with(Action::Forward),
            InputState::NONE.with(Action::Forward).with(Action::TurnLeft),
            InputState::NONE.with(Action::Jump),
            InputState::NONE.with(Action::Slide),
            InputState::NONE,
        ];
        for i in 0..300 {
            let dt = if i % 7 == 0 { 0.0 } else { DT * (1.0 + (i % 3) as f32 * 0.1) };
            world.tick(dt, &inputs[i % inputs.len()]);
        }
        std::iter::once(player)
            .chain(props)
            .map(|id| world.position(id).unwrap())
            .collect()
    }

    let a = run();
    let b = run();
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.to_array().map(f32::to_bits), pb.to_array().map(f32::to_bits));
    }
}

#[test]
fn player_hits_prop_and_velocities_exchange() {
    let mut world = WorldState::new();
    let player = cube_entity(&mut world, 2.0, Vec3::new(0.0, 1.0, 0.0), 10.0);
    world.set_motion(player, MotionState::grounded()).unwrap();
    world.set_player(player).unwrap();
    let prop = cube_entity(&mut world, 2.0, Vec3::new(0.0, 1.0, 1.5), 10.0);
    world.set_motion(prop, MotionState::grounded()).unwrap();

    world.physics_mut(player).unwrap().v.z = 3.0;
    world.physics_mut(prop).unwrap().v.z = -3.0;

    world.tick(0.0, &InputState::NONE);

    assert_eq!(world.last_collisions(), &[prop]);
    assert_eq!(world.physics(player).unwrap().v.z, -3.0);
    assert_eq!(world.physics(prop).unwrap().v.z, 3.0);

    // now separating: no second exchange
    world.tick(0.0, &InputState::NONE);
    assert_eq!(world.last_collisions(), &[prop]);
    assert_eq!(world.physics(player).unwrap().v.z, -3.0);
}

#[test]
fn decorative_boxes_are_never_candidates() {
    let mut world = WorldState::new();
    grounded_player(&mut world);
    let wireframe = cube_entity(&mut world, 2.0, Vec3::new(0.0, 1.0, 0.5), 5.0);
    world.set_collidable(wireframe, Collidable::decorative()).unwrap();

    world.tick(DT, &InputState::NONE);

    assert!(world.last_collisions().is_empty());
    assert_eq!(world.get_perf_stats().candidates(), 0);
    assert_eq!(world.get_bounding_box(wireframe).unwrap().kind, BoxKind::Decorative);
}

#[test]
fn touching_boxes_are_candidates() {
    let mut world = WorldState::new();
    grounded_player(&mut world);
    let neighbour = cube_entity(&mut world, 2.0, Vec3::new(2.0, 1.0, 0.0), 5.0);
    world.set_motion(neighbour, MotionState::grounded()).unwrap();

    world.tick(0.0, &InputState::NONE);

    assert_eq!(world.get_perf_stats().candidates(), 1);
}

#[test]
fn missing_player_only_skips_player_systems() {
    let mut world = WorldState::new();
    let prop = cube_entity(&mut world, 1.0, Vec3::new(0.0, 5.0, 0.0), 5.0);

    world.tick(DT, &InputState::NONE.with(Action::Jump));
    world.tick(DT, &InputState::NONE.with(Action::Jump));

    assert!(!world.is_grounded());
    assert!(world.last_collisions().is_empty());
    assert!(world.position(prop).unwrap().y < 5.0);
}

#[test]
fn malformed_entities_are_skipped_not_fatal() {
    let mut world = WorldState::new();
    let healthy = cube_entity(&mut world, 1.0, Vec3::new(0.0, 5.0, 0.0), 5.0);
    let no_mesh = world.create_entity();
    world.set_physics(no_mesh, PhysicsState::new(3.0)).unwrap();
    let zero_mass = cube_entity(&mut world, 1.0, Vec3::new(4.0, 5.0, 0.0), 5.0);
    world.physics_mut(zero_mass).unwrap().mass = 0.0;
    world.enable_perf_metrics(true);

    world.tick(DT, &InputState::NONE);
    world.tick(DT, &InputState::NONE);

    let stats = world.get_perf_stats();
    assert_eq!(stats.entities_integrated(), 1);
    assert_eq!(stats.entities_skipped(), 2);
    assert!(world.position(healthy).unwrap().y < 5.0);
    assert_eq!(world.position(zero_mass).unwrap().y, 5.0);
    assert!(world.entities[zero_mass.index()].skip_logged);
}

#[test]
fn setters_reject_unknown_ids_and_bad_mass() {
    let mut world = WorldState::new();
    let ghost = EntityId(3);
    assert_eq!(world.set_player(ghost), Err(EngineError::UnknownEntity(ghost)));
    assert_eq!(
        world.set_physics(ghost, PhysicsState::new(1.0)),
        Err(EngineError::UnknownEntity(ghost))
    );

    let id = world.create_entity();
    assert_eq!(
        world.set_physics(id, PhysicsState::new(-2.0)),
        Err(EngineError::NonPositiveMass { id, mass: -2.0 })
    );
    assert_eq!(world.set_position(id, Vec3::ONE), Err(EngineError::MissingMesh(id)));
    assert_eq!(world.get_bounding_box(id), Err(EngineError::MissingMesh(id)));
}

#[test]
fn bounding_box_follows_position_changes() {
    let mut world = WorldState::new();
    let id = cube_entity(&mut world, 2.0, Vec3::new(0.0, 1.0, 0.0), 5.0);

    let before = world.get_bounding_box(id).unwrap();
    assert_eq!((before.x_min, before.x_max), (-1.0, 1.0));

    world.set_position(id, Vec3::new(10.0, 1.0, 0.0)).unwrap();
    let after = world.get_bounding_box(id).unwrap();
    assert_eq!((after.x_min, after.x_max), (9.0, 11.0));
}

#[test]
fn large_dt_is_clamped() {
    let mut world = WorldState::new();
    cube_entity(&mut world, 1.0, Vec3::new(0.0, 50.0, 0.0), 5.0);

    world.tick(120.0, &InputState::NONE);
    assert_eq!(world.dt(), world.config().max_dt);

    world.tick(f32::NAN, &InputState::NONE);
    assert_eq!(world.dt(), 0.0);
    assert_eq!(world.frame(), 2);
}

#[test]
fn perf_timings_only_when_enabled() {
    let mut world = WorldState::new();
    grounded_player(&mut world);

    world.tick(DT, &InputState::NONE);
    let stats = world.get_perf_stats();
    assert_eq!(stats.step_ms(), 0.0);
    assert_eq!(stats.entities_integrated(), 1);

    world.enable_perf_metrics(true);
    world.tick(DT, &InputState::NONE);
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.dt(), DT);
}

#[test]
fn config_reload_keeps_entities() {
    let mut world = WorldState::new();
    grounded_player(&mut world);

    world.load_config_json(r#"{"jump_force": 800}"#).unwrap();
    assert_eq!(world.config().jump_force, 800.0);
    assert_eq!(world.entity_count(), 1);

    assert!(world.load_config_json(r#"{"terminal_speed": -1}"#).is_err());
    assert_eq!(world.config().jump_force, 800.0);
}
