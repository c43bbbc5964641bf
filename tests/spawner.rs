use bevy_ecs::{
    schedule::{IntoScheduleConfigs, Schedule},
    system::RunSystemOnce,
    world::World,
};
use jurassic_jump::{
    constants::{hazard, spawn, window},
    systems::{
        scroll_system, spawn_interval, spawner_system, DeltaTime, EntityType, GameClock, Invincibility, ScoreResource,
        SpawnMark, Spawner,
    },
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn set_clock(world: &mut World, seconds: f64) {
    world.insert_resource(GameClock { seconds });
}

fn count(world: &mut World, kind: EntityType) -> usize {
    common::hazards(world).iter().filter(|(k, _)| *k == kind).count()
}

#[test]
fn test_spawn_interval_shrinks_with_score() {
    assert_eq!(spawn_interval(spawn::CACTUS_BASE_INTERVAL, 0), 6.0);
    assert_eq!(spawn_interval(spawn::CACTUS_BASE_INTERVAL, 50), 3.0);
    assert_eq!(spawn_interval(spawn::PTERODACTYL_BASE_INTERVAL, 0), 8.0);
    assert_eq!(spawn_interval(spawn::PTERODACTYL_BASE_INTERVAL, 150), 2.0);
    // Fractional scores are not truncated
    assert_that(&spawn_interval(spawn::CACTUS_BASE_INTERVAL, 25)).is_equal_to(4.0);
}

#[test]
fn test_spawn_mark_guard() {
    let mark = SpawnMark { x: 2000.0, time: 10.0 };

    assert_that(&mark.is_clear_of(2150.0, 11.0)).is_true();
    assert_that(&mark.is_clear_of(1850.0, 11.0)).is_true();
    assert_that(&mark.is_clear_of(2149.0, 11.0)).is_false();
    assert_that(&mark.is_clear_of(2150.0, 10.5)).is_false();
}

#[test]
fn test_initial_marks_block_first_second() {
    assert_that(&SpawnMark::NONE.is_clear_of(window::WIDTH as f32, 0.5)).is_false();
    assert_that(&SpawnMark::NONE.is_clear_of(window::WIDTH as f32, 1.0)).is_true();
}

#[test]
fn test_cactus_spawns_when_timer_elapses() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    world.resource_mut::<Spawner>().cactus_timer = 6.0;

    world.run_system_once(spawner_system).expect("System should run successfully");

    let hazards = common::hazards(&mut world);
    assert_that(&hazards).has_length(1);
    let (kind, position) = hazards[0];
    assert_eq!(kind, EntityType::Cactus);
    assert_eq!(position.y, hazard::CACTUS_HEIGHT);
    assert_that(&position.x).is_greater_than_or_equal_to(window::WIDTH as f32);
    assert_that(&position.x).is_less_than(window::WIDTH as f32 + spawn::MAX_OFFSET as f32);

    let spawner = world.resource::<Spawner>();
    assert_eq!(spawner.cactus_timer, 0.0);
    assert_eq!(spawner.last_cactus, SpawnMark { x: position.x, time: 20.0 });
}

#[test]
fn test_cactus_waits_below_interval() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    world.resource_mut::<Spawner>().cactus_timer = 5.9;

    world.run_system_once(spawner_system).expect("System should run successfully");

    assert_that(&count(&mut world, EntityType::Cactus)).is_equal_to(0);
}

#[test]
fn test_higher_score_spawns_sooner() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    world.insert_resource(ScoreResource(50));
    world.resource_mut::<Spawner>().cactus_timer = 3.0;

    world.run_system_once(spawner_system).expect("System should run successfully");

    assert_that(&count(&mut world, EntityType::Cactus)).is_equal_to(1);
}

#[test]
fn test_failed_guard_keeps_accumulator() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    {
        let mut spawner = world.resource_mut::<Spawner>();
        spawner.cactus_timer = 6.0;
        spawner.last_power_up = SpawnMark { x: 2000.0, time: 19.8 };
    }

    world.run_system_once(spawner_system).expect("System should run successfully");

    assert_that(&count(&mut world, EntityType::Cactus)).is_equal_to(0);
    assert_that(&world.resource::<Spawner>().cactus_timer).is_greater_than_or_equal_to(6.0);
}

#[test]
fn test_power_up_spawns_and_clears_flag() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    {
        let mut spawner = world.resource_mut::<Spawner>();
        spawner.power_up_timer = spawn::POWER_UP_INTERVAL;
        spawner.reminder_timer = 1.0;
    }

    world.run_system_once(spawner_system).expect("System should run successfully");

    let hazards = common::hazards(&mut world);
    assert_that(&hazards).has_length(1);
    assert_eq!(hazards[0].0, EntityType::PowerUp);
    assert_eq!(hazards[0].1.y, hazard::POWER_UP_HEIGHT);

    let spawner = world.resource::<Spawner>();
    assert_that(&spawner.can_spawn_power_up).is_false();
    assert_eq!(spawner.reminder_timer, 0.0);
    assert_eq!(spawner.power_up_timer, 0.0);
}

#[test]
fn test_no_power_up_while_invincible() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    world.resource_mut::<Invincibility>().activate();
    world.resource_mut::<Spawner>().power_up_timer = 30.0;

    world.run_system_once(spawner_system).expect("System should run successfully");

    assert_that(&count(&mut world, EntityType::PowerUp)).is_equal_to(0);
}

#[test]
fn test_pterodactyl_ignores_guard() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 0.0);
    world.resource_mut::<Spawner>().pterodactyl_timer = 8.0;

    world.run_system_once(spawner_system).expect("System should run successfully");

    let hazards = common::hazards(&mut world);
    assert_that(&hazards).has_length(1);
    assert_eq!(hazards[0].0, EntityType::Pterodactyl);
    assert_eq!(hazards[0].1.y, hazard::PTERODACTYL_HEIGHT);
}

#[test]
fn test_spawn_guard_holds_over_long_run() {
    let mut world = common::create_playing_world();
    let mut schedule = Schedule::default();
    schedule.add_systems((scroll_system, spawner_system).chain());

    let mut cacti = 0;
    let mut power_ups = 0;
    for frame in 1..=60 * 600 {
        world.insert_resource(GameClock {
            seconds: frame as f64 * common::FRAME as f64,
        });
        let before = world.resource::<Spawner>().clone();

        schedule.run(&mut world);

        let after = world.resource::<Spawner>().clone();
        if after.last_cactus != before.last_cactus {
            cacti += 1;
            assert_that(&before.last_power_up.is_clear_of(after.last_cactus.x, after.last_cactus.time)).is_true();
        }
        if after.last_power_up != before.last_power_up {
            power_ups += 1;
            // Power-ups are checked after cacti within a frame, so compare against this frame's cactus mark
            assert_that(&after.last_cactus.is_clear_of(after.last_power_up.x, after.last_power_up.time)).is_true();
        }
    }

    assert_that(&cacti).is_greater_than(50);
    assert_that(&power_ups).is_greater_than(20);
}

#[test]
fn test_spawn_order_is_monotonic() {
    let mut world = common::create_playing_world();
    set_clock(&mut world, 20.0);
    {
        let mut spawner = world.resource_mut::<Spawner>();
        spawner.cactus_timer = 6.0;
        spawner.pterodactyl_timer = 8.0;
    }
    world.run_system_once(spawner_system).expect("System should run successfully");
    world.insert_resource(DeltaTime { seconds: 8.0, ticks: 1 });
    set_clock(&mut world, 30.0);
    world.run_system_once(spawner_system).expect("System should run successfully");

    let kinds: Vec<EntityType> = common::hazards(&mut world).into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityType::Cactus,
            EntityType::Pterodactyl,
            EntityType::Cactus,
            EntityType::Pterodactyl
        ]
    );
}
