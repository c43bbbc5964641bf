use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use jurassic_jump::{
    constants::hazard,
    systems::{scroll_system, EntityType},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_hazards_scroll_left_at_their_own_speed() {
    let mut world = common::create_playing_world();
    common::spawn_obstacle(&mut world, EntityType::Cactus, 1000.0, 0);
    common::spawn_obstacle(&mut world, EntityType::Pterodactyl, 1000.0, 1);
    common::spawn_power_up(&mut world, 1000.0, 2);

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(
        common::hazards(&mut world),
        vec![
            (EntityType::Cactus, Vec2::new(1000.0 - hazard::CACTUS_SPEED, hazard::CACTUS_HEIGHT)),
            (EntityType::Pterodactyl, Vec2::new(1000.0 - hazard::PTERODACTYL_SPEED, hazard::PTERODACTYL_HEIGHT)),
            (EntityType::PowerUp, Vec2::new(1000.0 - hazard::POWER_UP_SPEED, hazard::POWER_UP_HEIGHT)),
        ]
    );
}

#[test]
fn test_cull_keeps_entity_exactly_at_negative_width() {
    let mut world = common::create_playing_world();
    // Lands on exactly -85 after one step
    common::spawn_obstacle(&mut world, EntityType::Cactus, -78.0, 0);

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(
        common::hazards(&mut world),
        vec![(EntityType::Cactus, Vec2::new(-hazard::CACTUS_SIZE.x, hazard::CACTUS_HEIGHT))]
    );
}

#[test]
fn test_cull_removes_entity_past_negative_width() {
    let mut world = common::create_playing_world();
    common::spawn_obstacle(&mut world, EntityType::Cactus, -78.5, 0);
    common::spawn_obstacle(&mut world, EntityType::Pterodactyl, -92.0, 1);
    common::spawn_power_up(&mut world, -15.0, 2);

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_that(&common::hazards(&mut world)).is_empty();
}

#[test]
fn test_off_screen_boundary_per_kind() {
    assert_that(&EntityType::Cactus.is_off_screen(-85.0)).is_false();
    assert_that(&EntityType::Cactus.is_off_screen(-85.01)).is_true();
    assert_that(&EntityType::Pterodactyl.is_off_screen(-100.0)).is_false();
    assert_that(&EntityType::Pterodactyl.is_off_screen(-100.5)).is_true();
    assert_that(&EntityType::PowerUp.is_off_screen(-20.0)).is_false();
    assert_that(&EntityType::PowerUp.is_off_screen(-20.5)).is_true();
}

#[test]
fn test_hazard_crosses_the_window_and_is_culled() {
    let mut world = common::create_playing_world();
    common::spawn_obstacle(&mut world, EntityType::Cactus, 1920.0, 0);

    let mut frames = 0;
    while !common::hazards(&mut world).is_empty() {
        world.run_system_once(scroll_system).expect("System should run successfully");
        frames += 1;
        assert_that(&frames).is_less_than(1000);
    }

    // (1920 + 85) / 7 = 286.4, so the step past -85 is the 287th
    assert_eq!(frames, 287);
}
