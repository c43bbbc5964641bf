use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use jurassic_jump::systems::{scoring_system, EntityType, Passed, ScoreResource};
use speculoos::prelude::*;

mod common;

#[test]
fn test_passing_an_obstacle_scores_once() {
    let mut world = common::create_playing_world();
    let cactus = common::spawn_obstacle(&mut world, EntityType::Cactus, 100.0, 0);

    world.run_system_once(scoring_system).expect("System should run successfully");
    world.run_system_once(scoring_system).expect("System should run successfully");

    assert_that(world.resource::<ScoreResource>()).is_equal_to(ScoreResource(1));
    assert_that(world.get::<Passed>(cactus).expect("Cactus should exist")).is_equal_to(Passed(true));
}

#[test]
fn test_obstacle_level_with_player_does_not_score() {
    let mut world = common::create_playing_world();
    common::spawn_obstacle(&mut world, EntityType::Cactus, 110.0, 0);

    world.run_system_once(scoring_system).expect("System should run successfully");

    assert_that(world.resource::<ScoreResource>()).is_equal_to(ScoreResource(0));
}

#[test]
fn test_pterodactyls_score_too() {
    let mut world = common::create_playing_world();
    common::spawn_obstacle(&mut world, EntityType::Pterodactyl, 50.0, 0);
    common::spawn_obstacle(&mut world, EntityType::Cactus, 20.0, 1);
    common::spawn_obstacle(&mut world, EntityType::Cactus, 900.0, 2);

    world.run_system_once(scoring_system).expect("System should run successfully");

    assert_that(world.resource::<ScoreResource>()).is_equal_to(ScoreResource(2));
}

#[test]
fn test_power_ups_never_score() {
    let mut world = common::create_playing_world();
    common::spawn_power_up(&mut world, 10.0, 0);

    world.run_system_once(scoring_system).expect("System should run successfully");

    assert_that(world.resource::<ScoreResource>()).is_equal_to(ScoreResource(0));
}

#[test]
fn test_score_is_monotone_as_obstacles_scroll_past() {
    let mut world = common::create_playing_world();
    for (order, x) in [300.0, 500.0, 700.0].into_iter().enumerate() {
        common::spawn_obstacle(&mut world, EntityType::Cactus, x, order as u64);
    }
    common::set_player_position(&mut world, Vec2::new(110.0, 600.0));

    let mut last = 0;
    for _ in 0..150 {
        world
            .run_system_once(jurassic_jump::systems::scroll_system)
            .expect("System should run successfully");
        world.run_system_once(scoring_system).expect("System should run successfully");

        let score = world.resource::<ScoreResource>().0;
        assert_that(&score).is_greater_than_or_equal_to(last);
        last = score;
    }

    assert_that(&last).is_equal_to(3);
}
