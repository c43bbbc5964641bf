#![allow(dead_code)]

use bevy_ecs::{
    entity::Entity,
    event::Events,
    query::With,
    world::World,
};
use glam::Vec2;
use sdl2::{
    render::{Canvas, TextureCreator},
    video::{Window, WindowContext},
    Sdl,
};
use jurassic_jump::{
    events::GameEvent,
    game::Game,
    systems::{
        AnimationClock, AudioEvent, DeltaTime, EntityType, GameStage, Invincibility, Jump, MouseButtons, MouseInput,
        ObstacleBundle, Passed, Pickup, PlayerControlled, Position, PowerUpBundle, ScoreResource, SpawnOrder, SpawnRng,
        Spawner,
    },
};

/// A hidden window and its canvas, for tests that need real textures.
pub fn setup_sdl() -> Result<(Canvas<Window>, TextureCreator<WindowContext>, Sdl), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("test", 800, 600)
        .position_centered()
        .hidden()
        .build()
        .map_err(|e| e.to_string())?;
    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    Ok((canvas, texture_creator, sdl_context))
}

pub const FRAME: f32 = 1.0 / 60.0;
pub const SEED: u64 = 0x7e5;

/// A world with every SDL-independent resource, the player on the ground and the title screen showing.
pub fn create_test_world() -> World {
    let mut world = World::new();
    Game::setup_world(&mut world, SpawnRng::seeded(SEED), false);
    world.insert_resource(DeltaTime { seconds: FRAME, ticks: 1 });
    world
}

/// Like [`create_test_world`], but already in [`GameStage::Playing`].
pub fn create_playing_world() -> World {
    let mut world = create_test_world();
    world.insert_resource(GameStage::Playing);
    world
}

pub fn player_entity(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<PlayerControlled>>()
        .single(world)
        .expect("Player should exist")
}

pub fn player_state(world: &mut World) -> (Position, Jump) {
    let mut query = world.query_filtered::<(&Position, &Jump), With<PlayerControlled>>();
    let (position, jump) = query.single(world).expect("Player should exist");
    (*position, *jump)
}

pub fn set_player_position(world: &mut World, position: Vec2) {
    let player = player_entity(world);
    world.entity_mut(player).insert(Position(position));
}

pub fn spawn_obstacle(world: &mut World, entity_type: EntityType, x: f32, order: u64) -> Entity {
    spawn_obstacle_at(world, entity_type, Vec2::new(x, entity_type.spawn_height()), order)
}

pub fn spawn_obstacle_at(world: &mut World, entity_type: EntityType, position: Vec2, order: u64) -> Entity {
    world
        .spawn(ObstacleBundle {
            entity_type,
            position: Position(position),
            order: SpawnOrder(order),
            passed: Passed(false),
        })
        .id()
}

pub fn spawn_power_up(world: &mut World, x: f32, order: u64) -> Entity {
    world
        .spawn(PowerUpBundle {
            entity_type: EntityType::PowerUp,
            position: Position(Vec2::new(x, EntityType::PowerUp.spawn_height())),
            order: SpawnOrder(order),
            pickup: Pickup { active: true },
        })
        .id()
}

pub fn hazards(world: &mut World) -> Vec<(EntityType, Vec2)> {
    let mut query = world.query::<(&EntityType, &Position, &SpawnOrder)>();
    let mut found: Vec<_> = query.iter(world).map(|(kind, position, order)| (*order, *kind, position.0)).collect();
    found.sort_by_key(|(order, _, _)| *order);
    found.into_iter().map(|(_, kind, position)| (kind, position)).collect()
}

pub fn press(world: &mut World, buttons: MouseButtons, position: Vec2) {
    world.insert_resource(MouseInput { buttons, position });
}

pub fn release(world: &mut World) {
    let mut mouse = world.resource_mut::<MouseInput>();
    mouse.buttons = MouseButtons::empty();
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.resource_mut::<Events<GameEvent>>().send(event);
}

pub fn audio_events(world: &World) -> Vec<AudioEvent> {
    world
        .resource::<Events<AudioEvent>>()
        .iter_current_update_events()
        .copied()
        .collect()
}

/// Everything that makes up a session, for comparing a restarted run against a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub stage: GameStage,
    pub score: ScoreResource,
    pub invincibility: Invincibility,
    pub spawner: Spawner,
    pub animation: AnimationClock,
    pub player: (Position, Jump),
    pub hazards: Vec<(EntityType, Vec2)>,
}

impl SessionSnapshot {
    pub fn capture(world: &mut World) -> Self {
        Self {
            stage: *world.resource::<GameStage>(),
            score: *world.resource::<ScoreResource>(),
            invincibility: *world.resource::<Invincibility>(),
            spawner: world.resource::<Spawner>().clone(),
            animation: *world.resource::<AnimationClock>(),
            player: player_state(world),
            hazards: hazards(world),
        }
    }
}
