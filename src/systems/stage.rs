use bevy_ecs::{
    entity::Entity,
    query::With,
    resource::Resource,
    system::{Commands, Res, ResMut},
    world::World,
};
use glam::Vec2;
use tracing::info;

use crate::constants::{player, ui};
use crate::systems::{
    components::{AnimationClock, EntityType, Jump, PlayerControlled, Position, ScoreResource},
    input::MouseInput,
    powerup::Invincibility,
    spawner::Spawner,
};

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum GameStage {
    /// Title screen with the start button.
    #[default]
    Start,
    /// A run is in progress.
    Playing,
    /// The player hit an obstacle; the final score and restart button are shown.
    GameOver,
}

impl GameStage {
    pub fn is_playing(self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// Whether `point` lies strictly inside the axis-aligned box centred on `center`.
pub fn is_over_button(point: Vec2, center: Vec2, size: Vec2) -> bool {
    let half = size / 2.0;
    point.x > center.x - half.x && point.x < center.x + half.x && point.y > center.y - half.y && point.y < center.y + half.y
}

fn button_pressed(mouse: &MouseInput) -> bool {
    mouse.left() && is_over_button(mouse.position, ui::BUTTON_CENTER, ui::BUTTON_HIT_SIZE)
}

/// Handles the menu buttons: START leaves the title screen, RESTART resets the session after a game over.
///
/// The `Playing → GameOver` transition belongs to the collision system.
pub fn stage_system(mut stage: ResMut<GameStage>, mouse: Res<MouseInput>, score: Res<ScoreResource>, mut commands: Commands) {
    match *stage {
        GameStage::Start => {
            if button_pressed(&mouse) {
                info!("Start pressed, beginning run");
                *stage = GameStage::Playing;
            }
        }
        GameStage::Playing => {}
        GameStage::GameOver => {
            if button_pressed(&mouse) {
                info!(final_score = score.0, "Restart pressed, resetting session");
                commands.queue(reset_session);
            }
        }
    }
}

/// Returns the world to the state of a freshly started run.
///
/// Despawns every hazard, puts the player back on the ground at its start position, replaces all session
/// resources with fresh values and enters [`GameStage::Playing`].
pub fn reset_session(world: &mut World) {
    let hazards: Vec<Entity> = world.query_filtered::<Entity, With<EntityType>>().iter(world).collect();
    let despawned = hazards.len();
    for entity in hazards {
        world.despawn(entity);
    }

    let mut players = world.query_filtered::<(&mut Position, &mut Jump), With<PlayerControlled>>();
    for (mut position, mut jump) in players.iter_mut(world) {
        *position = Position(player::START);
        *jump = Jump::default();
    }

    world.insert_resource(ScoreResource::default());
    world.insert_resource(Invincibility::default());
    world.insert_resource(Spawner::default());
    world.insert_resource(AnimationClock::default());
    world.insert_resource(GameStage::Playing);

    info!(despawned, "Session reset");
}
