use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::With,
    system::{Commands, Query, ResMut},
};
use glam::Vec2;
use tracing::{debug, info};

use crate::{
    audio::Sound,
    systems::{
        audio::AudioEvent,
        components::{EntityType, Pickup, PlayerControlled, Position, SpawnOrder},
        powerup::Invincibility,
        stage::GameStage,
    },
};

/// Axis-aligned overlap between the player's box and a hazard's box.
///
/// The player's box is square, anchored at its position and extends `reach` along both axes. The hazard's
/// box is anchored at its own position and spans `size`.
pub fn overlaps(player: Vec2, reach: f32, other: Vec2, size: Vec2) -> bool {
    player.x < other.x + size.x && player.x + reach > other.x && player.y < other.y + size.y && player.y + reach > other.y
}

/// Resolves contacts between the player and every hazard, oldest first.
///
/// Kinds are checked cacti first, then power-ups, then pterodactyls.
fn check_rank(entity_type: EntityType) -> u8 {
    match entity_type {
        EntityType::Cactus => 0,
        EntityType::PowerUp => 1,
        EntityType::Pterodactyl => 2,
    }
}

/// Hitting an obstacle without invincibility ends the run and stops further checks this frame. Touching a
/// collectable power-up consumes it and (re)starts invincibility.
#[allow(clippy::type_complexity)]
pub fn collision_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    mut invincibility: ResMut<Invincibility>,
    players: Query<&Position, With<PlayerControlled>>,
    mut hazards: Query<(Entity, &EntityType, &Position, &SpawnOrder, Option<&mut Pickup>)>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    let mut ordered: Vec<_> = hazards.iter_mut().collect();
    ordered.sort_by_key(|(_, entity_type, _, order, _)| (check_rank(**entity_type), **order));

    for (entity, entity_type, position, _, pickup) in ordered {
        if !overlaps(player.0, entity_type.player_reach(), position.0, entity_type.size()) {
            continue;
        }

        if entity_type.is_obstacle() {
            if invincibility.is_active() {
                continue;
            }
            info!(?entity_type, ?entity, "Player hit an obstacle");
            audio_events.write(AudioEvent::PlaySound(Sound::Hit));
            *stage = GameStage::GameOver;
            break;
        }

        if let Some(mut pickup) = pickup {
            if !pickup.active {
                continue;
            }
            pickup.active = false;
            commands.entity(entity).despawn();
            invincibility.activate();
            debug!(?entity, "Power-up collected");
            audio_events.write(AudioEvent::PlaySound(Sound::PowerUp));
        }
    }
}
