use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res},
};
use tracing::trace;

use crate::{
    audio::Sound,
    constants::{player, world},
    systems::{
        audio::AudioEvent,
        components::{Jump, PlayerControlled, Position},
        input::MouseInput,
    },
};

/// Advances the player's vertical motion by one frame.
///
/// Returns `true` when a jump started this frame. Velocity changes by a fixed amount per frame, not per
/// second, so the arc depends on the frame rate; the game loop is paced to keep that constant.
pub fn step_jump(position: &mut Position, jump: &mut Jump, mouse: &MouseInput) -> bool {
    let mut jumped = false;

    if mouse.left() && !jump.is_jumping {
        jump.velocity = player::JUMP_IMPULSE;
        jump.is_jumping = true;
        jumped = true;
    }

    if jump.is_jumping {
        position.0.y += jump.velocity;
        jump.velocity += player::GRAVITY;

        if position.0.y <= world::GROUND_LINE {
            position.0.y = world::GROUND_LINE;
            jump.velocity = 0.0;
            jump.is_jumping = false;
        }
    }

    if mouse.right() && jump.is_jumping {
        jump.velocity = player::DESCENT_VELOCITY;
        jump.is_descending = true;
    } else {
        jump.is_descending = false;
    }

    jumped
}

/// Applies mouse input and gravity to the player.
///
/// Left button starts a jump from the ground; right button forces a fast descent while airborne.
pub fn player_physics_system(
    mouse: Res<MouseInput>,
    mut players: Query<(&mut Position, &mut Jump), With<PlayerControlled>>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    for (mut position, mut jump) in players.iter_mut() {
        if step_jump(&mut position, &mut jump, &mouse) {
            trace!(y = position.0.y, "Jump started");
            audio_events.write(AudioEvent::PlaySound(Sound::Jump));
        }
    }
}
