//! The Entity-Component-System (ECS) module.
//!
//! Components and resources live in [`components`]; every other module holds the systems for one concern.

use bevy_ecs::event::EventReader;
use tracing::warn;

use crate::error::GameError;

pub mod animation;
pub mod audio;
pub mod collision;
pub mod components;
pub mod hud;
pub mod input;
pub mod movement;
pub mod player;
pub mod powerup;
pub mod render;
pub mod scoring;
pub mod spawner;
pub mod stage;

pub use self::animation::*;
pub use self::audio::*;
pub use self::collision::*;
pub use self::components::*;
pub use self::hud::*;
pub use self::input::*;
pub use self::movement::*;
pub use self::player::*;
pub use self::powerup::*;
pub use self::render::*;
pub use self::scoring::*;
pub use self::spawner::*;
pub use self::stage::*;

/// Logs every error reported by other systems this frame. None of them are fatal.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!("{}", error);
    }
}
