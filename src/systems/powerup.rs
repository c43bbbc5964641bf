use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::{debug, trace};

use crate::constants::powerup;
use crate::systems::{components::DeltaTime, spawner::Spawner};

/// Invincibility granted by a collected power-up. Obstacle collisions are ignored while active.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum Invincibility {
    #[default]
    Inactive,
    Active {
        /// Seconds left before the effect ends.
        remaining: f32,
    },
}

impl Invincibility {
    pub fn is_active(&self) -> bool {
        matches!(self, Invincibility::Active { .. })
    }

    /// Starts the effect, or refreshes it to the full duration if already running.
    pub fn activate(&mut self) {
        *self = Invincibility::Active {
            remaining: powerup::DURATION,
        };
    }

    /// Counts the effect down by `seconds`. Returns `true` when it ended on this call.
    pub fn tick(&mut self, seconds: f32) -> bool {
        if let Invincibility::Active { remaining } = self {
            *remaining -= seconds;
            if *remaining <= 0.0 {
                *self = Invincibility::Inactive;
                return true;
            }
        }
        false
    }
}

/// Counts down invincibility, and runs the power-up reminder timer while it is off.
pub fn invincibility_system(
    delta_time: Res<DeltaTime>,
    mut invincibility: ResMut<Invincibility>,
    mut spawner: ResMut<Spawner>,
) {
    if invincibility.tick(delta_time.seconds) {
        debug!("Invincibility expired");
    }

    if !invincibility.is_active() {
        spawner.reminder_timer += delta_time.seconds;
        if spawner.reminder_timer >= powerup::REMINDER_DURATION {
            spawner.reminder_timer = 0.0;
            if !spawner.can_spawn_power_up {
                trace!("Power-up spawning re-enabled");
            }
            spawner.can_spawn_power_up = true;
        }
    }
}
