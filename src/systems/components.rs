use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::constants::{hazard, player};

/// A tag component for the entity that is controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World-space position. y grows upwards from the bottom of the window.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Vertical motion state of the player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Jump {
    /// Vertical velocity, in pixels per frame.
    pub velocity: f32,
    pub is_jumping: bool,
    /// Fast-fall is active; also selects the descent pose.
    pub is_descending: bool,
}

/// A component denoting the kind of a scrolling hazard.
///
/// Every per-kind number (speed, size, spawn height, collision reach) is data on this type, so the
/// movement, culling and collision systems never branch on kind themselves.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// Ground obstacle.
    Cactus,
    /// Flying obstacle.
    Pterodactyl,
    /// Invincibility pickup.
    PowerUp,
}

impl EntityType {
    /// Leftward speed, in pixels per frame.
    pub fn speed(self) -> f32 {
        match self {
            EntityType::Cactus => hazard::CACTUS_SPEED,
            EntityType::Pterodactyl => hazard::PTERODACTYL_SPEED,
            EntityType::PowerUp => hazard::POWER_UP_SPEED,
        }
    }

    /// Bounding box size.
    pub fn size(self) -> Vec2 {
        match self {
            EntityType::Cactus => hazard::CACTUS_SIZE,
            EntityType::Pterodactyl => hazard::PTERODACTYL_SIZE,
            EntityType::PowerUp => hazard::POWER_UP_SIZE,
        }
    }

    /// Fixed vertical position at spawn.
    pub fn spawn_height(self) -> f32 {
        match self {
            EntityType::Cactus => hazard::CACTUS_HEIGHT,
            EntityType::Pterodactyl => hazard::PTERODACTYL_HEIGHT,
            EntityType::PowerUp => hazard::POWER_UP_HEIGHT,
        }
    }

    /// Extent of the player's box when tested against this kind.
    pub fn player_reach(self) -> f32 {
        match self {
            EntityType::Cactus => hazard::CACTUS_REACH,
            EntityType::Pterodactyl => hazard::PTERODACTYL_REACH,
            EntityType::PowerUp => hazard::POWER_UP_REACH,
        }
    }

    /// Obstacles end the run on contact and score when passed.
    pub fn is_obstacle(self) -> bool {
        matches!(self, EntityType::Cactus | EntityType::Pterodactyl)
    }

    /// Whether an entity at horizontal position `x` has fully left the window.
    ///
    /// An entity at exactly `-width` is still alive.
    pub fn is_off_screen(self, x: f32) -> bool {
        x < -self.size().x
    }
}

/// Monotonic spawn sequence number. Systems that care about spawn order sort by it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// Set once the player has moved beyond an obstacle, so it scores only once.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Passed(pub bool);

/// A power-up that can still be collected.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub active: bool,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub jump: Jump,
}

impl Default for PlayerBundle {
    fn default() -> Self {
        Self {
            player: PlayerControlled,
            position: Position(player::START),
            jump: Jump::default(),
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    pub entity_type: EntityType,
    pub position: Position,
    pub order: SpawnOrder,
    pub passed: Passed,
}

#[derive(Bundle)]
pub struct PowerUpBundle {
    pub entity_type: EntityType,
    pub position: Position,
    pub order: SpawnOrder,
    pub pickup: Pickup,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

/// The number of obstacles passed this run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResource(pub u32);

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DeltaTime {
    /// Seconds elapsed since the previous frame.
    pub seconds: f32,
    /// Frames elapsed since the previous frame.
    pub ticks: u32,
}

/// Seconds since launch. Spawn guards measure gaps against this clock; it is never reset.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct GameClock {
    pub seconds: f64,
}

/// Frame counters driving sprite animation and the invincibility blink. Reset with the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationClock {
    pub frame: u32,
    pub blink: u32,
}

/// Horizontal background offset as a fraction of the background width, in `[0, 1)`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct BackgroundScroll(pub f32);
