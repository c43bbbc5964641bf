//! Procedural hazard spawning.
//!
//! Each spawnable kind has its own accumulator of elapsed seconds. Cacti and pterodactyls spawn faster as the
//! score grows; power-ups spawn on a fixed interval while invincibility is off. Cacti and power-ups are kept
//! apart by the spawn guard: a minimum horizontal distance and clock gap from the latest spawn of the other
//! kind. A draw that fails the guard leaves its accumulator untouched, so the draw repeats next frame.

use bevy_ecs::{
    resource::Resource,
    system::{Commands, Res, ResMut},
};
use glam::Vec2;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::trace;

use crate::constants::{spawn, window};
use crate::systems::{
    components::{DeltaTime, EntityType, GameClock, ObstacleBundle, Passed, Pickup, Position, PowerUpBundle, ScoreResource, SpawnOrder},
    powerup::Invincibility,
};

/// Where and when a hazard was last committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnMark {
    pub x: f32,
    pub time: f64,
}

impl SpawnMark {
    /// The mark used before anything of a kind has spawned.
    pub const NONE: SpawnMark = SpawnMark {
        x: spawn::NO_SPAWN_X,
        time: 0.0,
    };

    /// Whether a spawn at `x` at clock time `now` keeps the minimum separation from this mark.
    pub fn is_clear_of(&self, x: f32, now: f64) -> bool {
        (x - self.x).abs() >= spawn::MIN_DISTANCE && now - self.time >= spawn::MIN_TIME_GAP
    }
}

/// Spawn accumulators and bookkeeping for one session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Spawner {
    pub cactus_timer: f32,
    pub pterodactyl_timer: f32,
    pub power_up_timer: f32,
    pub last_cactus: SpawnMark,
    pub last_power_up: SpawnMark,
    /// Cleared when a power-up spawns and restored by the reminder timer. Nothing reads it yet.
    pub can_spawn_power_up: bool,
    pub reminder_timer: f32,
    next_order: u64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            cactus_timer: 0.0,
            pterodactyl_timer: 0.0,
            power_up_timer: 0.0,
            last_cactus: SpawnMark::NONE,
            last_power_up: SpawnMark::NONE,
            can_spawn_power_up: true,
            reminder_timer: 0.0,
            next_order: 0,
        }
    }
}

impl Spawner {
    fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next_order);
        self.next_order += 1;
        order
    }
}

/// Source of the horizontal spawn offsets.
#[derive(Resource)]
pub struct SpawnRng(pub SmallRng);

impl SpawnRng {
    pub fn from_os_rng() -> Self {
        Self(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// A spawn x just past the right edge of the window.
    pub fn spawn_x(&mut self) -> f32 {
        window::WIDTH as f32 + self.0.random_range(0..spawn::MAX_OFFSET) as f32
    }
}

/// Seconds between spawns for a kind with the given base interval; halves every [`spawn::SCORE_SCALE`] points.
pub fn spawn_interval(base: f32, score: u32) -> f32 {
    base / (1.0 + score as f32 / spawn::SCORE_SCALE)
}

#[allow(clippy::too_many_arguments)]
pub fn spawner_system(
    mut commands: Commands,
    delta_time: Res<DeltaTime>,
    clock: Res<GameClock>,
    score: Res<ScoreResource>,
    invincibility: Res<Invincibility>,
    mut spawner: ResMut<Spawner>,
    mut rng: ResMut<SpawnRng>,
) {
    let now = clock.seconds;

    spawner.cactus_timer += delta_time.seconds;
    if spawner.cactus_timer >= spawn_interval(spawn::CACTUS_BASE_INTERVAL, score.0) {
        let x = rng.spawn_x();
        if spawner.last_power_up.is_clear_of(x, now) {
            let order = spawner.next_order();
            commands.spawn(obstacle(EntityType::Cactus, x, order));
            spawner.last_cactus = SpawnMark { x, time: now };
            spawner.cactus_timer = 0.0;
            trace!(x, now, ?order, "Spawned cactus");
        }
    }

    spawner.power_up_timer += delta_time.seconds;
    if spawner.power_up_timer >= spawn::POWER_UP_INTERVAL && !invincibility.is_active() {
        let x = rng.spawn_x();
        if spawner.last_cactus.is_clear_of(x, now) {
            let order = spawner.next_order();
            commands.spawn(PowerUpBundle {
                entity_type: EntityType::PowerUp,
                position: Position(Vec2::new(x, EntityType::PowerUp.spawn_height())),
                order,
                pickup: Pickup { active: true },
            });
            spawner.last_power_up = SpawnMark { x, time: now };
            spawner.power_up_timer = 0.0;
            spawner.can_spawn_power_up = false;
            spawner.reminder_timer = 0.0;
            trace!(x, now, ?order, "Spawned power-up");
        }
    }

    spawner.pterodactyl_timer += delta_time.seconds;
    if spawner.pterodactyl_timer >= spawn_interval(spawn::PTERODACTYL_BASE_INTERVAL, score.0) {
        let x = rng.spawn_x();
        let order = spawner.next_order();
        commands.spawn(obstacle(EntityType::Pterodactyl, x, order));
        spawner.pterodactyl_timer = 0.0;
        trace!(x, now, ?order, "Spawned pterodactyl");
    }
}

fn obstacle(entity_type: EntityType, x: f32, order: SpawnOrder) -> ObstacleBundle {
    ObstacleBundle {
        entity_type,
        position: Position(Vec2::new(x, entity_type.spawn_height())),
        order,
        passed: Passed(false),
    }
}
