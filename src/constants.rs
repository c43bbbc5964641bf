//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Window and canvas dimensions.
pub mod window {
    /// The width of the window, in logical pixels.
    pub const WIDTH: u32 = 1920;
    /// The height of the window, in logical pixels.
    pub const HEIGHT: u32 = 1030;
    pub const TITLE: &str = "T-Rex Game";
}

/// World layout. Coordinates are y-up with the origin at the bottom-left of the window.
pub mod world {
    /// The height of the ground strip.
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// The lowest vertical position the player can occupy.
    pub const GROUND_LINE: f32 = GROUND_HEIGHT + 50.0;
    /// Fraction of the background texture scrolled per frame.
    pub const BACKGROUND_SCROLL_STEP: f32 = 0.001;
}

/// Player physics. Velocities are in pixels per frame.
pub mod player {
    use glam::Vec2;

    pub const START: Vec2 = Vec2::new(110.0, super::world::GROUND_LINE);
    pub const JUMP_IMPULSE: f32 = 18.5;
    /// Added to the vertical velocity every frame while airborne.
    pub const GRAVITY: f32 = -0.5;
    /// Velocity forced while the descent button is held mid-air.
    pub const DESCENT_VELOCITY: f32 = -16.0;
    /// The rendered size of the player sprite.
    pub const SPRITE_SIZE: f32 = 130.0;
}

/// Per-kind hazard data.
pub mod hazard {
    use glam::Vec2;

    pub const CACTUS_SIZE: Vec2 = Vec2::new(85.0, 140.0);
    pub const CACTUS_SPEED: f32 = 7.0;
    pub const CACTUS_HEIGHT: f32 = super::world::GROUND_HEIGHT + 30.0;
    /// The player's box extent when tested against a cactus.
    pub const CACTUS_REACH: f32 = 50.0;

    pub const PTERODACTYL_SIZE: Vec2 = Vec2::new(100.0, 85.0);
    pub const PTERODACTYL_SPEED: f32 = 8.5;
    pub const PTERODACTYL_HEIGHT: f32 = super::world::GROUND_HEIGHT + 180.0;
    pub const PTERODACTYL_REACH: f32 = 80.0;

    pub const POWER_UP_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const POWER_UP_SPEED: f32 = 5.5;
    pub const POWER_UP_HEIGHT: f32 = super::world::GROUND_HEIGHT + 50.0;
    pub const POWER_UP_REACH: f32 = 90.0;
}

/// Spawn timing and separation.
pub mod spawn {
    /// Base interval between cactus spawns at score zero, in seconds.
    pub const CACTUS_BASE_INTERVAL: f32 = 6.0;
    /// Base interval between pterodactyl spawns at score zero, in seconds.
    pub const PTERODACTYL_BASE_INTERVAL: f32 = 8.0;
    /// Score at which spawn intervals are halved.
    pub const SCORE_SCALE: f32 = 50.0;
    pub const POWER_UP_INTERVAL: f32 = 10.0;
    /// Spawns land at the right window edge plus an offset in `0..MAX_OFFSET`.
    pub const MAX_OFFSET: u32 = 200;
    /// Minimum horizontal distance between a cactus and a power-up spawn.
    pub const MIN_DISTANCE: f32 = 150.0;
    /// Minimum clock gap between a cactus and a power-up spawn, in seconds.
    pub const MIN_TIME_GAP: f64 = 1.0;
    /// Initial "last spawn" x for both kinds.
    pub const NO_SPAWN_X: f32 = -200.0;
}

pub mod powerup {
    /// Invincibility duration after a pickup, in seconds.
    pub const DURATION: f32 = 10.0;
    pub const REMINDER_DURATION: f32 = 2.0;
}

pub mod ui {
    use glam::Vec2;

    pub const BUTTON_CENTER: Vec2 = Vec2::new(super::window::WIDTH as f32 / 2.0, super::window::HEIGHT as f32 / 2.0);
    pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 65.0);
    /// The clickable area is slightly taller than the drawn button.
    pub const BUTTON_HIT_SIZE: Vec2 = Vec2::new(200.0, 70.0);
    pub const FONT_SIZE: u16 = 24;
    pub const TITLE_FONT_SIZE: u16 = 36;
    /// Frames per sprite animation step.
    pub const FRAME_SWITCH_INTERVAL: u32 = 10;
    /// Frames per invincibility blink phase.
    pub const BLINK_INTERVAL: u32 = 5;
}

/// The centre of the window, in world coordinates.
pub const WINDOW_CENTER: Vec2 = Vec2::new(window::WIDTH as f32 / 2.0, window::HEIGHT as f32 / 2.0);
