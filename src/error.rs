//! Error types for the game.
//!
//! Only SDL window and canvas creation is fatal. Everything else is reported as a [`GameError`] event and
//! logged, and the game keeps running with a fallback.

use std::io;

use bevy_ecs::event::Event;

/// Any failure the game can report.
///
/// Returned from setup code, and written as an event by systems that hit a non-fatal problem mid-frame.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    /// SDL reports its errors as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Failure to read a file from the assets directory.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Failed to read asset: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Failure to load a sprite or draw to the canvas.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Unsupported texture format: {0}")]
    InvalidFormat(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

pub type GameResult<T> = Result<T, GameError>;
