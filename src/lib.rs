//! Jurassic Jump game library crate.

pub mod app;
pub mod asset;
pub mod audio;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod platform;
pub mod systems;
pub mod texture;
