#![cfg_attr(all(not(use_console), target_os = "windows"), windows_subsystem = "windows")]

use std::env;

use jurassic_jump::{app::App, constants::LOOP_TIME, platform};
use tracing::info;

/// The main entry point of the application.
///
/// Sets up logging, opens the window and runs the frame loop until an exit is requested.
pub fn main() {
    let muted = env::args().skip(1).any(|arg| arg == "--mute" || arg == "-m");

    platform::init_logging().expect("Could not initialize logging");

    let mut app = App::new(muted).expect("Could not create app");

    info!(loop_time = ?LOOP_TIME, muted, "Starting game loop");
    while app.run() {}
}
