use std::collections::HashMap;

use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use glam::Vec2;
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton, EventPump};
use tracing::{debug, info};

use crate::{
    constants::window,
    events::{GameCommand, GameEvent},
    systems::{components::GlobalState, AudioState},
};

bitflags! {
    /// Mouse buttons currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct MouseButtons: u8 {
        /// Jump, and press menu buttons.
        const LEFT = 1 << 0;
        /// Fast descent while airborne.
        const RIGHT = 1 << 1;
    }
}

/// Mouse state as of the current frame. The position is in world coordinates (y-up).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseInput {
    pub buttons: MouseButtons,
    pub position: Vec2,
}

impl MouseInput {
    pub fn left(&self) -> bool {
        self.buttons.contains(MouseButtons::LEFT)
    }

    pub fn right(&self) -> bool {
        self.buttons.contains(MouseButtons::RIGHT)
    }
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

/// Converts a window-space point (y-down) into world space (y-up).
pub fn screen_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, window::HEIGHT as f32 - y as f32)
}

fn button_flag(button: MouseButton) -> Option<MouseButtons> {
    match button {
        MouseButton::Left => Some(MouseButtons::LEFT),
        MouseButton::Right => Some(MouseButtons::RIGHT),
        _ => None,
    }
}

/// Drains the SDL event queue into the [`MouseInput`] resource and keyboard [`GameCommand`]s.
pub fn input_system(
    bindings: Res<Bindings>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
    mut mouse: ResMut<MouseInput>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameCommand::Exit.into());
            }
            Event::MouseMotion { x, y, .. } => {
                mouse.position = screen_to_world(x, y);
            }
            Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                mouse.position = screen_to_world(x, y);
                if let Some(flag) = button_flag(mouse_btn) {
                    mouse.buttons.insert(flag);
                }
            }
            Event::MouseButtonUp { mouse_btn, x, y, .. } => {
                mouse.position = screen_to_world(x, y);
                if let Some(flag) = button_flag(mouse_btn) {
                    mouse.buttons.remove(flag);
                }
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(command) = bindings.command_for(key) {
                    debug!(?key, ?command, "Key bound to command");
                    writer.write(command.into());
                }
            }
            _ => {}
        }
    }
}

/// Applies keyboard commands to global state.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut audio_state: ResMut<AudioState>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event;
        match command {
            GameCommand::Exit => {
                info!("Exit requested. Exiting...");
                state.exit = true;
            }
            GameCommand::MuteAudio => {
                audio_state.muted = !audio_state.muted;
                info!("Audio {}", if audio_state.muted { "muted" } else { "unmuted" });
            }
        }
    }
}
