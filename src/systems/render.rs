use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{NonSend, NonSendMut, Query, Res},
};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{player, window, world};
use crate::error::{GameError, TextureError};
use crate::systems::{
    components::{AnimationClock, BackgroundScroll, EntityType, Jump, Pickup, PlayerControlled, Position, SpawnOrder},
    powerup::Invincibility,
    stage::GameStage,
};
use crate::texture::sprite::{Sprite, SpriteSheet};

const GROUND_COLOR: Color = Color::RGB(76, 204, 76);
const POWER_UP_COLOR: Color = Color::RED;

/// Converts a world-space point (y-up) into window space (y-down).
pub fn world_to_screen(point: Vec2) -> Point {
    Point::new(point.x.round() as i32, (window::HEIGHT as f32 - point.y).round() as i32)
}

/// The window-space rectangle of a box of `size` centred on the world-space `center`.
pub fn world_rect(center: Vec2, size: Vec2) -> Rect {
    Rect::from_center(world_to_screen(center), size.x.max(1.0) as u32, size.y.max(1.0) as u32)
}

/// Picks the player's sprite for this frame, or `None` while it blinks out.
pub fn player_sprite(jump: &Jump, clock: &AnimationClock, invincibility: &Invincibility) -> Option<Sprite> {
    if invincibility.is_active() && clock.blink_hidden() {
        return None;
    }

    if jump.is_descending || clock.alternate_frame() {
        Some(Sprite::PlayerB)
    } else {
        Some(Sprite::PlayerA)
    }
}

/// The sprite drawn for a hazard, or `None` for kinds drawn as plain shapes.
pub fn hazard_sprite(entity_type: EntityType, clock: &AnimationClock) -> Option<Sprite> {
    match entity_type {
        EntityType::Cactus => Some(Sprite::Cactus),
        EntityType::Pterodactyl if clock.alternate_frame() => Some(Sprite::PterodactylB),
        EntityType::Pterodactyl => Some(Sprite::PterodactylA),
        EntityType::PowerUp => None,
    }
}

/// Draws the scrolling background and, during a run, the player, the ground and every hazard.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    sprites: NonSend<SpriteSheet>,
    stage: Res<GameStage>,
    scroll: Res<BackgroundScroll>,
    clock: Res<AnimationClock>,
    invincibility: Res<Invincibility>,
    players: Query<(&Position, &Jump), With<PlayerControlled>>,
    hazards: Query<(&EntityType, &Position, &SpawnOrder, Option<&Pickup>)>,
    mut errors: EventWriter<GameError>,
) {
    let canvas = &mut *canvas;
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    let full = Rect::new(0, 0, window::WIDTH, window::HEIGHT);
    if let Err(e) = sprites.render_scrolled(canvas, Sprite::Background, full, scroll.0) {
        errors.write(TextureError::RenderFailed(format!("Failed to render background: {}", e)).into());
    }

    if !stage.is_playing() {
        return;
    }

    for (position, jump) in players.iter() {
        if let Some(sprite) = player_sprite(jump, &clock, &invincibility) {
            let dest = world_rect(position.0, Vec2::splat(player::SPRITE_SIZE));
            if let Err(e) = sprites.render(canvas, sprite, dest) {
                errors.write(TextureError::RenderFailed(format!("Failed to render player: {}", e)).into());
            }
        }
    }

    canvas.set_draw_color(GROUND_COLOR);
    let ground = world_rect(
        Vec2::new(window::WIDTH as f32 / 2.0, world::GROUND_HEIGHT / 2.0),
        Vec2::new(window::WIDTH as f32, world::GROUND_HEIGHT),
    );
    if let Err(e) = canvas.fill_rect(ground) {
        errors.write(TextureError::RenderFailed(format!("Failed to render ground: {}", e)).into());
    }

    for (entity_type, position, _, pickup) in hazards
        .iter()
        .sort_by_key::<(&EntityType, &Position, &SpawnOrder, Option<&Pickup>), _>(|(_, _, order, _)| **order)
    {
        let dest = world_rect(position.0, entity_type.size());
        let result = match hazard_sprite(*entity_type, &clock) {
            Some(sprite) => sprites.render(canvas, sprite, dest),
            None if pickup.is_some_and(|p| p.active) => {
                canvas.set_draw_color(POWER_UP_COLOR);
                canvas.fill_rect(dest).map_err(TextureError::RenderFailed)
            }
            None => Ok(()),
        };

        if let Err(e) = result {
            errors.write(TextureError::RenderFailed(format!("Failed to render {:?}: {}", entity_type, e)).into());
        }
    }
}

/// Flips the finished frame onto the window.
pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}
