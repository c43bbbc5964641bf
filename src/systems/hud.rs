//! Menus and the in-run score display.

use bevy_ecs::{
    event::EventWriter,
    system::{NonSendMut, Res},
};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{ui, window, WINDOW_CENTER};
use crate::error::{GameError, TextureError};
use crate::systems::{
    components::ScoreResource,
    render::{world_rect, world_to_screen},
    stage::GameStage,
};
use crate::texture::text::TextRenderer;

const ORANGE: Color = Color::RGB(255, 128, 0);
const BUTTON_FILL: Color = Color::RGB(153, 76, 0);
const BUTTON_TEXT: Color = Color::YELLOW;

/// Where titles and the running score sit: centred, 100 px below the top edge.
const HEADLINE: Vec2 = Vec2::new(window::WIDTH as f32 / 2.0, window::HEIGHT as f32 - 100.0);

fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &mut TextRenderer,
    label: &str,
    size: u16,
    at: Vec2,
    color: Color,
) -> Result<(), TextureError> {
    text.render_centered(canvas, label, size, world_to_screen(at), color)
}

/// Draws a menu button centred on the window.
fn draw_button(canvas: &mut Canvas<Window>, text: &mut TextRenderer, label: &str) -> Result<(), TextureError> {
    let rect = world_rect(ui::BUTTON_CENTER, ui::BUTTON_SIZE);

    canvas.set_draw_color(BUTTON_FILL);
    canvas.fill_rect(rect).map_err(TextureError::RenderFailed)?;
    canvas.set_draw_color(Color::BLACK);
    canvas.draw_rect(rect).map_err(TextureError::RenderFailed)?;

    draw_text(canvas, text, label, ui::FONT_SIZE, ui::BUTTON_CENTER, BUTTON_TEXT)
}

/// The text overlay for the current stage: title and START, the running score, or the game over summary.
pub fn hud_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut text: NonSendMut<TextRenderer>,
    stage: Res<GameStage>,
    score: Res<ScoreResource>,
    mut errors: EventWriter<GameError>,
) {
    let canvas = &mut *canvas;
    let text = &mut *text;
    let result = match *stage {
        GameStage::Start => draw_button(canvas, text, "START")
            .and_then(|_| draw_text(canvas, text, "Jurassic Jump", ui::TITLE_FONT_SIZE, HEADLINE, ORANGE)),
        GameStage::Playing => draw_text(
            canvas,
            text,
            &format!("Score: {}", score.0),
            ui::FONT_SIZE,
            HEADLINE,
            ORANGE,
        ),
        GameStage::GameOver => draw_text(
            canvas,
            text,
            "GAME OVER",
            ui::TITLE_FONT_SIZE,
            WINDOW_CENTER + Vec2::new(0.0, 100.0),
            Color::RED,
        )
        .and_then(|_| {
            draw_text(
                canvas,
                text,
                &format!("Your Score: {}", score.0),
                ui::FONT_SIZE,
                WINDOW_CENTER + Vec2::new(0.0, 50.0),
                ORANGE,
            )
        })
        .and_then(|_| draw_button(canvas, text, "RESTART")),
    };

    if let Err(e) = result {
        errors.write(TextureError::RenderFailed(format!("Failed to render HUD: {}", e)).into());
    }
}
