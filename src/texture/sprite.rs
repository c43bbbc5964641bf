use std::collections::HashMap;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::error::{GameError, TextureError};

/// Every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sprite {
    /// First running frame of the T-Rex.
    PlayerA,
    /// Second running frame, also used as the descent pose.
    PlayerB,
    Background,
    Cactus,
    PterodactylA,
    PterodactylB,
}

impl Sprite {
    /// The colour drawn in place of the sprite when its texture is unavailable.
    pub fn fallback_color(self) -> Color {
        match self {
            Sprite::PlayerA | Sprite::PlayerB => Color::RGB(90, 90, 90),
            Sprite::Background => Color::RGB(200, 230, 255),
            Sprite::Cactus => Color::RGB(120, 110, 100),
            Sprite::PterodactylA | Sprite::PterodactylB => Color::RGB(150, 60, 40),
        }
    }
}

/// Loaded textures for every [`Sprite`], with solid-colour fallbacks for anything missing.
pub struct SpriteSheet {
    textures: HashMap<Sprite, Texture>,
}

impl SpriteSheet {
    /// Loads every sprite's texture. Failures are logged and the sprite falls back to a filled rectangle.
    pub fn load<T>(texture_creator: &TextureCreator<T>) -> Self {
        let textures: HashMap<Sprite, Texture> = Sprite::iter()
            .filter_map(|sprite| match Self::load_texture(texture_creator, sprite) {
                Ok(texture) => Some((sprite, texture)),
                Err(e) => {
                    warn!(?sprite, "Failed to load sprite, using fallback: {}", e);
                    None
                }
            })
            .collect();

        debug!(loaded = textures.len(), "Sprite sheet ready");
        Self { textures }
    }

    /// A sheet with no textures; every sprite draws its fallback colour.
    pub fn empty() -> Self {
        Self { textures: HashMap::new() }
    }

    fn load_texture<T>(texture_creator: &TextureCreator<T>, sprite: Sprite) -> Result<Texture, GameError> {
        let bytes = Asset::Texture(sprite).get_bytes()?;
        texture_creator.load_texture_bytes(&bytes).map_err(|e| {
            if e.contains("format") || e.contains("unsupported") {
                GameError::Texture(TextureError::InvalidFormat(e))
            } else {
                GameError::Texture(TextureError::LoadFailed(e))
            }
        })
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Texture> {
        self.textures.get(&sprite)
    }

    /// Draws the sprite stretched over `dest`.
    pub fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, sprite: Sprite, dest: Rect) -> Result<(), TextureError> {
        match self.textures.get(&sprite) {
            Some(texture) => canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed),
            None => {
                canvas.set_draw_color(sprite.fallback_color());
                canvas.fill_rect(dest).map_err(TextureError::RenderFailed)
            }
        }
    }

    /// Draws the sprite tiled horizontally across `dest`, shifted left by `scroll` (a fraction of `dest`'s width).
    pub fn render_scrolled<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        sprite: Sprite,
        dest: Rect,
        scroll: f32,
    ) -> Result<(), TextureError> {
        let shift = (scroll.rem_euclid(1.0) * dest.width() as f32) as i32;
        let first = Rect::new(dest.x() - shift, dest.y(), dest.width(), dest.height());
        let second = Rect::new(first.x() + dest.width() as i32, dest.y(), dest.width(), dest.height());
        self.render(canvas, sprite, first)?;
        self.render(canvas, sprite, second)
    }
}
