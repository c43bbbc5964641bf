//! TTF text rendering for the HUD and menus.
//!
//! Rendered strings are cached as textures keyed by text, size and colour, so the static menu labels and
//! the current score are only rasterised once.

use std::collections::HashMap;

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::constants::ui;
use crate::error::{GameError, TextureError};

/// Cached strings beyond this count are flushed.
pub const CACHE_LIMIT: usize = 64;

type CacheKey = (String, u16, (u8, u8, u8, u8));

pub struct TextRenderer {
    texture_creator: TextureCreator<WindowContext>,
    fonts: HashMap<u16, Font<'static, 'static>>,
    cache: HashMap<CacheKey, Texture>,
}

impl TextRenderer {
    /// Loads the game font at every size the UI uses.
    ///
    /// A missing or unreadable font is logged and leaves the renderer without fonts; text then draws nothing.
    pub fn new(ttf_context: &'static Sdl2TtfContext, texture_creator: TextureCreator<WindowContext>) -> Self {
        let fonts = match Self::load_fonts(ttf_context) {
            Ok(fonts) => fonts,
            Err(e) => {
                warn!("Failed to load font: {}. Text will not be drawn.", e);
                HashMap::new()
            }
        };

        Self {
            texture_creator,
            fonts,
            cache: HashMap::new(),
        }
    }

    fn load_fonts(ttf_context: &'static Sdl2TtfContext) -> Result<HashMap<u16, Font<'static, 'static>>, GameError> {
        let font_data: &'static [u8] = Asset::Font.get_bytes()?.to_vec().leak();

        let mut fonts = HashMap::new();
        for size in [ui::FONT_SIZE, ui::TITLE_FONT_SIZE] {
            let rwops = RWops::from_bytes(font_data).map_err(GameError::Sdl)?;
            let font = ttf_context.load_font_from_rwops(rwops, size).map_err(GameError::Sdl)?;
            fonts.insert(size, font);
        }

        debug!(sizes = ?fonts.keys().collect::<Vec<_>>(), "Fonts loaded");
        Ok(fonts)
    }

    /// Whether any font is available.
    pub fn is_available(&self) -> bool {
        !self.fonts.is_empty()
    }

    /// Number of rendered strings currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Draws `text` centred on `center` (screen coordinates).
    pub fn render_centered<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        size: u16,
        center: Point,
        color: Color,
    ) -> Result<(), TextureError> {
        if !self.fonts.contains_key(&size) {
            return Ok(());
        }

        let key: CacheKey = (text.to_string(), size, color.rgba());
        if !self.cache.contains_key(&key) && self.cache.len() >= CACHE_LIMIT {
            self.flush();
        }

        if !self.cache.contains_key(&key) {
            let Some(font) = self.fonts.get(&size) else {
                return Ok(());
            };
            let surface = font
                .render(text)
                .blended(color)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            let texture = self
                .texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            self.cache.insert(key.clone(), texture);
        }

        if let Some(texture) = self.cache.get(&key) {
            let query = texture.query();
            let dest = Rect::from_center(center, query.width, query.height);
            canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed)?;
        }

        Ok(())
    }

    fn flush(&mut self) {
        for (_, texture) in self.cache.drain() {
            // SAFETY: the renderer that created the texture outlives this cache, and the texture is dropped here.
            unsafe { texture.destroy() };
        }
    }
}

impl Drop for TextRenderer {
    fn drop(&mut self) {
        self.flush();
    }
}
