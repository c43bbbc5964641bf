//! Asset lookup and loading.
//!
//! Assets are read from disk once at startup. The directory defaults to `assets/` relative to the working
//! directory and can be overridden with the `JURASSIC_JUMP_ASSETS` environment variable.

use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::trace;

use crate::audio::{Sound, Track};
use crate::error::AssetError;
use crate::texture::sprite::Sprite;

const ASSET_DIR_VAR: &str = "JURASSIC_JUMP_ASSETS";
const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Texture(Sprite),
    Font,
    SoundFile(Sound),
    MusicFile(Track),
}

impl Asset {
    /// The file name of the asset inside the asset directory.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Texture(sprite) => match sprite {
                Sprite::PlayerA => "Tyrex1.png",
                Sprite::PlayerB => "Tyrex2.png",
                Sprite::Background => "background.png",
                Sprite::Cactus => "stone.png",
                Sprite::PterodactylA => "Ptero1.png",
                Sprite::PterodactylB => "Ptero2.png",
            },
            Asset::Font => "Maximum Voltage.ttf",
            Asset::SoundFile(sound) => match sound {
                Sound::Jump => "jump.wav",
                Sound::Hit => "hithurt.wav",
                Sound::PowerUp => "powerup.wav",
            },
            Asset::MusicFile(track) => match track {
                Track::Menu => "menu2.wav",
                Track::Gameplay => "bm.wav",
            },
        }
    }

    /// Reads the asset's bytes from the asset directory.
    pub fn get_bytes(&self) -> Result<Cow<'static, [u8]>, AssetError> {
        let path = asset_dir().join(self.path());
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        trace!(path = %path.display(), "Reading asset");
        let bytes = fs::read(&path)?;
        Ok(Cow::Owned(bytes))
    }
}

fn asset_dir() -> PathBuf {
    env::var_os(ASSET_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR))
}
