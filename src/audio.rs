//! This module handles the audio playback for the game.
use std::collections::HashMap;

use crate::asset::Asset;
use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Chunk, LoaderRWops, AUDIO_S16LSB},
    rwops::RWops,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 8;
const DEFAULT_VOLUME: u8 = 64;
/// Channel reserved for the looping music track; effects never steal it.
const MUSIC_CHANNEL: i32 = 0;

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    Jump,
    Hit,
    PowerUp,
}

/// Looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Track {
    /// Plays on the start and game over screens.
    Menu,
    /// Plays while a run is in progress.
    Gameplay,
}

/// The audio system for the game.
///
/// This struct is responsible for initializing the audio device, loading sounds,
/// and playing them. If audio fails to initialize, it will be disabled and all
/// functions will silently do nothing.
pub struct Audio {
    sounds: HashMap<Sound, Chunk>,
    tracks: HashMap<Track, Chunk>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If audio fails to initialize, the audio system will be disabled and
    /// all functions will silently do nothing.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self::disabled()
            }
        }
    }

    /// An audio instance that never touches the mixer.
    pub fn disabled() -> Self {
        Self {
            sounds: HashMap::new(),
            tracks: HashMap::new(),
            state: AudioState::Disabled,
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, mixer::DEFAULT_CHANNELS, 1024)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        mixer::allocate_channels(AUDIO_CHANNELS);
        mixer::reserve_channels(1);

        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_chunk(Asset::SoundFile(sound)) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        let tracks: HashMap<Track, Chunk> = Track::iter()
            .filter_map(|track| match Self::load_chunk(Asset::MusicFile(track)) {
                Ok(chunk) => Some((track, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load track {:?}: {}", track, e);
                    None
                }
            })
            .collect();

        // If nothing loaded successfully, disable audio
        if sounds.is_empty() && tracks.is_empty() {
            return Err(anyhow!("No sounds loaded successfully"));
        }

        Ok(Audio {
            sounds,
            tracks,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load_chunk(asset: Asset) -> Result<Chunk> {
        let data = asset
            .get_bytes()
            .map_err(|e| anyhow!("Failed to get bytes for {:?}: {}", asset, e))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", asset, e))?;
        rwops
            .load_wav()
            .map_err(|e| anyhow!("Failed to load wav for {:?}: {}", asset, e))
    }

    /// Plays the provided sound effect once on any free channel.
    ///
    /// Overlapping effects are allowed; if every channel is busy the effect is dropped.
    pub fn play(&mut self, sound: Sound) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::trace!("Could not play {:?}: {}", sound, e);
            }
        }
    }

    /// Loops the provided track on the music channel, replacing whatever was there.
    pub fn play_music(&mut self, track: Track) {
        if self.state == AudioState::Disabled {
            return;
        }

        if let Some(chunk) = self.tracks.get(&track) {
            match mixer::Channel(MUSIC_CHANNEL).play(chunk, -1) {
                Ok(channel) => tracing::trace!("Looping {:?} on channel {:?}", track, channel),
                Err(e) => tracing::warn!("Could not loop {:?}: {}", track, e),
            }
        }
    }

    /// Halts all currently playing audio channels.
    pub fn stop_all(&mut self) {
        if self.state != AudioState::Disabled {
            mixer::Channel::all().halt();
        }
    }

    /// Instantly mutes or unmutes all audio channels by adjusting their volume.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
            }
            _ => {}
        }
    }

    /// Returns the current mute state.
    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    ///
    /// Audio can be disabled due to SDL2_mixer initialization failures, a missing
    /// audio device, or failure to load any sound assets. When disabled, all
    /// audio operations become no-ops.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}
