//! ECS side of sound playback.
//!
//! Gameplay systems never touch SDL2_mixer directly; they write [`AudioEvent`]s, and [`audio_system`] plays
//! them through the [`AudioResource`] once per frame. Music follows the game stage via [`music_system`].

use bevy_ecs::{
    event::{Event, EventReader, EventWriter},
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use tracing::{debug, trace};

use crate::{
    audio::{Audio, Sound, Track},
    systems::stage::GameStage,
};

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
}

/// Events for triggering audio playback
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play a one-shot sound effect
    PlaySound(Sound),
    /// Loop a music track on the music channel
    PlayMusic(Track),
    /// Stop every channel, music included
    StopAll,
}

/// The music track most recently requested, if any.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentTrack(pub Option<Track>);

/// Non-send resource wrapper for the SDL2 mixer, which must stay on the main thread.
pub struct AudioResource(pub Audio);

impl Track {
    /// The track that should be looping during `stage`.
    pub fn for_stage(stage: GameStage) -> Track {
        match stage {
            GameStage::Start | GameStage::GameOver => Track::Menu,
            GameStage::Playing => Track::Gameplay,
        }
    }
}

/// Switches music when the stage calls for a different track: stop everything, then loop the new one.
pub fn music_system(stage: Res<GameStage>, mut current: ResMut<CurrentTrack>, mut events: EventWriter<AudioEvent>) {
    let desired = Track::for_stage(*stage);
    if current.0 == Some(desired) {
        return;
    }

    debug!(from = ?current.0, to = ?desired, "Switching music");
    events.write(AudioEvent::StopAll);
    events.write(AudioEvent::PlayMusic(desired));
    current.0 = Some(desired);
}

/// System that processes audio events and plays sounds
pub fn audio_system(mut audio: NonSendMut<AudioResource>, state: Res<AudioState>, mut events: EventReader<AudioEvent>) {
    if !audio.0.is_disabled() && audio.0.is_muted() != state.muted {
        debug!(muted = state.muted, "Audio mute state changed");
        audio.0.set_mute(state.muted);
    }

    for event in events.read() {
        if audio.0.is_disabled() {
            trace!(?event, "Audio disabled, ignoring event");
            continue;
        }

        match event {
            AudioEvent::PlaySound(sound) => {
                if state.muted {
                    trace!(?sound, "Skipping sound while muted");
                } else {
                    trace!(?sound, "Playing sound");
                    audio.0.play(*sound);
                }
            }
            AudioEvent::PlayMusic(track) => {
                // Music keeps looping at zero volume while muted so unmuting resumes it.
                trace!(?track, "Looping music");
                audio.0.play_music(*track);
            }
            AudioEvent::StopAll => {
                debug!("Stopping all audio");
                audio.0.stop_all();
            }
        }
    }
}
