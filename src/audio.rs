//! Audio cues
//!
//! The game has two sounds: a looping theme while a session runs and a hit
//! sound when the player touches a hazard. Actual playback belongs to whatever
//! [`AudioBackend`] the host wires in; this module only decides what to play
//! and how loud.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player hit a hazard
    Collision,
}

/// What the backend should do in response to a game event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCue {
    /// Start the looping theme at the given volume
    StartTheme(f32),
    StopTheme,
    Effect(SoundEffect, f32),
}

/// Playback sink provided by the host
pub trait AudioBackend {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
    fn start_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Backend that plays nothing (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("(silent) effect {:?} at {:.2}", effect, volume);
    }

    fn start_music(&mut self, volume: f32) {
        log::trace!("(silent) theme start at {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::trace!("(silent) theme stop");
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_playing: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
            music_playing: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn effective(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Translate a game event into a cue (if it has one)
    pub fn cue_for(&self, event: &GameEvent) -> Option<AudioCue> {
        match event {
            GameEvent::SessionStarted => {
                Some(AudioCue::StartTheme(self.effective(self.music_volume)))
            }
            GameEvent::SessionEnded { .. } => Some(AudioCue::StopTheme),
            GameEvent::CollisionHazard => Some(AudioCue::Effect(
                SoundEffect::Collision,
                self.effective(self.sfx_volume),
            )),
            _ => None,
        }
    }

    /// React to one game event
    pub fn handle(&mut self, event: &GameEvent) {
        let Some(cue) = self.cue_for(event) else {
            return;
        };
        match cue {
            AudioCue::StartTheme(vol) => {
                if self.music_playing {
                    // Restarting from game over: rewind the loop
                    self.backend.stop_music();
                }
                self.backend.start_music(vol);
                self.music_playing = true;
            }
            AudioCue::StopTheme => {
                if self.music_playing {
                    self.backend.stop_music();
                    self.music_playing = false;
                }
            }
            AudioCue::Effect(effect, vol) => {
                if vol > 0.0 {
                    self.backend.play_effect(effect, vol);
                }
            }
        }
    }

    /// React to a batch of events in order
    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}

impl Default for AudioManager<NullAudio> {
    fn default() -> Self {
        Self::new(NullAudio)
    }
}
