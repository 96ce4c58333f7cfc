//! Game settings and preferences
//!
//! Read from a JSON file at startup; never written back. Every field has a
//! default, so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::{AudioBackend, AudioManager};
use crate::consts::TICKS_PER_SECOND;
use crate::platform::HandOrientation;
use crate::tuning::Tuning;

/// Environment variable naming an alternate settings file
pub const SETTINGS_ENV: &str = "WUKONG_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How camera x maps onto screen x
    pub orientation: HandOrientation,
    /// Gameplay balance
    pub tuning: Tuning,
    /// Fixed RNG seed for reproducible sessions (random per session if unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Driver ===
    /// Stop a headless run after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orientation: HandOrientation::Mirrored,
            tuning: Tuning::default(),
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,

            // Ten minutes
            max_ticks: TICKS_PER_SECOND as u64 * 60 * 10,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.validated();
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `$WUKONG_SETTINGS`, else `./settings.json`, else defaults
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::load_from(Path::new(DEFAULT_SETTINGS_FILE)),
        }
    }

    /// Build an audio manager configured with these volumes
    pub fn audio_manager<B: AudioBackend>(&self, backend: B) -> AudioManager<B> {
        let mut audio = AudioManager::new(backend);
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_music_volume(self.music_volume);
        audio.set_muted(self.muted);
        audio
    }
}
