//! Wukong Dodge - a hand-tracked obstacle dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, collisions, scoring)
//! - `session`: Menu / tutorial / playing / game-over state machine
//! - `platform`: Hand signal sources (camera tracker adapter, scripted input)
//! - `ui`: Menu hit-testing, key bindings and HUD text
//! - `audio`: Event-driven sound cues
//! - `tuning`: Data-driven game balance
//! - `settings`: User configuration loaded from JSON

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use session::{Control, SessionCommand, SessionController, SessionPhase};
pub use settings::Settings;
pub use tuning::Tuning;

/// Screen-space point (origin top-left, y grows downward)
pub type Point = glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate the core assumes (the pacing clock lives outside the core)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 580.0;
    pub const SCREEN_HEIGHT: f32 = 620.0;

    /// Player sprite size
    pub const PLAYER_SPRITE_WIDTH: f32 = 115.0;
    pub const PLAYER_SPRITE_HEIGHT: f32 = 120.0;
    /// Width used for clamping against the right edge (narrower than the sprite)
    pub const PLAYER_WIDTH: f32 = 100.0;
    /// Horizontal speed while the hand is in a side zone (pixels/tick)
    pub const PLAYER_SPEED: f32 = 14.0;

    /// Hitbox inset from the player sprite's top-left corner
    pub const HITBOX_OFFSET_X: f32 = 50.0;
    pub const HITBOX_OFFSET_Y: f32 = 0.0;
    pub const HITBOX_SIZE: f32 = 70.0;

    /// 1600 ms between spawns at 60 Hz
    pub const SPAWN_INTERVAL_TICKS: u32 = 96;
    pub const OBSTACLE_MIN_SIZE: u32 = 40;
    pub const OBSTACLE_MAX_SIZE: u32 = 70;
    pub const HAZARD_PROBABILITY: f64 = 0.8;

    /// Scoring
    pub const BONUS_POINTS: u64 = 10;
    pub const DODGE_POINTS: u64 = 1;
    pub const POINTS_PER_LEVEL: u64 = 20;
    pub const STARTING_SCORE: u64 = 1;
    pub const STARTING_LIVES: u8 = 3;

    /// Obstacle speed = BASE_SPEED + difficulty * SPEED_PER_LEVEL
    pub const BASE_SPEED: f32 = 3.0;
    pub const SPEED_PER_LEVEL: f32 = 0.5;
}
