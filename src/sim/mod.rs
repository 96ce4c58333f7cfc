//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `GameState::advance` is one tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or camera dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{Rect, has_left_screen};
pub use field::{ObstacleField, Resolution, SpawnRules};
pub use state::{GameEvent, GameState, Obstacle, ObstacleKind, PlayerState};
pub use tick::{Steer, TickOutcome};
