//! Game state and core simulation types
//!
//! One owned [`GameState`] per session. Nothing here is process-global; a new
//! session simply builds a fresh value.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::field::ObstacleField;
use crate::tuning::Tuning;

/// What happens when the player touches an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Costs a life
    Hazard,
    /// Awards bonus points
    Bonus,
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Rect,
    /// Fall speed (pixels/tick), fixed at spawn time
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, bounds: Rect, speed: f32) -> Self {
        Self {
            bounds,
            speed,
            kind,
        }
    }

    /// Move down by this obstacle's own speed
    pub fn fall(&mut self) {
        self.bounds.shift_down(self.speed);
    }
}

/// The player sprite. Only moves horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
}

impl PlayerState {
    /// Player centered horizontally, standing on the bottom edge
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.screen_width / 2.0).floor().min(tuning.max_player_x()),
            y: tuning.player_y(),
            velocity_x: 0.0,
        }
    }

    /// Full sprite bounds (for drawing)
    pub fn sprite(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x,
            self.y,
            tuning.player_sprite_width,
            tuning.player_sprite_height,
        )
    }

    /// Collision box, offset from the sprite's top-left (not the full sprite)
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        Rect::square(
            self.x + tuning.hitbox_offset_x,
            self.y + tuning.hitbox_offset_y,
            tuning.hitbox_size,
        )
    }

    /// Move by the current velocity and clamp into the play field
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.x = (self.x + self.velocity_x).clamp(0.0, tuning.max_player_x());
    }
}

/// Discrete side effects for audio/overlay consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh session began (theme music starts)
    SessionStarted,
    ObstacleSpawned { kind: ObstacleKind },
    /// The player ran into a hazard and lost a life
    CollisionHazard,
    BonusCollected { points: u64 },
    /// An obstacle fell off the bottom of the screen
    ObstacleDodged,
    /// Lives ran out (theme music stops)
    SessionEnded { score: u64 },
}

/// Complete state of one play session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Rules this session was started with
    pub tuning: Tuning,
    /// Seed the obstacle RNG was started from
    pub seed: u64,
    pub player: PlayerState,
    /// Live obstacles and their spawn RNG
    pub field: ObstacleField,
    pub score: u64,
    pub lives: u8,
    /// Derived: `score / points_per_level + 1`, recomputed every tick
    pub difficulty: u32,
    /// Derived: speed given to obstacles spawned from now on
    pub obstacle_base_speed: f32,
    /// Ticks elapsed since the last spawn
    pub ticks_since_spawn: u32,
    pub first_obstacle_spawned: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session state with the given seed
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            tuning: tuning.clone(),
            seed,
            player: PlayerState::new(tuning),
            field: ObstacleField::new(tuning, seed),
            score: tuning.starting_score,
            lives: tuning.starting_lives,
            difficulty: tuning.difficulty_for(tuning.starting_score),
            // Becomes the derived value after the first tick
            obstacle_base_speed: tuning.base_speed,
            ticks_since_spawn: 0,
            first_obstacle_spawned: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.field.obstacles
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Take all pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.difficulty, 1);
        assert_eq!(state.obstacle_base_speed, 3.0);
        assert!(state.obstacles().is_empty());
        assert!(!state.first_obstacle_spawned);
        assert_eq!(state.player.x, 290.0);
        assert_eq!(state.player.y, 500.0);
    }

    #[test]
    fn test_hitbox_offset_from_sprite() {
        let tuning = Tuning::default();
        let player = PlayerState::new(&tuning);
        let sprite = player.sprite(&tuning);
        let hitbox = player.hitbox(&tuning);
        assert_eq!(hitbox.left(), sprite.left() + 50.0);
        assert_eq!(hitbox.top(), sprite.top());
        assert!(hitbox.bottom() <= sprite.bottom());
    }

    #[test]
    fn test_integrate_clamps() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(&tuning);
        player.velocity_x = 1000.0;
        player.integrate(&tuning);
        assert_eq!(player.x, tuning.max_player_x());
        player.velocity_x = -1000.0;
        player.integrate(&tuning);
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_same_seed_same_state() {
        let tuning = Tuning::default();
        assert_eq!(GameState::new(&tuning, 9), GameState::new(&tuning, 9));
    }
}
