//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives in [`Tuning`], so a
//! settings file can rebalance the game without touching the sim code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay rules for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub player_sprite_width: f32,
    pub player_sprite_height: f32,
    /// Width used when clamping the player against the right edge
    pub player_width: f32,
    pub player_speed: f32,

    pub hitbox_offset_x: f32,
    pub hitbox_offset_y: f32,
    pub hitbox_size: f32,

    pub spawn_interval_ticks: u32,
    pub obstacle_min_size: u32,
    pub obstacle_max_size: u32,
    /// Probability that a spawned obstacle is a hazard (otherwise bonus)
    pub hazard_probability: f64,

    pub bonus_points: u64,
    pub dodge_points: u64,
    pub points_per_level: u64,
    pub starting_score: u64,
    pub starting_lives: u8,

    pub base_speed: f32,
    pub speed_per_level: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_sprite_width: PLAYER_SPRITE_WIDTH,
            player_sprite_height: PLAYER_SPRITE_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_speed: PLAYER_SPEED,
            hitbox_offset_x: HITBOX_OFFSET_X,
            hitbox_offset_y: HITBOX_OFFSET_Y,
            hitbox_size: HITBOX_SIZE,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            hazard_probability: HAZARD_PROBABILITY,
            bonus_points: BONUS_POINTS,
            dodge_points: DODGE_POINTS,
            points_per_level: POINTS_PER_LEVEL,
            starting_score: STARTING_SCORE,
            starting_lives: STARTING_LIVES,
            base_speed: BASE_SPEED,
            speed_per_level: SPEED_PER_LEVEL,
        }
    }
}

impl Tuning {
    /// Difficulty level for a score (1-based, one level per `points_per_level`)
    pub fn difficulty_for(&self, score: u64) -> u32 {
        let per_level = self.points_per_level.max(1);
        (score / per_level + 1).min(u32::MAX as u64) as u32
    }

    /// Fall speed for obstacles spawned at a difficulty level
    pub fn base_speed_for(&self, difficulty: u32) -> f32 {
        self.base_speed + difficulty as f32 * self.speed_per_level
    }

    /// Rightmost x the player may occupy
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        (self.screen_width - self.player_width).max(0.0)
    }

    /// Fixed y of the player sprite (bottom-aligned)
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.screen_height - self.player_sprite_height
    }

    /// Sanitize values a hand-edited settings file could break
    pub fn validated(mut self) -> Self {
        if self.obstacle_min_size > self.obstacle_max_size {
            std::mem::swap(&mut self.obstacle_min_size, &mut self.obstacle_max_size);
        }
        self.hazard_probability = self.hazard_probability.clamp(0.0, 1.0);
        self.screen_width = self.screen_width.max(self.obstacle_max_size as f32);
        // Scores are unsigned, so only lives need bounding
        self.starting_lives = self.starting_lives.clamp(1, STARTING_LIVES);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_levels() {
        let tuning = Tuning::default();
        assert_eq!(tuning.difficulty_for(0), 1);
        assert_eq!(tuning.difficulty_for(1), 1);
        assert_eq!(tuning.difficulty_for(19), 1);
        assert_eq!(tuning.difficulty_for(20), 2);
        assert_eq!(tuning.difficulty_for(45), 3);
    }

    #[test]
    fn test_base_speed_formula() {
        let tuning = Tuning::default();
        assert!((tuning.base_speed_for(1) - 3.5).abs() < f32::EPSILON);
        assert!((tuning.base_speed_for(4) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validated_fixes_inverted_sizes() {
        let tuning = Tuning {
            obstacle_min_size: 80,
            obstacle_max_size: 30,
            hazard_probability: 1.7,
            ..Default::default()
        }
        .validated();
        assert_eq!(tuning.obstacle_min_size, 30);
        assert_eq!(tuning.obstacle_max_size, 80);
        assert_eq!(tuning.hazard_probability, 1.0);
    }

    #[test]
    fn test_validated_clamps_starting_lives() {
        let many = Tuning {
            starting_lives: 200,
            ..Default::default()
        };
        assert_eq!(many.validated().starting_lives, 3);
        let none = Tuning {
            starting_lives: 0,
            ..Default::default()
        };
        assert_eq!(none.validated().starting_lives, 1);
        assert_eq!(Tuning::default().validated(), Tuning::default());
    }

    #[test]
    fn test_player_geometry() {
        let tuning = Tuning::default();
        assert_eq!(tuning.max_player_x(), 480.0);
        assert_eq!(tuning.player_y(), 500.0);
    }
}
