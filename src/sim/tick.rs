//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one tick. The only input is the hand
//! signal; everything the outside world needs to react to comes back as
//! [`GameEvent`]s queued on the state.

use super::field::Resolution;
use super::state::{GameEvent, GameState, ObstacleKind};
use crate::Point;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Lives reached zero this tick; the session is over
    LivesDepleted,
}

/// Horizontal control zone a hand position falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Hold,
    Right,
}

impl Steer {
    /// Split the screen in thirds: left third steers left, right third steers right
    pub fn from_hand_x(x: f32, screen_width: f32) -> Self {
        if x < screen_width / 3.0 {
            Steer::Left
        } else if x > 2.0 * screen_width / 3.0 {
            Steer::Right
        } else {
            Steer::Hold
        }
    }

    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            Steer::Left => -speed,
            Steer::Hold => 0.0,
            Steer::Right => speed,
        }
    }
}

impl GameState {
    /// Advance the session by one tick.
    ///
    /// A missing hand signal leaves the player's velocity untouched, so the
    /// player keeps drifting in the last commanded direction until the wall.
    pub fn advance(&mut self, hand_signal: Option<Point>) -> TickOutcome {
        if self.lives == 0 {
            return TickOutcome::LivesDepleted;
        }

        self.time_ticks += 1;

        // Input mapping
        if let Some(hand) = hand_signal {
            let steer = Steer::from_hand_x(hand.x, self.tuning.screen_width);
            self.player.velocity_x = steer.velocity(self.tuning.player_speed);
        }

        // Integration
        self.player.integrate(&self.tuning);

        // Spawning
        self.ticks_since_spawn = self.ticks_since_spawn.saturating_add(1);
        if self.ticks_since_spawn > self.tuning.spawn_interval_ticks {
            let obstacle = self.field.spawn(self.tuning.screen_width, self.obstacle_base_speed);
            log::debug!(
                "Spawned {:?} at x={} size={} speed={}",
                obstacle.kind,
                obstacle.bounds.left(),
                obstacle.bounds.size.x,
                obstacle.speed
            );
            self.events.push(GameEvent::ObstacleSpawned {
                kind: obstacle.kind,
            });
            self.field.push(obstacle);
            self.ticks_since_spawn = 0;
        }
        if !self.first_obstacle_spawned && !self.field.is_empty() {
            self.first_obstacle_spawned = true;
        }

        // Fall, then collide / prune
        self.field.advance();
        let hitbox = self.player.hitbox(&self.tuning);
        for resolution in self.field.resolve(&hitbox, self.tuning.screen_height) {
            self.apply_resolution(resolution);
        }

        // Derived fields
        self.difficulty = self.tuning.difficulty_for(self.score);
        self.obstacle_base_speed = self.tuning.base_speed_for(self.difficulty);

        if self.lives == 0 {
            log::debug!("Lives depleted at tick {} with score {}", self.time_ticks, self.score);
            TickOutcome::LivesDepleted
        } else {
            TickOutcome::Continue
        }
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Hit(ObstacleKind::Hazard) => {
                self.lives = self.lives.saturating_sub(1);
                log::debug!("Hazard hit, {} lives left", self.lives);
                self.events.push(GameEvent::CollisionHazard);
            }
            Resolution::Hit(ObstacleKind::Bonus) => {
                let points = self.tuning.bonus_points;
                self.score = self.score.saturating_add(points);
                log::debug!("Bonus collected, score {}", self.score);
                self.events.push(GameEvent::BonusCollected { points });
            }
            Resolution::Dodged => {
                self.score = self.score.saturating_add(self.tuning.dodge_points);
                self.events.push(GameEvent::ObstacleDodged);
            }
        }
    }
}
