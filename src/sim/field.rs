//! Obstacle field: spawning, falling, and pruning
//!
//! The field owns every live obstacle plus the seeded RNG that generates new
//! ones, so a given seed always produces the same obstacle sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Rect, has_left_screen};
use super::state::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Spawn parameters copied out of [`Tuning`]
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRules {
    pub min_size: u32,
    pub max_size: u32,
    pub hazard_probability: f64,
}

impl From<&Tuning> for SpawnRules {
    fn from(tuning: &Tuning) -> Self {
        Self {
            min_size: tuning.obstacle_min_size.min(tuning.obstacle_max_size),
            max_size: tuning.obstacle_max_size.max(tuning.obstacle_min_size),
            hazard_probability: tuning.hazard_probability,
        }
    }
}

/// How an obstacle left the field this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Touched the player hitbox
    Hit(ObstacleKind),
    /// Fell past the bottom edge untouched
    Dodged,
}

/// The set of live obstacles
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    rules: SpawnRules,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            rules: SpawnRules::from(tuning),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate a new obstacle just above the visible area, falling at
    /// `speed` for the rest of its life.
    ///
    /// Callers pass the current base speed (see [`Tuning::base_speed_for`]).
    /// The obstacle is returned, not inserted; see [`ObstacleField::push`].
    pub fn spawn(&mut self, screen_width: f32, speed: f32) -> Obstacle {
        let size = self.rng.random_range(self.rules.min_size..=self.rules.max_size);
        let max_x = (screen_width as i64 - size as i64).max(0) as u32;
        let x = self.rng.random_range(0..=max_x);
        // Compare against a uniform draw rather than `random_bool` so an
        // out-of-range probability can't panic
        let kind = if self.rng.random::<f64>() < self.rules.hazard_probability {
            ObstacleKind::Hazard
        } else {
            ObstacleKind::Bonus
        };
        let size = size as f32;
        Obstacle::new(kind, Rect::square(x as f32, -size, size), speed)
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Move every obstacle down by its own speed
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.fall();
        }
    }

    /// Remove obstacles that hit the player or left the screen.
    ///
    /// Works on a snapshot of the live set and keeps only the survivors. A hit
    /// is checked before the bottom edge, so one obstacle yields at most one
    /// resolution.
    pub fn resolve(&mut self, hitbox: &Rect, screen_height: f32) -> Vec<Resolution> {
        let snapshot = std::mem::take(&mut self.obstacles);
        let mut resolved = Vec::new();

        self.obstacles = snapshot
            .into_iter()
            .filter(|obstacle| {
                if obstacle.bounds.intersects(hitbox) {
                    resolved.push(Resolution::Hit(obstacle.kind));
                    false
                } else if has_left_screen(&obstacle.bounds, screen_height) {
                    resolved.push(Resolution::Dodged);
                    false
                } else {
                    true
                }
            })
            .collect();

        resolved
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> ObstacleField {
        ObstacleField::new(&Tuning::default(), seed)
    }

    fn speed_at(difficulty: u32) -> f32 {
        Tuning::default().base_speed_for(difficulty)
    }

    #[test]
    fn test_spawn_within_bounds() {
        let mut field = field(42);
        for _ in 0..500 {
            let o = field.spawn(580.0, speed_at(1));
            let size = o.bounds.size.x;
            assert_eq!(o.bounds.size.x, o.bounds.size.y);
            assert!((40.0..=70.0).contains(&size));
            assert!(o.bounds.left() >= 0.0);
            assert!(o.bounds.right() <= 580.0);
            assert_eq!(o.bounds.top(), -size);
            assert_eq!(o.bounds.bottom(), 0.0);
        }
    }

    #[test]
    fn test_spawn_uses_given_speed() {
        let mut field = field(1);
        assert_eq!(field.spawn(580.0, speed_at(1)).speed, 3.5);
        assert_eq!(field.spawn(580.0, speed_at(3)).speed, 4.5);
    }

    #[test]
    fn test_spawn_kind_ratio() {
        let mut field = field(7);
        let hazards = (0..5000)
            .filter(|_| field.spawn(580.0, 3.5).kind == ObstacleKind::Hazard)
            .count();
        // 80% expected; wide tolerance keeps this stable across RNG changes
        assert!((3700..4300).contains(&hazards), "hazards = {hazards}");
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let mut a = field(99);
        let mut b = field(99);
        for _ in 0..20 {
            assert_eq!(a.spawn(580.0, 4.0), b.spawn(580.0, 4.0));
        }
    }

    #[test]
    fn test_speed_not_updated_retroactively() {
        let mut field = field(3);
        let early = field.spawn(580.0, speed_at(1));
        field.push(early);
        let late = field.spawn(580.0, speed_at(5));
        field.push(late);
        assert_eq!(field.obstacles[0].speed, 3.5);
        assert_eq!(field.obstacles[1].speed, 5.5);
    }

    #[test]
    fn test_resolve_hit_before_boundary() {
        let mut field = field(0);
        // Overlaps the hitbox AND is already past the bottom edge
        field.push(Obstacle::new(
            ObstacleKind::Bonus,
            Rect::square(0.0, 100.0, 40.0),
            0.0,
        ));
        let hitbox = Rect::square(0.0, 110.0, 70.0);
        let resolved = field.resolve(&hitbox, 100.0);
        assert_eq!(resolved, vec![Resolution::Hit(ObstacleKind::Bonus)]);
        assert!(field.is_empty());
    }

    #[test]
    fn test_resolve_keeps_survivors_in_order() {
        let mut field = field(0);
        for (i, y) in [0.0, 700.0, 10.0, 650.0, 20.0].into_iter().enumerate() {
            field.push(Obstacle::new(
                ObstacleKind::Hazard,
                Rect::square(i as f32, y, 40.0),
                1.0,
            ));
        }
        let far_away = Rect::square(1000.0, 1000.0, 10.0);
        let resolved = field.resolve(&far_away, 620.0);
        assert_eq!(resolved, vec![Resolution::Dodged, Resolution::Dodged]);
        let ys: Vec<f32> = field.obstacles.iter().map(|o| o.bounds.top()).collect();
        assert_eq!(ys, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_advance_uses_own_speed() {
        let mut field = field(0);
        field.push(Obstacle::new(ObstacleKind::Hazard, Rect::square(0.0, 0.0, 40.0), 2.0));
        field.push(Obstacle::new(ObstacleKind::Bonus, Rect::square(0.0, 0.0, 40.0), 5.0));
        field.advance();
        assert_eq!(field.obstacles[0].bounds.top(), 2.0);
        assert_eq!(field.obstacles[1].bounds.top(), 5.0);
    }
}
