//! Axis-aligned box geometry and overlap tests
//!
//! Everything in the play field is a screen-space rectangle: the player
//! hitbox, obstacles, and the screen itself. Coordinates grow right and down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square with the given top-left corner and side length
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, side, side)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Check if a point lies inside (edges inclusive on the top-left)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Move the rectangle down by `dy`
    pub fn shift_down(&mut self, dy: f32) {
        self.min.y += dy;
    }
}

/// True once a box's top edge has reached the bottom of the screen
#[inline]
pub fn has_left_screen(bounds: &Rect, screen_height: f32) -> bool {
    bounds.top() >= screen_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(40.0, 40.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let right = Rect::new(50.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 50.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_rect_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::square(10.0, 10.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(outer.contains(inner.center()));
    }

    #[test]
    fn test_has_left_screen() {
        let mut r = Rect::square(10.0, 615.0, 40.0);
        assert!(!has_left_screen(&r, 620.0));
        r.shift_down(5.0);
        assert!(has_left_screen(&r, 620.0));
    }
}
