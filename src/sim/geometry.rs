//! Axis-aligned box geometry for hitboxes
//!
//! All boxes live in screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            size: self.size - Vec2::splat(2.0 * amount),
        }
    }

    /// Sub-box given as fractions of this box (`from`/`to` in 0..1 per axis)
    pub fn fraction(&self, from: Vec2, to: Vec2) -> Self {
        Self {
            min: self.min + self.size * from,
            size: self.size * (to - from),
        }
    }

    /// Move horizontally (world to screen uses `-camera_x`)
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x + dx, self.min.y),
            size: self.size,
        }
    }

    /// Strict overlap test; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// Closest point inside the box to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max())
    }

    /// Circle versus box distance test
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        center.distance_squared(self.closest_point(center)) < radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(100.0, 400.0, 50.0, 50.0).inset(10.0);
        assert_eq!(r, Rect::new(110.0, 410.0, 30.0, 30.0));
    }

    #[test]
    fn test_fraction() {
        let r = Rect::new(0.0, 0.0, 40.0, 40.0).fraction(Vec2::new(0.25, 0.3), Vec2::new(0.75, 1.0));
        assert!((r.min.x - 10.0).abs() < 1e-4);
        assert!((r.min.y - 12.0).abs() < 1e-4);
        assert!((r.size.x - 20.0).abs() < 1e-4);
        assert!((r.size.y - 28.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_circle(Vec2::new(5.0, 5.0), 1.0));
        assert!(r.intersects_circle(Vec2::new(15.0, 5.0), 6.0));
        assert!(!r.intersects_circle(Vec2::new(30.0, 5.0), 6.0));
    }
}
