//! Axis-aligned rectangle geometry
//!
//! Everything the simulation collides or queries - characters, obstacles,
//! walkable surfaces, the whole level - is an axis-aligned rectangle. The
//! `Area` capability trait lets the track index and the narrow phase treat
//! them all uniformly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict-positive overlap on both axes; edge contact does not count.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Minimum-translation vector that moves `self` out of `other`.
    ///
    /// Returns `None` when the rectangles do not overlap. The vector is
    /// along the axis of least penetration, signed away from `other`'s
    /// center. Exactly coincident centers push `self` to the left so the
    /// result stays deterministic.
    pub fn penetration(&self, other: &Rect) -> Option<Vec2> {
        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);

        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        let delta = self.center() - other.center();

        if overlap_x < overlap_y {
            let sign = if delta.x >= 0.0 { 1.0 } else { -1.0 };
            // Coincident centers: pick left, deterministically
            let sign = if delta.x == 0.0 { -1.0 } else { sign };
            Some(Vec2::new(sign * overlap_x, 0.0))
        } else {
            let sign = if delta.y > 0.0 { 1.0 } else { -1.0 };
            Some(Vec2::new(0.0, sign * overlap_y))
        }
    }
}

/// Capability: anything with an axis-aligned rectangular footprint
pub trait Area {
    fn bounds(&self) -> Rect;
}

impl Area for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Rectangle overlap between any two areas
#[inline]
pub fn overlap(a: &impl Area, b: &impl Area) -> bool {
    a.bounds().overlaps(&b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_positive_area() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Edge contact is not overlap
        let c = Rect::new(2.0, 0.0, 2.0, 2.0);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));

        let d = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_penetration_picks_least_axis() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        // Overlaps a by 1 in x, 4 in y: must push along x
        let b = Rect::new(3.0, 0.0, 4.0, 4.0);

        let mtv = a.penetration(&b).unwrap();
        assert_eq!(mtv, Vec2::new(-1.0, 0.0));

        // And the mirror case pushes the other way
        let mtv = b.penetration(&a).unwrap();
        assert_eq!(mtv, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_penetration_none_when_apart() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, 2.0, 1.0, 1.0);
        assert!(a.penetration(&b).is_none());
    }

    #[test]
    fn test_penetration_resolves_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.5, 0.25, 2.0, 2.0);

        let mtv = a.penetration(&b).unwrap();
        let moved = Rect::new(a.x + mtv.x, a.y + mtv.y, a.width, a.height);
        assert!(!moved.overlaps(&b));
    }

    #[test]
    fn test_coincident_centers_deterministic() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(0.0, 0.0, 2.0, 2.0);
        let first = a.penetration(&b).unwrap();
        let second = a.penetration(&b).unwrap();
        assert_eq!(first, second);
        assert!(first.x < 0.0 || first.y != 0.0);
    }
}
