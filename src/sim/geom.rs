//! Axis-aligned rectangles in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle whose bottom edge is centered on `anchor`
    pub fn from_midbottom(anchor: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y), size)
    }

    /// Rectangle whose top edge is centered on `anchor`
    pub fn from_midtop(anchor: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x - size.x / 2.0, anchor.y), size)
    }

    /// The screen rectangle anchored at the origin
    pub fn screen(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.top())
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// True if the two rectangles share a region of positive area.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Integer pixel origin used for mask alignment
    pub fn pixel_origin(&self) -> (i32, i32) {
        (self.pos.x.floor() as i32, self.pos.y.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midbottom_anchor() {
        let r = Rect::from_midbottom(Vec2::new(640.0, 940.0), Vec2::new(120.0, 120.0));
        assert_eq!(r.left(), 580.0);
        assert_eq!(r.top(), 820.0);
        assert_eq!(r.midbottom(), Vec2::new(640.0, 940.0));
    }

    #[test]
    fn test_midtop_anchor() {
        let r = Rect::from_midtop(Vec2::new(50.0, 10.0), Vec2::new(10.0, 20.0));
        assert_eq!(r.midtop(), Vec2::new(50.0, 10.0));
        assert_eq!(r.bottom(), 30.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Rect::new(Vec2::new(9.5, 9.5), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_pixel_origin_floors() {
        let r = Rect::new(Vec2::new(3.7, -0.5), Vec2::ONE);
        assert_eq!(r.pixel_origin(), (3, -1));
    }
}
