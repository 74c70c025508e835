//! Axis-aligned rectangle used for every body in the game
//!
//! Coordinates are screen-space: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (never negative)
    pub size: Vec2,
}

impl Rect {
    /// Negative extents are clamped to zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.pos.x = left;
    }

    /// Move so the right edge sits at `right`, keeping the width
    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    /// Move so the bottom edge sits at `bottom`, keeping the height
    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Translate in place
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test. Rects that only share an edge do not intersect,
    /// and a zero-area rect never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlap extent on each axis (zero on an axis with no overlap)
    pub fn overlap(&self, other: &Rect) -> Vec2 {
        let x = self.right().min(other.right()) - self.left().max(other.left());
        let y = self.bottom().min(other.bottom()) - self.top().max(other.top());
        Vec2::new(x.max(0.0), y.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(300.0, 435.0, 40.0, 15.0);
        assert_eq!(r.left(), 300.0);
        assert_eq!(r.right(), 340.0);
        assert_eq!(r.top(), 435.0);
        assert_eq!(r.bottom(), 450.0);
        assert_eq!(r.center(), Vec2::new(320.0, 442.5));
    }

    #[test]
    fn test_negative_size_clamped() {
        let r = Rect::new(0.0, 0.0, -5.0, 3.0);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut r = Rect::new(10.0, 10.0, 5.0, 5.0);
        r.set_bottom(434.0);
        assert_eq!(r.bottom(), 434.0);
        assert_eq!(r.top(), 429.0);
        r.set_right(640.0);
        assert_eq!(r.left(), 635.0);
        assert_eq!(r.size, Vec2::splat(5.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_zero_area_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let dot = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!a.intersects(&dot));
        assert!(!dot.intersects(&a));
    }

    #[test]
    fn test_overlap_depths() {
        let block = Rect::new(0.0, 0.0, 64.0, 160.0);
        let ball = Rect::new(62.0, 157.0, 5.0, 5.0);
        assert_eq!(ball.overlap(&block), Vec2::new(2.0, 3.0));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, aw in 0.0f32..50.0, ah in 0.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, bw in 0.0f32..50.0, bh in 0.0f32..50.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn size_is_never_negative(w in -100.0f32..100.0, h in -100.0f32..100.0) {
            let r = Rect::new(0.0, 0.0, w, h);
            prop_assert!(r.width() >= 0.0 && r.height() >= 0.0);
            prop_assert!(r.right() >= r.left() && r.bottom() >= r.top());
        }
    }
}
