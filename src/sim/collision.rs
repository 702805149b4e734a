//! Axis-aligned rectangles and overlap tests
//!
//! Everything in the world collides as an integer box: the player body,
//! obstacles, and the bounding squares of coins and power-ups.

use glam::IVec2;

/// An integer axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square bounding box of a circle
    pub fn around(center: IVec2, radius: i32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2, radius * 2)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Grow (or shrink) around the centre by the given total amounts
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    /// Strict overlap test. Touching edges and empty rectangles never collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_empty_rect_never_collides() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(5, 5, 0, 4);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_circle_bounds_and_inflate() {
        let r = Rect::around(IVec2::new(50, 60), 10);
        assert_eq!(r, Rect::new(40, 50, 20, 20));
        assert_eq!(r.center(), IVec2::new(50, 60));

        let grown = r.inflate(20, 18);
        assert_eq!(grown, Rect::new(30, 41, 40, 38));
        assert_eq!(grown.center(), r.center());
    }
}
