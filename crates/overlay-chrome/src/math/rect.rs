//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Point, Size};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new rectangle, clamping negative dimensions to zero
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let size = Size::new(width, height);
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create from position and size
    #[inline]
    pub const fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle, edges included
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Translate rectangle by offset
    #[inline]
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(
            self.x.saturating_add(offset.x),
            self.y.saturating_add(offset.y),
            self.width,
            self.height,
        )
    }

    /// Shrink rectangle by amount on all sides
    #[inline]
    pub fn shrink(&self, amount: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(amount),
            self.y.saturating_add(amount),
            self.width.saturating_sub(amount.saturating_mul(2)),
            self.height.saturating_sub(amount.saturating_mul(2)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_inclusive_edges() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(Point::new(50, 40)));
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(110, 70)));
        assert!(rect.contains(Point::new(110, 20)));
        assert!(!rect.contains(Point::new(9, 40)));
        assert!(!rect.contains(Point::new(50, 71)));
    }

    #[test]
    fn test_rect_negative_size_clamped() {
        let rect = Rect::new(5, 5, -20, 10);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_pos_size(Point::new(100, 200), Size::new(300, 150));
        assert_eq!(rect.right(), 400);
        assert_eq!(rect.bottom(), 350);
        assert_eq!(rect.position(), Point::new(100, 200));
        assert_eq!(rect.size(), Size::new(300, 150));
    }

    #[test]
    fn test_rect_translate_and_shrink() {
        let rect = Rect::new(10, 10, 100, 100);
        assert_eq!(rect.translate(Point::new(5, -5)), Rect::new(15, 5, 100, 100));
        assert_eq!(rect.shrink(10), Rect::new(20, 20, 80, 80));
        assert_eq!(rect.shrink(80), Rect::new(90, 90, 0, 0));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(i32::MAX - 10, i32::MAX - 10, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
        assert!(rect.contains(Point::new(i32::MAX, i32::MAX)));
        assert_eq!(rect.translate(Point::new(50, 50)).x, i32::MAX);
    }
}
