//! Width/height pair

use serde::{Deserialize, Serialize};

/// 2D size; both dimensions are kept non-negative by the constructors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size, clamping negative dimensions to zero
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Clamp to a minimum and an optional maximum.
    ///
    /// The minimum wins when the two conflict.
    pub fn clamp_to(self, min: Size, max: Option<Size>) -> Self {
        let (mut width, mut height) = (self.width, self.height);
        if let Some(max) = max {
            width = width.min(max.width);
            height = height.min(max.height);
        }
        Size::new(width.max(min.width), height.max(min.height))
    }

    /// Cap both dimensions at `COORD_LIMIT`
    #[inline]
    pub fn bounded(self) -> Size {
        Size::new(self.width.min(super::COORD_LIMIT), self.height.min(super::COORD_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_negative_clamped() {
        let s = Size::new(-10, 50);
        assert_eq!(s, Size::new(0, 50));
    }

    #[test]
    fn test_size_clamp_to() {
        let min = Size::new(200, 100);
        let max = Some(Size::new(800, 600));

        assert_eq!(Size::new(50, 700).clamp_to(min, max), Size::new(200, 600));
        assert_eq!(Size::new(300, 300).clamp_to(min, None), Size::new(300, 300));
        assert_eq!(Size::new(-5, -5).clamp_to(min, None), min);
    }

    #[test]
    fn test_size_clamp_min_beats_max() {
        let clamped = Size::new(50, 50).clamp_to(Size::new(200, 100), Some(Size::new(100, 80)));
        assert_eq!(clamped, Size::new(200, 100));
    }
}
