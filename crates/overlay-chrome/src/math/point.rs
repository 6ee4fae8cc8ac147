//! Screen-space point

use serde::{Deserialize, Serialize};

/// Screen-space point with integer coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both coordinates to `[-COORD_LIMIT, COORD_LIMIT]`
    #[inline]
    pub fn bounded(self) -> Point {
        Point::new(
            self.x.clamp(-super::COORD_LIMIT, super::COORD_LIMIT),
            self.y.clamp(-super::COORD_LIMIT, super::COORD_LIMIT),
        )
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

impl std::ops::Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}
