//! In-progress pointer gesture for a single window

use crate::math::{Point, Size};

/// Active gesture.
///
/// A window holds at most one of these, so it can never be dragging and
/// resizing at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Moving the window by its title bar
    Move {
        /// Cursor position when the gesture began
        anchor_cursor: Point,
        /// Window position when the gesture began
        anchor_position: Point,
    },
    /// Resizing from the bottom-right handle
    Resize {
        /// Cursor position when the gesture began
        anchor_cursor: Point,
        /// Window position when the gesture began
        anchor_position: Point,
        /// Window size when the gesture began
        anchor_size: Size,
    },
}

impl Gesture {
    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Gesture::Move { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_gesture() {
        let gesture = Gesture::Move {
            anchor_cursor: Point::new(10, 20),
            anchor_position: Point::new(0, 0),
        };
        assert!(gesture.is_move());
        assert!(!gesture.is_resize());
    }

    #[test]
    fn test_resize_gesture() {
        let gesture = Gesture::Resize {
            anchor_cursor: Point::new(400, 300),
            anchor_position: Point::new(100, 100),
            anchor_size: Size::new(300, 200),
        };
        assert!(gesture.is_resize());
        assert!(!gesture.is_move());
    }
}
