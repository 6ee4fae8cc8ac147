//! Polled cursor position

use crate::math::Point;

/// Source of cursor samples.
///
/// The host has no pointer events; the only thing it can do is report where
/// the cursor is right now.
pub trait CursorSource {
    /// Current cursor position, or `None` when the host cannot report one
    fn poll(&self) -> Option<Point>;
}

impl<F> CursorSource for F
where
    F: Fn() -> Option<Point>,
{
    fn poll(&self) -> Option<Point> {
        self()
    }
}
