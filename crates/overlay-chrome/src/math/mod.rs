//! Core geometry types for window chrome
//!
//! Screen-space integer geometry. Everything here is a plain value type;
//! nothing depends on the host.

mod point;
mod rect;
mod size;
mod style;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};

/// Largest coordinate or dimension a window may take. Keeps every edge,
/// region and chrome offset representable as `i32`.
pub const COORD_LIMIT: i32 = 1 << 24;
