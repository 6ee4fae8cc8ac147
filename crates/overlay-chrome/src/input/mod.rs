//! Synthetic interaction module
//!
//! The host never delivers pointer events, so everything here is inferred
//! from polled cursor samples: clicks, drags and hovers.

mod config;
mod engine;
mod event;
mod gesture;
mod tracking;

pub use config::{HoverMode, InteractionConfig};
pub use engine::{InteractionCallback, InteractionEngine};
pub use event::{InteractionEvent, InteractionKind};
pub use gesture::Gesture;
pub use tracking::TrackingSwitch;

use crate::math::{Point, Size};

/// Window origin after a move gesture.
///
/// Always computed from the anchors captured when the gesture began, never
/// from the previous sample, so dropped ticks cannot accumulate drift.
#[inline]
pub fn calculate_move(anchor_position: Point, anchor_cursor: Point, cursor: Point) -> Point {
    anchor_position + (cursor - anchor_cursor)
}

/// Window size after a bottom-right resize gesture (before min/max clamping)
#[inline]
pub fn calculate_resize(anchor_size: Size, anchor_cursor: Point, cursor: Point) -> Size {
    let delta = cursor - anchor_cursor;
    Size::new(
        anchor_size.width.saturating_add(delta.x),
        anchor_size.height.saturating_add(delta.y),
    )
}
