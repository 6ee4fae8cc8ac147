//! Synthesized interaction events

use serde::Serialize;
use crate::math::Point;
use crate::window::{RegionKind, WindowId};

/// Kind of synthesized interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Cursor moved fast, then came to rest over a region
    Click,
    /// Cursor moved while the window holds pointer capture
    Drag,
    /// Cursor is over one of the window's regions
    Hover,
    /// Cursor left the window (edge-triggered hover only)
    Leave,
}

/// Interaction routed to a single window
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    pub window_id: WindowId,
    pub kind: InteractionKind,
    /// Region under the cursor, if any
    pub region: Option<RegionKind>,
    pub cursor: Point,
    pub timestamp_ms: f64,
}

impl InteractionEvent {
    pub fn new(
        window_id: WindowId,
        kind: InteractionKind,
        region: Option<RegionKind>,
        cursor: Point,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            window_id,
            kind,
            region,
            cursor,
            timestamp_ms,
        }
    }
}
