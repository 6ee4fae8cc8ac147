//! Window lifecycle events

use serde::Serialize;
use crate::math::{Point, Rect, Size};
use super::WindowId;

/// What happened to a window, with a payload typed per kind
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WindowEventKind {
    Created { bounds: Rect },
    Moved { position: Point },
    Resized { size: Size },
    Focused { z_index: u32 },
    Blurred,
    Minimized,
    Restored { bounds: Rect },
    Maximized { bounds: Rect },
    Shown,
    Hidden,
    Closed,
}

impl WindowEventKind {
    /// Check if this event changed the window's geometry
    #[inline]
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            WindowEventKind::Moved { .. }
                | WindowEventKind::Resized { .. }
                | WindowEventKind::Maximized { .. }
                | WindowEventKind::Restored { .. }
        )
    }
}

/// Lifecycle event tagged with its window and time
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEvent {
    pub window_id: WindowId,
    #[serde(flatten)]
    pub kind: WindowEventKind,
    pub timestamp_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = WindowEvent {
            window_id: 3,
            kind: WindowEventKind::Moved {
                position: Point::new(5, 6),
            },
            timestamp_ms: 12.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "moved");
        assert_eq!(json["windowId"], 3);
        assert_eq!(json["position"]["x"], 5);
    }

    #[test]
    fn test_geometry_kinds() {
        assert!(WindowEventKind::Resized { size: Size::new(1, 1) }.is_geometry());
        assert!(!WindowEventKind::Blurred.is_geometry());
        assert!(!WindowEventKind::Closed.is_geometry());
    }
}
