//! Window state snapshot

use serde::Serialize;
use crate::math::{Point, Size};
use super::WindowId;

/// Coarse lifecycle phase, as the manager sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPhase {
    Visible,
    Hidden,
    Minimized,
    Maximized,
    Closed,
}

/// Point-in-time copy of a window's state
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub id: WindowId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub visible: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
    pub dragging: bool,
    pub resizing: bool,
    pub z_index: u32,
    pub last_interaction_ms: f64,
    pub phase: WindowPhase,
}
