//! Retained-mode drawing surface

use std::rc::Rc;

use crate::error::SurfaceError;
use crate::math::{Point, Rect};
use super::Color;

/// How a rectangle is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectStyle {
    /// Solid fill
    Filled,
    /// Outline with the given line width
    Outline { width: u32 },
}

/// Grouped overlay drawing API exposed by the host.
///
/// Draws persist until their group is cleared. Freezing a group suspends
/// its auto-refresh while a batch is issued; continuing it resumes the
/// refresh so the last batch keeps being shown.
pub trait OverlaySurface {
    fn draw_rect(&self, group: &str, rect: Rect, color: Color, style: RectStyle) -> Result<(), SurfaceError>;

    fn draw_text(&self, group: &str, text: &str, origin: Point, color: Color, size: u32) -> Result<(), SurfaceError>;

    fn draw_line(&self, group: &str, from: Point, to: Point, color: Color, width: u32) -> Result<(), SurfaceError>;

    fn clear_group(&self, group: &str) -> Result<(), SurfaceError>;

    fn freeze_group(&self, group: &str) -> Result<(), SurfaceError>;

    fn continue_group(&self, group: &str) -> Result<(), SurfaceError>;

    fn set_group_z_index(&self, group: &str, z_index: u32) -> Result<(), SurfaceError>;
}

/// Surface shared between the manager and every window it owns
pub type SharedSurface = Rc<dyn OverlaySurface>;
