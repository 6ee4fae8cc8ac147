//! Window entity module
//!
//! Provides the per-window state machine, its derived interaction regions,
//! lifecycle events, and chrome rendering.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod event;
mod region;
mod render;
mod state;
mod theme;
mod zorder;

pub use window::{ContentRenderer, InteractionContext, Window};
pub use config::WindowConfig;
pub use event::{WindowEvent, WindowEventKind};
pub use region::{regions_for, region_at, Capabilities, CursorHint, InteractionRegion, RegionKind};
pub use state::{WindowPhase, WindowState};
pub use theme::Theme;
pub use zorder::ZOrder;

/// Unique window identifier
pub type WindowId = u64;

/// Draw group name used for a window's pixels on the shared surface
#[inline]
pub fn draw_group(id: WindowId) -> String {
    format!("window-{id}")
}
