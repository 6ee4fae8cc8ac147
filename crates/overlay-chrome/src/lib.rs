//! Virtual window chrome for overlay hosts
//!
//! The host draws retained-mode shapes into named draw groups and can tell
//! where the cursor is, but never delivers pointer events. This crate puts
//! desktop-style windows on such a surface:
//! - Window lifecycle, focus and z-order
//! - Chrome rendering (shadow, border, title bar, control buttons)
//! - Click, drag and hover synthesized from polled cursor samples
//! - Cascade, tile and center layouts
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry (`Point`, `Size`, `Rect`) and frame metrics
//! - [`host`]: Traits the host implements (surface, cursor, clock)
//! - [`window`]: The window entity, its regions, events and rendering
//! - [`input`]: The polling interaction engine
//! - [`manager`]: The window manager tying windows and the engine together
//! - [`driver`]: A blocking loop for hosts without their own timer
//!
//! ## Example
//!
//! ```rust
//! use overlay_chrome::{Rect, WindowConfig, WindowManager};
//!
//! let mut manager = WindowManager::default();
//! let id = manager
//!     .create_window(WindowConfig::new("Inventory", Rect::new(100, 100, 400, 300)))
//!     .unwrap();
//!
//! assert_eq!(manager.focused_id(), Some(id));
//! manager.tile_windows();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Host-agnostic core**: everything outside `wasm` runs without a host
//! 2. **Injectable time**: gesture recognition reads an injected clock
//! 3. **Events as data**: windows record what happened; the manager reacts

pub mod driver;
pub mod error;
pub mod host;
pub mod input;
pub mod manager;
pub mod math;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use driver::run_polling_loop;
pub use error::{ConfigError, SurfaceError, WindowError};
pub use host::{
    Clock, Color, CursorSource, HostBindings, OverlaySurface, RectStyle, SharedClock, SharedSurface,
    SystemClock,
};
pub use input::{
    HoverMode, InteractionConfig, InteractionEngine, InteractionEvent, InteractionKind, TrackingSwitch,
};
pub use manager::{tile_cell, tile_grid, ListenerId, ManagerConfig, ManagerSnapshot, WindowManager};
pub use math::{FrameStyle, Point, Rect, Size, COORD_LIMIT, FRAME_STYLE};
pub use window::{
    ContentRenderer, InteractionRegion, RegionKind, Theme, Window, WindowConfig, WindowEvent,
    WindowEventKind, WindowId, WindowPhase, WindowState,
};
