//! Window manager for lifecycle, focus, z-order and interaction routing
//!
//! The manager owns every window and the interaction engine. Windows record
//! what happened to them as events; the manager drains those events after
//! every command, keeps its own bookkeeping (focus, region mirror, hit-test
//! order) in step, and forwards them to subscribers.

mod config;
mod events;
mod interaction;
mod layout;
mod windows;

pub use config::ManagerConfig;
pub use events::{ListenerId, WindowListener};
pub use layout::{tile_cell, tile_grid};

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde::Serialize;

use crate::host::{HostBindings, SharedClock, SharedSurface};
use crate::input::{InteractionEngine, InteractionEvent};
use crate::math::{Rect, Size};
use crate::window::{
    InteractionRegion, Window, WindowEvent, WindowEventKind, WindowId, WindowState, ZOrder,
};
use events::Listeners;

/// Serializable view of the whole manager
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSnapshot {
    pub viewport: Size,
    pub focused: Option<WindowId>,
    /// Back to front
    pub windows: Vec<WindowState>,
}

/// Owns the windows and coordinates focus, z-order and interaction
pub struct WindowManager {
    config: ManagerConfig,
    windows: HashMap<WindowId, Window>,
    /// Region sets as last derived from each window
    regions: HashMap<WindowId, Vec<InteractionRegion>>,
    focused: Option<WindowId>,
    z_order: ZOrder,
    next_id: WindowId,
    engine: InteractionEngine,
    /// Interaction events collected by the engine callbacks during a tick
    inbox: Rc<RefCell<VecDeque<InteractionEvent>>>,
    listeners: Listeners,
    /// Window events waiting to be applied and forwarded
    pending: VecDeque<WindowEvent>,
    processing: bool,
    surface: Option<SharedSurface>,
    clock: SharedClock,
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows.len())
            .field("focused", &self.focused)
            .field("z_order", &self.z_order)
            .field("engine", &self.engine)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default(), HostBindings::detached())
    }
}

impl WindowManager {
    /// Create a manager bound to the given host collaborators
    pub fn new(config: ManagerConfig, host: HostBindings) -> Self {
        let HostBindings { surface, cursor, clock } = host;
        let engine = InteractionEngine::new(config.interaction, cursor, Rc::clone(&clock));
        if surface.is_none() {
            log::info!("no overlay surface bound, windows will not be drawn");
        }

        Self {
            config,
            windows: HashMap::new(),
            regions: HashMap::new(),
            focused: None,
            z_order: ZOrder::new(),
            next_id: 1,
            engine,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            listeners: Listeners::default(),
            pending: VecDeque::new(),
            processing: false,
            surface,
            clock,
        }
    }

    #[inline]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Read-only access to the interaction engine
    #[inline]
    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    /// Bounds a maximized window fills
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0, 0, self.config.viewport.width, self.config.viewport.height)
    }

    /// Change the viewport. Existing windows keep their geometry.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.config.viewport = Size::new(width, height);
        log::debug!("viewport set to {}x{}", self.config.viewport.width, self.config.viewport.height);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by ID
    pub fn get_window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// All windows, back to front
    pub fn get_all_windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index());
        windows
    }

    /// Visible windows, back to front
    pub fn get_visible_windows(&self) -> Vec<&Window> {
        let mut windows = self.get_all_windows();
        windows.retain(|w| w.is_visible());
        windows
    }

    pub fn get_focused_window(&self) -> Option<&Window> {
        self.focused.and_then(|id| self.windows.get(&id))
    }

    #[inline]
    pub fn focused_id(&self) -> Option<WindowId> {
        self.focused
    }

    /// Get the number of windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Regions last derived for a window, whether or not it is hittable
    pub fn regions(&self, id: WindowId) -> Option<&[InteractionRegion]> {
        self.regions.get(&id).map(Vec::as_slice)
    }

    pub fn window_state(&self, id: WindowId) -> Option<WindowState> {
        self.windows.get(&id).map(Window::state)
    }

    pub fn snapshot(&self) -> ManagerSnapshot {
        ManagerSnapshot {
            viewport: self.config.viewport,
            focused: self.focused,
            windows: self.get_all_windows().into_iter().map(Window::state).collect(),
        }
    }

    /// Snapshot as a JSON string
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Event processing
    // =========================================================================

    /// Drain a window's queued events and process them
    fn flush_events(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            self.pending.extend(window.take_events());
        }
        self.process_pending();
    }

    /// Forward and apply queued events in order. Reactions that produce new
    /// events (refocusing, blurring) append to the same queue, so listeners
    /// always see events in the order they happened.
    fn process_pending(&mut self) {
        if self.processing {
            return;
        }
        self.processing = true;
        while let Some(event) = self.pending.pop_front() {
            log::trace!("window {}: {:?}", event.window_id, event.kind);
            self.listeners.emit(&event);
            self.apply_event(&event);
        }
        self.processing = false;
    }

    fn apply_event(&mut self, event: &WindowEvent) {
        let id = event.window_id;
        if event.kind.is_geometry() {
            self.sync_regions(id);
            return;
        }
        match event.kind {
            WindowEventKind::Created { .. } => {
                self.sync_regions(id);
                self.sync_order();
            }
            WindowEventKind::Focused { .. } => {
                if let Some(previous) = self.focused.filter(|&f| f != id) {
                    if let Some(window) = self.windows.get_mut(&previous) {
                        window.blur();
                    }
                    self.flush_events(previous);
                }
                self.focused = Some(id);
                self.sync_order();
            }
            WindowEventKind::Blurred => {
                if self.focused == Some(id) {
                    self.focused = None;
                    let still_visible = self.windows.get(&id).is_some_and(Window::is_visible);
                    if !still_visible {
                        self.focus_topmost();
                    }
                }
            }
            WindowEventKind::Closed => {
                self.engine.unregister_window(id);
                self.regions.remove(&id);
                self.windows.remove(&id);
                if self.focused == Some(id) {
                    self.focused = None;
                }
                self.sync_order();
            }
            // Visibility changes: shown, hidden, minimized
            _ => self.sync_regions(id),
        }
    }

    /// Focus the visible window with the highest z-index, if any
    fn focus_topmost(&mut self) -> bool {
        let next = self
            .windows
            .values()
            .filter(|w| w.is_visible() && !w.is_closed())
            .max_by_key(|w| w.z_index())
            .map(Window::id);
        match next {
            Some(id) => self.focus_window(id),
            None => false,
        }
    }

    /// Mirror a window's regions; hidden windows are registered with no
    /// regions so they cannot be hit
    fn sync_regions(&mut self, id: WindowId) {
        let Some(window) = self.windows.get(&id) else { return };
        let regions = window.regions().to_vec();
        let active = if window.is_visible() { regions.clone() } else { Vec::new() };
        self.regions.insert(id, regions);
        self.engine.register_window(id, active);
    }

    /// Hand the engine the current front-to-back order
    fn sync_order(&mut self) {
        let mut ids: Vec<(u32, WindowId)> = self.windows.values().map(|w| (w.z_index(), w.id())).collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        let order: Vec<WindowId> = ids.into_iter().map(|(_, id)| id).collect();
        self.engine.set_order(&order);
    }
}
