//! Window entity
//!
//! A window owns its geometry, visibility, focus and gesture state. It is
//! only changed through its own command methods; every change is recorded
//! as a [`WindowEvent`] that the owner drains with [`Window::take_events`].

use crate::error::SurfaceError;
use crate::host::{OverlaySurface, SharedClock, SharedSurface};
use crate::input::{calculate_move, calculate_resize, Gesture, InteractionEvent, InteractionKind};
use crate::math::{Point, Rect, Size};
use super::{
    draw_group, regions_for, Capabilities, InteractionRegion, RegionKind, Theme, WindowConfig,
    WindowEvent, WindowEventKind, WindowId, WindowPhase, WindowState, ZOrder,
};

/// Draws a window's content area. Receives the surface, the window's draw
/// group and the content rectangle.
pub type ContentRenderer = Box<dyn Fn(&dyn OverlaySurface, &str, Rect) -> Result<(), SurfaceError>>;

/// What a window needs from its owner to act on an interaction
pub struct InteractionContext<'a> {
    /// Counter handing out top-most z-indices
    pub z_order: &'a mut ZOrder,
    /// Bounds a maximized window fills
    pub maximize_bounds: Rect,
}

/// A virtual window drawn on the overlay surface
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) min_size: Size,
    pub(crate) max_size: Option<Size>,
    pub(crate) caps: Capabilities,
    pub(crate) theme: Theme,
    pub(crate) visible: bool,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    pub(crate) focused: bool,
    pub(crate) closed: bool,
    pub(crate) z_index: u32,
    pub(crate) last_interaction_ms: f64,
    /// Bounds saved before maximizing
    restore_rect: Option<Rect>,
    gesture: Option<Gesture>,
    regions: Vec<InteractionRegion>,
    pub(crate) group: String,
    pub(crate) surface: Option<SharedSurface>,
    pub(crate) content_renderer: Option<ContentRenderer>,
    clock: SharedClock,
    events: Vec<WindowEvent>,
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("rect", &self.rect())
            .field("phase", &self.phase())
            .field("focused", &self.focused)
            .field("z_index", &self.z_index)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Create a visible, unfocused window.
    ///
    /// `default_min` applies when the config has no `min_size`. A `Created`
    /// event is queued immediately.
    pub fn new(
        id: WindowId,
        config: WindowConfig,
        z_index: u32,
        default_min: Size,
        clock: SharedClock,
        surface: Option<SharedSurface>,
    ) -> Self {
        let min_size = config.min_size.unwrap_or(default_min);
        let size = config.size().clamp_to(min_size, config.max_size).bounded();
        let caps = config.capabilities();

        let mut window = Self {
            id,
            title: config.title,
            position: Point::new(config.x, config.y).bounded(),
            size,
            min_size,
            max_size: config.max_size,
            caps,
            theme: config.theme.unwrap_or_default(),
            visible: true,
            minimized: false,
            maximized: false,
            focused: false,
            closed: false,
            z_index,
            last_interaction_ms: 0.0,
            restore_rect: None,
            gesture: None,
            regions: Vec::new(),
            group: draw_group(id),
            surface,
            content_renderer: None,
            clock,
            events: Vec::new(),
        };
        window.refresh_regions();
        window.emit(WindowEventKind::Created { bounds: window.rect() });
        window
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some_and(|g| g.is_move())
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.gesture.is_some_and(|g| g.is_resize())
    }

    #[inline]
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn last_interaction_ms(&self) -> f64 {
        self.last_interaction_ms
    }

    /// Regions derived from the current geometry, in priority order
    #[inline]
    pub fn regions(&self) -> &[InteractionRegion] {
        &self.regions
    }

    /// Name of this window's draw group
    #[inline]
    pub fn draw_group(&self) -> &str {
        &self.group
    }

    /// Coarse lifecycle phase
    pub fn phase(&self) -> WindowPhase {
        if self.closed {
            WindowPhase::Closed
        } else if self.minimized {
            WindowPhase::Minimized
        } else if !self.visible {
            WindowPhase::Hidden
        } else if self.maximized {
            WindowPhase::Maximized
        } else {
            WindowPhase::Visible
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> WindowState {
        WindowState {
            id: self.id,
            title: self.title.clone(),
            position: self.position,
            size: self.size,
            visible: self.visible,
            minimized: self.minimized,
            maximized: self.maximized,
            focused: self.focused,
            dragging: self.is_dragging(),
            resizing: self.is_resizing(),
            z_index: self.z_index,
            last_interaction_ms: self.last_interaction_ms,
            phase: self.phase(),
        }
    }

    /// Drain queued lifecycle events
    pub fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move the window
    pub fn set_position(&mut self, x: i32, y: i32) {
        if self.closed {
            return;
        }
        if self.apply_geometry(Point::new(x, y), self.size) {
            self.render();
        }
    }

    /// Resize the window, clamped to its min/max size
    pub fn set_size(&mut self, width: i32, height: i32) {
        if self.closed {
            return;
        }
        if self.apply_geometry(self.position, Size::new(width, height)) {
            self.render();
        }
    }

    /// Change the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.render();
    }

    /// Install the callback that draws the content area
    pub fn set_content_renderer(&mut self, renderer: ContentRenderer) {
        self.content_renderer = Some(renderer);
        self.render();
    }

    /// Set geometry, recompute regions and queue events. Returns whether
    /// anything changed.
    fn apply_geometry(&mut self, position: Point, size: Size) -> bool {
        let size = size.clamp_to(self.min_size, self.max_size).bounded();
        let position = position.bounded();
        let moved = position != self.position;
        let resized = size != self.size;

        self.position = position;
        self.size = size;
        if moved || resized {
            self.refresh_regions();
        }
        if moved {
            self.emit(WindowEventKind::Moved { position });
        }
        if resized {
            self.emit(WindowEventKind::Resized { size });
        }
        moved || resized
    }

    fn refresh_regions(&mut self) {
        self.regions = regions_for(self.rect(), self.caps);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Make the window visible (also un-minimizes it)
    pub fn show(&mut self) {
        if self.closed || self.visible {
            return;
        }
        self.visible = true;
        self.minimized = false;
        self.emit(WindowEventKind::Shown);
        self.render();
    }

    /// Hide the window and clear its pixels
    pub fn hide(&mut self) {
        if self.closed || !self.visible {
            return;
        }
        self.visible = false;
        self.drop_focus();
        self.clear_pixels();
        self.emit(WindowEventKind::Hidden);
    }

    /// Minimize. `maximized` is kept so restore knows to bring back the
    /// saved bounds.
    pub fn minimize(&mut self) {
        if self.closed || self.minimized {
            return;
        }
        self.minimized = true;
        self.visible = false;
        self.drop_focus();
        self.clear_pixels();
        self.emit(WindowEventKind::Minimized);
    }

    /// Leave the minimized and/or maximized state
    pub fn restore(&mut self) {
        if self.closed || !(self.minimized || self.maximized) {
            return;
        }
        let was_maximized = self.maximized;
        self.minimized = false;
        self.maximized = false;
        self.visible = true;

        if was_maximized {
            if let Some(saved) = self.restore_rect.take() {
                self.apply_geometry(saved.position(), saved.size());
            }
        }
        self.emit(WindowEventKind::Restored { bounds: self.rect() });
        self.render();
    }

    /// Fill `bounds`, remembering the current bounds for restore
    pub fn maximize(&mut self, bounds: Rect) {
        if self.closed || self.maximized {
            return;
        }
        self.restore_rect = Some(self.rect());
        self.maximized = true;
        self.minimized = false;
        self.visible = true;
        self.gesture = None;
        self.apply_geometry(bounds.position(), bounds.size());
        self.emit(WindowEventKind::Maximized { bounds: self.rect() });
        self.render();
    }

    /// Maximize, or restore if already maximized
    pub fn toggle_maximize(&mut self, bounds: Rect) {
        if self.maximized {
            self.restore();
        } else {
            self.maximize(bounds);
        }
    }

    /// Clear pixels and mark the window closed. Removing it from any
    /// registry is the owner's job.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.visible = false;
        self.closed = true;
        self.drop_focus();
        self.clear_pixels();
        self.emit(WindowEventKind::Closed);
        log::debug!("window {} closed", self.id);
    }

    fn clear_pixels(&self) {
        if let Some(surface) = &self.surface {
            if let Err(err) = surface.clear_group(&self.group) {
                log::warn!("window {}: failed to clear draw group: {}", self.id, err);
            }
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Focus and raise to a fresh top-most z-index.
    ///
    /// No-op on an already focused window. Returns false for hidden or
    /// closed windows, which can never hold focus.
    pub fn focus(&mut self, z_order: &mut ZOrder) -> bool {
        if self.closed || !self.visible {
            return false;
        }
        if !self.focused {
            self.z_index = z_order.raise();
        }
        self.focus_in_place()
    }

    /// Take focus keeping the current z-index. For a window that already
    /// holds the top-most value, such as one just created.
    pub(crate) fn focus_in_place(&mut self) -> bool {
        if self.closed || !self.visible {
            return false;
        }
        if self.focused {
            return true;
        }
        self.focused = true;
        self.emit(WindowEventKind::Focused { z_index: self.z_index });
        self.render();
        true
    }

    /// Drop focus; no-op when not focused
    pub fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.emit(WindowEventKind::Blurred);
        self.render();
    }

    /// Blur without redrawing, for transitions that clear the pixels anyway
    fn drop_focus(&mut self) {
        self.gesture = None;
        if self.focused {
            self.focused = false;
            self.emit(WindowEventKind::Blurred);
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start moving with the cursor. Fails if not draggable or not visible.
    pub fn begin_drag(&mut self, cursor: Point) -> bool {
        if !self.caps.draggable || !self.visible || self.closed {
            return false;
        }
        self.gesture = Some(Gesture::Move {
            anchor_cursor: cursor,
            anchor_position: self.position,
        });
        log::debug!("window {} drag started at {:?}", self.id, cursor);
        true
    }

    /// Start resizing from the bottom-right handle
    pub fn begin_resize(&mut self, cursor: Point) -> bool {
        if !self.caps.resizable || !self.visible || self.closed {
            return false;
        }
        self.gesture = Some(Gesture::Resize {
            anchor_cursor: cursor,
            anchor_position: self.position,
            anchor_size: self.size,
        });
        log::debug!("window {} resize started at {:?}", self.id, cursor);
        true
    }

    /// End any gesture in progress
    pub fn end_gesture(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            log::debug!("window {} gesture ended ({:?})", self.id, gesture);
        }
    }

    /// Apply a cursor sample to the active gesture
    pub fn update_gesture(&mut self, cursor: Point) -> bool {
        match self.gesture {
            Some(Gesture::Move { anchor_cursor, anchor_position }) => {
                let p = calculate_move(anchor_position, anchor_cursor, cursor);
                self.set_position(p.x, p.y);
                true
            }
            Some(Gesture::Resize { anchor_cursor, anchor_size, .. }) => {
                let s = calculate_resize(anchor_size, anchor_cursor, cursor);
                self.set_size(s.width, s.height);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// React to a synthesized interaction. Returns whether it changed
    /// anything.
    pub fn handle_interaction(&mut self, event: &InteractionEvent, ctx: &mut InteractionContext<'_>) -> bool {
        if self.closed {
            return false;
        }
        self.last_interaction_ms = event.timestamp_ms;

        match event.kind {
            InteractionKind::Click => self.handle_click(event, ctx),
            InteractionKind::Drag => self.update_gesture(event.cursor),
            InteractionKind::Hover | InteractionKind::Leave => false,
        }
    }

    fn handle_click(&mut self, event: &InteractionEvent, ctx: &mut InteractionContext<'_>) -> bool {
        // Resting after a drag drops the window
        if self.gesture.is_some() {
            self.end_gesture();
            return true;
        }

        let Some(region) = event.region else { return false };
        match region {
            RegionKind::TitleBar => {
                let focused = self.focus(ctx.z_order);
                self.begin_drag(event.cursor) || focused
            }
            RegionKind::ResizeHandle => {
                let focused = self.focus(ctx.z_order);
                self.begin_resize(event.cursor) || focused
            }
            RegionKind::CloseButton if self.caps.closable => {
                self.close();
                true
            }
            RegionKind::MinimizeButton if self.caps.minimizable => {
                self.minimize();
                true
            }
            RegionKind::MaximizeButton if self.caps.resizable => {
                self.toggle_maximize(ctx.maximize_bounds);
                true
            }
            RegionKind::Content => self.focus(ctx.z_order),
            RegionKind::CloseButton | RegionKind::MinimizeButton | RegionKind::MaximizeButton => false,
        }
    }

    fn emit(&mut self, kind: WindowEventKind) {
        self.events.push(WindowEvent {
            window_id: self.id,
            kind,
            timestamp_ms: self.clock.now_ms(),
        });
    }
}
