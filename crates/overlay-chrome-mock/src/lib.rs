//! Mock overlay host for testing overlay-chrome
//!
//! Provides a recording drawing surface, a scripted cursor and a manual
//! clock, so window and interaction behaviour can be tested without a real
//! overlay host.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use overlay_chrome::{
    Clock, Color, CursorSource, HostBindings, OverlaySurface, Point, Rect, RectStyle, SurfaceError,
};

/// One recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect { group: String, rect: Rect, color: Color, style: RectStyle },
    Text { group: String, text: String, origin: Point, color: Color, size: u32 },
    Line { group: String, from: Point, to: Point, color: Color, width: u32 },
    Clear { group: String },
    Freeze { group: String },
    Continue { group: String },
    ZIndex { group: String, z_index: u32 },
}

impl DrawCall {
    /// Group the call targeted
    pub fn group(&self) -> &str {
        match self {
            DrawCall::Rect { group, .. }
            | DrawCall::Text { group, .. }
            | DrawCall::Line { group, .. }
            | DrawCall::Clear { group }
            | DrawCall::Freeze { group }
            | DrawCall::Continue { group }
            | DrawCall::ZIndex { group, .. } => group,
        }
    }

    /// Host API name of the call
    pub fn name(&self) -> &'static str {
        match self {
            DrawCall::Rect { .. } => "draw_rect",
            DrawCall::Text { .. } => "draw_text",
            DrawCall::Line { .. } => "draw_line",
            DrawCall::Clear { .. } => "clear_group",
            DrawCall::Freeze { .. } => "freeze_group",
            DrawCall::Continue { .. } => "continue_group",
            DrawCall::ZIndex { .. } => "set_group_z_index",
        }
    }
}

/// Recording surface
///
/// Every call is appended to a log. Calls can be made to fail by name, or
/// the whole surface can be marked unavailable.
#[derive(Default)]
pub struct MockSurface {
    calls: RefCell<Vec<DrawCall>>,
    /// Call names that fail instead of recording
    failing: RefCell<Vec<&'static str>>,
    unavailable: Cell<bool>,
}

impl MockSurface {
    /// Create a new mock surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared mock surface, ready for [`HostBindings::with_surface`]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// Recorded calls for one group
    pub fn calls_for(&self, group: &str) -> Vec<DrawCall> {
        self.calls.borrow().iter().filter(|c| c.group() == group).cloned().collect()
    }

    /// Names of the recorded calls for one group, in order
    pub fn call_names(&self, group: &str) -> Vec<&'static str> {
        self.calls.borrow().iter().filter(|c| c.group() == group).map(DrawCall::name).collect()
    }

    /// All text drawn into a group
    pub fn texts(&self, group: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { group: g, text, .. } if g == group => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear the call log
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Get the number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Make every call with this name fail
    pub fn fail_on(&self, call: &'static str) {
        self.failing.borrow_mut().push(call);
    }

    /// Stop failing calls
    pub fn heal(&self) {
        self.failing.borrow_mut().clear();
        self.unavailable.set(false);
    }

    /// Make every call fail with [`SurfaceError::Unavailable`]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn record(&self, call: DrawCall) -> Result<(), SurfaceError> {
        if self.unavailable.get() {
            return Err(SurfaceError::Unavailable);
        }
        let name = call.name();
        if self.failing.borrow().contains(&name) {
            return Err(SurfaceError::DrawFailed {
                call: name,
                group: call.group().to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl OverlaySurface for MockSurface {
    fn draw_rect(&self, group: &str, rect: Rect, color: Color, style: RectStyle) -> Result<(), SurfaceError> {
        self.record(DrawCall::Rect { group: group.to_string(), rect, color, style })
    }

    fn draw_text(&self, group: &str, text: &str, origin: Point, color: Color, size: u32) -> Result<(), SurfaceError> {
        self.record(DrawCall::Text {
            group: group.to_string(),
            text: text.to_string(),
            origin,
            color,
            size,
        })
    }

    fn draw_line(&self, group: &str, from: Point, to: Point, color: Color, width: u32) -> Result<(), SurfaceError> {
        self.record(DrawCall::Line { group: group.to_string(), from, to, color, width })
    }

    fn clear_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.record(DrawCall::Clear { group: group.to_string() })
    }

    fn freeze_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.record(DrawCall::Freeze { group: group.to_string() })
    }

    fn continue_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.record(DrawCall::Continue { group: group.to_string() })
    }

    fn set_group_z_index(&self, group: &str, z_index: u32) -> Result<(), SurfaceError> {
        self.record(DrawCall::ZIndex { group: group.to_string(), z_index })
    }
}

/// Scripted cursor
///
/// Each poll consumes one queued sample. Once the script runs out the
/// cursor stays where the last sample left it. Clones share the script.
#[derive(Clone, Default)]
pub struct MockCursor {
    samples: Rc<RefCell<VecDeque<Option<Point>>>>,
    last: Rc<Cell<Option<Point>>>,
    polls: Rc<Cell<usize>>,
}

impl MockCursor {
    /// Create a new mock cursor with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sample
    pub fn push(&self, x: i32, y: i32) {
        self.samples.borrow_mut().push_back(Some(Point::new(x, y)));
    }

    /// Queue a poll that reports no cursor
    pub fn push_unavailable(&self) {
        self.samples.borrow_mut().push_back(None);
    }

    /// Number of queued samples not yet consumed
    pub fn pending(&self) -> usize {
        self.samples.borrow().len()
    }

    /// Get the number of polls so far
    pub fn poll_count(&self) -> usize {
        self.polls.get()
    }
}

impl CursorSource for MockCursor {
    fn poll(&self) -> Option<Point> {
        self.polls.set(self.polls.get() + 1);
        match self.samples.borrow_mut().pop_front() {
            Some(Some(p)) => {
                self.last.set(Some(p));
                Some(p)
            }
            Some(None) => None,
            None => self.last.get(),
        }
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock at time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared clock at time 0
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    /// Set the clock to a specific time
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// A complete mock host and handles to inspect it
pub struct MockHost {
    pub surface: Rc<MockSurface>,
    pub cursor: MockCursor,
    pub clock: Rc<ManualClock>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            surface: MockSurface::shared(),
            cursor: MockCursor::new(),
            clock: ManualClock::shared(),
        }
    }

    /// Bindings wired to this host's surface, cursor and clock
    pub fn bindings(&self) -> HostBindings {
        HostBindings::detached()
            .with_surface(self.surface.clone())
            .with_cursor(self.cursor.clone())
            .with_clock(self.clock.clone())
    }

    /// Bindings without a cursor source
    pub fn bindings_without_cursor(&self) -> HostBindings {
        HostBindings::detached()
            .with_surface(self.surface.clone())
            .with_clock(self.clock.clone())
    }
}
