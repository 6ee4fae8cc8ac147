//! Bundle of host collaborators handed to a manager

use std::rc::Rc;

use super::{CursorSource, SharedClock, SharedSurface, SystemClock};

/// Everything the window system consumes from the host.
///
/// Missing pieces degrade instead of failing: without a surface nothing is
/// drawn, without a cursor tracking never starts.
pub struct HostBindings {
    pub surface: Option<SharedSurface>,
    pub cursor: Option<Box<dyn CursorSource>>,
    pub clock: SharedClock,
}

impl std::fmt::Debug for HostBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBindings")
            .field("surface", &self.surface.is_some())
            .field("cursor", &self.cursor.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for HostBindings {
    fn default() -> Self {
        Self::detached()
    }
}

impl HostBindings {
    /// No surface, no cursor, wall clock
    pub fn detached() -> Self {
        Self {
            surface: None,
            cursor: None,
            clock: Rc::new(SystemClock::new()),
        }
    }

    pub fn with_surface(mut self, surface: SharedSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_cursor(mut self, cursor: impl CursorSource + 'static) -> Self {
        self.cursor = Some(Box::new(cursor));
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }
}
