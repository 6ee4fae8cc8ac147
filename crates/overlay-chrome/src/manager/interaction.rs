//! Routing synthesized interactions to windows

use crate::input::{InteractionConfig, TrackingSwitch};
use crate::window::InteractionContext;
use super::WindowManager;

impl WindowManager {
    /// Start cursor polling. Returns false when the host has no cursor.
    pub fn start_tracking(&mut self) -> bool {
        self.engine.start_tracking()
    }

    pub fn stop_tracking(&mut self) {
        self.engine.stop_tracking();
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.engine.is_tracking()
    }

    /// Shared handle that stops tracking when switched off
    pub fn tracking_switch(&self) -> TrackingSwitch {
        self.engine.tracking_switch()
    }

    #[inline]
    pub fn interaction_config(&self) -> &InteractionConfig {
        self.engine.config()
    }

    /// Tick if the poll interval has elapsed. Returns how many interactions
    /// changed a window.
    pub fn poll(&mut self) -> usize {
        self.engine.poll();
        self.route_interactions()
    }

    /// Sample the cursor once and act on the result. Returns how many
    /// interactions changed a window.
    pub fn tick(&mut self) -> usize {
        self.engine.tick();
        self.route_interactions()
    }

    /// Deliver everything the engine callbacks collected, then make pointer
    /// capture follow whichever window is mid-gesture
    fn route_interactions(&mut self) -> usize {
        let events: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        let mut handled = 0;

        for event in &events {
            let maximize_bounds = self.viewport_rect();
            let Some(window) = self.windows.get_mut(&event.window_id) else { continue };
            let mut ctx = InteractionContext {
                z_order: &mut self.z_order,
                maximize_bounds,
            };
            if window.handle_interaction(event, &mut ctx) {
                handled += 1;
            }
            self.flush_events(event.window_id);
        }

        self.sync_capture();
        handled
    }

    fn sync_capture(&mut self) {
        let active = self
            .focused
            .filter(|id| self.windows.get(id).is_some_and(|w| w.gesture().is_some()))
            .or_else(|| self.windows.values().find(|w| w.gesture().is_some()).map(|w| w.id()));

        match active {
            Some(id) if self.engine.captured() != Some(id) => {
                self.engine.capture(id);
            }
            Some(_) => {}
            None => self.engine.release_capture(),
        }
    }
}
