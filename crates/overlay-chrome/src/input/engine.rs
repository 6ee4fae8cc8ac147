//! Polling interaction engine
//!
//! Turns polled cursor samples into click, drag and hover events for
//! registered windows. One tick runs to completion before the next one can
//! start (`&mut self`), and nothing here blocks.

use std::collections::HashMap;

use crate::host::{CursorSource, SharedClock};
use crate::math::Point;
use crate::window::{region_at, InteractionRegion, RegionKind, WindowId};
use super::{HoverMode, InteractionConfig, InteractionEvent, InteractionKind, TrackingSwitch};

/// Per-window interaction callback
pub type InteractionCallback = Box<dyn FnMut(&InteractionEvent)>;

/// Regions registered for one window
#[derive(Clone, Debug)]
struct TrackedWindow {
    id: WindowId,
    regions: Vec<InteractionRegion>,
}

/// Synthetic interaction engine
pub struct InteractionEngine {
    config: InteractionConfig,
    cursor: Option<Box<dyn CursorSource>>,
    clock: SharedClock,
    tracking: TrackingSwitch,
    /// Registered windows in hit-test order (front first once ordered)
    windows: Vec<TrackedWindow>,
    callbacks: HashMap<WindowId, InteractionCallback>,
    /// Previous cursor sample
    last_sample: Option<Point>,
    /// Where the last fast motion ended; a click fires if the cursor settles here
    motion_anchor: Option<Point>,
    /// Time and position of the last synthesized click
    last_click: Option<(f64, Point)>,
    /// Window receiving drags and clicks regardless of hit testing
    capture: Option<WindowId>,
    /// Last hovered region per window (edge-triggered mode)
    hovered: HashMap<WindowId, RegionKind>,
    /// Earliest time `poll` runs the next tick
    next_due_ms: Option<f64>,
}

impl std::fmt::Debug for InteractionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionEngine")
            .field("config", &self.config)
            .field("tracking", &self.tracking.is_active())
            .field("windows", &self.windows.len())
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

impl InteractionEngine {
    /// Create an engine. Without a cursor source tracking never starts.
    pub fn new(config: InteractionConfig, cursor: Option<Box<dyn CursorSource>>, clock: SharedClock) -> Self {
        Self {
            config,
            cursor,
            clock,
            tracking: TrackingSwitch::new(),
            windows: Vec::new(),
            callbacks: HashMap::new(),
            last_sample: None,
            motion_anchor: None,
            last_click: None,
            capture: None,
            hovered: HashMap::new(),
            next_due_ms: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Check if a cursor source is available
    #[inline]
    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    // =========================================================================
    // Tracking
    // =========================================================================

    /// Begin polling. Returns whether tracking is active afterwards.
    pub fn start_tracking(&mut self) -> bool {
        if self.cursor.is_none() {
            log::warn!("no cursor source available, interaction tracking disabled");
            return false;
        }
        if self.tracking.start() {
            self.last_sample = None;
            self.motion_anchor = None;
            self.next_due_ms = None;
            log::debug!("interaction tracking started ({} ms interval)", self.config.poll_interval_ms);
        }
        true
    }

    /// Stop polling. Safe to call repeatedly.
    pub fn stop_tracking(&mut self) {
        if self.tracking.stop() {
            log::debug!("interaction tracking stopped");
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_active()
    }

    /// Handle that can stop tracking from anywhere, including callbacks
    pub fn tracking_switch(&self) -> TrackingSwitch {
        self.tracking.clone()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Install (or replace) the region set for a window
    pub fn register_window(&mut self, id: WindowId, regions: Vec<InteractionRegion>) {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(tracked) => tracked.regions = regions,
            None => self.windows.push(TrackedWindow { id, regions }),
        }
    }

    /// Forget a window, its callback and any capture it held
    pub fn unregister_window(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        self.callbacks.remove(&id);
        self.hovered.remove(&id);
        if self.capture == Some(id) {
            self.capture = None;
        }
        self.windows.len() != before
    }

    /// Set the callback for a window, replacing any previous one
    pub fn on_interaction(&mut self, id: WindowId, callback: InteractionCallback) {
        self.callbacks.insert(id, callback);
    }

    /// Check if a window is registered
    #[inline]
    pub fn is_registered(&self, id: WindowId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Regions currently registered for a window
    pub fn regions(&self, id: WindowId) -> Option<&[InteractionRegion]> {
        self.windows.iter().find(|w| w.id == id).map(|w| w.regions.as_slice())
    }

    /// Registered window ids in hit-test order
    pub fn window_order(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    /// Put windows in hit-test order. Ids not listed keep their relative
    /// order behind the listed ones.
    pub fn set_order(&mut self, front_to_back: &[WindowId]) {
        self.windows.sort_by_key(|w| {
            front_to_back
                .iter()
                .position(|id| *id == w.id)
                .unwrap_or(usize::MAX)
        });
    }

    // =========================================================================
    // Capture
    // =========================================================================

    /// Route drags and clicks to `id` until released
    pub fn capture(&mut self, id: WindowId) -> bool {
        if !self.is_registered(id) {
            return false;
        }
        self.capture = Some(id);
        true
    }

    pub fn release_capture(&mut self) {
        self.capture = None;
    }

    #[inline]
    pub fn captured(&self) -> Option<WindowId> {
        self.capture
    }

    // =========================================================================
    // Hit testing
    // =========================================================================

    /// First window (in hit-test order) with a region under `p`
    pub fn hit_test(&self, p: Point) -> Option<(WindowId, RegionKind)> {
        self.windows
            .iter()
            .find_map(|w| region_at(&w.regions, p).map(|r| (w.id, r.kind)))
    }

    fn region_in(&self, id: WindowId, p: Point) -> Option<RegionKind> {
        self.regions(id).and_then(|regions| region_at(regions, p)).map(|r| r.kind)
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Run a tick if the poll interval has elapsed since the last one
    pub fn poll(&mut self) -> Vec<InteractionEvent> {
        if !self.is_tracking() {
            return Vec::new();
        }
        let now = self.clock.now_ms();
        if self.next_due_ms.is_some_and(|due| now < due) {
            return Vec::new();
        }
        self.next_due_ms = Some(now + self.config.poll_interval_ms as f64);
        self.tick()
    }

    /// Sample the cursor once and dispatch whatever it implies.
    ///
    /// Within a tick drags are evaluated first, then clicks, then hover.
    /// Returns the events that were dispatched.
    pub fn tick(&mut self) -> Vec<InteractionEvent> {
        if !self.is_tracking() {
            return Vec::new();
        }
        let Some(cursor) = self.cursor.as_ref().and_then(|source| source.poll()) else {
            log::trace!("cursor unavailable, skipping tick");
            return Vec::new();
        };

        let now = self.clock.now_ms();
        let moved = self.last_sample.map_or(0.0, |prev| prev.distance(cursor));
        self.last_sample = Some(cursor);

        let mut events = Vec::new();
        self.detect_drag(cursor, moved, now, &mut events);
        self.detect_click(cursor, moved, now, &mut events);
        self.detect_hover(cursor, now, &mut events);

        let dispatched = self.dispatch(&events);
        events.truncate(dispatched);
        events
    }

    fn detect_drag(&self, cursor: Point, moved: f64, now: f64, events: &mut Vec<InteractionEvent>) {
        let Some(id) = self.capture else { return };
        if moved > 0.0 {
            let region = self.region_in(id, cursor);
            events.push(InteractionEvent::new(id, InteractionKind::Drag, region, cursor, now));
        }
    }

    /// "Move fast, then stop": a sample that jumps further than the
    /// sensitivity arms a click; the click fires once the cursor settles
    /// within the sensitivity radius of where the jump ended.
    fn detect_click(&mut self, cursor: Point, moved: f64, now: f64, events: &mut Vec<InteractionEvent>) {
        let threshold = self.config.sensitivity_px;
        if moved > threshold {
            self.motion_anchor = Some(cursor);
            return;
        }

        let Some(anchor) = self.motion_anchor.take() else { return };
        if anchor.distance(cursor) >= threshold {
            return;
        }
        if let Some((at, _)) = self.last_click {
            if now - at <= self.config.click_debounce_ms {
                log::trace!("click at {cursor:?} debounced");
                return;
            }
        }

        let target = match self.capture {
            Some(id) => Some((id, self.region_in(id, cursor))),
            None => self.hit_test(cursor).map(|(id, kind)| (id, Some(kind))),
        };
        let Some((id, region)) = target else { return };

        self.last_click = Some((now, cursor));
        log::trace!("click on window {id} region {region:?}");
        events.push(InteractionEvent::new(id, InteractionKind::Click, region, cursor, now));
    }

    fn detect_hover(&mut self, cursor: Point, now: f64, events: &mut Vec<InteractionEvent>) {
        for window in &self.windows {
            let current = region_at(&window.regions, cursor).map(|r| r.kind);
            match self.config.hover_mode {
                HoverMode::Continuous => {
                    if let Some(kind) = current {
                        events.push(InteractionEvent::new(window.id, InteractionKind::Hover, Some(kind), cursor, now));
                    }
                }
                HoverMode::EdgeTriggered => {
                    let previous = self.hovered.get(&window.id).copied();
                    match (previous, current) {
                        (prev, Some(kind)) if prev != Some(kind) => {
                            self.hovered.insert(window.id, kind);
                            events.push(InteractionEvent::new(window.id, InteractionKind::Hover, Some(kind), cursor, now));
                        }
                        (Some(_), None) => {
                            self.hovered.remove(&window.id);
                            events.push(InteractionEvent::new(window.id, InteractionKind::Leave, None, cursor, now));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// Invoke callbacks in order. Stops early if a callback turns tracking
    /// off; returns how many events were delivered.
    fn dispatch(&mut self, events: &[InteractionEvent]) -> usize {
        for (index, event) in events.iter().enumerate() {
            if !self.tracking.is_active() {
                return index;
            }
            if let Some(callback) = self.callbacks.get_mut(&event.window_id) {
                callback(event);
            }
        }
        events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use crate::host::Clock;
    use crate::math::Rect;
    use crate::window::{regions_for, Capabilities};

    #[derive(Default)]
    struct TestClock(Cell<f64>);

    impl Clock for TestClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct Samples(Rc<RefCell<VecDeque<Option<Point>>>>);

    impl Samples {
        fn push(&self, sample: Option<Point>) {
            self.0.borrow_mut().push_back(sample);
        }
    }

    impl CursorSource for Samples {
        fn poll(&self) -> Option<Point> {
            self.0.borrow_mut().pop_front().flatten()
        }
    }

    struct Harness {
        engine: InteractionEngine,
        samples: Samples,
        clock: Rc<TestClock>,
    }

    impl Harness {
        fn new(config: InteractionConfig) -> Self {
            let samples = Samples::default();
            let clock = Rc::new(TestClock::default());
            let mut engine = InteractionEngine::new(config, Some(Box::new(samples.clone())), clock.clone());
            engine.start_tracking();
            Self { engine, samples, clock }
        }

        /// Advance time by `dt` and tick with `p` as the cursor
        fn step(&mut self, dt: f64, p: Option<Point>) -> Vec<InteractionEvent> {
            self.clock.0.set(self.clock.0.get() + dt);
            self.samples.push(p);
            self.engine.tick()
        }
    }

    fn window_regions(x: i32, y: i32) -> Vec<InteractionRegion> {
        regions_for(Rect::new(x, y, 300, 200), Capabilities::default())
    }

    fn clicks(events: &[InteractionEvent]) -> Vec<&InteractionEvent> {
        events.iter().filter(|e| e.kind == InteractionKind::Click).collect()
    }

    #[test]
    fn test_fast_move_then_stop_clicks() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        h.step(16.0, Some(Point::new(0, 0)));
        let events = h.step(16.0, Some(Point::new(200, 200)));
        assert!(clicks(&events).is_empty(), "motion tick only arms the click");

        let events = h.step(16.0, Some(Point::new(202, 201)));
        let c = clicks(&events);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].window_id, 1);
        assert_eq!(c[0].region, Some(RegionKind::Content));
    }

    #[test]
    fn test_slow_motion_never_clicks() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        let mut all = Vec::new();
        for i in 0..20 {
            all.extend(h.step(16.0, Some(Point::new(150 + i * 5, 200))));
        }
        assert!(clicks(&all).is_empty());
    }

    #[test]
    fn test_same_point_twice_clicks_once() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        h.step(10.0, Some(Point::new(0, 0)));
        h.step(10.0, Some(Point::new(200, 200)));
        let first = h.step(10.0, Some(Point::new(200, 200)));
        let second = h.step(10.0, Some(Point::new(200, 200)));
        assert_eq!(clicks(&first).len() + clicks(&second).len(), 1);
    }

    #[test]
    fn test_click_debounce() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        h.step(10.0, Some(Point::new(0, 0)));
        h.step(10.0, Some(Point::new(200, 200)));
        assert_eq!(clicks(&h.step(10.0, Some(Point::new(200, 200)))).len(), 1);

        // Re-arm and settle within 50 ms of the last click
        h.step(10.0, Some(Point::new(150, 150)));
        assert!(clicks(&h.step(10.0, Some(Point::new(150, 150)))).is_empty());

        // Same gesture after the debounce window
        h.step(40.0, Some(Point::new(220, 220)));
        assert_eq!(clicks(&h.step(20.0, Some(Point::new(221, 220)))).len(), 1);
    }

    #[test]
    fn test_unavailable_cursor_skips_tick() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        h.step(16.0, Some(Point::new(0, 0)));
        h.step(16.0, Some(Point::new(200, 200)));
        assert!(h.step(16.0, None).is_empty());

        // The sentinel tick did not disturb the armed click
        assert_eq!(clicks(&h.step(16.0, Some(Point::new(201, 200)))).len(), 1);
    }

    #[test]
    fn test_continuous_hover_every_tick() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        for _ in 0..3 {
            let events = h.step(16.0, Some(Point::new(150, 150)));
            let hovers: Vec<_> = events.iter().filter(|e| e.kind == InteractionKind::Hover).collect();
            assert_eq!(hovers.len(), 1);
            assert_eq!(hovers[0].window_id, 1);
        }
        let events = h.step(16.0, Some(Point::new(10, 10)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_edge_triggered_hover() {
        let mut h = Harness::new(InteractionConfig {
            hover_mode: HoverMode::EdgeTriggered,
            ..InteractionConfig::default()
        });
        h.engine.register_window(1, window_regions(100, 100));

        let enter = h.step(16.0, Some(Point::new(150, 150)));
        assert_eq!(enter.len(), 1);
        assert_eq!(enter[0].kind, InteractionKind::Hover);

        assert!(h.step(16.0, Some(Point::new(152, 150))).is_empty());

        // Moving into the title bar is a region change
        let change = h.step(16.0, Some(Point::new(152, 110)));
        assert_eq!(change.len(), 1);
        assert_eq!(change[0].region, Some(RegionKind::TitleBar));

        let leave = h.step(16.0, Some(Point::new(10, 10)));
        assert_eq!(leave.len(), 1);
        assert_eq!(leave[0].kind, InteractionKind::Leave);
    }

    #[test]
    fn test_hit_test_follows_order() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));
        h.engine.register_window(2, window_regions(150, 150));

        let overlap = Point::new(200, 200);
        assert_eq!(h.engine.hit_test(overlap).map(|hit| hit.0), Some(1));

        h.engine.set_order(&[2, 1]);
        assert_eq!(h.engine.window_order(), vec![2, 1]);
        assert_eq!(h.engine.hit_test(overlap).map(|hit| hit.0), Some(2));
    }

    #[test]
    fn test_register_replaces_regions() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));
        h.engine.register_window(1, window_regions(500, 500));

        assert_eq!(h.engine.window_order(), vec![1]);
        assert!(h.engine.hit_test(Point::new(150, 150)).is_none());
        assert!(h.engine.hit_test(Point::new(550, 550)).is_some());
    }

    #[test]
    fn test_callback_replaced_and_invoked() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let counter = first.clone();
        h.engine.on_interaction(1, Box::new(move |_: &InteractionEvent| counter.set(counter.get() + 1)));
        let counter = second.clone();
        h.engine.on_interaction(1, Box::new(move |_: &InteractionEvent| counter.set(counter.get() + 1)));

        h.step(16.0, Some(Point::new(150, 150)));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_stop_from_callback() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));
        h.engine.register_window(2, window_regions(120, 120));

        let switch = h.engine.tracking_switch();
        h.engine.on_interaction(1, Box::new(move |_: &InteractionEvent| {
            switch.stop();
            switch.stop();
        }));

        let events = h.step(16.0, Some(Point::new(200, 200)));
        assert_eq!(events.len(), 1, "window 2 hover is not delivered after stop");
        assert!(!h.engine.is_tracking());
        assert!(h.step(16.0, Some(Point::new(200, 200))).is_empty());
    }

    #[test]
    fn test_capture_routes_drag_and_click() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));
        h.engine.register_window(2, window_regions(600, 600));
        assert!(h.engine.capture(1));

        h.step(16.0, Some(Point::new(150, 110)));
        let events = h.step(16.0, Some(Point::new(700, 700)));
        assert_eq!(events[0].kind, InteractionKind::Drag);
        assert_eq!(events[0].window_id, 1);

        // Settling over window 2 still clicks the captured window
        let events = h.step(16.0, Some(Point::new(701, 700)));
        let c = clicks(&events);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].window_id, 1);
        assert_eq!(c[0].region, None);
    }

    #[test]
    fn test_unregister_drops_everything() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));
        h.engine.capture(1);

        assert!(h.engine.unregister_window(1));
        assert!(!h.engine.unregister_window(1));
        assert_eq!(h.engine.captured(), None);
        assert!(h.engine.regions(1).is_none());
        assert!(!h.engine.capture(1));
    }

    #[test]
    fn test_no_cursor_source_never_tracks() {
        let mut engine = InteractionEngine::new(InteractionConfig::default(), None, Rc::new(TestClock::default()));
        assert!(!engine.start_tracking());
        assert!(!engine.is_tracking());
        assert!(engine.tick().is_empty());
    }

    #[test]
    fn test_poll_respects_interval() {
        let mut h = Harness::new(InteractionConfig::default());
        h.engine.register_window(1, window_regions(100, 100));

        h.samples.push(Some(Point::new(150, 150)));
        assert_eq!(h.engine.poll().len(), 1);

        h.clock.0.set(10.0);
        h.samples.push(Some(Point::new(150, 150)));
        assert!(h.engine.poll().is_empty(), "interval not elapsed");

        h.clock.0.set(16.0);
        assert_eq!(h.engine.poll().len(), 1);
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut h = Harness::new(InteractionConfig::default());
        assert!(h.engine.start_tracking());
        assert!(h.engine.start_tracking());
        h.engine.stop_tracking();
        h.engine.stop_tracking();
        assert!(!h.engine.is_tracking());
    }
}
