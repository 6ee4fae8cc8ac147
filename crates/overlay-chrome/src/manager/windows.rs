//! Window lifecycle commands

use std::rc::Rc;

use crate::error::WindowError;
use crate::input::InteractionEvent;
use crate::window::{ContentRenderer, Window, WindowConfig, WindowId};
use super::WindowManager;

impl WindowManager {
    /// Create a window, focus it and draw it.
    ///
    /// Uses `config.id` when given (rejecting ids already in use), otherwise
    /// allocates the next free id. A `z_index` in the config is honored when
    /// it is above every z-index handed out so far.
    pub fn create_window(&mut self, config: WindowConfig) -> Result<WindowId, WindowError> {
        let id = match config.id {
            Some(id) if self.windows.contains_key(&id) => return Err(WindowError::DuplicateId(id)),
            Some(id) => id,
            None => self.allocate_id(),
        };

        let z_index = match config.z_index {
            Some(z) if z >= self.z_order.peek() => {
                self.z_order.bump_past(z);
                z
            }
            _ => self.z_order.raise(),
        };

        let window = Window::new(
            id,
            config,
            z_index,
            self.config.default_min_size,
            Rc::clone(&self.clock),
            self.surface.clone(),
        );
        log::debug!("created window {} \"{}\" at {:?}", id, window.title(), window.rect());
        self.windows.insert(id, window);

        let inbox = Rc::clone(&self.inbox);
        self.engine.on_interaction(
            id,
            Box::new(move |event: &InteractionEvent| inbox.borrow_mut().push_back(*event)),
        );
        self.flush_events(id);

        // Already top-most: focus without spending another z-index
        if !self.give_focus(id, false) {
            if let Some(window) = self.windows.get(&id) {
                window.render();
            }
        }
        Ok(id)
    }

    fn allocate_id(&mut self) -> WindowId {
        loop {
            let id = self.next_id;
            self.next_id += 1;
            if !self.windows.contains_key(&id) {
                return id;
            }
        }
    }

    /// Focus a window and raise it to the top.
    ///
    /// Returns false for unknown, hidden or closed windows.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        self.give_focus(id, true)
    }

    fn give_focus(&mut self, id: WindowId, raise: bool) -> bool {
        let Some(window) = self.windows.get(&id) else { return false };
        if !window.is_visible() || window.is_closed() {
            return false;
        }
        if self.focused == Some(id) && window.is_focused() {
            return true;
        }

        if let Some(previous) = self.focused.filter(|&f| f != id) {
            if let Some(window) = self.windows.get_mut(&previous) {
                window.blur();
            }
            self.flush_events(previous);
        }

        let focused = match self.windows.get_mut(&id) {
            Some(window) if raise => window.focus(&mut self.z_order),
            Some(window) => window.focus_in_place(),
            None => false,
        };
        self.flush_events(id);
        focused
    }

    /// Close a window; focus passes to the top-most remaining visible
    /// window. Returns false if the id is unknown.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        self.command(id, Window::close)
    }

    pub fn close_all_windows(&mut self) {
        let mut ids: Vec<WindowId> = self.windows.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            self.close_window(id);
        }
    }

    pub fn show_window(&mut self, id: WindowId) -> bool {
        self.command(id, Window::show)
    }

    pub fn hide_window(&mut self, id: WindowId) -> bool {
        self.command(id, Window::hide)
    }

    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        self.command(id, Window::minimize)
    }

    pub fn restore_window(&mut self, id: WindowId) -> bool {
        self.command(id, Window::restore)
    }

    /// Maximize to the viewport, or restore if already maximized
    pub fn maximize_window(&mut self, id: WindowId) -> bool {
        let bounds = self.viewport_rect();
        self.command(id, |window| window.toggle_maximize(bounds))
    }

    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        self.command(id, |window| window.set_position(x, y))
    }

    /// Resize, clamped to the window's min/max size
    pub fn resize_window(&mut self, id: WindowId, width: i32, height: i32) -> bool {
        self.command(id, |window| window.set_size(width, height))
    }

    pub fn set_window_title(&mut self, id: WindowId, title: impl Into<String>) -> bool {
        let title = title.into();
        self.command(id, |window| window.set_title(title))
    }

    /// Install the callback that draws a window's content area
    pub fn set_content_renderer(&mut self, id: WindowId, renderer: ContentRenderer) -> bool {
        self.command(id, |window| window.set_content_renderer(renderer))
    }

    /// Redraw every visible window, back to front
    pub fn render_all(&self) {
        for window in self.get_visible_windows() {
            window.render();
        }
    }

    /// Run a command on one window, then process whatever it emitted
    fn command(&mut self, id: WindowId, f: impl FnOnce(&mut Window)) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            log::trace!("ignoring command for unknown window {id}");
            return false;
        };
        f(window);
        self.flush_events(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::math::{Point, Rect, Size, COORD_LIMIT};
    use crate::window::{WindowEvent, WindowEventKind};

    fn config(title: &str) -> WindowConfig {
        WindowConfig::new(title, Rect::new(100, 100, 400, 300))
    }

    fn create_test_manager() -> WindowManager {
        WindowManager::default()
    }

    #[test]
    fn test_create_focuses_new_window() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();
        let b = wm.create_window(config("b")).unwrap();

        assert_eq!(wm.focused_id(), Some(b));
        assert!(!wm.get_window(a).unwrap().is_focused());
        assert!(wm.get_window(b).unwrap().z_index() > wm.get_window(a).unwrap().z_index());
        assert!(wm.engine().is_registered(a));
        assert_eq!(wm.window_count(), 2);
    }

    #[test]
    fn test_explicit_id_and_duplicate() {
        let mut wm = create_test_manager();
        let mut cfg = config("a");
        cfg.id = Some(42);
        assert_eq!(wm.create_window(cfg.clone()), Ok(42));
        assert_eq!(wm.create_window(cfg), Err(WindowError::DuplicateId(42)));
    }

    #[test]
    fn test_auto_id_skips_explicit_ids() {
        let mut wm = create_test_manager();
        let mut cfg = config("a");
        cfg.id = Some(1);
        wm.create_window(cfg).unwrap();
        assert_eq!(wm.create_window(config("b")), Ok(2));
    }

    #[test]
    fn test_requested_z_index() {
        let mut wm = create_test_manager();
        let mut cfg = config("a");
        cfg.z_index = Some(50);
        let a = wm.create_window(cfg).unwrap();
        assert_eq!(wm.get_window(a).unwrap().z_index(), 50);
        assert_eq!(wm.focused_id(), Some(a));

        let b = wm.create_window(config("b")).unwrap();
        assert_eq!(wm.get_window(b).unwrap().z_index(), 51);

        // Values at or below the counter would collide, so they are ignored
        let mut low = config("c");
        low.z_index = Some(10);
        let c = wm.create_window(low).unwrap();
        assert_eq!(wm.get_window(c).unwrap().z_index(), 52);

        wm.focus_window(a);
        assert_eq!(wm.get_window(a).unwrap().z_index(), 53);
    }

    #[test]
    fn test_focus_unknown_or_hidden() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();
        assert!(!wm.focus_window(999));
        assert!(wm.hide_window(a));
        assert!(!wm.focus_window(a));
        assert_eq!(wm.focused_id(), None);
    }

    #[test]
    fn test_close_refocuses_topmost() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();
        let b = wm.create_window(config("b")).unwrap();
        let c = wm.create_window(config("c")).unwrap();
        wm.focus_window(a);
        wm.focus_window(c);

        assert!(wm.close_window(c));
        assert_eq!(wm.focused_id(), Some(a));
        assert!(wm.get_window(c).is_none());
        assert!(wm.regions(c).is_none());
        assert!(!wm.engine().is_registered(c));
        assert!(!wm.close_window(c));
        assert!(wm.get_window(b).is_some());
    }

    #[test]
    fn test_minimize_refocuses_and_restore() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();
        let b = wm.create_window(config("b")).unwrap();

        wm.minimize_window(b);
        assert_eq!(wm.focused_id(), Some(a));
        assert_eq!(wm.engine().regions(b), Some(&[][..]));
        assert!(!wm.regions(b).unwrap().is_empty());

        wm.restore_window(b);
        assert!(wm.get_window(b).unwrap().is_visible());
        assert_eq!(wm.engine().regions(b).map(<[_]>::len), wm.regions(b).map(<[_]>::len));
    }

    #[test]
    fn test_maximize_fills_viewport_and_toggles() {
        let mut wm = create_test_manager();
        wm.set_viewport(1280, 720);
        let a = wm.create_window(config("a")).unwrap();

        wm.maximize_window(a);
        assert_eq!(wm.get_window(a).unwrap().rect(), Rect::new(0, 0, 1280, 720));
        wm.maximize_window(a);
        assert_eq!(wm.get_window(a).unwrap().rect(), Rect::new(100, 100, 400, 300));
    }

    #[test]
    fn test_move_syncs_regions() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();
        wm.move_window(a, 150, 120);

        let window_regions = wm.get_window(a).unwrap().regions().to_vec();
        assert_eq!(wm.regions(a).unwrap(), window_regions.as_slice());
        assert_eq!(wm.engine().regions(a).unwrap(), window_regions.as_slice());
    }

    #[test]
    fn test_extreme_move_and_resize_clamped() {
        let mut wm = create_test_manager();
        let a = wm.create_window(config("a")).unwrap();

        assert!(wm.move_window(a, i32::MAX - 10, 0));
        assert_eq!(wm.get_window(a).unwrap().position(), Point::new(COORD_LIMIT, 0));
        assert!(wm.resize_window(a, i32::MAX, i32::MAX));
        assert_eq!(wm.get_window(a).unwrap().size(), Size::new(COORD_LIMIT, COORD_LIMIT));

        let window_regions = wm.get_window(a).unwrap().regions().to_vec();
        assert_eq!(wm.regions(a).unwrap(), window_regions.as_slice());
        assert_eq!(wm.engine().hit_test(Point::new(COORD_LIMIT + 100, 500)).map(|(id, _)| id), Some(a));
    }

    #[test]
    fn test_listener_sees_ordered_events() {
        let mut wm = create_test_manager();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        wm.subscribe(move |e: &WindowEvent| sink.borrow_mut().push((e.window_id, e.kind.clone())));

        let a = wm.create_window(config("a")).unwrap();
        let b = wm.create_window(config("b")).unwrap();
        seen.borrow_mut().clear();
        wm.close_window(b);

        let kinds: Vec<_> = seen.borrow().iter().map(|(id, k)| (*id, std::mem::discriminant(k))).collect();
        let a_z = wm.get_window(a).unwrap().z_index();
        assert_eq!(
            kinds,
            vec![
                (b, std::mem::discriminant(&WindowEventKind::Blurred)),
                (b, std::mem::discriminant(&WindowEventKind::Closed)),
                (a, std::mem::discriminant(&WindowEventKind::Focused { z_index: a_z })),
            ]
        );
    }

    #[test]
    fn test_close_all() {
        let mut wm = create_test_manager();
        for title in ["a", "b", "c"] {
            wm.create_window(config(title)).unwrap();
        }
        wm.close_all_windows();
        assert_eq!(wm.window_count(), 0);
        assert_eq!(wm.focused_id(), None);
        assert!(wm.engine().window_order().is_empty());
    }
}
