//! Window event subscriptions

use crate::window::WindowEvent;
use super::WindowManager;

/// Receives every window event the manager processes
pub type WindowListener = Box<dyn FnMut(&WindowEvent)>;

/// Handle returned by [`WindowManager::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registered listeners, in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, WindowListener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: WindowListener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &WindowEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl WindowManager {
    /// Register a listener for window lifecycle events
    pub fn subscribe(&mut self, listener: impl FnMut(&WindowEvent) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::window::WindowEventKind;

    fn event(id: u64) -> WindowEvent {
        WindowEvent {
            window_id: id,
            kind: WindowEventKind::Blurred,
            timestamp_ms: 0.0,
        }
    }

    #[test]
    fn test_emit_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            listeners.add(Box::new(move |e: &WindowEvent| seen.borrow_mut().push((tag, e.window_id))));
        }

        listeners.emit(&event(7));
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_remove() {
        let mut listeners = Listeners::default();
        let id = listeners.add(Box::new(|_: &WindowEvent| {}));
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }
}
