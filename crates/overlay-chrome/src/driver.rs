//! Blocking polling driver
//!
//! Runs the manager's tick loop on the calling thread at the configured
//! interval. Hosts with their own timer should call
//! [`WindowManager::poll`] from it instead.

use std::time::{Duration, Instant};

use crate::manager::WindowManager;

/// Tick `manager` until tracking is switched off or `max_ticks` is reached.
///
/// Starts tracking if needed; returns 0 immediately when the host has no
/// cursor. Each iteration sleeps for whatever is left of the interval after
/// the tick. Returns the number of ticks run.
pub fn run_polling_loop(manager: &mut WindowManager, max_ticks: Option<u64>) -> u64 {
    if !manager.start_tracking() {
        return 0;
    }
    let interval = Duration::from_millis(manager.interaction_config().poll_interval_ms);
    let mut ticks = 0;
    log::debug!("polling loop started ({interval:?} interval)");

    while manager.is_tracking() {
        if max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }
        let started = Instant::now();
        manager.tick();
        ticks += 1;

        let elapsed = started.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }

    log::debug!("polling loop exited after {ticks} ticks");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::host::HostBindings;
    use crate::input::{InteractionConfig, TrackingSwitch};
    use crate::manager::ManagerConfig;
    use crate::math::Point;

    fn fast_config() -> ManagerConfig {
        ManagerConfig {
            interaction: InteractionConfig {
                poll_interval_ms: 1,
                ..InteractionConfig::default()
            },
            ..ManagerConfig::default()
        }
    }

    #[test]
    fn test_no_cursor_returns_immediately() {
        let mut wm = WindowManager::new(fast_config(), HostBindings::detached());
        assert_eq!(run_polling_loop(&mut wm, None), 0);
    }

    #[test]
    fn test_tick_limit() {
        let polls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&polls);
        let host = HostBindings::detached().with_cursor(move || {
            counter.set(counter.get() + 1);
            Some(Point::new(10, 10))
        });
        let mut wm = WindowManager::new(fast_config(), host);

        assert_eq!(run_polling_loop(&mut wm, Some(3)), 3);
        assert_eq!(polls.get(), 3);
        assert!(wm.is_tracking());
    }

    #[test]
    fn test_stops_when_switched_off() {
        let switch: Rc<RefCell<Option<TrackingSwitch>>> = Rc::default();
        let polls = Rc::new(Cell::new(0));
        let (handle, counter) = (Rc::clone(&switch), Rc::clone(&polls));
        let host = HostBindings::detached().with_cursor(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                if let Some(switch) = handle.borrow().as_ref() {
                    switch.stop();
                }
            }
            Some(Point::new(10, 10))
        });
        let mut wm = WindowManager::new(fast_config(), host);
        *switch.borrow_mut() = Some(wm.tracking_switch());

        assert_eq!(run_polling_loop(&mut wm, Some(100)), 2);
        assert!(!wm.is_tracking());
    }
}
