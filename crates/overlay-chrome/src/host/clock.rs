//! Injectable time source

use std::rc::Rc;
use std::time::Instant;

/// Millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock shared between the manager, its windows and the interaction engine
pub type SharedClock = Rc<dyn Clock>;

/// Wall clock measured from construction
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
