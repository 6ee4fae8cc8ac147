//! Tracking on/off switch

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag controlling whether the engine polls.
///
/// Clones share the flag, so a callback holding one can stop tracking from
/// inside a tick. Stopping twice is harmless.
#[derive(Clone, Debug, Default)]
pub struct TrackingSwitch {
    active: Arc<AtomicBool>,
}

impl TrackingSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Turn tracking on; returns false if it already was
    pub fn start(&self) -> bool {
        !self.active.swap(true, Ordering::SeqCst)
    }

    /// Turn tracking off; returns false if it already was
    pub fn stop(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }
}
