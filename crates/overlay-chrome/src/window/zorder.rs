//! Z-order counter

use serde::{Deserialize, Serialize};

/// Monotonic z-index allocator.
///
/// Every call to [`ZOrder::raise`] hands out a value strictly greater than
/// any value handed out before, so two windows never share a z-index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrder {
    next: u32,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZOrder {
    /// Create a counter starting at 1
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next top-most z-index
    #[inline]
    pub fn raise(&mut self) -> u32 {
        let z = self.next;
        self.next = self.next.saturating_add(1);
        z
    }

    /// Value the next call to `raise` will return
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Make sure future values are above `z`
    pub fn bump_past(&mut self, z: u32) {
        if z >= self.next {
            self.next = z.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_is_monotonic() {
        let mut z = ZOrder::new();
        let a = z.raise();
        let b = z.raise();
        let c = z.raise();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_bump_past() {
        let mut z = ZOrder::new();
        z.bump_past(10);
        assert_eq!(z.raise(), 11);

        // Lower values never move the counter back
        z.bump_past(3);
        assert_eq!(z.raise(), 12);
    }
}
