//! Interfaces to the overlay host
//!
//! The host renders retained-mode draw groups and can report where the
//! cursor is, but delivers no input events. These traits are the only
//! things the rest of the crate knows about it.

mod bindings;
mod clock;
mod color;
mod cursor;
mod surface;

pub use bindings::HostBindings;
pub use clock::{Clock, SharedClock, SystemClock};
pub use color::Color;
pub use cursor::CursorSource;
pub use surface::{OverlaySurface, RectStyle, SharedSurface};
