//! Error types
//!
//! Only a handful of operations can fail visibly. Geometry is clamped and
//! missing windows are reported through `bool`/`Option` returns; these enums
//! cover the rest.

use crate::window::WindowId;

/// Failure reported by the host drawing surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The host refused or failed a draw call.
    #[error("draw call `{call}` failed for group `{group}`: {reason}")]
    DrawFailed {
        call: &'static str,
        group: String,
        reason: String,
    },

    /// The host is no longer accepting draw calls.
    #[error("overlay surface unavailable")]
    Unavailable,

    /// A content renderer reported a failure.
    #[error("content renderer failed: {0}")]
    Content(String),
}

/// Window bookkeeping errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A window with the requested id already exists.
    #[error("window {0} already exists")]
    DuplicateId(WindowId),
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
