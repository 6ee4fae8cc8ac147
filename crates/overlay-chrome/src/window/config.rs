//! Window configuration for creation

use serde::{Deserialize, Serialize};
use crate::math::{Point, Rect, Size};
use super::{Capabilities, Theme, WindowId};

/// Configuration for creating a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    /// Explicit id (None = allocated by the manager)
    pub id: Option<WindowId>,
    /// Window title
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
    pub draggable: bool,
    pub closable: bool,
    pub minimizable: bool,
    /// Requested starting z-index; the z-order counter is moved past it
    pub z_index: Option<u32>,
    /// Chrome colors (None = default theme)
    pub theme: Option<Theme>,
    /// Minimum size constraint (None = manager default)
    pub min_size: Option<Size>,
    /// Maximum size constraint
    pub max_size: Option<Size>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            x: 0,
            y: 0,
            width: 400,
            height: 300,
            resizable: true,
            draggable: true,
            closable: true,
            minimizable: true,
            z_index: None,
            theme: None,
            min_size: None,
            max_size: None,
        }
    }
}

impl WindowConfig {
    /// Config with a title and bounds, everything else default
    pub fn new(title: impl Into<String>, bounds: Rect) -> Self {
        Self {
            title: title.into(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            ..Default::default()
        }
    }

    /// Requested position
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Requested size (negative values clamp to zero)
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub(crate) fn capabilities(&self) -> Capabilities {
        Capabilities {
            resizable: self.resizable,
            draggable: self.draggable,
            closable: self.closable,
            minimizable: self.minimizable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_enable_all_capabilities() {
        let caps = WindowConfig::default().capabilities();
        assert!(caps.resizable && caps.draggable && caps.closable && caps.minimizable);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: WindowConfig = serde_json::from_str(
            r#"{ "title": "Loot", "x": 10, "y": 20, "width": 320, "resizable": false }"#,
        )
        .unwrap();

        assert_eq!(config.title, "Loot");
        assert_eq!(config.position(), Point::new(10, 20));
        assert_eq!(config.size(), Size::new(320, 300));
        assert!(!config.resizable);
        assert!(config.closable);
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_config_new_from_rect() {
        let config = WindowConfig::new("A", Rect::new(100, 100, 300, 200));
        assert_eq!(config.title, "A");
        assert_eq!(config.size(), Size::new(300, 200));
    }
}
