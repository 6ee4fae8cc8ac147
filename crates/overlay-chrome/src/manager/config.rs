//! Manager configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::InteractionConfig;
use crate::math::{Point, Size};

/// Manager-wide settings. Every field has a default, so partial JSON
/// documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Area maximize, cascade, tile and center work in
    pub viewport: Size,
    /// Where the first cascaded window lands
    pub cascade_origin: Point,
    /// Offset between consecutive cascaded windows
    pub cascade_stagger: i32,
    /// Smallest cell tiling will produce
    pub tile_min_cell: Size,
    /// Minimum window size when a window config has none
    pub default_min_size: Size,
    pub interaction: InteractionConfig,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920, 1080),
            cascade_origin: Point::new(50, 50),
            cascade_stagger: 30,
            tile_min_cell: Size::new(300, 200),
            default_min_size: Size::new(200, 100),
            interaction: InteractionConfig::default(),
        }
    }
}

impl ManagerConfig {
    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
