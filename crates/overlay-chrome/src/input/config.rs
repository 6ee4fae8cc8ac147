//! Interaction engine configuration

use serde::{Deserialize, Serialize};

/// How hover is reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoverMode {
    /// `Hover` fires on every tick the cursor is inside a window
    #[default]
    Continuous,
    /// `Hover` fires on entry or region change, `Leave` on exit
    EdgeTriggered,
}

/// Polling and gesture recognition parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Cursor poll interval
    pub poll_interval_ms: u64,
    /// Movement (px) between samples that counts as fast motion; also the
    /// radius the cursor must settle within for a click
    pub sensitivity_px: f64,
    /// Minimum time between two synthesized clicks
    pub click_debounce_ms: f64,
    pub hover_mode: HoverMode,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 16,
            sensitivity_px: 15.0,
            click_debounce_ms: 50.0,
            hover_mode: HoverMode::Continuous,
        }
    }
}
