//! Window color theme

use serde::{Deserialize, Serialize};
use crate::host::Color;

/// Colors used when drawing window chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub background: Color,
    pub title_bar: Color,
    pub title_bar_focused: Color,
    pub title_text: Color,
    pub border: Color,
    pub border_focused: Color,
    pub button: Color,
    pub close_button: Color,
    pub glyph: Color,
    pub shadow: Color,
    pub placeholder_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgba(20, 22, 28, 235),
            title_bar: Color::rgb(38, 42, 52),
            title_bar_focused: Color::rgb(48, 56, 74),
            title_text: Color::rgb(230, 232, 238),
            border: Color::rgb(70, 74, 86),
            border_focused: Color::rgb(96, 165, 250),
            button: Color::rgb(58, 62, 74),
            close_button: Color::rgb(200, 64, 64),
            glyph: Color::rgb(230, 232, 238),
            shadow: Color::rgba(0, 0, 0, 96),
            placeholder_text: Color::rgb(120, 124, 136),
        }
    }
}

impl Theme {
    /// Border color for the given focus state
    #[inline]
    pub fn border_for(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Title bar color for the given focus state
    #[inline]
    pub fn title_bar_for(&self, focused: bool) -> Color {
        if focused {
            self.title_bar_focused
        } else {
            self.title_bar
        }
    }
}
