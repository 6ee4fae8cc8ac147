//! Interaction regions for hit testing
//!
//! Regions are always derived from a window's rectangle and capabilities.
//! They are never edited on their own, so they cannot drift away from the
//! geometry they describe.

use serde::{Deserialize, Serialize};
use crate::math::{Point, Rect, FRAME_STYLE};

/// Semantic kind of a hit-test region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area
    Content,
    /// Bottom-right resize grip
    ResizeHandle,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
}

impl RegionKind {
    /// Hit-test precedence; lower wins when regions overlap
    #[inline]
    pub fn priority(&self) -> u8 {
        match self {
            RegionKind::CloseButton | RegionKind::ResizeHandle => 0,
            RegionKind::MinimizeButton | RegionKind::MaximizeButton => 1,
            RegionKind::TitleBar => 2,
            RegionKind::Content => 3,
        }
    }

    /// Check if this is one of the title bar buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            RegionKind::CloseButton | RegionKind::MinimizeButton | RegionKind::MaximizeButton
        )
    }

    /// Cursor the host should show over this region
    pub fn cursor_hint(&self) -> CursorHint {
        match self {
            RegionKind::TitleBar => CursorHint::Move,
            RegionKind::Content => CursorHint::Default,
            RegionKind::CloseButton | RegionKind::MinimizeButton | RegionKind::MaximizeButton => {
                CursorHint::Pointer
            }
            RegionKind::ResizeHandle => CursorHint::NwseResize,
        }
    }
}

/// Cursor shape hint attached to a region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    Default,
    Move,
    Pointer,
    NwseResize,
}

impl CursorHint {
    /// CSS cursor name
    pub fn css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Move => "move",
            CursorHint::Pointer => "pointer",
            CursorHint::NwseResize => "nwse-resize",
        }
    }
}

/// A rectangle tagged with a semantic kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRegion {
    pub rect: Rect,
    pub kind: RegionKind,
    pub cursor_hint: CursorHint,
}

impl InteractionRegion {
    pub fn new(rect: Rect, kind: RegionKind) -> Self {
        Self {
            rect,
            kind,
            cursor_hint: kind.cursor_hint(),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// Which chrome controls a window exposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub resizable: bool,
    pub draggable: bool,
    pub closable: bool,
    pub minimizable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            resizable: true,
            draggable: true,
            closable: true,
            minimizable: true,
        }
    }
}

/// Rect of the title bar button in `slot` (0 = right-most)
fn button_rect(window: Rect, slot: i32) -> Rect {
    let style = &FRAME_STYLE;
    let x = window.right()
        - style.button_margin
        - style.button_size * (slot + 1)
        - style.button_spacing * slot;
    let y = window.y + (style.title_bar_height - style.button_size) / 2;
    Rect::new(x, y, style.button_size, style.button_size)
}

/// Derive the region set for a window rectangle, sorted by priority.
///
/// Buttons keep fixed slots (close, maximize, minimize from the right) so
/// disabling one never shifts the others. Maximize follows `resizable`.
pub fn regions_for(window: Rect, caps: Capabilities) -> Vec<InteractionRegion> {
    let style = &FRAME_STYLE;
    let title_height = style.title_bar_height.min(window.height);
    let handle = style.resize_handle_size;

    let mut regions = Vec::with_capacity(6);

    if caps.closable {
        regions.push(InteractionRegion::new(button_rect(window, 0), RegionKind::CloseButton));
    }
    if caps.resizable {
        regions.push(InteractionRegion::new(
            Rect::new(window.right() - handle, window.bottom() - handle, handle, handle),
            RegionKind::ResizeHandle,
        ));
        regions.push(InteractionRegion::new(button_rect(window, 1), RegionKind::MaximizeButton));
    }
    if caps.minimizable {
        regions.push(InteractionRegion::new(button_rect(window, 2), RegionKind::MinimizeButton));
    }
    regions.push(InteractionRegion::new(
        Rect::new(window.x, window.y, window.width, title_height),
        RegionKind::TitleBar,
    ));
    regions.push(InteractionRegion::new(
        Rect::new(window.x, window.y + title_height, window.width, window.height - title_height),
        RegionKind::Content,
    ));

    // Stable sort keeps close ahead of the resize handle
    regions.sort_by_key(|r| r.kind.priority());
    regions
}

/// First region containing `p`, assuming `regions` is in priority order
pub fn region_at(regions: &[InteractionRegion], p: Point) -> Option<&InteractionRegion> {
    regions.iter().find(|r| r.contains(p))
}
