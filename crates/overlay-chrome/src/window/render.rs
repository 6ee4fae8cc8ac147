//! Window chrome rendering
//!
//! A frame is one batch on the window's draw group: freeze, clear, draw
//! everything, continue. On failure the group stays frozen, so the host
//! keeps showing the last complete frame until a later render succeeds.

use std::borrow::Cow;

use crate::error::SurfaceError;
use crate::host::{OverlaySurface, RectStyle};
use crate::math::{Point, Rect, FRAME_STYLE};
use super::{RegionKind, Window};

/// Average glyph width as a fraction of the font size
const GLYPH_WIDTH_RATIO: f64 = 0.6;

const PLACEHOLDER_TEXT: &str = "No content";

impl Window {
    /// Redraw the whole window. Errors are logged, never returned.
    pub fn render(&self) {
        if !self.visible || self.closed {
            return;
        }
        let Some(surface) = self.surface.as_deref() else { return };

        if let Err(err) = self.draw_frame(surface) {
            log::warn!("window {}: frame dropped: {}", self.id, err);
        }
    }

    fn draw_frame(&self, surface: &dyn OverlaySurface) -> Result<(), SurfaceError> {
        let group = self.group.as_str();
        surface.freeze_group(group)?;
        surface.set_group_z_index(group, self.z_index)?;
        surface.clear_group(group)?;

        self.draw_shadow(surface, group)?;
        self.draw_body(surface, group)?;
        self.draw_title_bar(surface, group)?;
        self.draw_content(surface, group)?;
        self.draw_controls(surface, group)?;

        surface.continue_group(group)
    }

    /// Offset passes with decreasing alpha
    fn draw_shadow(&self, surface: &dyn OverlaySurface, group: &str) -> Result<(), SurfaceError> {
        let passes = FRAME_STYLE.shadow_passes;
        let base = self.theme.shadow;
        for pass in 1..=passes {
            let offset = pass * FRAME_STYLE.shadow_step;
            let alpha = u32::from(base.a) * (passes - pass + 1) as u32 / passes as u32;
            let color = base.with_alpha(alpha.min(255) as u8);
            surface.draw_rect(group, self.rect().translate(Point::new(offset, offset)), color, RectStyle::Filled)?;
        }
        Ok(())
    }

    fn draw_body(&self, surface: &dyn OverlaySurface, group: &str) -> Result<(), SurfaceError> {
        let rect = self.rect();
        surface.draw_rect(group, rect, self.theme.background, RectStyle::Filled)?;
        surface.draw_rect(
            group,
            rect,
            self.theme.border_for(self.focused),
            RectStyle::Outline {
                width: FRAME_STYLE.border_width.max(0) as u32,
            },
        )
    }

    fn draw_title_bar(&self, surface: &dyn OverlaySurface, group: &str) -> Result<(), SurfaceError> {
        let Some(title_bar) = self.region_rect(RegionKind::TitleBar) else {
            return Ok(());
        };
        let inner = title_bar.shrink(FRAME_STYLE.border_width);
        surface.draw_rect(group, inner, self.theme.title_bar_for(self.focused), RectStyle::Filled)?;

        // Leave room for the buttons on the right
        let buttons = self.regions().iter().filter(|r| r.kind.is_button()).count() as i32;
        let reserved = FRAME_STYLE.button_margin
            + buttons * (FRAME_STYLE.button_size + FRAME_STYLE.button_spacing);
        let text_width = title_bar.width - FRAME_STYLE.title_padding - reserved;
        let title = fit_title(&self.title, text_width, FRAME_STYLE.title_font_size);
        if title.is_empty() {
            return Ok(());
        }

        let font = FRAME_STYLE.title_font_size as i32;
        let origin = Point::new(
            title_bar.x + FRAME_STYLE.title_padding,
            title_bar.y + (title_bar.height - font) / 2,
        );
        surface.draw_text(group, &title, origin, self.theme.title_text, FRAME_STYLE.title_font_size)
    }

    fn draw_content(&self, surface: &dyn OverlaySurface, group: &str) -> Result<(), SurfaceError> {
        let Some(content) = self.region_rect(RegionKind::Content) else {
            return Ok(());
        };
        match &self.content_renderer {
            Some(renderer) => renderer(surface, group, content),
            None => {
                let font = FRAME_STYLE.title_font_size;
                let origin = Point::new(
                    content.x + FRAME_STYLE.title_padding,
                    content.y + FRAME_STYLE.title_padding,
                );
                surface.draw_text(group, PLACEHOLDER_TEXT, origin, self.theme.placeholder_text, font)
            }
        }
    }

    /// Buttons and the resize grip, drawn from the live regions so the
    /// chrome always matches what is hit-tested
    fn draw_controls(&self, surface: &dyn OverlaySurface, group: &str) -> Result<(), SurfaceError> {
        let glyph = self.theme.glyph;
        for region in self.regions() {
            let r = region.rect;
            let inset = r.shrink(5);
            match region.kind {
                RegionKind::CloseButton => {
                    surface.draw_rect(group, r, self.theme.close_button, RectStyle::Filled)?;
                    surface.draw_line(group, inset.position(), Point::new(inset.right(), inset.bottom()), glyph, 2)?;
                    surface.draw_line(group, Point::new(inset.right(), inset.y), Point::new(inset.x, inset.bottom()), glyph, 2)?;
                }
                RegionKind::MaximizeButton => {
                    surface.draw_rect(group, r, self.theme.button, RectStyle::Filled)?;
                    surface.draw_rect(group, inset, glyph, RectStyle::Outline { width: 1 })?;
                    if self.maximized {
                        let back = inset.translate(Point::new(2, -2));
                        surface.draw_rect(group, back, glyph, RectStyle::Outline { width: 1 })?;
                    }
                }
                RegionKind::MinimizeButton => {
                    surface.draw_rect(group, r, self.theme.button, RectStyle::Filled)?;
                    let y = inset.bottom();
                    surface.draw_line(group, Point::new(inset.x, y), Point::new(inset.right(), y), glyph, 2)?;
                }
                RegionKind::ResizeHandle => {
                    let color = self.theme.border_for(self.focused);
                    for step in [4, 8, 12] {
                        let from = Point::new(r.right() - step, r.bottom());
                        let to = Point::new(r.right(), r.bottom() - step);
                        surface.draw_line(group, from, to, color, 1)?;
                    }
                }
                RegionKind::TitleBar | RegionKind::Content => {}
            }
        }
        Ok(())
    }

    fn region_rect(&self, kind: RegionKind) -> Option<Rect> {
        self.regions().iter().find(|r| r.kind == kind).map(|r| r.rect)
    }
}

/// Truncate `title` with an ellipsis so it fits `width` pixels
fn fit_title(title: &str, width: i32, font_size: u32) -> Cow<'_, str> {
    let glyph = f64::from(font_size) * GLYPH_WIDTH_RATIO;
    let max_chars = if width <= 0 || glyph <= 0.0 {
        0
    } else {
        (f64::from(width) / glyph).floor() as usize
    };

    let count = title.chars().count();
    if count <= max_chars {
        return Cow::Borrowed(title);
    }
    if max_chars <= 1 {
        return Cow::Borrowed("");
    }
    let mut cut: String = title.chars().take(max_chars - 1).collect();
    cut.push('…');
    Cow::Owned(cut)
}
