//! Frame style constants

/// Frame style constants for window chrome
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    pub title_bar_height: i32,
    pub border_width: i32,
    pub button_size: i32,
    pub button_spacing: i32,
    pub button_margin: i32,
    pub resize_handle_size: i32,
    pub title_font_size: u32,
    pub title_padding: i32,
    /// Number of shadow passes drawn under the frame
    pub shadow_passes: i32,
    /// Offset added per shadow pass
    pub shadow_step: i32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 30,
    border_width: 1,
    button_size: 20,
    button_spacing: 4,
    button_margin: 5,
    resize_handle_size: 15,
    title_font_size: 14,
    title_padding: 8,
    shadow_passes: 3,
    shadow_step: 2,
};
