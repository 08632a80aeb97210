// File: crates/delegation-core/src/types.rs
// Summary: Shared types and constants (figure sizes, paddings, point/pixel conversion).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1400;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 1100;
/// Resolution used to convert point sizes to pixels.
pub const DPI: f32 = 100.0;

/// Height of the title band at the top of every figure.
pub const HEADER_HEIGHT: f32 = 170.0;
/// Height of the source/copyright band at the bottom.
pub const FOOTER_HEIGHT: f32 = 56.0;

/// Screen margins around a panel's plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Wide right margin: captions sit to the right of the latest year.
    fn default() -> Self {
        Self::new(96, 300, 36, 64)
    }
}

/// Convert a font size in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}
