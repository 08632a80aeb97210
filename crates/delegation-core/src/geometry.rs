// File: crates/delegation-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel and data-space rectangles.

/// Pixel rectangle (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Shrink by `insets`, never inverting the rectangle.
    pub fn inset(&self, insets: crate::types::Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Point at fractional position; `fy = 0` is the bottom edge, like axes fractions.
    pub fn fraction(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.left + fx * self.width(), self.bottom - fy * self.height())
    }

    /// Split vertically into `n` equal bands, top to bottom.
    pub fn split_rows(&self, n: usize) -> Vec<RectF> {
        if n == 0 { return Vec::new(); }
        let h = self.height() / n as f32;
        (0..n).map(|i| RectF::from_ltwh(self.left, self.top + h * i as f32, self.width(), h)).collect()
    }
}

/// Rectangle in data units: `(x, y)` is the corner with the smallest coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DataRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
    pub fn max_y(&self) -> f64 { self.y + self.height }
}
