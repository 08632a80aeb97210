// File: crates/delegation-core/src/scale.rs
// Summary: Linear data-to-pixel transforms, with optional inversion for rank axes.

/// Data coordinate (year, rank, or count).
pub type Value = f64;

/// Maps `[vmin, vmax]` onto `[px_start, px_end]`. `px_start` may exceed `px_end`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }

    /// Left-to-right axis.
    pub fn horizontal(left_px: f32, right_px: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(left_px, right_px, vmin, vmax)
    }

    /// Bottom-to-top axis: `vmin` at the bottom.
    pub fn vertical(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(bottom_px, top_px, vmin, vmax)
    }

    /// Inverted axis: `vmin` at the top (rank 1 on top).
    pub fn vertical_inverted(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(top_px, bottom_px, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}
