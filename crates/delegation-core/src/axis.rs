// File: crates/delegation-core/src/axis.rs
// Summary: Axis model with title, range, and inversion.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Smaller values drawn at the top (rank axes).
    pub inverted: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, inverted: false }
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Shared year axis: one Games of padding on each side of the ranked years.
    pub fn years(first: i32, last: i32) -> Self {
        Self::new("Olympic Year", f64::from(first) - 4.0, f64::from(last) + 4.0)
    }
}
