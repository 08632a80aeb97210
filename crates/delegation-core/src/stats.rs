// File: crates/delegation-core/src/stats.rs
// Summary: Mean of integer counts and the above/below-average bar classification.

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Fill class of a count bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarTone {
    AboveAverage,
    AtOrBelowAverage,
    /// Most recent Games; overrides the average comparison.
    Latest,
}

impl BarTone {
    /// Strictly greater than `average` is above; equal is not.
    pub fn classify(value: u32, average: f64, is_latest: bool) -> Self {
        if is_latest {
            BarTone::Latest
        } else if f64::from(value) > average {
            BarTone::AboveAverage
        } else {
            BarTone::AtOrBelowAverage
        }
    }
}

/// Tones for a whole bar series; the last entry is the latest year.
pub fn classify_all(values: &[u32], average: f64) -> Vec<BarTone> {
    let last = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| BarTone::classify(v, average, i == last))
        .collect()
}
