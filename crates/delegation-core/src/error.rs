// File: crates/delegation-core/src/error.rs
// Summary: Library error type shared by loading, filtering, and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("column `{column}` has {found} entries, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("no year has a recorded rank; nothing to plot")]
    NoRankedYears,

    #[error("{year}: {kind} sport tags list {found} entries but {expected} medals were won")]
    TagCountMismatch {
        year: i32,
        kind: &'static str,
        expected: u32,
        found: usize,
    },

    #[error("{year}: {count} {kind} medals exceeds the limit of {max}")]
    MedalCountOutOfRange {
        year: i32,
        kind: &'static str,
        count: u32,
        max: u32,
    },

    #[error("missing image asset {}", .path.display())]
    MissingAsset { path: PathBuf },

    #[error("could not decode image asset {}", .path.display())]
    AssetDecode { path: PathBuf },

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode,

    #[error("unknown panel `{0}` (expected medals, athletes or sports)")]
    UnknownPanel(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
