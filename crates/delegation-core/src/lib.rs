// File: crates/delegation-core/src/lib.rs
// Summary: Core library entry point; exports delegation data model, filtering, and infographic rendering.

pub mod assets;
pub mod axis;
pub mod caption;
pub mod chart;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod loader;
mod panels;
pub mod record;
pub mod scale;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{figures_from_config, Chrome, Figure, RenderOptions};
pub use config::{FigureConfig, FigureSpec, PanelKind};
pub use error::{ChartError, Result};
pub use filter::{filter_ranked, filter_years, Columns, RankedSeries};
pub use loader::{load_records_csv, records_from_reader};
pub use record::{Delegation, MedalKind, YearlyRecord, MAX_MEDALS_PER_KIND};
pub use stats::{mean, BarTone};
pub use theme::Theme;
pub use text::TextShaper;
