// File: crates/delegation-core/src/layout.rs
// Summary: Data-space placement of medal tiles, rank labels and count bars.
// Notes:
// - Rank axes are inverted, so "down" on screen means larger rank values.
// - Tiles hang below each rank marker: gold rows first, then silver, then bronze.

use crate::filter::RankedSeries;
use crate::geometry::DataRect;
use crate::record::{MedalKind, YearlyRecord, MAX_MEDALS_PER_KIND};

/// Tile width, in years.
pub const TILE_WIDTH: f64 = 2.0;
/// Tile height, in rank units.
pub const TILE_HEIGHT: f64 = 5.5;
/// Distance between consecutive tile rows, in rank units.
pub const ROW_SPACING: f64 = 8.0;
/// Gap between a rank marker and its first tile row.
pub const STACK_OFFSET: f64 = 5.0;
/// Rank labels sit this far above their marker.
pub const RANK_LABEL_OFFSET: f64 = 2.0;
/// Count bar width, in years.
pub const BAR_WIDTH: f64 = 2.5;

/// One medal drawn as a colored tile with an optional sport icon.
#[derive(Clone, Debug, PartialEq)]
pub struct MedalTile {
    pub year: i32,
    pub kind: MedalKind,
    /// Row in the year's stack, counting gold, silver and bronze together.
    pub row: u32,
    pub rect: DataRect,
    pub sport: Option<String>,
}

impl MedalTile {
    /// Icon anchor: the tile centre.
    pub fn icon_center(&self) -> (f64, f64) { self.rect.center() }
}

/// First row index used by medals of `kind` within `record`'s stack.
pub fn row_offset(record: &YearlyRecord, kind: MedalKind) -> u32 {
    match kind {
        MedalKind::Gold => 0,
        MedalKind::Silver => record.gold,
        MedalKind::Bronze => record.gold.saturating_add(record.silver),
    }
}

/// Tile rectangle for stack row `row` of a year placed at `rank`.
pub fn tile_rect(year: i32, rank: u32, row: u32) -> DataRect {
    let x = f64::from(year) - TILE_WIDTH / 2.0;
    let y = f64::from(rank) + STACK_OFFSET + f64::from(row) * ROW_SPACING - TILE_WIDTH / 2.0;
    DataRect::new(x, y, TILE_WIDTH, TILE_HEIGHT)
}

/// All tiles for one year, in drawing order.
pub fn medal_tiles(record: &YearlyRecord) -> Vec<MedalTile> {
    let mut tiles = Vec::with_capacity(record.total_medals().min(3 * MAX_MEDALS_PER_KIND) as usize);
    for kind in MedalKind::ALL {
        let base = row_offset(record, kind);
        for j in 0..record.medals(kind) {
            let row = base.saturating_add(j);
            tiles.push(MedalTile {
                year: record.year,
                kind,
                row,
                rect: tile_rect(record.year, record.rank, row),
                sport: record.tag(kind, j as usize).map(str::to_owned),
            });
        }
    }
    tiles
}

/// Largest rank-axis value touched by a year's marker or tiles.
pub fn stack_extent(record: &YearlyRecord) -> f64 {
    match record.total_medals() {
        0 => f64::from(record.rank),
        n => tile_rect(record.year, record.rank, n - 1).max_y(),
    }
}

/// Rank-axis range covering labels above the markers and every tile stack.
pub fn rank_axis_range(series: &RankedSeries) -> (f64, f64) {
    let top = series.records().iter().map(|r| f64::from(r.rank)).fold(f64::INFINITY, f64::min);
    let bottom = series.records().iter().map(stack_extent).fold(f64::NEG_INFINITY, f64::max);
    ((top - RANK_LABEL_OFFSET - 6.0).max(0.0), bottom + 4.0)
}

/// Bar rectangle for `value` at `year`, rising from zero.
pub fn bar_rect(year: i32, value: u32) -> DataRect {
    DataRect::new(f64::from(year) - BAR_WIDTH / 2.0, 0.0, BAR_WIDTH, f64::from(value))
}
