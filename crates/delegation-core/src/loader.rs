// File: crates/delegation-core/src/loader.rs
// Summary: CSV loader for per-year delegation records.
// Columns: year, athletes, sports, rank, gold, silver, bronze, gold_sports, silver_sports, bronze_sports.
// Tag columns hold `;`-separated sport names; `sports` and tag columns may be empty.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::record::YearlyRecord;

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: i32,
    athletes: u32,
    #[serde(default)]
    sports: Option<u32>,
    #[serde(default)]
    rank: u32,
    #[serde(default)]
    gold: u32,
    #[serde(default)]
    silver: u32,
    #[serde(default)]
    bronze: u32,
    #[serde(default)]
    gold_sports: String,
    #[serde(default)]
    silver_sports: String,
    #[serde(default)]
    bronze_sports: String,
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<CsvRow> for YearlyRecord {
    fn from(row: CsvRow) -> Self {
        YearlyRecord {
            year: row.year,
            athletes: row.athletes,
            sports: row.sports,
            rank: row.rank,
            gold: row.gold,
            silver: row.silver,
            bronze: row.bronze,
            gold_sports: split_tags(&row.gold_sports),
            silver_sports: split_tags(&row.silver_sports),
            bronze_sports: split_tags(&row.bronze_sports),
        }
    }
}

/// Parse records from any CSV source with a header row.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<YearlyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        out.push(YearlyRecord::from(row?));
    }
    tracing::debug!(rows = out.len(), "parsed delegation records");
    Ok(out)
}

/// Load records from a CSV file.
pub fn load_records_csv(path: impl AsRef<Path>) -> Result<Vec<YearlyRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    records_from_reader(file)
}
