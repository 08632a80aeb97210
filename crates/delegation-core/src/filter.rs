// File: crates/delegation-core/src/filter.rs
// Summary: Rank-based filtering over parallel columns and the resulting ranked series.
// Notes:
// - A year is kept iff its rank is positive; relative order is preserved.
// - Every companion column is filtered with the same index set.

use crate::error::{ChartError, Result};
use crate::record::YearlyRecord;
use crate::stats::mean;

/// Keep `values[i]` wherever `rank[i] > 0`.
pub fn filter_ranked<T: Clone>(values: &[T], rank: &[u32]) -> Result<Vec<T>> {
    if values.len() != rank.len() {
        return Err(ChartError::LengthMismatch { column: "values", expected: rank.len(), found: values.len() });
    }
    Ok(values
        .iter()
        .zip(rank)
        .filter(|(_, r)| **r > 0)
        .map(|(v, _)| v.clone())
        .collect())
}

/// Years with a recorded rank.
pub fn filter_years(years: &[i32], rank: &[u32]) -> Result<Vec<i32>> {
    filter_ranked(years, rank)
}

/// Parallel-array view of a delegation, one entry per Games.
/// Contract: every column has the same length as `years`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    pub years: Vec<i32>,
    pub athletes: Vec<u32>,
    pub sports: Vec<Option<u32>>,
    pub rank: Vec<u32>,
    pub gold: Vec<u32>,
    pub silver: Vec<u32>,
    pub bronze: Vec<u32>,
    pub gold_sports: Vec<Vec<String>>,
    pub silver_sports: Vec<Vec<String>>,
    pub bronze_sports: Vec<Vec<String>>,
}

impl Columns {
    pub fn len(&self) -> usize { self.years.len() }

    pub fn is_empty(&self) -> bool { self.years.is_empty() }

    /// Check that every column lines up with `years`.
    /// Tag columns may be left empty altogether, meaning "no icons".
    pub fn check_lengths(&self) -> Result<()> {
        let n = self.years.len();
        let check = |column: &'static str, found: usize| {
            if found == n { Ok(()) } else { Err(ChartError::LengthMismatch { column, expected: n, found }) }
        };
        check("athletes", self.athletes.len())?;
        check("sports", self.sports.len())?;
        check("rank", self.rank.len())?;
        check("gold", self.gold.len())?;
        check("silver", self.silver.len())?;
        check("bronze", self.bronze.len())?;
        for (column, tags) in [
            ("gold_sports", &self.gold_sports),
            ("silver_sports", &self.silver_sports),
            ("bronze_sports", &self.bronze_sports),
        ] {
            if !tags.is_empty() {
                check(column, tags.len())?;
            }
        }
        Ok(())
    }

    /// Apply the rank filter to every column at once.
    pub fn filter(&self) -> Result<Columns> {
        self.check_lengths()?;
        let rank = &self.rank;
        let tags = |col: &Vec<Vec<String>>| -> Result<Vec<Vec<String>>> {
            if col.is_empty() { Ok(Vec::new()) } else { filter_ranked(col, rank) }
        };
        Ok(Columns {
            years: filter_ranked(&self.years, rank)?,
            athletes: filter_ranked(&self.athletes, rank)?,
            sports: filter_ranked(&self.sports, rank)?,
            rank: filter_ranked(rank, rank)?,
            gold: filter_ranked(&self.gold, rank)?,
            silver: filter_ranked(&self.silver, rank)?,
            bronze: filter_ranked(&self.bronze, rank)?,
            gold_sports: tags(&self.gold_sports)?,
            silver_sports: tags(&self.silver_sports)?,
            bronze_sports: tags(&self.bronze_sports)?,
        })
    }

    /// Zip the columns into records.
    pub fn into_records(self) -> Result<Vec<YearlyRecord>> {
        self.check_lengths()?;
        let tag_at = |col: &[Vec<String>], i: usize| col.get(i).cloned().unwrap_or_default();
        let records = (0..self.years.len())
            .map(|i| YearlyRecord {
                year: self.years[i],
                athletes: self.athletes[i],
                sports: self.sports[i],
                rank: self.rank[i],
                gold: self.gold[i],
                silver: self.silver[i],
                bronze: self.bronze[i],
                gold_sports: tag_at(&self.gold_sports, i),
                silver_sports: tag_at(&self.silver_sports, i),
                bronze_sports: tag_at(&self.bronze_sports, i),
            })
            .collect();
        Ok(records)
    }
}

/// Ranked years only, in chronological input order. Never empty.
#[derive(Clone, Debug)]
pub struct RankedSeries {
    records: Vec<YearlyRecord>,
}

impl RankedSeries {
    /// Wrap already-filtered records; rejects empty input so renderers can index the last year.
    pub fn new(records: Vec<YearlyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChartError::NoRankedYears);
        }
        debug_assert!(records.iter().all(YearlyRecord::is_ranked));
        Ok(Self { records })
    }

    pub fn records(&self) -> &[YearlyRecord] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn first(&self) -> &YearlyRecord { &self.records[0] }

    pub fn latest(&self) -> &YearlyRecord { &self.records[self.records.len() - 1] }

    pub fn years(&self) -> Vec<i32> { self.records.iter().map(|r| r.year).collect() }

    pub fn ranks(&self) -> Vec<u32> { self.records.iter().map(|r| r.rank).collect() }

    pub fn athletes(&self) -> Vec<u32> { self.records.iter().map(|r| r.athletes).collect() }

    /// (year, sports) for years that report a sport count.
    pub fn sports(&self) -> Vec<(i32, u32)> {
        self.records.iter().filter_map(|r| r.sports.map(|s| (r.year, s))).collect()
    }

    pub fn mean_athletes(&self) -> f64 {
        mean(&self.athletes()).unwrap_or(0.0)
    }

    pub fn mean_sports(&self) -> Option<f64> {
        let counts: Vec<u32> = self.sports().into_iter().map(|(_, s)| s).collect();
        mean(&counts)
    }
}
