// File: crates/delegation-core/src/record.rs
// Summary: Per-year delegation record (athletes, sports, rank, medals, medal sport tags).

use crate::error::{ChartError, Result};
use crate::filter::RankedSeries;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    /// Stacking order of medal tiles, top to bottom.
    pub const ALL: [MedalKind; 3] = [MedalKind::Gold, MedalKind::Silver, MedalKind::Bronze];

    pub const fn name(self) -> &'static str {
        match self {
            MedalKind::Gold => "gold",
            MedalKind::Silver => "silver",
            MedalKind::Bronze => "bronze",
        }
    }
}

/// Upper bound on medals of one kind in a single Games.
pub const MAX_MEDALS_PER_KIND: u32 = 1_000;

/// One Games for one delegation.
/// Contract: `rank == 0` means no ranking was recorded for that year.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearlyRecord {
    pub year: i32,
    pub athletes: u32,
    pub sports: Option<u32>,
    pub rank: u32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub gold_sports: Vec<String>,
    pub silver_sports: Vec<String>,
    pub bronze_sports: Vec<String>,
}

impl YearlyRecord {
    pub fn new(year: i32, athletes: u32, rank: u32) -> Self {
        Self { year, athletes, rank, ..Self::default() }
    }

    pub fn with_sports(mut self, sports: u32) -> Self {
        self.sports = Some(sports);
        self
    }

    pub fn with_medals(mut self, gold: u32, silver: u32, bronze: u32) -> Self {
        self.gold = gold;
        self.silver = silver;
        self.bronze = bronze;
        self
    }

    pub fn with_tags<I, S>(mut self, kind: MedalKind, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        match kind {
            MedalKind::Gold => self.gold_sports = tags,
            MedalKind::Silver => self.silver_sports = tags,
            MedalKind::Bronze => self.bronze_sports = tags,
        }
        self
    }

    #[inline]
    pub fn is_ranked(&self) -> bool { self.rank > 0 }

    pub fn total_medals(&self) -> u32 {
        self.gold.saturating_add(self.silver).saturating_add(self.bronze)
    }

    pub fn medals(&self, kind: MedalKind) -> u32 {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }

    pub fn tags(&self, kind: MedalKind) -> &[String] {
        match kind {
            MedalKind::Gold => &self.gold_sports,
            MedalKind::Silver => &self.silver_sports,
            MedalKind::Bronze => &self.bronze_sports,
        }
    }

    /// Sport tag for the `index`-th medal of `kind`, if tags were supplied.
    pub fn tag(&self, kind: MedalKind, index: usize) -> Option<&str> {
        self.tags(kind).get(index).map(String::as_str)
    }

    /// Medal counts are capped at [`MAX_MEDALS_PER_KIND`]. Tag lists are optional,
    /// but a non-empty list must name every medal of its kind.
    pub fn validate(&self) -> Result<()> {
        for kind in MedalKind::ALL {
            let tags = self.tags(kind);
            let expected = self.medals(kind);
            if expected > MAX_MEDALS_PER_KIND {
                return Err(ChartError::MedalCountOutOfRange {
                    year: self.year,
                    kind: kind.name(),
                    count: expected,
                    max: MAX_MEDALS_PER_KIND,
                });
            }
            if !tags.is_empty() && tags.len() != expected as usize {
                return Err(ChartError::TagCountMismatch {
                    year: self.year,
                    kind: kind.name(),
                    expected,
                    found: tags.len(),
                });
            }
        }
        Ok(())
    }
}

/// A national delegation across all Games it is listed for.
#[derive(Clone, Debug, Default)]
pub struct Delegation {
    pub country: String,
    pub records: Vec<YearlyRecord>,
}

impl Delegation {
    pub fn new(country: impl Into<String>, records: Vec<YearlyRecord>) -> Self {
        Self { country: country.into(), records }
    }

    /// Keep only the ranked years, in input order, and validate them.
    /// Unranked years are never drawn, so their medal data is not checked.
    pub fn ranked(&self) -> Result<RankedSeries> {
        let ranked: Vec<YearlyRecord> = self.records.iter().filter(|r| r.is_ranked()).cloned().collect();
        for r in &ranked {
            r.validate()?;
        }
        RankedSeries::new(ranked)
    }
}
