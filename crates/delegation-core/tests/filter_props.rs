// File: crates/delegation-core/tests/filter_props.rs
// Purpose: Generated-input properties of the rank filter over parallel columns.

use delegation_core::{filter_ranked, filter_years, ChartError, Columns, Delegation};
use proptest::prelude::*;

/// (athletes, sports, rank, gold, silver, bronze); rank 0 is drawn often.
type Row = (u32, Option<u32>, u32, u32, u32, u32);

fn row() -> impl Strategy<Value = Row> {
    (
        1u32..400,
        proptest::option::of(1u32..40),
        prop_oneof![Just(0u32), 1u32..90],
        0u32..4,
        0u32..4,
        0u32..4,
    )
}

fn year_at(i: usize) -> i32 {
    1952 + 4 * i as i32
}

fn tags_for(prefix: &str, i: usize, count: u32) -> Vec<String> {
    (0..count).map(|j| format!("{prefix}{i}_{j}")).collect()
}

fn columns(rows: &[Row]) -> Columns {
    let mut cols = Columns::default();
    for (i, &(athletes, sports, rank, gold, silver, bronze)) in rows.iter().enumerate() {
        cols.years.push(year_at(i));
        cols.athletes.push(athletes);
        cols.sports.push(sports);
        cols.rank.push(rank);
        cols.gold.push(gold);
        cols.silver.push(silver);
        cols.bronze.push(bronze);
        cols.gold_sports.push(tags_for("g", i, gold));
        cols.silver_sports.push(tags_for("s", i, silver));
        cols.bronze_sports.push(tags_for("b", i, bronze));
    }
    cols
}

proptest! {
    #[test]
    fn output_keeps_exactly_the_ranked_entries_in_order(
        rank in prop::collection::vec(prop_oneof![Just(0u32), 1u32..90], 0..64)
    ) {
        let index: Vec<usize> = (0..rank.len()).collect();
        let kept = filter_ranked(&index, &rank).expect("equal lengths");

        prop_assert_eq!(kept.len(), rank.iter().filter(|&&r| r > 0).count());
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(kept.iter().all(|&i| rank[i] > 0));

        let years: Vec<i32> = index.iter().map(|&i| year_at(i)).collect();
        let kept_years = filter_years(&years, &rank).expect("equal lengths");
        let expected: Vec<i32> = kept.iter().map(|&i| year_at(i)).collect();
        prop_assert_eq!(kept_years, expected);
    }

    #[test]
    fn every_column_stays_aligned_with_its_year(rows in prop::collection::vec(row(), 0..40)) {
        let cols = columns(&rows);
        let f = cols.filter().expect("columns line up");

        let n = rows.iter().filter(|r| r.2 > 0).count();
        prop_assert_eq!(f.len(), n);
        for column_len in [
            f.athletes.len(), f.sports.len(), f.rank.len(), f.gold.len(), f.silver.len(), f.bronze.len(),
            f.gold_sports.len(), f.silver_sports.len(), f.bronze_sports.len(),
        ] {
            prop_assert_eq!(column_len, n);
        }

        for k in 0..n {
            let i = ((f.years[k] - 1952) / 4) as usize;
            prop_assert!(cols.rank[i] > 0);
            prop_assert_eq!(f.athletes[k], cols.athletes[i]);
            prop_assert_eq!(f.sports[k], cols.sports[i]);
            prop_assert_eq!(f.rank[k], cols.rank[i]);
            prop_assert_eq!(f.gold[k], cols.gold[i]);
            prop_assert_eq!(f.silver[k], cols.silver[i]);
            prop_assert_eq!(f.bronze[k], cols.bronze[i]);
            prop_assert_eq!(&f.gold_sports[k], &cols.gold_sports[i]);
            prop_assert_eq!(&f.silver_sports[k], &cols.silver_sports[i]);
            prop_assert_eq!(&f.bronze_sports[k], &cols.bronze_sports[i]);
        }
    }

    #[test]
    fn column_filter_agrees_with_delegation_ranking(rows in prop::collection::vec(row(), 1..40)) {
        let cols = columns(&rows);
        let filtered = cols.filter().expect("columns line up").into_records().expect("records");
        let all = cols.into_records().expect("records");

        match Delegation::new("Indonesia", all).ranked() {
            Ok(series) => {
                prop_assert_eq!(series.records(), filtered.as_slice());
            }
            Err(err) => {
                prop_assert!(matches!(err, ChartError::NoRankedYears), "{}", err);
                prop_assert!(filtered.is_empty());
            }
        }
    }
}
