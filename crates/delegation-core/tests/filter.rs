// File: crates/delegation-core/tests/filter.rs
// Purpose: Rank filter over parallel columns and records.

mod common;

use delegation_core::{filter_ranked, filter_years, ChartError, Columns, Delegation, YearlyRecord};

#[test]
fn drops_unranked_years() {
    let years = [2016, 2020, 2024];
    let rank = [0, 3, 5];
    assert_eq!(filter_years(&years, &rank).unwrap(), vec![2020, 2024]);
    assert_eq!(filter_ranked(&rank, &rank).unwrap(), vec![3, 5]);
}

#[test]
fn output_length_matches_ranked_count_and_keeps_order() {
    let rank = [4, 0, 0, 9, 1, 0, 12];
    let years = [1952, 1956, 1960, 1964, 1968, 1972, 1976];
    let kept = filter_years(&years, &rank).unwrap();
    assert_eq!(kept.len(), rank.iter().filter(|&&r| r > 0).count());
    assert_eq!(kept, vec![1952, 1964, 1968, 1976]);
    assert!(kept.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn companion_columns_stay_aligned() {
    let rank = [0, 24, 0, 41];
    let years = [1988, 1992, 1996, 2000];
    let athletes = [29, 42, 40, 47];
    let tags = vec![vec![], vec!["badminton".to_string()], vec![], vec!["weightlifting".to_string()]];

    let y = filter_ranked(&years, &rank).unwrap();
    let a = filter_ranked(&athletes, &rank).unwrap();
    let t = filter_ranked(&tags, &rank).unwrap();
    assert_eq!(y, vec![1992, 2000]);
    assert_eq!(a, vec![42, 47]);
    assert_eq!(t[1], vec!["weightlifting".to_string()]);
}

#[test]
fn length_mismatch_is_an_error() {
    let err = filter_ranked(&[1, 2], &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { expected: 3, found: 2, .. }));
}

#[test]
fn all_unranked_filters_to_empty() {
    assert!(filter_years(&[2000, 2004], &[0, 0]).unwrap().is_empty());
    let d = Delegation::new("Nowhere", vec![YearlyRecord::new(2000, 3, 0)]);
    assert!(matches!(d.ranked(), Err(ChartError::NoRankedYears)));
}

#[test]
fn columns_filter_every_column() {
    let cols = Columns {
        years: vec![2016, 2020, 2024],
        athletes: vec![28, 28, 29],
        sports: vec![Some(7), None, Some(12)],
        rank: vec![0, 3, 5],
        gold: vec![1, 1, 2],
        silver: vec![2, 1, 0],
        bronze: vec![0, 3, 1],
        gold_sports: Vec::new(),
        silver_sports: Vec::new(),
        bronze_sports: Vec::new(),
    };
    let f = cols.filter().unwrap();
    assert_eq!(f.years, vec![2020, 2024]);
    assert_eq!(f.rank, vec![3, 5]);
    assert_eq!(f.sports, vec![None, Some(12)]);
    assert_eq!(f.gold, vec![1, 2]);
    assert_eq!(f.bronze, vec![3, 1]);
    assert!(f.gold_sports.is_empty());
}

#[test]
fn columns_reject_short_companion() {
    let cols = Columns {
        years: vec![2016, 2020],
        athletes: vec![28],
        sports: vec![None, None],
        rank: vec![1, 2],
        gold: vec![0, 0],
        silver: vec![0, 0],
        bronze: vec![0, 0],
        ..Columns::default()
    };
    let err = cols.filter().unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { column: "athletes", expected: 2, found: 1 }));
}

#[test]
fn columns_into_records_round_trip_through_ranked() {
    let cols = Columns {
        years: vec![2016, 2020],
        athletes: vec![28, 28],
        sports: vec![Some(7), Some(8)],
        rank: vec![46, 0],
        gold: vec![1, 0],
        silver: vec![2, 0],
        bronze: vec![0, 0],
        gold_sports: vec![vec!["badminton".into()], vec![]],
        ..Columns::default()
    };
    let records = cols.into_records().unwrap();
    assert_eq!(records[0].gold_sports, vec!["badminton".to_string()]);
    assert!(records[1].silver_sports.is_empty());

    let ranked = Delegation::new("Indonesia", records).ranked().unwrap();
    assert_eq!(ranked.years(), vec![2016]);
}

#[test]
fn ranked_series_accessors() {
    let ranked = common::plain_delegation().ranked().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked.first().year, 2016);
    assert_eq!(ranked.latest().year, 2024);
    assert_eq!(ranked.ranks(), vec![46, 55, 39]);
    assert_eq!(ranked.athletes(), vec![30, 20, 40]);
    assert_eq!(ranked.mean_athletes(), 30.0);
    assert_eq!(ranked.mean_sports(), Some(9.0));
}

#[test]
fn years_without_sport_count_are_skipped() {
    let d = Delegation::new(
        "Indonesia",
        vec![YearlyRecord::new(2016, 28, 46), YearlyRecord::new(2020, 28, 55).with_sports(8)],
    );
    let ranked = d.ranked().unwrap();
    assert_eq!(ranked.sports(), vec![(2020, 8)]);
    assert_eq!(ranked.mean_sports(), Some(8.0));
}
