// File: crates/delegation-core/src/caption.rs
// Summary: Caption and label text composed from the ranked series.

use crate::record::{MedalKind, YearlyRecord};

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn medal_count(kind: MedalKind, n: u32) -> String {
    match kind {
        MedalKind::Bronze => format!("{n} bronze"),
        _ if n == 1 => format!("1 {}", kind.name()),
        _ => format!("{n} {}s", kind.name()),
    }
}

/// "2 golds and 1 bronze"; zero counts are left out.
pub fn medal_phrase(record: &YearlyRecord) -> String {
    let parts: Vec<String> = MedalKind::ALL
        .into_iter()
        .filter(|&k| record.medals(k) > 0)
        .map(|k| medal_count(k, record.medals(k)))
        .collect();
    match parts.as_slice() {
        [] => "no medals".to_string(),
        [one] => one.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// Caption beside the latest rank marker.
pub fn rank_caption(country: &str, latest: &YearlyRecord) -> String {
    format!(
        "With {}, \n{} achieved \na ranking of {}",
        medal_phrase(latest),
        country,
        ordinal(latest.rank)
    )
}

pub fn athletes_average_caption(demonym: &str, average: f64) -> String {
    format!("Average Number of\n{demonym} Athletes \nof all Years: {average:.0}")
}

pub fn athletes_latest_caption(country: &str, latest: &YearlyRecord) -> String {
    format!("In the {} Olympics, \n{} sent \n{} athletes", latest.year, country, latest.athletes)
}

pub fn sports_average_caption(country: &str, average: f64) -> String {
    format!("Average Number of\nSports {country} Competes \nIn Each Olympic Year: {average:.0}")
}

pub fn sports_latest_caption(country: &str, year: i32, sports: u32) -> String {
    format!("In the {year} Olympics, \n{country} participated in \n{sports} sports")
}
