// File: crates/delegation-core/tests/caption.rs
// Purpose: Caption text composition.

use delegation_core::caption::{
    athletes_average_caption, athletes_latest_caption, medal_phrase, ordinal, rank_caption, sports_average_caption,
    sports_latest_caption,
};
use delegation_core::YearlyRecord;

#[test]
fn ordinals() {
    let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 39, 101, 112].into_iter().map(ordinal).collect();
    assert_eq!(got, vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "39th", "101st", "112th"]);
}

#[test]
fn medal_phrase_lists_non_zero_kinds() {
    assert_eq!(medal_phrase(&YearlyRecord::new(2024, 29, 39).with_medals(2, 0, 1)), "2 golds and 1 bronze");
    assert_eq!(medal_phrase(&YearlyRecord::new(2016, 28, 46).with_medals(1, 2, 0)), "1 gold and 2 silvers");
    assert_eq!(medal_phrase(&YearlyRecord::new(2020, 28, 55).with_medals(1, 1, 3)), "1 gold, 1 silver and 3 bronze");
    assert_eq!(medal_phrase(&YearlyRecord::new(1988, 29, 36).with_medals(0, 1, 0)), "1 silver");
    assert_eq!(medal_phrase(&YearlyRecord::new(1984, 20, 50)), "no medals");
}

#[test]
fn rank_caption_text() {
    let latest = YearlyRecord::new(2024, 29, 39).with_medals(2, 0, 1);
    assert_eq!(
        rank_caption("Indonesia", &latest),
        "With 2 golds and 1 bronze, \nIndonesia achieved \na ranking of 39th"
    );
}

#[test]
fn count_captions() {
    let latest = YearlyRecord::new(2024, 29, 39);
    assert_eq!(
        athletes_average_caption("Indonesian", 24.4),
        "Average Number of\nIndonesian Athletes \nof all Years: 24"
    );
    assert_eq!(athletes_latest_caption("Indonesia", &latest), "In the 2024 Olympics, \nIndonesia sent \n29 athletes");
    assert_eq!(
        sports_average_caption("Indonesia", 7.8),
        "Average Number of\nSports Indonesia Competes \nIn Each Olympic Year: 8"
    );
    assert_eq!(
        sports_latest_caption("Indonesia", 2024, 12),
        "In the 2024 Olympics, \nIndonesia participated in \n12 sports"
    );
}
