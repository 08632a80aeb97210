// File: crates/delegation-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use delegation_core::{Delegation, MedalKind, YearlyRecord};

/// Small delegation: one unranked year, three ranked years, no icon tags.
pub fn plain_delegation() -> Delegation {
    Delegation::new(
        "Indonesia",
        vec![
            YearlyRecord::new(2012, 22, 0).with_sports(8),
            YearlyRecord::new(2016, 30, 46).with_sports(7).with_medals(1, 2, 0),
            YearlyRecord::new(2020, 20, 55).with_sports(8).with_medals(1, 1, 3),
            YearlyRecord::new(2024, 40, 39).with_sports(12).with_medals(2, 0, 1),
        ],
    )
}

/// Same years, with sport tags on every medal.
pub fn tagged_delegation() -> Delegation {
    let mut d = plain_delegation();
    d.records[1] = d.records[1]
        .clone()
        .with_tags(MedalKind::Gold, ["weightlifting"])
        .with_tags(MedalKind::Silver, ["badminton", "weightlifting"]);
    d.records[2] = d.records[2]
        .clone()
        .with_tags(MedalKind::Gold, ["badminton"])
        .with_tags(MedalKind::Silver, ["weightlifting"])
        .with_tags(MedalKind::Bronze, ["badminton", "weightlifting", "weightlifting"]);
    d.records[3] = d.records[3]
        .clone()
        .with_tags(MedalKind::Gold, ["climbing", "weightlifting"])
        .with_tags(MedalKind::Bronze, ["badminton"]);
    d
}

/// Write a solid-color square PNG icon, creating parent directories.
pub fn write_icon(path: &std::path::Path, size: i32) {
    use skia_safe as skia;
    let mut surface = skia::surfaces::raster_n32_premul((size, size)).expect("icon surface");
    surface.canvas().clear(skia::Color::from_argb(255, 20, 60, 200));
    #[allow(deprecated)]
    let data = surface
        .image_snapshot()
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .expect("encode icon");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, data.as_bytes()).unwrap();
}
