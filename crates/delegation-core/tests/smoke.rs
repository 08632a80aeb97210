// File: crates/delegation-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs, with and without icon assets.

mod common;

use std::path::PathBuf;

use delegation_core::{figures_from_config, ChartError, Figure, FigureConfig, PanelKind, RenderOptions};

#[test]
fn render_smoke_png() {
    let figure = Figure::new(&common::plain_delegation(), "Indonesian", vec![PanelKind::Medals, PanelKind::Athletes])
        .expect("ranked years present");

    let opts = RenderOptions::default();
    let out = PathBuf::from("target/test_out/smoke.png");
    figure.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = figure.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_all_configured_figures_with_assets() {
    let root = PathBuf::from("target/test_out/assets_smoke");
    for sport in ["badminton", "weightlifting", "climbing"] {
        common::write_icon(&root.join("sports").join(format!("{sport}.png")), 600);
    }
    common::write_icon(&root.join("flag.png"), 900);
    common::write_icon(&root.join("logo.png"), 500);

    let mut cfg = FigureConfig::default();
    cfg.assets.flag = Some(PathBuf::from("flag.png"));
    cfg.assets.logo = Some(PathBuf::from("logo.png"));
    cfg.resolve_relative_to(&root);

    let figures = figures_from_config(&common::tagged_delegation(), &cfg).expect("figures");
    assert_eq!(figures.len(), 2);
    let opts = RenderOptions::from_config(&cfg.render);
    for (name, figure) in figures {
        let out = root.join(format!("{name}.png"));
        figure.render_to_png(&opts, &out).expect("render with icons");
        let decoded = image::open(&out).expect("decode output");
        assert_eq!(decoded.width(), cfg.render.width as u32);
        assert_eq!(decoded.height(), cfg.render.height as u32);
    }
}

#[test]
fn missing_icon_is_reported() {
    let mut figure = Figure::new(&common::tagged_delegation(), "Indonesian", vec![PanelKind::Medals]).unwrap();
    figure.sports_dir = PathBuf::from("target/test_out/no_such_dir");
    let err = figure.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
    match err {
        ChartError::MissingAsset { path } => assert!(path.ends_with("weightlifting.png"), "{}", path.display()),
        other => panic!("expected MissingAsset, got {other}"),
    }
}

#[test]
fn sports_panel_without_counts_still_renders() {
    let mut d = common::plain_delegation();
    for r in &mut d.records {
        r.sports = None;
    }
    let figure = Figure::new(&d, "Indonesian", vec![PanelKind::Sports]).unwrap();
    let bytes = figure.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(!bytes.is_empty());
}

#[test]
fn single_ranked_year_renders() {
    let mut d = common::plain_delegation();
    d.records.truncate(2);
    let figure = Figure::new(&d, "Indonesian", vec![PanelKind::Medals, PanelKind::Athletes, PanelKind::Sports]).unwrap();
    assert_eq!(figure.series.len(), 1);
    figure.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
}

#[test]
fn plain_figure_keeps_the_given_demonym() {
    let figure = Figure::new(&common::plain_delegation(), "Indonesian", vec![PanelKind::Athletes]).unwrap();
    assert_eq!(figure.country, "Indonesia");
    assert_eq!(figure.demonym, "Indonesian");
}
