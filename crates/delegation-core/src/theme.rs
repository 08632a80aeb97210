// File: crates/delegation-core/src/theme.rs
// Summary: Infographic color palette (medals, bars by tone, captions, title band).

use skia_safe as skia;

use crate::record::MedalKind;
use crate::stats::BarTone;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    pub muted_text: skia::Color,
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub rank_line: skia::Color,
    pub gold: skia::Color,
    pub silver: skia::Color,
    pub bronze: skia::Color,
    pub bar_above: skia::Color,
    pub bar_below: skia::Color,
    pub bar_latest: skia::Color,
    pub bar_edge: skia::Color,
    pub average_line: skia::Color,
    pub title: skia::Color,
    pub rule: skia::Color,
    pub accent: skia::Color,
    pub arrow: skia::Color,
    pub frame: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            text: skia::Color::from_argb(255, 0, 0, 0),
            muted_text: skia::Color::from_argb(255, 0xC1, 0xC1, 0xC1),
            spine: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            rank_line: skia::Color::from_argb(255, 0xD3, 0x32, 0x2A),
            gold: skia::Color::from_argb(255, 0xFD, 0xC8, 0x61),
            silver: skia::Color::from_argb(255, 0xE5, 0xE5, 0xE5),
            bronze: skia::Color::from_argb(255, 0xDC, 0xB4, 0x86),
            bar_above: skia::Color::from_argb(255, 0xD9, 0xD9, 0xD9),
            bar_below: skia::Color::from_argb(255, 0xF5, 0xCD, 0xCB),
            bar_latest: skia::Color::from_argb(255, 0xFE, 0x00, 0x00),
            bar_edge: skia::Color::from_argb(255, 0xD4, 0xD4, 0xD4),
            average_line: skia::Color::from_argb(255, 0x80, 0x80, 0x80),
            title: skia::Color::from_argb(255, 0xFF, 0x00, 0x00),
            rule: skia::Color::from_argb(255, 0xFF, 0x00, 0x00),
            accent: skia::Color::from_argb(255, 0xC9, 0x1E, 0x21),
            arrow: skia::Color::from_argb(255, 0xFF, 0x00, 0x00),
            frame: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            text: skia::Color::from_argb(255, 235, 235, 245),
            muted_text: skia::Color::from_argb(255, 110, 110, 120),
            spine: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_above: skia::Color::from_argb(255, 90, 90, 96),
            bar_below: skia::Color::from_argb(255, 120, 60, 58),
            average_line: skia::Color::from_argb(255, 150, 150, 160),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            ..Self::light()
        }
    }

    pub fn medal(&self, kind: MedalKind) -> skia::Color {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }

    pub fn bar(&self, tone: BarTone) -> skia::Color {
        match tone {
            BarTone::AboveAverage => self.bar_above,
            BarTone::AtOrBelowAverage => self.bar_below,
            BarTone::Latest => self.bar_latest,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
