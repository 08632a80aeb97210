// File: crates/delegation-core/src/config.rs
// Summary: TOML figure configuration: captions, asset locations, render size, icon zoom, figure list.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{DPI, HEIGHT, WIDTH};

/// One chart band of a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Rank over time with stacked medal tiles.
    Medals,
    /// Athletes sent per Games.
    Athletes,
    /// Sports entered per Games.
    Sports,
}

impl FromStr for PanelKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medals" | "rank" => Ok(PanelKind::Medals),
            "athletes" => Ok(PanelKind::Athletes),
            "sports" => Ok(PanelKind::Sports),
            _ => Err(ChartError::UnknownPanel(s.to_string())),
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelKind::Medals => "medals",
            PanelKind::Athletes => "athletes",
            PanelKind::Sports => "sports",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub country: String,
    /// Adjective used in captions ("Indonesian Athletes").
    pub demonym: String,
    pub title: String,
    pub subtitle: String,
    pub source_note: String,
    pub copyright: String,
    pub assets: AssetConfig,
    pub render: RenderConfig,
    pub icons: IconConfig,
    pub figures: Vec<FigureSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `<sport>.png` icons.
    pub sports_dir: PathBuf,
    pub flag: Option<PathBuf>,
    pub logo: Option<PathBuf>,
    pub flag_zoom: f32,
    pub logo_zoom: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub theme: String,
    pub draw_labels: bool,
}

/// Per-sport icon zoom relative to the icon's native size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub default_zoom: f32,
    pub overrides: BTreeMap<String, f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    /// Output file stem.
    pub name: String,
    pub panels: Vec<PanelKind>,
    /// Arrow from the logo corner to the latest athletes bar.
    #[serde(default)]
    pub arrow: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            country: "Indonesia".to_string(),
            demonym: "Indonesian".to_string(),
            title: "Indonesia Wins 2 Golds at the Olympics 2024 \nSetting a New Record with Medals in Three Sports"
                .to_string(),
            subtitle: "Indonesia at the Olympics: Performance and Sports Participation \nOver the Years".to_string(),
            source_note: "Data Source: Wikipedia - Indonesia \nat the 2024 Summer Olympics".to_string(),
            copyright: "\u{a9} 2024 Lucas Elbert Suryana".to_string(),
            assets: AssetConfig::default(),
            render: RenderConfig::default(),
            icons: IconConfig::default(),
            figures: vec![
                FigureSpec { name: "athletes".to_string(), panels: vec![PanelKind::Medals, PanelKind::Athletes], arrow: true },
                FigureSpec { name: "sports".to_string(), panels: vec![PanelKind::Medals, PanelKind::Sports], arrow: false },
            ],
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { sports_dir: PathBuf::from("sports"), flag: None, logo: None, flag_zoom: 0.02, logo_zoom: 0.04 }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, dpi: DPI, theme: "light".to_string(), draw_labels: true }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        let overrides = [("climbing", 0.026), ("badminton", 0.014), ("archery", 0.008)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self { default_zoom: 0.015, overrides }
    }
}

impl IconConfig {
    pub fn zoom_for(&self, sport: &str) -> f32 {
        self.overrides.get(sport).copied().unwrap_or(self.default_zoom)
    }
}

impl FigureConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from disk; relative asset paths are resolved against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let mut cfg = Self::from_toml_str(&raw)?;
        if let Some(base) = path.parent() {
            cfg.resolve_relative_to(base);
        }
        Ok(cfg)
    }

    pub fn resolve_relative_to(&mut self, base: &Path) {
        let fix = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        fix(&mut self.assets.sports_dir);
        if let Some(p) = self.assets.flag.as_mut() { fix(p); }
        if let Some(p) = self.assets.logo.as_mut() { fix(p); }
    }

    pub fn figure(&self, name: &str) -> Option<&FigureSpec> {
        self.figures.iter().find(|f| f.name == name)
    }
}
