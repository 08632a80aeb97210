// File: crates/delegation-core/src/chart.rs
// Summary: Figure struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::assets::AssetStore;
use crate::axis::Axis;
use crate::config::{FigureConfig, FigureSpec, IconConfig, PanelKind, RenderConfig};
use crate::error::{ChartError, Result};
use crate::filter::RankedSeries;
use crate::geometry::RectF;
use crate::panels::{draw_count_panel, draw_medal_panel, CountPanel, Painter};
use crate::record::Delegation;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::{self, Theme};
use crate::types::{Insets, DPI, FOOTER_HEIGHT, HEADER_HEIGHT, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    /// Margins around each panel's plot area.
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text; off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &RenderConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            dpi: cfg.dpi,
            theme: theme::find(&cfg.theme),
            draw_labels: cfg.draw_labels,
            ..Self::default()
        }
    }
}

/// Header, footer and image decorations around the panels.
#[derive(Clone, Debug, Default)]
pub struct Chrome {
    pub title: String,
    pub subtitle: String,
    pub source_note: String,
    pub copyright: String,
    pub flag: Option<PathBuf>,
    pub logo: Option<PathBuf>,
    pub flag_zoom: f32,
    pub logo_zoom: f32,
    /// Arrow from the logo corner to the latest athletes bar.
    pub arrow: bool,
}

/// One infographic: a stack of panels over the ranked years of a delegation.
pub struct Figure {
    pub country: String,
    pub demonym: String,
    pub series: RankedSeries,
    pub panels: Vec<PanelKind>,
    pub chrome: Chrome,
    pub sports_dir: PathBuf,
    pub icons: IconConfig,
}

impl Figure {
    /// Plain figure without header text or images. `demonym` names the
    /// athletes in captions ("Indonesian Athletes").
    pub fn new(delegation: &Delegation, demonym: impl Into<String>, panels: Vec<PanelKind>) -> Result<Self> {
        Ok(Self {
            country: delegation.country.clone(),
            demonym: demonym.into(),
            series: delegation.ranked()?,
            panels,
            chrome: Chrome::default(),
            sports_dir: PathBuf::from("sports"),
            icons: IconConfig::default(),
        })
    }

    pub fn from_config(delegation: &Delegation, cfg: &FigureConfig, spec: &FigureSpec) -> Result<Self> {
        let country = if delegation.country.is_empty() { cfg.country.clone() } else { delegation.country.clone() };
        Ok(Self {
            country,
            demonym: cfg.demonym.clone(),
            series: delegation.ranked()?,
            panels: spec.panels.clone(),
            chrome: Chrome {
                title: cfg.title.clone(),
                subtitle: cfg.subtitle.clone(),
                source_note: cfg.source_note.clone(),
                copyright: cfg.copyright.clone(),
                flag: cfg.assets.flag.clone(),
                logo: cfg.assets.logo.clone(),
                flag_zoom: cfg.assets.flag_zoom,
                logo_zoom: cfg.assets.logo_zoom,
                arrow: spec.arrow,
            },
            sports_dir: cfg.assets.sports_dir.clone(),
            icons: cfg.icons.clone(),
        })
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote figure");
        Ok(())
    }

    /// Render and encode to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let shaper = TextShaper::new();
        let mut assets = AssetStore::new();
        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            let painter = Painter {
                canvas,
                text: &shaper,
                theme: &opts.theme,
                dpi: opts.dpi,
                draw_labels: opts.draw_labels,
            };
            self.draw(&painter, opts, &mut assets)?;
        }
        tracing::debug!(panels = self.panels.len(), assets = assets.len(), "figure rendered");
        Ok(surface)
    }

    fn draw(&self, p: &Painter, opts: &RenderOptions, assets: &mut AssetStore) -> Result<()> {
        let (w, h) = (opts.width as f32, opts.height as f32);
        self.draw_header(p, w);
        self.draw_images(p, w, assets)?;

        let body = RectF::from_ltrb(0.0, HEADER_HEIGHT, w, (h - FOOTER_HEIGHT).max(HEADER_HEIGHT + 1.0));
        let x_axis = Axis::years(self.series.first().year, self.series.latest().year);
        for (kind, band) in self.panels.iter().zip(body.split_rows(self.panels.len())) {
            let plot = band.inset(opts.insets);
            match kind {
                PanelKind::Medals => {
                    draw_medal_panel(p, plot, &x_axis, &self.series, &self.country, &self.sports_dir, &self.icons, assets)?;
                }
                PanelKind::Athletes => {
                    let panel = CountPanel::athletes(&self.series, &self.country, &self.demonym);
                    let frame = draw_count_panel(p, plot, &x_axis, &panel);
                    if self.chrome.arrow {
                        let latest = self.series.latest();
                        let from = frame.plot.fraction(0.926, 0.9);
                        let to = frame.to_px(f64::from(latest.year), f64::from(latest.athletes) + 4.0);
                        p.arrow(from, to, p.theme.arrow, 2.0);
                    }
                }
                PanelKind::Sports => match CountPanel::sports(&self.series, &self.country) {
                    Some(panel) => {
                        draw_count_panel(p, plot, &x_axis, &panel);
                    }
                    None => tracing::warn!("no ranked year reports a sport count; sports panel left empty"),
                },
            }
        }

        self.draw_footer(p, w, h);
        Ok(())
    }

    fn draw_header(&self, p: &Painter, w: f32) {
        let rule_y = 28.0;
        p.line((0.0, rule_y), (w, rule_y), p.theme.rule, 1.0);
        p.fill_rect(skia::Rect::from_ltrb(0.0, rule_y - 14.0, w * 0.1, rule_y), p.theme.accent);

        let mut y = rule_y + 12.0;
        if !self.chrome.title.is_empty() {
            let spec = p.spec(20.0, p.theme.title).bold();
            p.label(&self.chrome.title, (16.0, y), spec, HAlign::Left, VAlign::Top);
            y += p.text.measure(&self.chrome.title, spec).1 + 10.0;
        }
        if !self.chrome.subtitle.is_empty() {
            let spec = p.spec(12.0, p.theme.text).bold();
            p.label(&self.chrome.subtitle, (16.0, y), spec, HAlign::Left, VAlign::Top);
        }
    }

    /// Flag (framed) at the top-right corner, logo below it.
    fn draw_images(&self, p: &Painter, w: f32, assets: &mut AssetStore) -> Result<()> {
        let mut top = 40.0;
        if let Some(path) = self.chrome.flag.as_deref() {
            let img = assets.load(path)?;
            let scale = p.image_scale(self.chrome.flag_zoom);
            let (fw, fh) = (img.width() as f32 * scale, img.height() as f32 * scale);
            let dst = skia::Rect::from_xywh(w - 40.0 - fw, top, fw, fh);
            p.image_in(&img, dst);
            p.stroke_rect(dst.with_outset((2.0, 2.0)), p.theme.frame, 1.0);
            top += fh + 10.0;
        }
        if let Some(path) = self.chrome.logo.as_deref() {
            let img = assets.load(path)?;
            let scale = p.image_scale(self.chrome.logo_zoom);
            let (lw, lh) = (img.width() as f32 * scale, img.height() as f32 * scale);
            p.image_in(&img, skia::Rect::from_xywh(w - 16.0 - lw, top, lw, lh));
        }
        Ok(())
    }

    fn draw_footer(&self, p: &Painter, w: f32, h: f32) {
        let spec = p.spec(10.0, p.theme.muted_text);
        let y = h - FOOTER_HEIGHT * 0.5;
        if !self.chrome.source_note.is_empty() {
            p.label(&self.chrome.source_note, (16.0, y), spec, HAlign::Left, VAlign::Center);
        }
        if !self.chrome.copyright.is_empty() {
            p.label(&self.chrome.copyright, (w - 16.0, y), spec, HAlign::Right, VAlign::Center);
        }
    }
}

/// Build one figure per `[[figures]]` entry, in config order.
pub fn figures_from_config(delegation: &Delegation, cfg: &FigureConfig) -> Result<Vec<(String, Figure)>> {
    cfg.figures
        .iter()
        .map(|spec| Ok((spec.name.clone(), Figure::from_config(delegation, cfg, spec)?)))
        .collect()
}
