// File: crates/delegation-core/src/panels.rs
// Summary: Panel renderers: rank-with-medal-tiles panel and athletes/sports count bar panels.

use std::path::Path;

use skia_safe as skia;

use crate::assets::AssetStore;
use crate::axis::Axis;
use crate::caption;
use crate::config::IconConfig;
use crate::error::Result;
use crate::filter::RankedSeries;
use crate::geometry::{DataRect, RectF};
use crate::grid::nice_ticks;
use crate::layout::{self, RANK_LABEL_OFFSET};
use crate::scale::LinearScale;
use crate::stats::classify_all;
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::pt_to_px;

/// Canvas plus the shared drawing state of one figure render.
pub(crate) struct Painter<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub theme: &'a Theme,
    pub dpi: f32,
    pub draw_labels: bool,
}

impl Painter<'_> {
    pub fn pt(&self, pt: f32) -> f32 { pt_to_px(pt, self.dpi) }

    /// Zoom factor applied to an image's native pixel size.
    pub fn image_scale(&self, zoom: f32) -> f32 { zoom * self.dpi / 72.0 }

    pub fn spec(&self, pt: f32, color: skia::Color) -> TextSpec {
        TextSpec::new(self.pt(pt), color)
    }

    pub fn label(&self, text: &str, at: (f32, f32), spec: TextSpec, h: HAlign, v: VAlign) {
        if self.draw_labels {
            self.text.draw(self.canvas, text, at, spec, h, v);
        }
    }

    pub fn vertical_label(&self, text: &str, at: (f32, f32), spec: TextSpec) {
        if self.draw_labels {
            self.text.draw_vertical(self.canvas, text, at, spec);
        }
    }

    pub fn fill_rect(&self, rect: skia::Rect, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        self.canvas.draw_rect(rect, &paint);
    }

    pub fn stroke_rect(&self, rect: skia::Rect, color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        self.canvas.draw_rect(rect, &paint);
    }

    pub fn line(&self, a: (f32, f32), b: (f32, f32), color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(width);
        paint.set_color(color);
        self.canvas.draw_line(a, b, &paint);
    }

    pub fn dashed_line(&self, a: (f32, f32), b: (f32, f32), color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint.set_path_effect(skia::PathEffect::dash(&[6.0, 4.0], 0.0));
        self.canvas.draw_line(a, b, &paint);
    }

    /// Draw `image` scaled by `scale`, with its centre at `center`.
    pub fn image_centered(&self, image: &skia::Image, center: (f32, f32), scale: f32) -> skia::Rect {
        let w = image.width() as f32 * scale;
        let h = image.height() as f32 * scale;
        let dst = skia::Rect::from_xywh(center.0 - w * 0.5, center.1 - h * 0.5, w, h);
        self.image_in(image, dst);
        dst
    }

    pub fn image_in(&self, image: &skia::Image, dst: skia::Rect) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        self.canvas.draw_image_rect(image, None, dst, &paint);
    }

    /// Straight arrow with an open chevron head at `to`.
    pub fn arrow(&self, from: (f32, f32), to: (f32, f32), color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_color(color);
        self.canvas.draw_line(from, to, &paint);

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt().max(1e-3);
        let (ux, uy) = (dx / len, dy / len);
        let head = 6.0 * width;
        let mut pb = skia::PathBuilder::new();
        pb.move_to((to.0 - head * (ux - uy * 0.5), to.1 - head * (uy + ux * 0.5)));
        pb.line_to(to);
        pb.line_to((to.0 - head * (ux + uy * 0.5), to.1 - head * (uy - ux * 0.5)));
        self.canvas.draw_path(&pb.detach(), &paint);
    }
}

/// Plot rectangle with its data transforms.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PanelFrame {
    pub plot: RectF,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PanelFrame {
    pub fn new(plot: RectF, x_axis: &Axis, y_axis: &Axis) -> Self {
        let x = LinearScale::horizontal(plot.left, plot.right, x_axis.min, x_axis.max);
        let y = if y_axis.inverted {
            LinearScale::vertical_inverted(plot.top, plot.bottom, y_axis.min, y_axis.max)
        } else {
            LinearScale::vertical(plot.top, plot.bottom, y_axis.min, y_axis.max)
        };
        Self { plot, x, y }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    /// Pixel rectangle of a data rectangle, whichever way the y axis runs.
    pub fn rect_px(&self, r: &DataRect) -> skia::Rect {
        let (x0, y0) = self.to_px(r.x, r.y);
        let (x1, y1) = self.to_px(r.x + r.width, r.y + r.height);
        skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }
}

fn draw_y_ticks(p: &Painter, frame: &PanelFrame, axis: &Axis) {
    let spec = p.spec(9.0, p.theme.tick);
    for v in nice_ticks(axis.min, axis.max, 6) {
        let y = frame.y.to_px(v);
        p.line((frame.plot.left - 4.0, y), (frame.plot.left, y), p.theme.spine, 1.0);
        p.label(&format!("{v:.0}"), (frame.plot.left - 7.0, y), spec, HAlign::Right, VAlign::Center);
    }
    p.line((frame.plot.left, frame.plot.top), (frame.plot.left, frame.plot.bottom), p.theme.spine, 1.0);
    let title = p.spec(10.0, p.theme.text).bold();
    p.vertical_label(&axis.label, (frame.plot.left - p.pt(40.0), (frame.plot.top + frame.plot.bottom) * 0.5), title);
}

fn draw_year_ticks(p: &Painter, frame: &PanelFrame, axis: &Axis, years: &[i32]) {
    let spec = p.spec(9.0, p.theme.tick);
    p.line((frame.plot.left, frame.plot.bottom), (frame.plot.right, frame.plot.bottom), p.theme.spine, 1.0);
    for &year in years {
        let x = frame.x.to_px(f64::from(year));
        p.line((x, frame.plot.bottom), (x, frame.plot.bottom + 4.0), p.theme.spine, 1.0);
        p.label(&year.to_string(), (x, frame.plot.bottom + 6.0), spec, HAlign::Center, VAlign::Top);
    }
    let title = p.spec(10.0, p.theme.text).bold();
    let mid = (frame.plot.left + frame.plot.right) * 0.5;
    p.label(&axis.label, (mid, frame.plot.bottom + p.pt(24.0)), title, HAlign::Center, VAlign::Top);
}

/// Rank over time: tiles and icons first, then the rank line, markers and labels on top.
pub(crate) fn draw_medal_panel(
    p: &Painter,
    plot: RectF,
    x_axis: &Axis,
    series: &RankedSeries,
    country: &str,
    sports_dir: &Path,
    icons: &IconConfig,
    assets: &mut AssetStore,
) -> Result<PanelFrame> {
    let (ymin, ymax) = layout::rank_axis_range(series);
    let y_axis = Axis::new("Rank", ymin, ymax).inverted();
    let frame = PanelFrame::new(plot, x_axis, &y_axis);

    let mut icon_count = 0usize;
    for record in series.records() {
        for tile in layout::medal_tiles(record) {
            p.fill_rect(frame.rect_px(&tile.rect), p.theme.medal(tile.kind));
            if let Some(sport) = tile.sport.as_deref() {
                let icon = assets.sport_icon(sports_dir, sport)?;
                let (cx, cy) = tile.icon_center();
                p.image_centered(&icon, frame.to_px(cx, cy), p.image_scale(icons.zoom_for(sport)));
                icon_count += 1;
            }
        }
    }
    tracing::debug!(years = series.len(), icons = icon_count, "medal tiles drawn");

    let mut pb = skia::PathBuilder::new();
    for (i, r) in series.records().iter().enumerate() {
        let pt = frame.to_px(f64::from(r.year), f64::from(r.rank));
        if i == 0 { pb.move_to(pt); } else { pb.line_to(pt); }
    }
    let path = pb.detach();
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(p.theme.rank_line);
    p.canvas.draw_path(&path, &stroke);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_color(p.theme.rank_line);
    let label_spec = p.spec(10.0, p.theme.text).bold();
    for r in series.records() {
        let (x, y) = frame.to_px(f64::from(r.year), f64::from(r.rank));
        p.canvas.draw_circle((x, y), p.pt(3.0), &marker);
        let at = frame.to_px(f64::from(r.year), f64::from(r.rank) - RANK_LABEL_OFFSET);
        p.label(&r.rank.to_string(), at, label_spec, HAlign::Center, VAlign::Bottom);
    }

    let latest = series.latest();
    let at = frame.to_px(f64::from(latest.year) + 2.5, f64::from(latest.rank) - 3.5);
    p.label(&caption::rank_caption(country, latest), at, p.spec(10.0, p.theme.text), HAlign::Left, VAlign::Center);

    draw_y_ticks(p, &frame, &y_axis);
    Ok(frame)
}

/// Inputs of an athletes or sports bar panel.
pub(crate) struct CountPanel {
    pub axis_title: &'static str,
    pub points: Vec<(i32, u32)>,
    pub average: f64,
    pub average_caption: String,
    pub latest_caption: String,
    /// Data-unit lift of the latest-year caption above the average caption.
    pub caption_lift: f64,
}

impl CountPanel {
    pub fn athletes(series: &RankedSeries, country: &str, demonym: &str) -> Self {
        let average = series.mean_athletes();
        Self {
            axis_title: "Number of Athletes",
            points: series.records().iter().map(|r| (r.year, r.athletes)).collect(),
            average,
            average_caption: caption::athletes_average_caption(demonym, average),
            latest_caption: caption::athletes_latest_caption(country, series.latest()),
            caption_lift: 20.0,
        }
    }

    /// `None` when no ranked year reports a sport count.
    pub fn sports(series: &RankedSeries, country: &str) -> Option<Self> {
        let points = series.sports();
        let average = series.mean_sports()?;
        let &(year, sports) = points.last()?;
        Some(Self {
            axis_title: "Number of Sports",
            points,
            average,
            average_caption: caption::sports_average_caption(country, average),
            latest_caption: caption::sports_latest_caption(country, year, sports),
            caption_lift: 8.0,
        })
    }
}

pub(crate) fn draw_count_panel(p: &Painter, plot: RectF, x_axis: &Axis, panel: &CountPanel) -> PanelFrame {
    let peak = panel.points.iter().map(|&(_, v)| f64::from(v)).fold(panel.average + panel.caption_lift, f64::max);
    let y_axis = Axis::new(panel.axis_title, 0.0, peak * 1.15);
    let frame = PanelFrame::new(plot, x_axis, &y_axis);

    let values: Vec<u32> = panel.points.iter().map(|&(_, v)| v).collect();
    let tones = classify_all(&values, panel.average);
    let value_spec = p.spec(10.0, p.theme.text).bold();
    for (&(year, value), &tone) in panel.points.iter().zip(&tones) {
        let bar = frame.rect_px(&layout::bar_rect(year, value));
        p.fill_rect(bar, p.theme.bar(tone));
        p.stroke_rect(bar, p.theme.bar_edge, 1.0);
        let at = frame.to_px(f64::from(year), f64::from(value));
        p.label(&value.to_string(), at, value_spec, HAlign::Center, VAlign::Bottom);
    }

    let avg_y = frame.y.to_px(panel.average);
    p.dashed_line((frame.plot.left, avg_y), (frame.plot.right, avg_y), p.theme.average_line, 1.0);

    if let Some(&(last_year, _)) = panel.points.last() {
        let spec = p.spec(10.0, p.theme.text);
        let x = f64::from(last_year) + 4.0;
        p.label(&panel.average_caption, frame.to_px(x, panel.average), spec, HAlign::Left, VAlign::Center);
        p.label(
            &panel.latest_caption,
            frame.to_px(x, panel.average + panel.caption_lift),
            spec,
            HAlign::Left,
            VAlign::Center,
        );
    }
    tracing::debug!(axis = panel.axis_title, bars = panel.points.len(), average = panel.average, "count panel drawn");

    let years: Vec<i32> = panel.points.iter().map(|&(y, _)| y).collect();
    draw_y_ticks(p, &frame, &y_axis);
    draw_year_ticks(p, &frame, x_axis, &years);
    frame
}
