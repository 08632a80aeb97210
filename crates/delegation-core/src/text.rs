// File: crates/delegation-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored, multi-line, optionally bold.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Horizontal anchor of a text box relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text box relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Font size, weight and color of one text run.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    fn build(&self, text: &str, spec: TextSpec, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width);
        paragraph
    }

    /// Lay out `text`, wrapping only at explicit newlines; lines share `halign`.
    pub fn layout(&self, text: &str, spec: TextSpec, halign: HAlign) -> Paragraph {
        let probe = self.build(text, spec, TextAlign::Left, 10_000.0);
        if halign == HAlign::Left {
            return probe;
        }
        let width = probe.max_intrinsic_width().ceil() + 1.0;
        let align = match halign {
            HAlign::Center => TextAlign::Center,
            _ => TextAlign::Right,
        };
        self.build(text, spec, align, width)
    }

    /// (width, height) of the laid-out text box.
    pub fn measure(&self, text: &str, spec: TextSpec) -> (f32, f32) {
        let p = self.build(text, spec, TextAlign::Left, 10_000.0);
        // width of the longest line
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that the anchor point of its box sits at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        spec: TextSpec,
        halign: HAlign,
        valign: VAlign,
    ) {
        let p = self.layout(text, spec, halign);
        let w = if halign == HAlign::Left { p.longest_line() } else { p.max_width() };
        let h = p.height();
        let left = match halign {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match valign {
            VAlign::Top => y,
            VAlign::Center => y - h * 0.5,
            VAlign::Bottom => y - h,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw text rotated 90 degrees counter-clockwise, centred on `(x, y)` (y-axis titles).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), spec: TextSpec) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, (0.0, 0.0), spec, HAlign::Center, VAlign::Center);
        canvas.restore();
    }
}
