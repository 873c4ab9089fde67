// File: crates/chart-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.
// Notes:
// - `y` arguments are baselines; paragraphs paint from their top-left, so the
//   glyph height is approximated as 0.8 * size.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

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

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        p.paint(canvas, (x, y - size * 0.8));
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        let w = p.longest_line();
        p.paint(canvas, (right - w, y - size * 0.8));
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, y - size * 0.8));
    }

    /// Centered text turned 90 degrees counter-clockwise around (`cx`, `y`), as for a Y axis label.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, y)));
        self.draw_centered(canvas, text, cx, y, size, color, false);
        canvas.restore();
    }
}
