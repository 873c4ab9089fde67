// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::AxisFormat;
use crate::dates::date_ticks;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, TICK_SIZE, TITLE_BAND, TITLE_SIZE, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Pie wedges start here, in degrees counter-clockwise from 3 o'clock.
const PIE_START_DEG: f32 = 140.0;
/// Target number of Y ticks.
const Y_TICKS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn (titles, labels, ticks); used for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding Y by `margin` (fraction of the span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    fn is_pie(&self) -> bool {
        self.series.iter().any(|s| s.series_type == SeriesType::Pie)
    }

    /// Render into an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = make_surface(opts)?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render to encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = make_surface(opts)?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        let text = opts.draw_labels.then(TextShaper::new);

        if let Some(shaper) = &text {
            if !self.title.is_empty() {
                let y = (TITLE_BAND as f32 + TITLE_SIZE) * 0.5;
                shaper.draw_centered(canvas, &self.title, opts.width as f32 * 0.5, y, TITLE_SIZE, opts.theme.title, false);
            }
        }

        if self.is_pie() {
            let area = RectI32::from_ltrb(0, TITLE_BAND as i32, opts.width, opts.height);
            for s in self.series.iter().filter(|s| s.series_type == SeriesType::Pie) {
                draw_pie_series(canvas, area, s, &opts.theme, text.as_ref());
            }
            return;
        }

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let xs = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICKS);

        draw_grid(canvas, plot, &ys, &y_ticks, &opts.theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &xs, &ys, s, &opts.theme),
                SeriesType::Bar => draw_bar_series(canvas, plot, &ys, s, &opts.theme),
                SeriesType::Pie => {}
            }
        }
        canvas.restore();

        draw_axes(canvas, plot, &opts.theme);

        if let Some(shaper) = &text {
            self.draw_y_ticks(canvas, shaper, plot, &ys, &y_ticks, &opts.theme);
            if let Some(bars) = self.series.iter().find(|s| s.series_type == SeriesType::Bar) {
                draw_category_ticks(canvas, shaper, plot, bars, &opts.theme);
            } else {
                self.draw_x_ticks(canvas, shaper, plot, &xs, &opts.theme);
            }
            draw_axis_labels(canvas, shaper, plot, &self.x_axis, &self.y_axis, &opts.theme);
        }
    }

    fn draw_y_ticks(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectI32,
        ys: &LinearScale,
        ticks: &[f64],
        theme: &Theme,
    ) {
        let step = if ticks.len() >= 2 { ticks[1] - ticks[0] } else { 1.0 };
        let tick_paint = stroke_paint(theme.axis_line, 1.0);
        for &v in ticks {
            let y = ys.to_px(v);
            canvas.draw_line((plot.left as f32 - 5.0, y), (plot.left as f32, y), &tick_paint);
            let label = format_tick(v, step);
            shaper.draw_right(canvas, &label, plot.left as f32 - 9.0, y + TICK_SIZE * 0.35, TICK_SIZE, theme.tick);
        }
    }

    fn draw_x_ticks(&self, canvas: &skia::Canvas, shaper: &TextShaper, plot: RectI32, xs: &LinearScale, theme: &Theme) {
        let max_ticks = ((plot.width() as f32) / 90.0).max(2.0) as usize;
        let ticks: Vec<(f64, String)> = match self.x_axis.format {
            AxisFormat::Date => date_ticks(self.x_axis.min, self.x_axis.max, max_ticks)
                .into_iter()
                .map(|t| (t.x, t.label))
                .collect(),
            AxisFormat::Number => {
                let vals = nice_ticks(self.x_axis.min, self.x_axis.max, max_ticks);
                let step = if vals.len() >= 2 { vals[1] - vals[0] } else { 1.0 };
                vals.into_iter().map(|v| (v, format_tick(v, step))).collect()
            }
        };
        let tick_paint = stroke_paint(theme.axis_line, 1.0);
        let base = plot.bottom as f32;
        for (v, label) in ticks {
            let x = xs.to_px(v);
            canvas.draw_line((x, base), (x, base + 5.0), &tick_paint);
            shaper.draw_centered(canvas, &label, x, base + 8.0 + TICK_SIZE, TICK_SIZE, theme.tick, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn make_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
    }
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Dashed horizontal lines at each Y tick.
fn draw_grid(canvas: &skia::Canvas, plot: RectI32, ys: &LinearScale, ticks: &[f64], theme: &Theme) {
    let mut paint = stroke_paint(theme.grid, 1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[6.0, 4.0], 0.0));
    for &v in ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, plot: RectI32, x: &Axis, y: &Axis, theme: &Theme) {
    let (cx, cy) = plot.center();
    if !x.label.is_empty() {
        let base = plot.bottom as f32 + 8.0 + TICK_SIZE + 18.0 + LABEL_SIZE;
        shaper.draw_centered(canvas, &x.label, cx, base, LABEL_SIZE, theme.axis_label, false);
    }
    if !y.label.is_empty() {
        let x_px = (plot.left as f32 - 84.0).max(LABEL_SIZE);
        shaper.draw_vertical(canvas, &y.label, x_px, cy, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    let mut stroke = stroke_paint(theme.line_stroke, 2.5);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}

/// Bars occupy equal slots across the plot width, 80% of the slot each.
fn bar_slot(plot: RectI32, n: usize, i: usize) -> (f32, f32) {
    let slot = plot.width() as f32 / n.max(1) as f32;
    let center = plot.left as f32 + slot * (i as f32 + 0.5);
    (center, slot * 0.8)
}

fn draw_bar_series(canvas: &skia::Canvas, plot: RectI32, ys: &LinearScale, series: &Series, theme: &Theme) {
    let n = series.values.len();
    if n == 0 { return; }
    let paint = fill_paint(theme.palette_color(0));
    let y0 = ys.to_px(0.0);
    for (i, &v) in series.values.iter().enumerate() {
        let (cx, w) = bar_slot(plot, n, i);
        let y = ys.to_px(v);
        let rect = skia::Rect::from_ltrb(cx - w * 0.5, y.min(y0), cx + w * 0.5, y.max(y0));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_category_ticks(canvas: &skia::Canvas, shaper: &TextShaper, plot: RectI32, series: &Series, theme: &Theme) {
    let n = series.labels.len();
    let tick_paint = stroke_paint(theme.axis_line, 1.0);
    let base = plot.bottom as f32;
    for (i, label) in series.labels.iter().enumerate() {
        let (cx, _) = bar_slot(plot, n, i);
        canvas.draw_line((cx, base), (cx, base + 5.0), &tick_paint);
        shaper.draw_centered(canvas, label, cx, base + 8.0 + TICK_SIZE, TICK_SIZE, theme.tick, false);
    }
}

/// Wedges run counter-clockwise from `PIE_START_DEG`; labels sit outside, percentages inside.
fn draw_pie_series(canvas: &skia::Canvas, area: RectI32, series: &Series, theme: &Theme, text: Option<&TextShaper>) {
    let total = series.total();
    if series.is_empty() || total <= 0.0 { return; }

    let (cx, cy) = area.center();
    let radius = area.width().min(area.height()) as f32 * 0.5 * 0.72;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let mut edge = stroke_paint(theme.wedge_edge, 1.5);
    edge.set_stroke_join(skia::paint::Join::Round);

    let mut start_frac = 0.0f64;
    for (i, (&v, label)) in series.values.iter().zip(&series.labels).enumerate() {
        let frac = v / total;
        // Skia angles are clockwise, so counter-clockwise degrees are negated.
        let start = -(PIE_START_DEG + (start_frac * 360.0) as f32);
        let sweep = -((frac * 360.0) as f32);
        canvas.draw_arc(oval, start, sweep, true, &fill_paint(theme.palette_color(i)));
        canvas.draw_arc(oval, start, sweep, true, &edge);

        if let Some(shaper) = text {
            let mid = (PIE_START_DEG as f64 + (start_frac + frac * 0.5) * 360.0).to_radians();
            let (dx, dy) = (mid.cos() as f32, -(mid.sin() as f32));
            let pct = format!("{:.1}%", frac * 100.0);
            let (px, py) = (cx + dx * radius * 0.6, cy + dy * radius * 0.6);
            shaper.draw_centered(canvas, &pct, px, py + TICK_SIZE * 0.35, TICK_SIZE, theme.title, false);

            let (lx, ly) = (cx + dx * radius * 1.1, cy + dy * radius * 1.1 + LABEL_SIZE * 0.35);
            if dx >= 0.0 {
                shaper.draw_left(canvas, label, lx, ly, LABEL_SIZE, theme.axis_label);
            } else {
                shaper.draw_right(canvas, label, lx, ly, LABEL_SIZE, theme.axis_label);
            }
        }
        start_frac += frac;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_slots_split_plot_evenly() {
        let plot = RectI32::from_ltrb(0, 0, 400, 100);
        assert_eq!(bar_slot(plot, 4, 0), (50.0, 80.0));
        assert_eq!(bar_slot(plot, 4, 3), (350.0, 80.0));
    }

    #[test]
    fn autoscale_pins_bars_to_zero() {
        let mut chart = Chart::new();
        chart.add_series(
            Series::try_categorical(SeriesType::Bar, vec!["a".into(), "b".into()], vec![40.0, 80.0]).unwrap(),
        );
        chart.autoscale_axes(0.05);
        assert_eq!(chart.y_axis.min, 0.0);
        assert!(chart.y_axis.max > 80.0);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 2.0));
    }

    #[test]
    fn zero_sized_surface_is_an_error() {
        let chart = Chart::new();
        let opts = RenderOptions::with_size(0, 10);
        assert!(chart.render_to_png_bytes(&opts).is_err());
    }
}
