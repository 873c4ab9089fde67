// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType, Theme};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the plot: opaque light background.
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let chart = Chart::new();
    let mut opts = RenderOptions::with_size(64, 64);
    opts.theme = Theme::dark();
    opts.draw_labels = false;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, 1, 1), [18, 18, 20, 255]);
}

#[test]
fn bar_fills_use_first_palette_color() {
    let mut chart = Chart::new();
    chart.add_series(Series::try_categorical(SeriesType::Bar, vec!["only".into()], vec![10.0]).unwrap());
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::with_size(400, 300);
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Middle of the single bar: plot center.
    let insets = opts.insets;
    let cx = (insets.left as i32 + (w - insets.right as i32)) / 2;
    let cy = (insets.top as i32 + (h - insets.bottom as i32)) / 2;
    let c = Theme::light().palette_color(0);
    assert_eq!(pixel(&px, stride, cx as usize, cy as usize), [c.r(), c.g(), c.b(), 255]);
}

#[test]
fn pie_center_is_painted() {
    let mut chart = Chart::new();
    chart.add_series(
        Series::try_categorical(SeriesType::Pie, vec!["a".into(), "b".into()], vec![1.0, 1.0]).unwrap(),
    );
    let mut opts = RenderOptions::with_size(300, 300);
    opts.draw_labels = false;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // A point well inside the first wedge (mid-angle 230 degrees counter-clockwise).
    let (cx, cy) = (150.0f64, (48.0 + 300.0) / 2.0);
    let a = 230f64.to_radians();
    let (x, y) = (cx + a.cos() * 40.0, cy - a.sin() * 40.0);
    let c = Theme::light().palette_color(0);
    assert_eq!(pixel(&px, stride, x as usize, y as usize), [c.r(), c.g(), c.b(), 255]);
}
