// File: crates/chart-core/src/view.rs
// Visible data ranges; used to autoscale chart axes before rendering.

use crate::Chart;
use crate::series::SeriesType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extent of all axis-bound series, padded on Y by `margin` (fraction of span).
    /// Bar series pin the Y floor to zero when all values are non-negative.
    /// Pie series have no axes and are ignored; with no data the view is the unit square.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut has_bars = false;
        for s in &chart.series {
            match s.series_type {
                SeriesType::Line => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Bar => {
                    has_bars = true;
                    if !s.values.is_empty() {
                        x_min = x_min.min(0.0);
                        x_max = x_max.max(s.values.len() as f64);
                    }
                    for &v in &s.values {
                        y_min = y_min.min(v);
                        y_max = y_max.max(v);
                    }
                }
                SeriesType::Pie => {}
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        let pin_zero = has_bars && y_min >= 0.0;
        if pin_zero { y_min = 0.0; }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * margin.max(0.0);
        Self {
            x_min,
            x_max,
            y_min: if pin_zero { 0.0 } else { y_min - ym },
            y_max: y_max + ym,
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
