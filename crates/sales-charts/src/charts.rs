// File: crates/sales-charts/src/charts.rs
// Summary: Turns aggregate views into chart-core charts and renders them as PNG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use chrono::NaiveDate;
use sales_core::{AggregateView, Aggregates, Category};
use tracing::info;

use crate::config::{ChartFile, RunConfig, CATEGORY_BAR, CATEGORY_PIE, DAILY, MONTHLY, QUARTERLY};

/// Y padding above/below line data, as a fraction of the span.
const LINE_MARGIN: f64 = 0.05;

/// Date-indexed line chart of a period view.
pub fn line_chart(title: String, view: &AggregateView<NaiveDate>) -> Chart {
    let points: Vec<(NaiveDate, f64)> = view.iter().collect();
    let mut chart = Chart::with_title(title);
    chart.x_axis = Axis::dates("Date", 0.0, 1.0);
    chart.y_axis = Axis::new("Sales", 0.0, 1.0);
    chart.add_series(Series::from_dates(&points));
    chart.autoscale_axes(LINE_MARGIN);
    chart
}

fn category_series(series_type: SeriesType, view: &AggregateView<Category>) -> Result<Series> {
    let labels = view.keys().map(|c| c.name().to_string()).collect();
    let values = view.values().collect();
    Series::try_categorical(series_type, labels, values).map_err(|e| anyhow::anyhow!("category series: {e}"))
}

/// Bars in view order (descending total).
pub fn bar_chart(title: String, view: &AggregateView<Category>) -> Result<Chart> {
    let mut chart = Chart::with_title(title);
    chart.x_axis = Axis::new("Category", 0.0, 1.0);
    chart.y_axis = Axis::new("Total Sales", 0.0, 1.0);
    chart.add_series(category_series(SeriesType::Bar, view)?);
    chart.autoscale_axes(LINE_MARGIN);
    Ok(chart)
}

pub fn pie_chart(title: String, view: &AggregateView<Category>) -> Result<Chart> {
    let mut chart = Chart::with_title(title);
    chart.add_series(category_series(SeriesType::Pie, view)?);
    Ok(chart)
}

/// All five charts with their output files, in listing order.
pub fn build_charts(cfg: &RunConfig, aggs: &Aggregates) -> Result<Vec<(ChartFile, Chart)>> {
    Ok(vec![
        (DAILY, line_chart(cfg.title(&DAILY), &aggs.daily)),
        (MONTHLY, line_chart(cfg.title(&MONTHLY), &aggs.monthly)),
        (QUARTERLY, line_chart(cfg.title(&QUARTERLY), &aggs.quarterly)),
        (CATEGORY_BAR, bar_chart(cfg.title(&CATEGORY_BAR), &aggs.by_category)?),
        (CATEGORY_PIE, pie_chart(cfg.title(&CATEGORY_PIE), &aggs.by_category)?),
    ])
}

/// Render every chart into `dir`; returns the written paths.
pub fn render_all(charts: &[(ChartFile, Chart)], dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(charts.len());
    for (file, chart) in charts {
        let path = dir.join(file.file_name);
        let opts = RenderOptions::with_size(file.width, file.height);
        chart
            .render_to_png(&opts, &path)
            .with_context(|| format!("rendering {}", file.file_name))?;
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}
