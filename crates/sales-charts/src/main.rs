// File: crates/sales-charts/src/main.rs
// Summary: Generates a year of sample sales, renders daily/monthly/quarterly/category charts,
// and writes the raw CSV plus a short text summary into `sales_charts_output/`.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod pipeline;

use config::RunConfig;

fn main() -> Result<()> {
    init_tracing();

    let cfg = RunConfig::default();
    let out = pipeline::run(&cfg, Utc::now())?;
    info!(
        total_sales = out.stats.total_sales,
        top_category = %out.stats.top_category.0,
        best_month = %out.stats.best_month_label(),
        "run complete"
    );
    for path in out.chart_paths.iter().chain([&out.csv_path, &out.summary_path]) {
        info!(path = %path.display(), "artifact");
    }
    println!("Generated files in: {}", out.output_dir.display());
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
