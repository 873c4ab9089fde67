// File: crates/sales-charts/src/pipeline.rs
// Summary: Synthesize -> aggregate -> summarize -> write artifacts. The only impure steps
// are the directory creation and file writes at the end of `run`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sales_core::report::{format_summary, write_csv, write_summary};
use sales_core::{generate, Aggregates, GaussianNoise, SalesRecord, SummaryStatistics};
use tracing::{debug, info};

use crate::charts::{build_charts, render_all};
use crate::config::RunConfig;

/// What a run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub output_dir: PathBuf,
    pub stats: SummaryStatistics,
    pub csv_path: PathBuf,
    pub chart_paths: Vec<PathBuf>,
    pub summary_path: PathBuf,
}

/// Pure part: records, their aggregates and the summary statistics.
pub fn compute(cfg: &RunConfig) -> Result<(Vec<SalesRecord>, Aggregates, SummaryStatistics)> {
    let mut noise = GaussianNoise::seeded(cfg.synth.seed);
    let records = generate(&cfg.synth, &cfg.categories, &mut noise).context("synthesizing sales data")?;
    let aggs = Aggregates::from_records(&records);
    debug!(
        daily = aggs.daily.len(),
        monthly = aggs.monthly.len(),
        quarterly = aggs.quarterly.len(),
        categories = aggs.by_category.len(),
        "aggregated"
    );
    let stats = SummaryStatistics::from_aggregates(&aggs).context("computing summary statistics")?;
    Ok((records, aggs, stats))
}

pub fn run(cfg: &RunConfig, generated_at: DateTime<Utc>) -> Result<RunOutput> {
    let (records, aggs, stats) = compute(cfg)?;
    info!(records = records.len(), total_sales = stats.total_sales, "computed sales aggregates");

    let dir = &cfg.output_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;

    let csv_path = dir.join(cfg.csv_name);
    write_csv(&records, &csv_path).with_context(|| format!("writing {}", csv_path.display()))?;

    let charts = build_charts(cfg, &aggs)?;
    let chart_paths = render_all(&charts, dir)?;

    let summary_path = dir.join(cfg.summary_name);
    let text = format_summary(&stats, generated_at, dir, &cfg.artifact_names());
    write_summary(&text, &summary_path).with_context(|| format!("writing {}", summary_path.display()))?;

    Ok(RunOutput { output_dir: dir.clone(), stats, csv_path, chart_paths, summary_path })
}
