// File: crates/sales-core/src/synth.rs
// Summary: Synthetic daily sales generator (base rate x seasonal factor + gaussian noise).
// Notes:
// - One record per (date, category), dates outermost, categories in slice order.
// - Noise is drawn once per record from the `NoiseSource`, in that same order,
//   so a seeded source reproduces the dataset exactly.
// - Negative draws are clamped: sales >= 0, units >= 1.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use crate::category::Category;
use crate::error::{Result, SalesError};
use crate::record::{round2, SalesRecord};

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}

/// First day of the default synthetic range.
pub const DEFAULT_START: NaiveDate = ymd(2024, 1, 1);
/// Last day (inclusive) of the default synthetic range.
pub const DEFAULT_END: NaiveDate = ymd(2024, 12, 31);
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Debug, PartialEq)]
pub struct SynthConfig {
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub seed: u64,
    /// Noise stddev as a fraction of the category base rate.
    pub noise_ratio: f64,
    /// Multiplier applied in `seasonal_months`.
    pub seasonal_uplift: f64,
    /// 1-based month numbers receiving the uplift.
    pub seasonal_months: Vec<u32>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            seed: DEFAULT_SEED,
            noise_ratio: 0.18,
            seasonal_uplift: 1.25,
            seasonal_months: vec![11, 12],
        }
    }
}

impl SynthConfig {
    pub fn with_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end, ..Self::default() }
    }

    /// Seasonal multiplier for `date`: the uplift in seasonal months, else 1.0.
    pub fn month_factor(&self, date: NaiveDate) -> f64 {
        if self.seasonal_months.contains(&date.month()) { self.seasonal_uplift } else { 1.0 }
    }

    /// Number of days in the inclusive range (0 when inverted).
    pub fn days(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }
}

/// Source of zero-mean gaussian noise.
pub trait NoiseSource {
    /// One draw from Normal(0, `stddev`).
    fn sample(&mut self, stddev: f64) -> f64;
}

/// Seeded pseudo-random normal noise.
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl NoiseSource for GaussianNoise {
    fn sample(&mut self, stddev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * stddev
    }
}

/// No noise; every record equals base rate x seasonal factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self, _stddev: f64) -> f64 { 0.0 }
}

/// Build the record for one (date, category) pair, drawing one noise sample.
pub fn synthesize_record(
    config: &SynthConfig,
    date: NaiveDate,
    category: Category,
    noise: &mut dyn NoiseSource,
) -> SalesRecord {
    let base = category.base_rate();
    let jitter = noise.sample(base * config.noise_ratio);
    let sales = (base * config.month_factor(date) + jitter).max(0.0);
    let units = (sales / (base * 0.5).max(1.0)).floor().max(1.0) as u32;
    SalesRecord { date, category, sales: round2(sales), units }
}

/// Generate `days x categories` records over the configured range.
pub fn generate(
    config: &SynthConfig,
    categories: &[Category],
    noise: &mut dyn NoiseSource,
) -> Result<Vec<SalesRecord>> {
    if config.start > config.end {
        return Err(SalesError::InvalidRange { start: config.start, end: config.end });
    }
    let mut records = Vec::with_capacity(config.days() * categories.len());
    for date in config.start.iter_days().take_while(|d| *d <= config.end) {
        for &category in categories {
            records.push(synthesize_record(config, date, category, noise));
        }
    }
    debug!(records = records.len(), days = config.days(), categories = categories.len(), "synthesized sales");
    Ok(records)
}
