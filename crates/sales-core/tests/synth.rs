// File: crates/sales-core/tests/synth.rs
// Purpose: Synthesizer record counts, value invariants, determinism and noise shape.

use chrono::{Datelike, NaiveDate};
use sales_core::{generate, Category, GaussianNoise, SynthConfig};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_year_record_count_and_invariants() {
    let cfg = SynthConfig::default();
    let recs = generate(&cfg, &Category::ALL, &mut GaussianNoise::seeded(cfg.seed)).unwrap();
    assert_eq!(recs.len(), 366 * 4);
    assert!(recs.iter().all(|r| r.sales >= 0.0));
    assert!(recs.iter().all(|r| r.units >= 1));
    assert_eq!(recs.first().map(|r| (r.date, r.category)), Some((ymd(2024, 1, 1), Category::Electronics)));
    assert_eq!(recs.last().map(|r| (r.date, r.category)), Some((ymd(2024, 12, 31), Category::Books)));
    // two decimals at most
    assert!(recs.iter().all(|r| ((r.sales * 100.0).round() - r.sales * 100.0).abs() < 1e-6));
}

#[test]
fn same_seed_same_dataset() {
    let cfg = SynthConfig::default();
    let a = generate(&cfg, &Category::ALL, &mut GaussianNoise::seeded(42)).unwrap();
    let b = generate(&cfg, &Category::ALL, &mut GaussianNoise::seeded(42)).unwrap();
    assert_eq!(a, b);
    let c = generate(&cfg, &Category::ALL, &mut GaussianNoise::seeded(43)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn noise_has_expected_shape() {
    let cfg = SynthConfig::default();
    let recs = generate(&cfg, &[Category::Electronics], &mut GaussianNoise::seeded(cfg.seed)).unwrap();

    let regular: Vec<f64> = recs.iter().filter(|r| r.date.month() <= 10).map(|r| r.sales).collect();
    let seasonal: Vec<f64> = recs.iter().filter(|r| r.date.month() >= 11).map(|r| r.sales).collect();

    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
    let std = |v: &[f64]| {
        let m = mean(v);
        (v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (v.len() - 1) as f64).sqrt()
    };

    // base 200, stddev 0.18 * 200 = 36; Nov/Dec mean 250
    assert!((mean(&regular) - 200.0).abs() < 10.0, "regular mean {}", mean(&regular));
    assert!((std(&regular) - 36.0).abs() < 6.0, "regular std {}", std(&regular));
    assert!((mean(&seasonal) - 250.0).abs() < 20.0, "seasonal mean {}", mean(&seasonal));
}

#[test]
fn any_range_and_category_subset_is_a_full_cross_product() {
    let cfg = SynthConfig::with_range(ymd(2023, 2, 27), ymd(2023, 3, 2));
    let cats = [Category::Home, Category::Books];
    let recs = generate(&cfg, &cats, &mut GaussianNoise::seeded(1)).unwrap();
    assert_eq!(recs.len(), 4 * 2);
    let dates: Vec<NaiveDate> = recs.iter().step_by(2).map(|r| r.date).collect();
    assert_eq!(dates, vec![ymd(2023, 2, 27), ymd(2023, 2, 28), ymd(2023, 3, 1), ymd(2023, 3, 2)]);
}
