// File: crates/sales-core/tests/aggregate.rs
// Purpose: Aggregation scenarios, conservation and hierarchical consistency.

use chrono::NaiveDate;
use proptest::prelude::*;
use sales_core::aggregate::{aggregate_by_category, aggregate_by_period};
use sales_core::synth::synthesize_record;
use sales_core::{
    generate, Aggregates, Category, GaussianNoise, Granularity, SalesRecord, SummaryStatistics, SynthConfig,
    ZeroNoise,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn two_day_two_category_scenario() {
    // Clothing has base 100, Books base 50.
    let cfg = SynthConfig::with_range(ymd(2024, 1, 1), ymd(2024, 1, 2));
    let recs = generate(&cfg, &[Category::Clothing, Category::Books], &mut ZeroNoise).unwrap();
    let aggs = Aggregates::from_records(&recs);

    assert_eq!(aggs.daily.entries(), &[(ymd(2024, 1, 1), 150.0), (ymd(2024, 1, 2), 150.0)]);
    assert_eq!(aggs.by_category.entries(), &[(Category::Clothing, 200.0), (Category::Books, 100.0)]);
    assert_eq!(aggs.monthly.entries(), &[(ymd(2024, 1, 1), 300.0)]);
    assert_eq!(aggs.quarterly.entries(), &[(ymd(2024, 1, 1), 300.0)]);

    let stats = SummaryStatistics::from_aggregates(&aggs).unwrap();
    assert_eq!(stats.total_sales, 300.0);
    assert_eq!(stats.top_category, (Category::Clothing, 200.0));
    assert_eq!(stats.best_month_label(), "January 2024");
}

#[test]
fn injected_november_record_is_uplifted() {
    let cfg = SynthConfig::default();
    let mut recs = generate(&SynthConfig::with_range(ymd(2024, 1, 1), ymd(2024, 1, 1)), &[Category::Clothing], &mut ZeroNoise)
        .unwrap();
    recs.push(synthesize_record(&cfg, ymd(2024, 11, 20), Category::Clothing, &mut ZeroNoise));
    let monthly = aggregate_by_period(&recs, Granularity::Month);
    assert_eq!(monthly.entries(), &[(ymd(2024, 1, 1), 100.0), (ymd(2024, 11, 1), 125.0)]);
    let stats = SummaryStatistics::from_aggregates(&Aggregates::from_records(&recs)).unwrap();
    assert_eq!(stats.best_month_label(), "November 2024");
}

#[test]
fn full_year_views_are_consistent() {
    let cfg = SynthConfig::default();
    let recs = generate(&cfg, &Category::ALL, &mut GaussianNoise::seeded(cfg.seed)).unwrap();
    let aggs = Aggregates::from_records(&recs);
    let raw: f64 = recs.iter().map(|r| r.sales).sum();

    assert_eq!(aggs.daily.len(), 366);
    assert_eq!(aggs.monthly.len(), 12);
    assert_eq!(aggs.quarterly.len(), 4);
    assert_eq!(aggs.by_category.len(), 4);
    assert_eq!(aggs.quarterly.keys().collect::<Vec<_>>(), vec![ymd(2024, 1, 1), ymd(2024, 4, 1), ymd(2024, 7, 1), ymd(2024, 10, 1)]);

    assert!(close(aggs.daily.total(), raw));
    assert!(close(aggs.monthly.total(), aggs.daily.total()));
    assert!(close(aggs.quarterly.total(), aggs.monthly.total()));

    let values: Vec<f64> = aggs.by_category.values().collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    // Electronics has the largest base rate by far.
    assert_eq!(aggs.by_category.first().map(|e| e.0), Some(Category::Electronics));

    let stats = SummaryStatistics::from_aggregates(&aggs).unwrap();
    assert!(close(stats.total_sales, aggs.by_category.total()));
    // Nov/Dec are uplifted by 25%.
    assert!(stats.best_month.0 >= ymd(2024, 11, 1));
}

fn arb_record() -> impl Strategy<Value = SalesRecord> {
    (0u32..730, 0usize..4, 0u32..100_000).prop_map(|(day, cat, cents)| SalesRecord {
        date: ymd(2023, 1, 1) + chrono::Days::new(day as u64),
        category: Category::ALL[cat],
        sales: cents as f64 / 100.0,
        units: 1,
    })
}

proptest! {
    #[test]
    fn aggregation_conserves_sales(records in proptest::collection::vec(arb_record(), 0..300)) {
        let raw: f64 = records.iter().map(|r| r.sales).sum();
        let aggs = Aggregates::from_records(&records);
        prop_assert!(close(aggs.daily.total(), raw));
        prop_assert!(close(aggs.monthly.total(), aggs.daily.total()));
        prop_assert!(close(aggs.quarterly.total(), aggs.monthly.total()));
        prop_assert!(close(aggs.by_category.total(), raw));

        // chronological, unique keys
        let days: Vec<NaiveDate> = aggs.daily.keys().collect();
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        let months: Vec<NaiveDate> = aggs.monthly.keys().collect();
        prop_assert!(months.windows(2).all(|w| w[0] < w[1]));

        let by_cat = aggregate_by_category(&records);
        let values: Vec<f64> = by_cat.values().collect();
        prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));

        match SummaryStatistics::from_aggregates(&aggs) {
            Ok(stats) => {
                prop_assert!(!records.is_empty());
                prop_assert!(aggs.monthly.values().all(|v| v <= stats.best_month.1));
            }
            Err(_) => prop_assert!(records.is_empty()),
        }
    }
}
