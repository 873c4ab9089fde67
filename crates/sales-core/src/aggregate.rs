// File: crates/sales-core/src/aggregate.rs
// Summary: Group-and-sum views over sales records (daily, monthly, quarterly, by category).
// Notes:
// - Only observed keys appear; there are no zero-filled gaps.
// - Month and quarter keys are anchored at the period START (e.g. 2024-04-01 for Q2).
// - Period views are ordered chronologically; the category view is sorted by
//   descending total with ties kept in first-seen order.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::category::Category;
use crate::record::SalesRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Month,
    Quarter,
}

impl Granularity {
    /// First day of the period containing `date`.
    pub fn anchor(self, date: NaiveDate) -> NaiveDate {
        let month = match self {
            Granularity::Day => return date,
            Granularity::Month => date.month(),
            Granularity::Quarter => date.month0() / 3 * 3 + 1,
        };
        NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
    }

    /// Human-readable label for a period anchored at `key`.
    pub fn label(self, key: NaiveDate) -> String {
        match self {
            Granularity::Day => key.format("%Y-%m-%d").to_string(),
            Granularity::Month => key.format("%B %Y").to_string(),
            Granularity::Quarter => format!("Q{} {}", key.month0() / 3 + 1, key.year()),
        }
    }
}

/// Ordered `(key, summed sales)` pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateView<K> {
    entries: Vec<(K, f64)>,
}

impl<K: Copy> AggregateView<K> {
    pub fn from_entries(entries: Vec<(K, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(K, f64)] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|e| e.0)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.1)
    }

    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    pub fn first(&self) -> Option<(K, f64)> {
        self.entries.first().copied()
    }

    /// Entry with the largest value; the earliest one wins ties.
    pub fn max_entry(&self) -> Option<(K, f64)> {
        let mut best: Option<(K, f64)> = None;
        for (k, v) in self.iter() {
            match best {
                Some((_, bv)) if v <= bv => {}
                _ => best = Some((k, v)),
            }
        }
        best
    }
}

/// Sum sales per period of `granularity`, chronologically.
pub fn aggregate_by_period(records: &[SalesRecord], granularity: Granularity) -> AggregateView<NaiveDate> {
    let mut sums: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in records {
        *sums.entry(granularity.anchor(r.date)).or_insert(0.0) += r.sales;
    }
    AggregateView::from_entries(sums.into_iter().collect())
}

/// Sum sales per category, sorted by descending total (stable).
pub fn aggregate_by_category(records: &[SalesRecord]) -> AggregateView<Category> {
    let mut sums: Vec<(Category, f64)> = Vec::new();
    for r in records {
        match sums.iter_mut().find(|(c, _)| *c == r.category) {
            Some((_, total)) => *total += r.sales,
            None => sums.push((r.category, r.sales)),
        }
    }
    sums.sort_by(|a, b| b.1.total_cmp(&a.1));
    AggregateView::from_entries(sums)
}

/// The four views computed per run.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregates {
    pub daily: AggregateView<NaiveDate>,
    pub monthly: AggregateView<NaiveDate>,
    pub quarterly: AggregateView<NaiveDate>,
    pub by_category: AggregateView<Category>,
}

impl Aggregates {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        Self {
            daily: aggregate_by_period(records, Granularity::Day),
            monthly: aggregate_by_period(records, Granularity::Month),
            quarterly: aggregate_by_period(records, Granularity::Quarter),
            by_category: aggregate_by_category(records),
        }
    }
}
