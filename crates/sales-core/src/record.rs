// File: crates/sales-core/src/record.rs
// Summary: One day's sales for one category; the row type of the generated dataset.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::Category;

/// Contract: `sales >= 0.0` (two decimals), `units >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub sales: f64,
    pub units: u32,
}

/// Round half away from zero to 2 decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
