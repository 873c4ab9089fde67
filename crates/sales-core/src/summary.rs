// File: crates/sales-core/src/summary.rs
// Summary: Scalar summary statistics derived from the aggregate views.

use chrono::NaiveDate;

use crate::aggregate::{Aggregates, Granularity};
use crate::category::Category;
use crate::error::{Result, SalesError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStatistics {
    pub total_sales: f64,
    /// Highest-selling category and its total.
    pub top_category: (Category, f64),
    /// Start of the highest-selling month and its total; earliest month wins ties.
    pub best_month: (NaiveDate, f64),
}

impl SummaryStatistics {
    /// Fails with `EmptyDataset` when there are no records to summarize.
    pub fn from_aggregates(aggs: &Aggregates) -> Result<Self> {
        let top_category = aggs.by_category.first().ok_or(SalesError::EmptyDataset)?;
        let best_month = aggs.monthly.max_entry().ok_or(SalesError::EmptyDataset)?;
        Ok(Self { total_sales: aggs.daily.total(), top_category, best_month })
    }

    /// e.g. "December 2024".
    pub fn best_month_label(&self) -> String {
        Granularity::Month.label(self.best_month.0)
    }
}
