// File: crates/sales-core/src/error.rs
// Summary: Error type for the sales pipeline.

use chrono::NaiveDate;

#[derive(thiserror::Error, Debug)]
pub enum SalesError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Summary statistics are undefined without at least one record.
    #[error("no sales data: cannot compute summary statistics over an empty dataset")]
    EmptyDataset,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SalesError>;
