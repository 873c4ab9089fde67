// File: crates/sales-core/src/lib.rs
// Summary: Sales pipeline core: synthesize records, aggregate by period/category, extract summary stats.

pub mod category;
pub mod record;
pub mod synth;
pub mod aggregate;
pub mod summary;
pub mod report;
pub mod error;

pub use category::Category;
pub use record::SalesRecord;
pub use synth::{generate, GaussianNoise, NoiseSource, SynthConfig, ZeroNoise};
pub use aggregate::{AggregateView, Aggregates, Granularity};
pub use summary::SummaryStatistics;
pub use error::{Result, SalesError};
