// File: crates/chart-core/src/series.rs
// Summary: Series model for date/number line data and labelled bar/pie values.
// Notes:
// - Line series use `data_xy`; Bar and Pie use the parallel `labels`/`values` vectors.
// - `try_categorical` enforces equal lengths and non-negative finite values.

use chrono::NaiveDate;

use crate::dates::days_from_date;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,   // one filled bar per label, drawn up from 0.0
    Pie,   // one wedge per label, share of the total
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,   // used by Line
    pub labels: Vec<String>,        // used by Bar/Pie
    pub values: Vec<f64>,           // used by Bar/Pie, parallel to `labels`
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, data_xy: Vec::new(), labels: Vec::new(), values: Vec::new() }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// Line series over calendar dates; x becomes the day number.
    pub fn from_dates(points: &[(NaiveDate, f64)]) -> Self {
        let data = points.iter().map(|&(d, v)| (days_from_date(d), v)).collect();
        Self::with_data(SeriesType::Line, data)
    }

    /// Labelled values for Bar/Pie. Lengths must match; values must be finite and >= 0.
    pub fn try_categorical(
        series_type: SeriesType,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, &'static str> {
        if labels.len() != values.len() { return Err("labels and values differ in length"); }
        if values.iter().any(|v| !v.is_finite()) { return Err("non-finite value"); }
        if values.iter().any(|v| *v < 0.0) { return Err("negative value"); }
        Ok(Self { labels, values, ..Self::new(series_type) })
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.series_type, SeriesType::Bar | SeriesType::Pie)
    }

    pub fn len(&self) -> usize {
        if self.is_categorical() { self.values.len() } else { self.data_xy.len() }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Sum of categorical values (0.0 for line series).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
