// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick label format.

/// How tick values along an axis are turned into labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisFormat {
    /// Plain numbers, decimals chosen from the tick step.
    Number,
    /// Values are days since 1970-01-01; ticks are placed on calendar boundaries.
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: AxisFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: AxisFormat::Number }
    }

    /// Date axis; `min`/`max` are day numbers (see `dates::days_from_date`).
    pub fn dates(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: AxisFormat::Date }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
