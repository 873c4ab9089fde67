// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1500;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Space reserved above the plot for the chart title, in pixels.
pub const TITLE_BAND: u32 = 48;

/// Title font size in pixels.
pub const TITLE_SIZE: f32 = 28.0;
/// Axis label font size in pixels.
pub const LABEL_SIZE: f32 = 18.0;
/// Tick label font size in pixels.
pub const TICK_SIZE: f32 = 15.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Room for the y tick labels + rotated y label on the left, x ticks + label below.
        Self::new(110, 40, TITLE_BAND + 16, 96)
    }
}
