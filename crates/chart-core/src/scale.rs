// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transform shared by the X and Y axes.

/// Maps the value range `[v0, v1]` onto the pixel range `[px0, px1]`.
/// For a Y axis pass `px0 = bottom`, `px1 = top` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub v0: f64,
    pub v1: f64,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, v0: f64, v1: f64) -> Self {
        let mut s = Self { px0, px1, v0, v1 };
        if (s.v1 - s.v0).abs() < 1e-12 { s.v1 = s.v0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px0 + ((v - self.v0) / (self.v1 - self.v0)) as f32 * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.px1 - self.px0) as f64;
        if span.abs() < 1e-12 { return self.v0; }
        self.v0 + ((px - self.px0) as f64 / span) * (self.v1 - self.v0)
    }
}
