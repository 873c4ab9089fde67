// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Degenerate sizes collapse to a 1px rect instead of inverting.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self::from_ltrb(left, top, right, bottom)
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }
    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_respects_insets() {
        let r = RectI32::plot_area(800, 400, &Insets::new(10, 20, 30, 40));
        assert_eq!(r, RectI32::from_ltrb(10, 30, 780, 360));
        assert_eq!(r.width(), 770);
        assert_eq!(r.height(), 330);
    }

    #[test]
    fn plot_area_never_inverts() {
        let r = RectI32::plot_area(50, 50, &Insets::new(40, 40, 40, 40));
        assert!(r.width() >= 1 && r.height() >= 1);
    }
}
