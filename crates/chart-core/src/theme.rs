// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, plus the categorical palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub wedge_edge: skia::Color,
    /// Fill colors for bars and pie wedges, cycled by index.
    pub palette: [skia::Color; 10],
}

impl Theme {
    /// White figure, tab10-like palette.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 200, 200, 205),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 10, 10, 15),
            line_stroke: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
            wedge_edge: skia::Color::from_argb(255, 255, 255, 255),
            palette: tab10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 55, 55, 62),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            wedge_edge: skia::Color::from_argb(255, 18, 18, 20),
            palette: tab10(),
        }
    }

    /// Palette color for series index `i` (wraps around).
    pub fn palette_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

fn tab10() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
        skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
        skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
        skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
        skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
        skia::Color::from_argb(255, 0x8c, 0x56, 0x4b), // brown
        skia::Color::from_argb(255, 0xe3, 0x77, 0xc2), // pink
        skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f), // gray
        skia::Color::from_argb(255, 0xbc, 0xbd, 0x22), // olive
        skia::Color::from_argb(255, 0x17, 0xbe, 0xcf), // cyan
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
