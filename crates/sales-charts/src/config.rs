// File: crates/sales-charts/src/config.rs
// Summary: Hardcoded run configuration: output location, file names, chart titles and sizes.

use std::path::PathBuf;

use chrono::Datelike;
use sales_core::{Category, SynthConfig};

/// One rendered chart: file name, title (year appended) and pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartFile {
    pub file_name: &'static str,
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
}

impl ChartFile {
    const fn new(file_name: &'static str, title: &'static str, width: i32, height: i32) -> Self {
        Self { file_name, title, width, height }
    }
}

// Figure sizes are 10x4, 8x4 and 6x6 inches at 150 dpi.
pub const DAILY: ChartFile = ChartFile::new("daily_sales.png", "Daily Total Sales", 1500, 600);
pub const MONTHLY: ChartFile = ChartFile::new("monthly_sales.png", "Monthly Total Sales", 1500, 600);
pub const QUARTERLY: ChartFile = ChartFile::new("quarterly_sales.png", "Quarterly Total Sales", 1500, 600);
pub const CATEGORY_BAR: ChartFile = ChartFile::new("category_bar.png", "Total Sales by Category", 1200, 600);
pub const CATEGORY_PIE: ChartFile = ChartFile::new("category_pie.png", "Category Sales Share", 900, 900);

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub synth: SynthConfig,
    pub categories: Vec<Category>,
    pub csv_name: &'static str,
    pub summary_name: &'static str,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("sales_charts_output"),
            synth: SynthConfig::default(),
            categories: Category::ALL.to_vec(),
            csv_name: "sample_sales.csv",
            summary_name: "summary.txt",
        }
    }
}

impl RunConfig {
    /// Same run, different output directory.
    #[cfg(test)]
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }

    /// "Daily Total Sales (2024)" style title for `file`.
    pub fn title(&self, file: &ChartFile) -> String {
        format!("{} ({})", file.title, self.synth.start.year())
    }

    /// Artifact file names in the order they are listed in the summary.
    pub fn artifact_names(&self) -> Vec<String> {
        [DAILY, MONTHLY, QUARTERLY, CATEGORY_BAR, CATEGORY_PIE]
            .iter()
            .map(|s| s.file_name.to_string())
            .chain(std::iter::once(self.csv_name.to_string()))
            .collect()
    }
}
