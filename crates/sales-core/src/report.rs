// File: crates/sales-core/src/report.rs
// Summary: Persisted outputs that need no rendering: the raw CSV and the summary text block.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::record::SalesRecord;
use crate::summary::SummaryStatistics;

/// Write records as CSV (`date,category,sales,units`) to any writer.
pub fn write_csv_to<W: Write>(records: &[SalesRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as CSV to `path`, replacing any existing file.
pub fn write_csv(records: &[SalesRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(records, std::io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = records.len(), "wrote sales csv");
    Ok(())
}

/// `1234567.891` -> `"1,234,567.89"`.
pub fn format_thousands(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// The human-readable summary block written next to the charts.
pub fn format_summary(
    stats: &SummaryStatistics,
    generated_at: DateTime<Utc>,
    output_dir: &Path,
    file_names: &[String],
) -> String {
    let (top_cat, top_sales) = stats.top_category;
    let mut text = format!(
        "Sales Charts Demo - Summary\n\
         Generated: {} UTC\n\
         \n\
         Total sales: {}\n\
         Top category: {} ({})\n\
         Best month: {} ({})\n\
         \n\
         Files in: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        format_thousands(stats.total_sales),
        top_cat,
        format_thousands(top_sales),
        stats.best_month_label(),
        format_thousands(stats.best_month.1),
        output_dir.display(),
    );
    for name in file_names {
        text.push_str("- ");
        text.push_str(name);
        text.push('\n');
    }
    text
}

/// Write the summary text to `path`.
pub fn write_summary(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text)?;
    info!(path = %path.display(), "wrote summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(999.999), "1,000.00");
        assert_eq!(format_thousands(1234.5), "1,234.50");
        assert_eq!(format_thousands(183_456_789.5), "183,456,789.50");
        assert_eq!(format_thousands(-1234.0), "-1,234.00");
        assert_eq!(format_thousands(-0.001), "0.00");
    }
}
