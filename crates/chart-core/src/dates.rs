// File: crates/chart-core/src/dates.rs
// Summary: Date axis support: day-number conversion and automatic, concise date ticks.
// Notes:
// - X values on date axes are whole days since 1970-01-01 (fractions are truncated).
// - Tick units step from days up to years until the count fits `max_ticks`.
// - Labels are concise: only the finest unit is printed, except at a boundary
//   of the next coarser unit (the 1st of a month shows the month, January shows the year).

use chrono::{Datelike, Months, NaiveDate};

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Day number (days since 1970-01-01) for `date`.
pub fn days_from_date(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) as f64
}

/// Inverse of [`days_from_date`]; `None` when out of chrono's range.
pub fn date_from_days(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() { return None; }
    let d = days.floor();
    if d.abs() > i32::MAX as f64 / 2.0 { return None; }
    NaiveDate::from_num_days_from_ce_opt(d as i32 + EPOCH_DAYS_FROM_CE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickUnit {
    Days(u32),
    Months(u32),
    Years(u32),
}

impl TickUnit {
    const LADDER: [TickUnit; 11] = [
        TickUnit::Days(1),
        TickUnit::Days(2),
        TickUnit::Days(7),
        TickUnit::Days(14),
        TickUnit::Months(1),
        TickUnit::Months(2),
        TickUnit::Months(3),
        TickUnit::Months(6),
        TickUnit::Years(1),
        TickUnit::Years(5),
        TickUnit::Years(10),
    ];

    fn approx_days(self) -> f64 {
        match self {
            TickUnit::Days(n) => n as f64,
            TickUnit::Months(n) => 30.44 * n as f64,
            TickUnit::Years(n) => 365.25 * n as f64,
        }
    }

    /// Finest unit whose tick count over `span_days` stays within `max_ticks`.
    pub fn pick(span_days: f64, max_ticks: usize) -> TickUnit {
        let max_ticks = max_ticks.max(2) as f64;
        for unit in Self::LADDER {
            if span_days / unit.approx_days() + 1.0 <= max_ticks {
                return unit;
            }
        }
        TickUnit::Years(10)
    }

    fn label(self, d: NaiveDate) -> String {
        match self {
            TickUnit::Days(_) if d.month() == 1 && d.day() == 1 => d.format("%Y").to_string(),
            TickUnit::Days(_) if d.day() == 1 => d.format("%b").to_string(),
            TickUnit::Days(_) => d.format("%d").to_string(),
            TickUnit::Months(_) if d.month() == 1 => d.format("%Y").to_string(),
            TickUnit::Months(_) => d.format("%b").to_string(),
            TickUnit::Years(_) => d.format("%Y").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTick {
    pub x: f64,
    pub label: String,
}

/// Date ticks for the day range `[min, max]`.
pub fn date_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<DateTick> {
    let (Some(first), Some(last)) = (date_from_days(min.ceil()), date_from_days(max)) else {
        return Vec::new();
    };
    if last <= first {
        return vec![DateTick { x: days_from_date(first), label: first.format("%Y-%m-%d").to_string() }];
    }
    let unit = TickUnit::pick(max - min, max_ticks);
    let mut out = Vec::new();
    let mut cur = first_aligned(first, unit);
    while let Some(d) = cur {
        if d > last { break; }
        out.push(DateTick { x: days_from_date(d), label: unit.label(d) });
        cur = advance(d, unit);
    }
    out
}

/// First date >= `from` that falls on a boundary of `unit`.
fn first_aligned(from: NaiveDate, unit: TickUnit) -> Option<NaiveDate> {
    match unit {
        TickUnit::Days(_) => Some(from),
        TickUnit::Months(n) => {
            let mut d = NaiveDate::from_ymd_opt(from.year(), from.month(), 1)?;
            if d < from { d = d.checked_add_months(Months::new(1))?; }
            while d.month0() % n != 0 {
                d = d.checked_add_months(Months::new(1))?;
            }
            Some(d)
        }
        TickUnit::Years(n) => {
            let mut year = from.year();
            if NaiveDate::from_ymd_opt(year, 1, 1)? < from { year += 1; }
            let n = n as i32;
            let year = year + (n - year.rem_euclid(n)) % n;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
    }
}

fn advance(d: NaiveDate, unit: TickUnit) -> Option<NaiveDate> {
    match unit {
        TickUnit::Days(n) => d.checked_add_days(chrono::Days::new(n as u64)),
        TickUnit::Months(n) => d.checked_add_months(Months::new(n)),
        TickUnit::Years(n) => d.checked_add_months(Months::new(12 * n)),
    }
}
