// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" numeric ticks and their labels).

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick values on multiples of a nice step inside `[min, max]`, at most about `max_ticks` of them.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 { return vec![min]; }
    let step = nice_step(span / (max_ticks.max(2) - 1) as f64);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        // snap -0.0 and accumulated float error onto the step grid
        let v = (v / step).round() * step;
        out.push(if v == 0.0 { 0.0 } else { v });
        i += 1;
    }
    out
}

/// Format a numeric tick label with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step.is_finite() && step > 0.0 {
        while decimals < 6 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 { break; }
            decimals += 1;
        }
    }
    format!("{:.*}", decimals, v)
}
