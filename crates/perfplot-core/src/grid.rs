// File: crates/perfplot-core/src/grid.rs
// Summary: Tick layout helpers (linear "nice" steps, log decades) and tick label formatting.

use crate::axis::ScaleKind;

/// Pick a 1/2/5 x 10^n step so that `[min, max]` holds about `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]` for the given scale.
pub fn ticks(kind: ScaleKind, min: f64, max: f64, target: usize) -> Vec<f64> {
    match kind {
        ScaleKind::Linear => linear_ticks(min, max, target),
        ScaleKind::Log10 => log_ticks(min, max),
    }
}

/// Upper bound on ticks per axis; wider layouts are dropped.
const MAX_TICKS: i64 = 1_000;

fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() { return Vec::new(); }
    let step = nice_step(min, max, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    match last.checked_sub(first) {
        Some(n) if (0..=MAX_TICKS).contains(&n) => {}
        _ => return Vec::new(),
    }
    (first..=last)
        .map(|i| i as f64 * step)
        // snap -0.0 and float noise like 0.30000000000000004
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .filter(|&v| v >= min && v <= max)
        .collect()
}

fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max.is_finite() && min.is_finite()) { return Vec::new(); }
    let first = min.log10().ceil() as i64;
    let last = max.log10().floor() as i64;
    match last.checked_sub(first) {
        Some(n) if (0..=MAX_TICKS).contains(&n) => {}
        _ => return Vec::new(),
    }
    (first..=last).map(|e| 10f64.powi(e as i32)).collect()
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    if value == 0.0 { return "0".to_string(); }
    let abs = value.abs();
    if abs >= 1e7 || abs < 1e-4 {
        return format!("{value:e}");
    }
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_iteration_range_gets_round_ticks() {
        let t = ticks(ScaleKind::Linear, -24950.0, 524950.0, 8);
        assert_eq!(t, vec![0.0, 100000.0, 200000.0, 300000.0, 400000.0, 500000.0]);
        assert_eq!(format_tick(200000.0, 100000.0), "200000");
    }

    #[test]
    fn small_steps_keep_decimals() {
        let t = ticks(ScaleKind::Linear, 0.0, 1.0, 5);
        assert_eq!(t.len(), 6);
        assert_eq!(format_tick(t[3], t[1] - t[0]), "0.6");
        assert_eq!(format_tick(0.0, 0.2), "0");
    }

    #[test]
    fn log_ticks_are_decades() {
        assert_eq!(ticks(ScaleKind::Log10, 700.0, 600000.0, 8), vec![1000.0, 10000.0, 100000.0]);
        assert!(ticks(ScaleKind::Log10, 0.0, 10.0, 8).is_empty());
    }

    #[test]
    fn unbounded_ranges_yield_no_ticks() {
        assert!(ticks(ScaleKind::Linear, f64::NEG_INFINITY, f64::INFINITY, 6).is_empty());
        // span overflows to inf, step falls back to 1.0
        assert!(ticks(ScaleKind::Linear, -1e308, 1e308, 6).is_empty());
        assert!(ticks(ScaleKind::Log10, 1.0, f64::INFINITY, 6).is_empty());
        assert!(ticks(ScaleKind::Log10, 1e-300, 1e308, 6).len() <= 1_001);
    }
}
