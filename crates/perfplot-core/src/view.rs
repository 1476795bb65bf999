// File: crates/perfplot-core/src/view.rs
// Summary: Data extents and autoscaled axis ranges for a set of series.

use crate::axis::ScaleKind;
use crate::series::Series;

/// Fraction of the data span added on each side, like a plotting library's default margins.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    /// Unit square used when nothing plottable exists.
    pub const UNIT: Self = Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };

    /// Data bounds over all points that can be placed on the given scales,
    /// widened by [`MARGIN`] in the scale's own domain.
    pub fn from_series(series: &[Series], x_kind: ScaleKind, y_kind: ScaleKind) -> Self {
        let mut x = Bounds::new();
        let mut y = Bounds::new();
        for s in series {
            for (px, py) in s.points() {
                if plottable(px, x_kind) && plottable(py, y_kind) {
                    x.push(px);
                    y.push(py);
                }
            }
        }
        let (x_min, x_max) = x.padded(x_kind);
        let (y_min, y_max) = y.padded(y_kind);
        Self { x_min, x_max, y_min, y_max }
    }
}

fn plottable(v: f64, kind: ScaleKind) -> bool {
    match kind {
        ScaleKind::Linear => v.is_finite(),
        ScaleKind::Log10 => v.is_finite() && v > 0.0,
    }
}

struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn new() -> Self { Self { min: f64::INFINITY, max: f64::NEG_INFINITY } }

    fn push(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    fn padded(&self, kind: ScaleKind) -> (f64, f64) {
        if !self.min.is_finite() || !self.max.is_finite() {
            return match kind {
                ScaleKind::Linear => (0.0, 1.0),
                ScaleKind::Log10 => (1.0, 10.0),
            };
        }
        match kind {
            ScaleKind::Linear => {
                let (mut lo, mut hi) = (self.min, self.max);
                // widen relative to magnitude; `lo + 1.0` is a no-op past 2^53
                if hi - lo <= lo.abs().max(hi.abs()) * 1e-12 + 1e-9 {
                    let w = lo.abs().max(1.0) * 0.5;
                    lo = (lo - w).max(f64::MIN);
                    hi = (hi + w).min(f64::MAX);
                }
                let m = (hi - lo) * MARGIN;
                finite_or((lo - m, hi + m), (lo, hi))
            }
            ScaleKind::Log10 => {
                let (lo, mut hi) = (self.min.log10(), self.max.log10());
                if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
                let m = (hi - lo) * MARGIN;
                let padded = (10f64.powf(lo - m), 10f64.powf(hi + m));
                let unpadded = if self.max > self.min {
                    (self.min, self.max)
                } else {
                    (self.min / 10.0, self.min)
                };
                finite_or(padded, unpadded)
            }
        }
    }
}

/// `padded` when both ends are finite and ordered, else `fallback`.
fn finite_or(padded: (f64, f64), fallback: (f64, f64)) -> (f64, f64) {
    let ok = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && lo < hi;
    if ok(padded) { padded } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid;

    fn extents(kind: ScaleKind, ys: &[f64]) -> Extents {
        let xs = (0..ys.len()).map(|i| i as f64 + 1.0).collect();
        Extents::from_series(&[Series::new("s", xs, ys.to_vec())], ScaleKind::Linear, kind)
    }

    #[test]
    fn extreme_linear_span_stays_finite() {
        let e = extents(ScaleKind::Linear, &[-1e308, 1e308]);
        assert!(e.y_min.is_finite() && e.y_max.is_finite());
        assert_eq!((e.y_min, e.y_max), (-1e308, 1e308));
        // tick layout stays bounded instead of overflowing
        assert!(grid::ticks(ScaleKind::Linear, e.y_min, e.y_max, 6).len() <= 1_001);
    }

    #[test]
    fn extreme_log_span_stays_finite() {
        let e = extents(ScaleKind::Log10, &[1.0, 1e308]);
        assert!(e.y_min > 0.0 && e.y_max.is_finite());
        let t = grid::ticks(ScaleKind::Log10, e.y_min, e.y_max, 6);
        assert!(t.len() <= 400 && t.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn large_constant_series_gets_a_real_span() {
        let e = extents(ScaleKind::Linear, &[1e20, 1e20]);
        assert!(e.y_min < 1e20 && e.y_max > 1e20);
        let t = grid::ticks(ScaleKind::Linear, e.y_min, e.y_max, 6);
        assert!(!t.is_empty());
        assert!(t.iter().all(|&v| v >= e.y_min && v <= e.y_max), "{t:?}");
    }
}
