// File: crates/perfplot-core/src/scale.rs
// Summary: Data-to-pixel transform for one axis, linear or log10.

use crate::axis::{Axis, ScaleKind};

/// Smallest value accepted on a log axis.
const LOG_EPS: f64 = 1e-12;

/// Maps a data range onto a pixel range. `px_lo` is where `vmin` lands, so the
/// Y axis is built with `px_lo = bottom` and `px_hi = top`.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    pub px_lo: f32,
    pub px_hi: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub kind: ScaleKind,
    // cached endpoints in the transformed domain
    t_min: f64,
    t_max: f64,
}

impl Scale {
    pub fn new(kind: ScaleKind, vmin: f64, vmax: f64, px_lo: f32, px_hi: f32) -> Self {
        match kind {
            ScaleKind::Linear => {
                let vmax = if (vmax - vmin).abs() < 1e-12 { vmin + 1.0 } else { vmax };
                Self { px_lo, px_hi, vmin, vmax, kind, t_min: vmin, t_max: vmax }
            }
            ScaleKind::Log10 => {
                // Ensure strictly positive range for log scale
                let vmin = if vmin <= LOG_EPS { LOG_EPS } else { vmin };
                let vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
                Self { px_lo, px_hi, vmin, vmax, kind, t_min: vmin.log10(), t_max: vmax.log10() }
            }
        }
    }

    pub fn for_axis(axis: &Axis, px_lo: f32, px_hi: f32) -> Self {
        Self::new(axis.kind, axis.min, axis.max, px_lo, px_hi)
    }

    fn forward(&self, v: f64) -> Option<f64> {
        match self.kind {
            ScaleKind::Linear => v.is_finite().then_some(v),
            ScaleKind::Log10 => (v.is_finite() && v > 0.0).then(|| v.log10()),
        }
    }

    /// Pixel position of `v`, or `None` when the value cannot be placed on this
    /// scale (non-finite, or non-positive on a log axis).
    #[inline]
    pub fn to_px(&self, v: f64) -> Option<f32> {
        let t = self.forward(v)?;
        // halved so spans near f64::MAX do not overflow to inf
        let half_span = (self.t_max * 0.5 - self.t_min * 0.5).max(1e-12);
        let frac = (t * 0.5 - self.t_min * 0.5) / half_span;
        Some(self.px_lo + frac as f32 * (self.px_hi - self.px_lo))
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.t_max - self.t_min;
        let denom = (self.px_hi - self.px_lo) as f64;
        let frac = if denom.abs() < 1e-9 { 0.0 } else { (px - self.px_lo) as f64 / denom };
        let t = self.t_min + frac * span;
        match self.kind {
            ScaleKind::Linear => t,
            ScaleKind::Log10 => 10f64.powf(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_maps_up_the_screen() {
        let s = Scale::new(ScaleKind::Linear, 0.0, 10.0, 500.0, 100.0);
        assert_eq!(s.to_px(0.0), Some(500.0));
        assert_eq!(s.to_px(10.0), Some(100.0));
        assert_eq!(s.to_px(f64::NAN), None);
        assert!((s.from_px(300.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn log_axis_spaces_decades_evenly() {
        let s = Scale::new(ScaleKind::Log10, 1000.0, 1_000_000.0, 0.0, 300.0);
        let px: Vec<f32> = [1000.0, 10000.0, 100000.0].iter().filter_map(|&v| s.to_px(v)).collect();
        assert!((px[1] - px[0] - 100.0).abs() < 1e-3);
        assert!((px[2] - px[1] - 100.0).abs() < 1e-3);
        assert_eq!(s.to_px(0.0), None);
        assert!((s.from_px(200.0) - 100000.0).abs() < 1e-3);
    }

    #[test]
    fn near_max_span_maps_to_finite_pixels() {
        let s = Scale::new(ScaleKind::Linear, -1e308, 1e308, 0.0, 200.0);
        assert_eq!(s.to_px(-1e308), Some(0.0));
        assert_eq!(s.to_px(0.0), Some(100.0));
        assert_eq!(s.to_px(1e308), Some(200.0));
    }
}
