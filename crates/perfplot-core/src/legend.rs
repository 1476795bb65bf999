// File: crates/perfplot-core/src/legend.rs
// Summary: Legend model (one entry per series, in order), box layout and drawing with shadow/fancy box.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::LINE_WIDTH;

/// Gap between the legend box and the plot edges.
const OUTER_PAD: f32 = 10.0;
/// Padding inside the legend box.
const INNER_PAD: f32 = 8.0;
/// Length of the colored line sample in front of each label.
const SWATCH_LEN: f32 = 28.0;
/// Space between swatch and label.
const SWATCH_GAP: f32 = 8.0;
/// Corner radius of the fancy (rounded) box.
pub const FANCY_RADIUS: f32 = 6.0;
/// Shadow offset, right and down.
pub const SHADOW_OFFSET: f32 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendStyle {
    pub shadow: bool,
    pub fancy_box: bool,
    pub location: LegendLocation,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self { shadow: true, fancy_box: true, location: LegendLocation::UpperLeft }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    style: LegendStyle,
}

impl Legend {
    /// One entry per series, in series order. `colors[i]` is the stroke of `series[i]`.
    pub fn from_series(series: &[Series], colors: &[skia::Color], style: LegendStyle) -> Self {
        let entries = series
            .iter()
            .zip(colors)
            .map(|(s, &color)| LegendEntry { label: s.label.clone(), color })
            .collect();
        Self { entries, style }
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn style(&self) -> LegendStyle { self.style }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Box rectangle for this legend inside `plot`.
    pub fn layout(&self, plot: &PlotRect, shaper: &TextShaper, font_size: f32) -> PlotRect {
        let label_w = self
            .entries
            .iter()
            .map(|e| shaper.measure_width(&e.label, font_size, false))
            .fold(0.0f32, f32::max);
        let row_h = font_size * 1.5;
        let w = INNER_PAD * 2.0 + SWATCH_LEN + SWATCH_GAP + label_w;
        let h = INNER_PAD * 2.0 + row_h * self.entries.len() as f32;
        let (left, top) = match self.style.location {
            LegendLocation::UpperLeft => (plot.left + OUTER_PAD, plot.top + OUTER_PAD),
            LegendLocation::UpperRight => (plot.right - OUTER_PAD - w, plot.top + OUTER_PAD),
            LegendLocation::LowerLeft => (plot.left + OUTER_PAD, plot.bottom - OUTER_PAD - h),
            LegendLocation::LowerRight => (plot.right - OUTER_PAD - w, plot.bottom - OUTER_PAD - h),
        };
        PlotRect::from_ltrb(left, top, left + w, top + h)
    }

    pub fn draw(&self, canvas: &skia::Canvas, plot: &PlotRect, shaper: &TextShaper, theme: &Theme, font_size: f32) {
        if self.entries.is_empty() { return; }
        let frame = self.layout(plot, shaper, font_size);
        let radius = if self.style.fancy_box { FANCY_RADIUS } else { 0.0 };

        if self.style.shadow {
            let mut shadow = skia::Paint::default();
            shadow.set_anti_alias(true);
            shadow.set_color(theme.legend_shadow);
            let r = frame.to_skia().with_offset((SHADOW_OFFSET, SHADOW_OFFSET));
            canvas.draw_round_rect(r, radius, radius, &shadow);
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_fill);
        canvas.draw_round_rect(frame.to_skia(), radius, radius, &fill);

        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(1.0);
        edge.set_color(theme.legend_edge);
        canvas.draw_round_rect(frame.to_skia(), radius, radius, &edge);

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(LINE_WIDTH);

        let row_h = font_size * 1.5;
        for (i, entry) in self.entries.iter().enumerate() {
            let mid = frame.top + INNER_PAD + row_h * (i as f32 + 0.5);
            let x0 = frame.left + INNER_PAD;
            swatch.set_color(entry.color);
            canvas.draw_line((x0, mid), (x0 + SWATCH_LEN, mid), &swatch);
            let baseline = mid + font_size * 0.35;
            shaper.draw_left(canvas, &entry.label, x0 + SWATCH_LEN + SWATCH_GAP, baseline, font_size, theme.text, false);
        }
    }
}
