// File: crates/perfplot-core/src/paint.rs
// Summary: Paints a canvas's figure onto any Skia canvas (raster surface or SVG writer).

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::canvas::{Canvas, RenderOptions};
use crate::geometry::PlotRect;
use crate::grid;
use crate::scale::Scale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::types::{LINE_WIDTH, TICK_LEN};

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;

pub(crate) fn paint_figure(target: &skia::Canvas, figure: &Canvas) {
    let opts = figure.options();
    let theme = &opts.theme;
    let plot = PlotRect::inside(opts.width, opts.height, &opts.insets);
    let (x_axis, y_axis) = figure.autoscaled_axes();
    let sx = Scale::for_axis(&x_axis, plot.left, plot.right);
    let sy = Scale::for_axis(&y_axis, plot.bottom, plot.top);
    let x_ticks = grid::ticks(x_axis.kind, x_axis.min, x_axis.max, X_TICK_TARGET);
    let y_ticks = grid::ticks(y_axis.kind, y_axis.min, y_axis.max, Y_TICK_TARGET);

    target.clear(theme.background);
    let mut fill = skia::Paint::default();
    fill.set_color(theme.plot_background);
    target.draw_rect(plot.to_skia(), &fill);

    draw_grid(target, &plot, &sx, &sy, &x_ticks, &y_ticks, theme.grid);

    // Series, clipped to the plot area
    target.save();
    target.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    for (series, color) in figure.series().iter().zip(figure.colors()) {
        draw_line_series(target, &sx, &sy, series, color);
    }
    target.restore();

    draw_axes(target, &plot, &sx, &sy, &x_ticks, &y_ticks, theme.axis_line, theme.tick);

    if !opts.draw_labels {
        return;
    }
    let shaper = TextShaper::new();
    draw_tick_labels(target, &shaper, opts, &plot, &sx, &sy, &x_axis, &y_axis, &x_ticks, &y_ticks);
    draw_titles(target, &shaper, opts, &plot, figure.title(), &x_axis.label, &y_axis.label);
    figure.legend().draw(target, &plot, &shaper, theme, opts.legend_size);
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    sx: &Scale,
    sy: &Scale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in x_ticks.iter().filter_map(|&v| sx.to_px(v)) {
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for y in y_ticks.iter().filter_map(|&v| sy.to_px(v)) {
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    sx: &Scale,
    sy: &Scale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    spine: skia::Color,
    tick: skia::Color,
) {
    let mut spine_paint = skia::Paint::default();
    spine_paint.set_color(spine);
    spine_paint.set_anti_alias(true);
    spine_paint.set_style(skia::paint::Style::Stroke);
    spine_paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &spine_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);
    for x in x_ticks.iter().filter_map(|&v| sx.to_px(v)) {
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &tick_paint);
    }
    for y in y_ticks.iter().filter_map(|&v| sy.to_px(v)) {
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &tick_paint);
    }
}

/// Polyline through the series' points. Points that cannot be placed on the
/// scales (NaN, or non-positive on a log axis) break the line.
pub(crate) fn series_path(series: &Series, sx: &Scale, sy: &Scale) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    let mut pen_down = false;
    for (x, y) in series.points() {
        match (sx.to_px(x), sy.to_px(y)) {
            (Some(px), Some(py)) => {
                if pen_down {
                    path.line_to((px, py));
                } else {
                    path.move_to((px, py));
                    pen_down = true;
                }
            }
            _ => pen_down = false,
        }
    }
    path.detach()
}

fn draw_line_series(canvas: &skia::Canvas, sx: &Scale, sy: &Scale, series: &Series, color: skia::Color) {
    if series.len() < 2 {
        return;
    }
    let path = series_path(series, sx, sy);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

fn tick_text(kind: ScaleKind, value: f64, ticks: &[f64]) -> String {
    match kind {
        ScaleKind::Log10 => grid::format_tick(value, value),
        ScaleKind::Linear => {
            let step = match ticks {
                [a, b, ..] => b - a,
                _ => value.abs(),
            };
            grid::format_tick(value, step)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &PlotRect,
    sx: &Scale,
    sy: &Scale,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let size = opts.tick_size;
    let color = opts.theme.text;
    for &v in x_ticks {
        if let Some(x) = sx.to_px(v) {
            let label = tick_text(x_axis.kind, v, x_ticks);
            shaper.draw_centered(canvas, &label, x, plot.bottom + TICK_LEN + size + 4.0, size, color, true);
        }
    }
    for &v in y_ticks {
        if let Some(y) = sy.to_px(v) {
            let label = tick_text(y_axis.kind, v, y_ticks);
            shaper.draw_right(canvas, &label, plot.left - TICK_LEN - 4.0, y + size * 0.35, size, color, true);
        }
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &PlotRect,
    title: &str,
    x_label: &str,
    y_label: &str,
) {
    let color = opts.theme.text;
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, plot.center_x(), plot.top - opts.title_size * 0.8, opts.title_size, color, false);
    }
    if !x_label.is_empty() {
        let baseline = opts.height as f32 - opts.label_size * 0.9;
        shaper.draw_centered(canvas, x_label, plot.center_x(), baseline, opts.label_size, color, false);
    }
    if !y_label.is_empty() {
        shaper.draw_vertical(canvas, y_label, opts.label_size, plot.center_y(), opts.label_size, color);
    }
}
