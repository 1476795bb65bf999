// File: crates/perfplot-core/tests/legend.rs
// Purpose: The legend box is painted: one swatch per entry inside the box, and an offset shadow when enabled.

use perfplot_core::geometry::PlotRect;
use perfplot_core::legend::{FANCY_RADIUS, SHADOW_OFFSET};
use perfplot_core::{Canvas, Frame, LegendStyle, RenderOptions, Series, TextShaper};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Lines rise to the right, clear of the upper-left legend.
fn labelled_canvas(style: LegendStyle) -> Canvas {
    let mut canvas = Canvas::new(RenderOptions::default());
    canvas.plot(Series::from_points("Trc", &[(0.0, 0.0), (10.0, 10.0)]).with_color("red"));
    canvas.plot(Series::from_points("Arc", &[(0.0, 0.0), (10.0, 9.0)]).with_color("blue"));
    canvas.set_title("legend");
    canvas.set_legend_style(style);
    canvas
}

fn legend_frame(canvas: &Canvas) -> PlotRect {
    let opts = canvas.options();
    let plot = PlotRect::inside(opts.width, opts.height, &opts.insets);
    canvas.legend().layout(&plot, &TextShaper::new(), opts.legend_size)
}

fn count_in(frame: &Frame, cols: std::ops::Range<i32>, rows: std::ops::Range<i32>, hit: impl Fn([u8; 4]) -> bool) -> usize {
    rows.flat_map(|y| cols.clone().map(move |x| (x, y)))
        .filter_map(|(x, y)| frame.pixel(x as u32, y as u32))
        .filter(|&p| hit(p))
        .count()
}

/// Columns just right of the box edge, rows below the rounded corner:
/// covered only by the shadow.
fn shadow_band(b: &PlotRect) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
    let cols = (b.right + 1.0).ceil() as i32..(b.right + SHADOW_OFFSET).floor() as i32;
    let rows = (b.top + SHADOW_OFFSET + FANCY_RADIUS).ceil() as i32..b.bottom.floor() as i32;
    (cols, rows)
}

fn is_shadow_gray([r, g, b, _]: [u8; 4]) -> bool {
    r < 200 && r == g && g == b
}

#[test]
fn swatches_are_drawn_inside_the_legend_box() {
    let canvas = labelled_canvas(LegendStyle::default());
    let frame = canvas.render_to_rgba8().expect("rgba render");
    let b = legend_frame(&canvas);

    let cols = b.left.ceil() as i32..b.right.floor() as i32;
    let rows = b.top.ceil() as i32..b.bottom.floor() as i32;
    assert!(count_in(&frame, cols.clone(), rows.clone(), |p| p == RED) > 0, "Trc swatch in {b:?}");
    assert!(count_in(&frame, cols, rows, |p| p == BLUE) > 0, "Arc swatch in {b:?}");
}

#[test]
fn shadow_is_drawn_right_of_the_box() {
    let canvas = labelled_canvas(LegendStyle::default());
    let frame = canvas.render_to_rgba8().expect("rgba render");
    let (cols, rows) = shadow_band(&legend_frame(&canvas));
    assert!(!cols.is_empty() && !rows.is_empty());
    assert!(count_in(&frame, cols, rows, is_shadow_gray) > 0);
}

#[test]
fn shadow_can_be_turned_off() {
    let canvas = labelled_canvas(LegendStyle { shadow: false, ..LegendStyle::default() });
    let frame = canvas.render_to_rgba8().expect("rgba render");
    let (cols, rows) = shadow_band(&legend_frame(&canvas));
    assert_eq!(count_in(&frame, cols, rows, is_shadow_gray), 0);
}
