// File: crates/perfplot-core/tests/rgba.rs
// Purpose: Validate RGBA frame shape and a few pixels.

use perfplot_core::{Canvas, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_frame() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let mut canvas = Canvas::new(opts);
    canvas.plot(Series::from_points("diag", &[(0.0, 0.0), (4.0, 4.0)]).with_color("red"));
    canvas.set_title("diag");

    let frame = canvas.render_to_rgba8().expect("rgba render");
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.stride, frame.width as usize * 4);
    assert_eq!(frame.title, "diag");

    // Top-left corner is figure background: opaque white in the light theme
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(frame.width, 0), None);
}

#[test]
fn dark_theme_changes_background() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = perfplot_core::theme::find("DARK");
    let canvas = Canvas::new(opts);

    let frame = canvas.render_to_rgba8().expect("rgba render");
    let bg = Theme::dark().background;
    assert_eq!(frame.pixel(1, 1), Some([bg.r(), bg.g(), bg.b(), 255]));
}
