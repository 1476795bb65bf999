// File: crates/perfplot-core/src/types.rs
// Summary: Shared constants (surface size, margins, stroke widths).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Stroke width of a series polyline, in pixels.
pub const LINE_WIDTH: f32 = 2.0;
/// Length of a tick mark outside the plot area, in pixels.
pub const TICK_LEN: f32 = 5.0;

/// Screen margins around the plot area, in pixels.
/// Leaves room for the title (top), tick labels and axis labels (left/bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 32, 56, 72)
    }
}
