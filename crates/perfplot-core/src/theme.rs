// File: crates/perfplot-core/src/theme.rs
// Summary: Light/Dark theming for figure chrome (background, grid, text, legend box).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub text: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_edge: skia::Color,
    pub legend_shadow: skia::Color,
}

impl Theme {
    /// White figure with black text; the look of the published benchmark charts.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_edge: skia::Color::from_argb(255, 204, 204, 204),
            legend_shadow: skia::Color::from_argb(128, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            text: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(230, 32, 32, 36),
            legend_edge: skia::Color::from_argb(255, 90, 90, 100),
            legend_shadow: skia::Color::from_argb(160, 0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
