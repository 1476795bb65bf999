// File: crates/perfplot-figures/src/bin/perfplot.rs
// Summary: Shows the "Arc vs Trc performance" chart in a window; returns when the window is closed.

use anyhow::{Context, Result};
use perfplot_core::{Canvas, ChartRenderer, Output, RenderFailure};
use perfplot_figures::{comparison_figure, init_tracing, REFERENCE};
use perfplot_window::WindowViewer;

fn main() -> Result<()> {
    init_tracing();

    let viewer = WindowViewer::new().context("opening figure window")?;
    let mut renderer = ChartRenderer::with_viewer(viewer);
    renderer
        .render(Canvas::default(), comparison_figure(&REFERENCE, Output::Display))
        .map_err(RenderFailure::into_error)
        .context("showing performance figure")?;
    Ok(())
}
