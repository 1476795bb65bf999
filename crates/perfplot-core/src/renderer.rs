// File: crates/perfplot-core/src/renderer.rs
// Summary: ChartRenderer: validates a figure, draws it onto a canvas, saves or displays it, returns the canvas.

use std::path::PathBuf;

use tracing::debug;

use crate::canvas::{Canvas, CanvasPolicy, Frame};
use crate::error::{RenderError, RenderFailure, Result};
use crate::figure::{Figure, Output};
use crate::legend::Legend;

/// Shows a rendered frame to a person. `show` blocks until the viewer is dismissed.
pub trait Viewer {
    fn show(&mut self, frame: &Frame) -> anyhow::Result<()>;
}

impl<V: Viewer + ?Sized> Viewer for &mut V {
    fn show(&mut self, frame: &Frame) -> anyhow::Result<()> { (**self).show(frame) }
}

impl<V: Viewer + ?Sized> Viewer for Box<V> {
    fn show(&mut self, frame: &Frame) -> anyhow::Result<()> { (**self).show(frame) }
}

/// Viewer for processes without a display; refuses `Output::Display`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Viewer for Headless {
    fn show(&mut self, frame: &Frame) -> anyhow::Result<()> {
        anyhow::bail!("no interactive viewer attached; cannot show '{}', save it to a file instead", frame.title)
    }
}

/// Result of one render call.
#[derive(Debug)]
pub struct Rendered {
    /// The canvas handed back; blank unless it accumulates.
    pub canvas: Canvas,
    /// Legend as drawn, one entry per series on the canvas at output time.
    pub legend: Legend,
    /// Path written, for `Output::File`.
    pub written: Option<PathBuf>,
}

pub struct ChartRenderer<V = Headless> {
    viewer: V,
}

impl ChartRenderer<Headless> {
    pub fn new() -> Self {
        Self { viewer: Headless }
    }
}

impl Default for ChartRenderer<Headless> {
    fn default() -> Self { Self::new() }
}

impl<V: Viewer> ChartRenderer<V> {
    pub fn with_viewer(viewer: V) -> Self {
        Self { viewer }
    }

    /// Draw `figure` onto `canvas` and send it to the figure's output.
    ///
    /// Validation happens before anything is drawn, so an empty or malformed
    /// figure never touches the output or the canvas. After output the canvas
    /// is cleared unless its policy is [`CanvasPolicy::Accumulate`]. On any
    /// error the canvas comes back inside the [`RenderFailure`], uncleared.
    pub fn render(&mut self, mut canvas: Canvas, figure: Figure) -> Result<Rendered, RenderFailure> {
        if let Err(error) = figure.validate() {
            return Err(RenderFailure { canvas, error });
        }
        match self.draw_and_output(&mut canvas, figure) {
            Ok((legend, written)) => {
                if canvas.policy() == CanvasPolicy::ClearAfterOutput {
                    canvas.clear();
                }
                Ok(Rendered { canvas, legend, written })
            }
            Err(error) => Err(RenderFailure { canvas, error }),
        }
    }

    fn draw_and_output(&mut self, canvas: &mut Canvas, figure: Figure) -> Result<(Legend, Option<PathBuf>)> {
        let Figure { series, title, x_label, y_label, x_scale, y_scale, legend, output } = figure;
        debug!(series = series.len(), title = %title, "rendering figure");

        for s in series {
            canvas.plot(s);
        }
        canvas.set_x_label(x_label);
        canvas.set_y_label(y_label);
        canvas.set_title(title);
        canvas.set_scales(x_scale, y_scale);
        canvas.set_legend_style(legend);
        let legend = canvas.legend();

        let written = match output {
            Output::Display => {
                let frame = canvas.render_to_rgba8()?;
                self.viewer.show(&frame).map_err(RenderError::Display)?;
                None
            }
            Output::File(path) => {
                canvas.save(&path)?;
                Some(path)
            }
        };
        Ok((legend, written))
    }
}

/// Render on a fresh default canvas with no viewer attached.
pub fn render(figure: Figure) -> Result<Rendered> {
    ChartRenderer::new().render(Canvas::default(), figure).map_err(RenderFailure::into_error)
}
