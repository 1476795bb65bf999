// File: crates/perfplot-figures/src/lib.rs
// Summary: Recorded Trc vs Arc benchmark timings and the figures built from them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use perfplot_core::{Canvas, ChartRenderer, Figure, Output, RenderFailure, RenderOptions, Series, Viewer};
use tracing::info;

/// Iteration counts every run was measured at (x axis).
pub const ITERATIONS: [f64; 4] = [1000.0, 5000.0, 100000.0, 500000.0];

pub const TITLE: &str = "Arc vs Trc performance";
pub const X_LABEL: &str = "Number of iterations";
pub const Y_LABEL: &str = "Benchmarked time (ms)";

pub const TRC_COLOR: &str = "red";
pub const ARC_COLOR: &str = "blue";

/// Hand-recorded timings (ms) for one machine, one value per entry of [`ITERATIONS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRun {
    /// Platform tag; also the output file stem.
    pub name: &'static str,
    pub trc_ms: [f64; 4],
    pub arc_ms: [f64; 4],
}

pub const UBUNTU_X86_64: BenchmarkRun = BenchmarkRun {
    name: "ubuntu_x84_64",
    trc_ms: [2.8, 3.48, 18.451, 71.49],
    arc_ms: [4.02, 9.415, 137.980, 680.18],
};

/// The run behind the interactive "Arc vs Trc performance" chart.
pub const REFERENCE: BenchmarkRun = BenchmarkRun {
    name: "reference",
    trc_ms: [10.945, 12.300, 30.666, 88.387],
    arc_ms: [13.754, 18.104, 126.330, 534.67],
};

/// Runs that get their own `<name>.png`.
pub const PLATFORM_RUNS: &[BenchmarkRun] = &[UBUNTU_X86_64];

/// Runs drawn together on the combined figure.
pub const COMBINED_RUNS: &[BenchmarkRun] = &[UBUNTU_X86_64, REFERENCE];

pub const COMBINED_FILE: &str = "performance.png";

impl BenchmarkRun {
    /// Trc (red) then Arc (blue), labelled as in the published charts.
    pub fn series(&self) -> [Series; 2] {
        [
            Series::new("Trc", ITERATIONS.to_vec(), self.trc_ms.to_vec()).with_color(TRC_COLOR),
            Series::new("Arc", ITERATIONS.to_vec(), self.arc_ms.to_vec()).with_color(ARC_COLOR),
        ]
    }

    /// Same data tagged with the platform, colors left to the default cycle so
    /// runs stay distinguishable on a shared canvas.
    pub fn tagged_series(&self) -> [Series; 2] {
        [
            Series::new(format!("Trc ({})", self.name), ITERATIONS.to_vec(), self.trc_ms.to_vec()),
            Series::new(format!("Arc ({})", self.name), ITERATIONS.to_vec(), self.arc_ms.to_vec()),
        ]
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// The two-line comparison chart for one run.
pub fn comparison_figure(run: &BenchmarkRun, output: Output) -> Figure {
    let [trc, arc] = run.series();
    Figure::new(output)
        .series(trc)
        .series(arc)
        .title(TITLE)
        .x_label(X_LABEL)
        .y_label(Y_LABEL)
}

/// Write one figure per platform run into `dir`, then the combined figure.
///
/// Per-platform figures go through a clearing canvas. The combined figure is
/// built on an accumulating canvas: earlier runs are plotted onto it first and
/// the last run arrives with the saved figure.
pub fn render_platform_figures<V: Viewer>(
    renderer: &mut ChartRenderer<V>,
    options: &RenderOptions,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let mut canvas = Canvas::new(options.clone());
    for run in PLATFORM_RUNS {
        let path = dir.join(run.file_name());
        let figure = comparison_figure(run, Output::File(path.clone()))
            .title(format!("{TITLE} ({})", run.name));
        let rendered = renderer
            .render(canvas, figure)
            .map_err(RenderFailure::into_error)
            .with_context(|| format!("rendering {}", path.display()))?;
        canvas = rendered.canvas;
        written.extend(rendered.written);
    }

    let Some((last, earlier)) = COMBINED_RUNS.split_last() else {
        return Ok(written);
    };
    let mut combined = Canvas::new(options.clone()).accumulating();
    for run in earlier {
        for s in run.tagged_series() {
            combined.plot(s);
        }
    }
    let path = dir.join(COMBINED_FILE);
    let [trc, arc] = last.tagged_series();
    let figure = Figure::saved_to(&path)
        .series(trc)
        .series(arc)
        .title(TITLE)
        .x_label(X_LABEL)
        .y_label(Y_LABEL);
    let rendered = renderer
        .render(combined, figure)
        .map_err(RenderFailure::into_error)
        .with_context(|| format!("rendering {}", path.display()))?;
    info!(entries = rendered.legend.len(), "combined figure legend");
    written.extend(rendered.written);

    Ok(written)
}

/// Install the stderr `tracing` subscriber used by the binaries.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "perfplot=info,perfplot_core=info,perfplot_figures=info,perfplot_window=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
