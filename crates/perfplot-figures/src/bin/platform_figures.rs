// File: crates/perfplot-figures/src/bin/platform_figures.rs
// Summary: Writes one PNG per benchmarked platform plus the combined performance.png into the working directory.

use anyhow::Result;
use perfplot_core::{ChartRenderer, RenderOptions};
use perfplot_figures::{init_tracing, render_platform_figures};
use std::path::Path;

fn main() -> Result<()> {
    init_tracing();

    let written = render_platform_figures(&mut ChartRenderer::new(), &RenderOptions::default(), Path::new("."))?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
