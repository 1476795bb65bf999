// File: crates/perfplot-figures/tests/figures.rs
// Purpose: The recorded runs render to the expected files and legends.

use perfplot_core::{ChartRenderer, Output, RenderOptions};
use perfplot_figures::{
    comparison_figure, render_platform_figures, COMBINED_FILE, COMBINED_RUNS, PLATFORM_RUNS, REFERENCE, UBUNTU_X86_64,
};
use std::path::PathBuf;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn every_run_has_one_value_per_iteration_count() {
    for run in COMBINED_RUNS {
        for s in run.series() {
            s.validate().expect("recorded series are well formed");
            assert_eq!(s.len(), 4);
        }
    }
}

#[test]
fn comparison_figure_matches_published_chart() {
    let fig = comparison_figure(&REFERENCE, Output::Display);
    assert_eq!(fig.title, "Arc vs Trc performance");
    assert_eq!(fig.x_label, "Number of iterations");
    assert_eq!(fig.y_label, "Benchmarked time (ms)");
    let labels: Vec<_> = fig.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Trc", "Arc"]);
    assert_eq!(fig.series[0].color.as_deref(), Some("red"));
    assert_eq!(fig.series[1].color.as_deref(), Some("blue"));
    assert!(fig.legend.shadow && fig.legend.fancy_box);
}

#[test]
fn platform_figures_and_combined_figure_are_written() {
    let dir = out_dir("figures");
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 320;

    let written = render_platform_figures(&mut ChartRenderer::new(), &opts, &dir).expect("render figures");

    assert_eq!(written.len(), PLATFORM_RUNS.len() + 1);
    assert_eq!(written[0], dir.join(UBUNTU_X86_64.file_name()));
    assert_eq!(written.last(), Some(&dir.join(COMBINED_FILE)));
    for path in &written {
        let len = std::fs::metadata(path).expect("figure exists").len();
        assert!(len > 0, "{} is empty", path.display());
        let img = image::open(path).expect("decodes as an image");
        assert_eq!((img.width(), img.height()), (480, 320));
    }
}
