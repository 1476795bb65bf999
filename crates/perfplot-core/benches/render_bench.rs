// File: crates/perfplot-core/benches/render_bench.rs
// Summary: Criterion benchmarks for PNG and SVG encoding of a dense two-series figure.

use perfplot_core::{Canvas, RenderOptions, Series};
use perfplot_core::error::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_canvas(n: usize) -> Canvas {
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 500;
    opts.draw_labels = false;
    let mut canvas = Canvas::new(opts);
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let trc = xs.iter().map(|x| x * 0.00014 + (x * 0.01).sin()).collect();
    let arc = xs.iter().map(|x| x * 0.00136 + (x * 0.01).cos()).collect();
    canvas.plot(Series::new("Trc", xs.clone(), trc).with_color("red"));
    canvas.plot(Series::new("Arc", xs, arc).with_color("blue"));
    canvas
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_figure");
    for &n in &[10_000usize, 50_000usize] {
        let canvas = build_canvas(n);
        group.bench_function(format!("png_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let bytes = canvas.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("svg_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let bytes = canvas.render_to_svg_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
