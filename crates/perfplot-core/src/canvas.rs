// File: crates/perfplot-core/src/canvas.rs
// Summary: Explicit drawing-state handle (series, labels, scales) plus raster/SVG encoding and file output.
// Notes:
// - A Canvas replaces ambient "current figure" state. It is moved into a render
//   call and handed back, so whatever accumulates on it is visible to the caller.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{Axis, ScaleKind};
use crate::error::{RenderError, Result};
use crate::format::{OutputFormat, LOSSY_QUALITY};
use crate::legend::{Legend, LegendStyle};
use crate::paint::paint_figure;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::Extents;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and the legend. Off gives
    /// font-independent output for pixel comparisons.
    pub draw_labels: bool,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            title_size: 20.0,
            label_size: 15.0,
            tick_size: 12.0,
            legend_size: 14.0,
        }
    }
}

/// What happens to a canvas after its figure has been saved or shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CanvasPolicy {
    /// Start the next figure from a blank canvas.
    #[default]
    ClearAfterOutput,
    /// Keep everything drawn so far; later figures add to it.
    Accumulate,
}

/// RGBA8 pixels of one rendered figure, row-major, unpremultiplied.
#[derive(Clone, Debug)]
pub struct Frame {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height { return None; }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    options: RenderOptions,
    policy: CanvasPolicy,
    series: Vec<Series>,
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    legend_style: LegendStyle,
}

impl Default for Canvas {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl Canvas {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            policy: CanvasPolicy::ClearAfterOutput,
            series: Vec::new(),
            title: String::new(),
            x_axis: Axis::blank(),
            y_axis: Axis::blank(),
            legend_style: LegendStyle::default(),
        }
    }

    /// Opt into accumulation: output no longer clears the canvas.
    pub fn accumulating(mut self) -> Self {
        self.policy = CanvasPolicy::Accumulate;
        self
    }

    pub fn policy(&self) -> CanvasPolicy { self.policy }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn title(&self) -> &str { &self.title }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    pub fn plot(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_axis.label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_axis.label = label.into();
    }

    pub fn set_scales(&mut self, x: ScaleKind, y: ScaleKind) {
        self.x_axis.kind = x;
        self.y_axis.kind = y;
    }

    pub fn set_legend_style(&mut self, style: LegendStyle) {
        self.legend_style = style;
    }

    /// Drop everything drawn; options and policy stay.
    pub fn clear(&mut self) {
        self.series.clear();
        self.title.clear();
        self.x_axis = Axis::blank();
        self.y_axis = Axis::blank();
        self.legend_style = LegendStyle::default();
    }

    pub fn is_blank(&self) -> bool {
        self.series.is_empty() && self.title.is_empty() && self.x_axis.label.is_empty() && self.y_axis.label.is_empty()
    }

    /// Stroke color per series. Series without an explicit color take the
    /// default cycle in order; explicit colors do not advance it.
    pub fn colors(&self) -> Vec<skia::Color> {
        let mut next = 0usize;
        self.series
            .iter()
            .map(|s| {
                let c = s.stroke_color(next);
                if s.color.is_none() { next += 1; }
                c
            })
            .collect()
    }

    pub fn legend(&self) -> Legend {
        Legend::from_series(&self.series, &self.colors(), self.legend_style)
    }

    /// Axes with ranges fitted to everything plotted so far.
    pub fn autoscaled_axes(&self) -> (Axis, Axis) {
        let e = Extents::from_series(&self.series, self.x_axis.kind, self.y_axis.kind);
        let mut x = self.x_axis.clone();
        let mut y = self.y_axis.clone();
        (x.min, x.max) = (e.x_min, e.x_max);
        (y.min, y.max) = (e.y_min, e.y_max);
        (x, y)
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        let (width, height) = (self.options.width, self.options.height);
        skia::surfaces::raster_n32_premul((width, height)).ok_or(RenderError::Surface { width, height })
    }

    /// Render to an RGBA8 buffer (for viewers and pixel checks).
    pub fn render_to_rgba8(&self) -> Result<Frame> {
        let mut surface = self.raster_surface()?;
        paint_figure(surface.canvas(), self);

        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Surface { width: w, height: h });
        }
        Ok(Frame { title: self.title.clone(), width: w as u32, height: h as u32, stride, pixels })
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        self.encode(OutputFormat::Png)
    }

    pub fn render_to_svg_bytes(&self) -> Result<Vec<u8>> {
        self.encode(OutputFormat::Svg)
    }

    /// Encode the current drawing in `format`.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>> {
        let Some(encoded) = format.encoded_image_format() else {
            let bounds = skia::Rect::from_iwh(self.options.width, self.options.height);
            let svg = skia::svg::Canvas::new(bounds, None);
            paint_figure(&svg, self);
            return Ok(svg.end().as_bytes().to_vec());
        };

        let mut surface = self.raster_surface()?;
        paint_figure(surface.canvas(), self);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = match format {
            OutputFormat::Png => image.encode_to_data(encoded),
            _ => image.encode_to_data_with_quality(encoded, LOSSY_QUALITY),
        }
        .ok_or(RenderError::Encode(format))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current drawing to `path`, format inferred from the extension.
    /// The parent directory must already exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<OutputFormat> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        debug!(path = %path.display(), %format, series = self.series.len(), "encoding figure");
        let bytes = self.encode(format)?;
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote figure");
        Ok(format)
    }
}
