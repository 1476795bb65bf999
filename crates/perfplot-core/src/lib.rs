// File: crates/perfplot-core/src/lib.rs
// Summary: Core library entry point; exports the figure model, canvas handle and renderer.

pub mod axis;
pub mod canvas;
pub mod color;
pub mod error;
pub mod figure;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
mod paint;
pub mod renderer;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, ScaleKind};
pub use canvas::{Canvas, CanvasPolicy, Frame, RenderOptions};
pub use error::{RenderError, RenderFailure};
pub use figure::{Figure, Output};
pub use format::OutputFormat;
pub use legend::{Legend, LegendEntry, LegendLocation, LegendStyle};
pub use renderer::{render, ChartRenderer, Headless, Rendered, Viewer};
pub use series::Series;
pub use theme::Theme;
pub use text::TextShaper;
pub use view::Extents;
