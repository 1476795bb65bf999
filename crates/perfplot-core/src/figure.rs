// File: crates/perfplot-core/src/figure.rs
// Summary: Figure description: ordered series, title, axis labels, legend style and output target.

use std::path::PathBuf;

use crate::axis::ScaleKind;
use crate::error::{RenderError, Result};
use crate::legend::LegendStyle;
use crate::series::Series;

/// Where a rendered figure goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Show in an interactive viewer; blocks until the viewer is dismissed.
    Display,
    /// Write to this path; the format follows the extension.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub series: Vec<Series>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub legend: LegendStyle,
    pub output: Output,
}

impl Figure {
    pub fn new(output: Output) -> Self {
        Self {
            series: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            legend: LegendStyle::default(),
            output,
        }
    }

    /// Figure written to `path`.
    pub fn saved_to(path: impl Into<PathBuf>) -> Self {
        Self::new(Output::File(path.into()))
    }

    /// Figure shown interactively.
    pub fn displayed() -> Self {
        Self::new(Output::Display)
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn scales(mut self, x: ScaleKind, y: ScaleKind) -> Self {
        self.x_scale = x;
        self.y_scale = y;
        self
    }

    pub fn legend(mut self, style: LegendStyle) -> Self {
        self.legend = style;
        self
    }

    /// All checks that must pass before anything is drawn or written.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(RenderError::EmptyFigure);
        }
        self.series.iter().try_for_each(Series::validate)
    }
}
