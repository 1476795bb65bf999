// File: crates/perfplot-core/src/series.rs
// Summary: Named, colored line series of (x, y) samples.

use skia_safe as skia;

use crate::color;
use crate::error::{RenderError, Result};

/// One line on a figure. `x_values[i]` pairs with `y_values[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    /// Color identifier; `None` takes the next color of the default cycle.
    pub color: Option<String>,
}

impl Series {
    pub fn new(label: impl Into<String>, x_values: Vec<f64>, y_values: Vec<f64>) -> Self {
        Self { label: label.into(), x_values, y_values, color: None }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_points(label: impl Into<String>, points: &[(f64, f64)]) -> Self {
        let (x_values, y_values) = points.iter().copied().unzip();
        Self::new(label, x_values, y_values)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Number of points; only meaningful once [`Series::validate`] passed.
    pub fn len(&self) -> usize { self.x_values.len().min(self.y_values.len()) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }

    /// Check the x/y length invariant and that the color identifier resolves.
    /// An empty series is valid and draws nothing.
    pub fn validate(&self) -> Result<()> {
        if self.x_values.len() != self.y_values.len() {
            return Err(RenderError::LengthMismatch {
                label: self.label.clone(),
                x_len: self.x_values.len(),
                y_len: self.y_values.len(),
            });
        }
        if let Some(name) = &self.color {
            if color::parse(name).is_none() {
                return Err(RenderError::UnknownColor { label: self.label.clone(), color: name.clone() });
            }
        }
        Ok(())
    }

    /// Stroke color, given this series' position among series without an explicit color.
    pub fn stroke_color(&self, cycle_index: usize) -> skia::Color {
        self.color
            .as_deref()
            .and_then(color::parse)
            .unwrap_or_else(|| color::cycle(cycle_index))
    }
}
