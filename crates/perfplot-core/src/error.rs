// File: crates/perfplot-core/src/error.rs
// Summary: Error type for figure validation, encoding, file output and display.

use thiserror::Error;

use crate::canvas::Canvas;
use crate::format::OutputFormat;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("figure has no series to draw")]
    EmptyFigure,

    #[error("series '{label}': x has {x_len} values but y has {y_len}")]
    LengthMismatch { label: String, x_len: usize, y_len: usize },

    #[error("series '{label}': unknown color '{color}'")]
    UnknownColor { label: String, color: String },

    #[error("unsupported output extension '{0}' (expected png, jpg, jpeg, webp or svg)")]
    UnsupportedFormat(String),

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode figure as {0}")]
    Encode(OutputFormat),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("display failed: {0:#}")]
    Display(anyhow::Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// A failed render together with the canvas it was given, so accumulated
/// series survive the error. The canvas is never cleared on failure.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RenderFailure {
    pub canvas: Canvas,
    pub error: RenderError,
}

impl RenderFailure {
    pub fn into_error(self) -> RenderError { self.error }
}

impl From<RenderFailure> for RenderError {
    fn from(failure: RenderFailure) -> Self { failure.error }
}
