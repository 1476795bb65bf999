// File: crates/perfplot-core/src/format.rs
// Summary: Output format inferred from a file extension.

use std::fmt;
use std::path::Path;

use skia_safe as skia;

use crate::error::{RenderError, Result};

/// JPEG/WebP quality used when saving lossy formats.
pub const LOSSY_QUALITY: u32 = 95;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl OutputFormat {
    /// Infer from the extension (case-insensitive). A path without an
    /// extension is written as PNG.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension() {
            None => Ok(Self::Png),
            Some(ext) => Self::from_extension(&ext.to_string_lossy()),
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            "svg" => Ok(Self::Svg),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Skia encoder for raster formats.
    pub(crate) fn encoded_image_format(self) -> Option<skia::EncodedImageFormat> {
        match self {
            Self::Png => Some(skia::EncodedImageFormat::PNG),
            Self::Jpeg => Some(skia::EncodedImageFormat::JPEG),
            Self::Webp => Some(skia::EncodedImageFormat::WEBP),
            Self::Svg => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Webp => "WebP",
            Self::Svg => "SVG",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("ubuntu_x84_64.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a/b.JPEG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("plot.svg")).unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("performance")).unwrap(), OutputFormat::Png);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = OutputFormat::from_path(Path::new("out.xyz")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(ref e) if e == "xyz"));
    }
}
