//! File formats a heightmap can be written as.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::errors::{HeightmapError, Result};

/// JPEG quality used for lossy export.
pub const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless, the default.
    Png,
    /// Lossy; fine details of the terrain may be smeared.
    Jpeg,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(HeightmapError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Resolves the output path and format for `path`.
///
/// A path without an extension, or ending in a bare dot, is saved as PNG
/// with `.png` appended.
pub fn resolve_target(path: &Path) -> Result<(PathBuf, ExportFormat)> {
    match path.extension() {
        Some(ext) if !ext.is_empty() => {
            let ext = ext
                .to_str()
                .ok_or_else(|| HeightmapError::UnsupportedFormat(path.display().to_string()))?;
            Ok((path.to_path_buf(), ExportFormat::from_extension(ext)?))
        }
        _ => Ok((
            path.with_extension(ExportFormat::Png.extension()),
            ExportFormat::Png,
        )),
    }
}
