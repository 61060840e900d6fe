//! Heightmap synthesis and the resulting greyscale image.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, imageops};

use crate::errors::{HeightmapError, Result};
use crate::export::{self, ExportFormat, JPEG_QUALITY};
use crate::normalize::normalize;
use crate::params::GenerationParams;
use crate::terrain::{FractalPerlin, HeightSource, NoiseField};

/// A normalized single-channel elevation image.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    image: GrayImage,
}

/// Synthesizes a heightmap from fractal Perlin noise.
///
/// Identical parameters always produce identical pixels.
pub fn synthesize(params: &GenerationParams) -> Result<Heightmap> {
    params.validate()?;
    let source = FractalPerlin::from_params(params);
    Ok(generate(&source, params))
}

/// Synthesizes a heightmap from an arbitrary height source.
///
/// Only `width`, `height` and `scale` are read from `params`; the shape
/// parameters belong to `source`.
pub fn synthesize_with<S: HeightSource + ?Sized>(source: &S, params: &GenerationParams) -> Result<Heightmap> {
    params.validate()?;
    Ok(generate(source, params))
}

fn generate<S: HeightSource + ?Sized>(source: &S, params: &GenerationParams) -> Heightmap {
    let started = Instant::now();
    let field = NoiseField::sample(source, params.width, params.height, params.scale);
    let image = normalize(&field);

    tracing::debug!(
        "Synthesized {}x{} heightmap (seed {}, {} octaves) in {:.1}ms",
        params.width,
        params.height,
        params.seed,
        params.octaves,
        started.elapsed().as_secs_f64() * 1000.0
    );

    Heightmap { image }
}

impl Heightmap {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw intensities in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Returns a copy scaled down to fit within `max_side` x `max_side`.
    ///
    /// Aspect ratio is preserved and images that already fit are not
    /// enlarged.
    pub fn thumbnail(&self, max_side: u32) -> Heightmap {
        let (width, height) = self.image.dimensions();
        let longest = width.max(height);
        if max_side == 0 || longest <= max_side {
            return self.clone();
        }

        let ratio = max_side as f64 / longest as f64;
        let thumb_w = ((width as f64 * ratio).round() as u32).clamp(1, max_side);
        let thumb_h = ((height as f64 * ratio).round() as u32).clamp(1, max_side);
        Heightmap {
            image: imageops::thumbnail(&self.image, thumb_w, thumb_h),
        }
    }

    /// Writes the image, choosing the encoder from the file extension.
    ///
    /// Returns the path that was written, which gains a `.png` extension
    /// when `path` has none. The image is encoded in memory first, so a
    /// failed encode leaves nothing on disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let (target, format) = export::resolve_target(path.as_ref())?;
        let encoded = self.encode(format)?;
        std::fs::write(&target, encoded)?;

        tracing::debug!("Wrote {:?} heightmap to {}", format, target.display());
        Ok(target)
    }

    /// Encodes the image into `format`.
    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>> {
        if format == ExportFormat::Jpeg {
            // JPEG frame headers store each side in 16 bits.
            let (width, height) = self.image.dimensions();
            if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
                return Err(HeightmapError::invalid(
                    "width",
                    format!("{width}x{height} exceeds the JPEG limit of {} per side", u16::MAX),
                ));
            }
        }

        let mut bytes = Vec::new();
        match format {
            ExportFormat::Png => self.image.write_to(&mut Cursor::new(&mut bytes), format.image_format())?,
            ExportFormat::Jpeg => JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(&self.image)?,
        }
        Ok(bytes)
    }
}

impl From<Heightmap> for GrayImage {
    fn from(heightmap: Heightmap) -> Self {
        heightmap.image
    }
}
