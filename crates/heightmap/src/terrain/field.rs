//! Raw, unnormalized noise samples over a pixel grid.

use super::HeightSource;

/// Row-major grid of raw height samples, one per pixel.
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl NoiseField {
    /// Samples `source` at `(x / scale, y / scale)` for every pixel.
    ///
    /// The caller guarantees a non-zero scale.
    pub fn sample<S: HeightSource + ?Sized>(source: &S, width: u32, height: u32, scale: f64) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(source.height_at(x as f64 / scale, y as f64 / scale));
            }
        }

        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Minimum and maximum sample, or `None` for an empty field.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }
}
