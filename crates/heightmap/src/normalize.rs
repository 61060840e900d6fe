//! Min–max stretch of a raw noise field into 8-bit intensities.

use image::{GrayImage, Luma};

use crate::terrain::NoiseField;

/// Intensity used for every pixel when the field has no variation.
pub const FLAT_FIELD_LEVEL: u8 = 128;

/// Rescales `field` so its minimum maps to 0 and its maximum to 255.
///
/// Values are truncated, not rounded. A constant field (or one whose span
/// is not a finite positive number) becomes uniform [`FLAT_FIELD_LEVEL`].
pub fn normalize(field: &NoiseField) -> GrayImage {
    let (width, height) = (field.width(), field.height());

    let Some((min, max)) = field.range() else {
        return GrayImage::new(width, height);
    };
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        tracing::debug!("Flat noise field ({min}..{max}), using uniform level {FLAT_FIELD_LEVEL}");
        return GrayImage::from_pixel(width, height, Luma([FLAT_FIELD_LEVEL]));
    }

    let pixels: Vec<u8> = field
        .values()
        .iter()
        .map(|v| ((v - min) / span * 255.0) as u8)
        .collect();

    debug_assert_eq!(pixels.len(), width as usize * height as usize);
    GrayImage::from_raw(width, height, pixels).expect("noise field holds exactly width * height samples")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_to_full_range() {
        let field = NoiseField::sample(&|x: f64, _y: f64| x * 3.0 - 1.0, 4, 1, 1.0);
        let img = normalize(&field);
        assert_eq!(img.as_raw(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_values_are_truncated() {
        // 0.5 * 255 = 127.5 truncates to 127.
        let field = NoiseField::sample(&|x: f64, _y: f64| x, 3, 1, 1.0);
        let img = normalize(&field);
        assert_eq!(img.as_raw(), &[0, 127, 255]);
    }

    #[test]
    fn test_non_square_field_keeps_layout() {
        let field = NoiseField::sample(&|x: f64, y: f64| x + 3.0 * y, 3, 5, 1.0);
        let img = normalize(&field);
        assert_eq!(img.dimensions(), (3, 5));
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(2, 4).0[0], 255);
        assert!(img.get_pixel(0, 1).0[0] > img.get_pixel(2, 0).0[0]);
    }

    #[test]
    fn test_flat_field_is_mid_grey() {
        let field = NoiseField::sample(&|_x: f64, _y: f64| 0.42, 4, 4, 1.0);
        let img = normalize(&field);
        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| p.0[0] == FLAT_FIELD_LEVEL));
    }

    #[test]
    fn test_non_finite_span_is_flat() {
        let field = NoiseField::sample(&|x: f64, _y: f64| if x > 0.0 { f64::INFINITY } else { 0.0 }, 2, 1, 1.0);
        let img = normalize(&field);
        assert_eq!(img.as_raw(), &[FLAT_FIELD_LEVEL, FLAT_FIELD_LEVEL]);
    }
}
