//! Generation parameters for heightmap synthesis.

use serde::{Deserialize, Serialize};

use crate::errors::{HeightmapError, Result};

/// Largest accepted width or height in pixels.
pub const MAX_SIDE: u32 = 16_384;

/// Shape and size of a single heightmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixels per noise lattice unit. Larger values give broader features.
    pub scale: f64,
    /// Number of summed noise layers.
    pub octaves: u32,
    /// Amplitude multiplier applied per octave.
    pub persistence: f64,
    /// Frequency multiplier applied per octave.
    pub lacunarity: f64,
    /// Selects the noise permutation.
    pub seed: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            scale: 100.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
        }
    }
}

impl GenerationParams {
    /// Checks the invariants synthesis relies on.
    ///
    /// `scale` is used as a divisor, so it must be a finite positive number.
    /// Sides above [`MAX_SIDE`] are rejected before anything is allocated.
    pub fn validate(&self) -> Result<()> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if side == 0 {
                return Err(HeightmapError::invalid(name, "must be positive"));
            }
            if side > MAX_SIDE {
                return Err(HeightmapError::invalid(
                    name,
                    format!("must be at most {MAX_SIDE}, got {side}"),
                ));
            }
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(HeightmapError::invalid(
                "scale",
                format!("must be a finite positive number, got {}", self.scale),
            ));
        }
        if self.octaves == 0 {
            return Err(HeightmapError::invalid("octaves", "must be at least 1"));
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(HeightmapError::invalid(
                "persistence",
                format!("must be in (0, 1], got {}", self.persistence),
            ));
        }
        if !self.lacunarity.is_finite() || self.lacunarity < 1.0 {
            return Err(HeightmapError::invalid(
                "lacunarity",
                format!("must be a finite number >= 1, got {}", self.lacunarity),
            ));
        }
        Ok(())
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of pixels the synthesizer will evaluate.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_name(err: HeightmapError) -> &'static str {
        match err {
            HeightmapError::InvalidParameter { name, .. } => name,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let params = GenerationParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.pixel_count(), 256 * 256);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = GenerationParams::default().with_size(0, 10).validate();
        assert_eq!(field_name(err.unwrap_err()), "width");

        let err = GenerationParams::default().with_size(10, 0).validate();
        assert_eq!(field_name(err.unwrap_err()), "height");
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let err = GenerationParams::default().with_size(u32::MAX, 64).validate();
        assert_eq!(field_name(err.unwrap_err()), "width");

        let err = GenerationParams::default().with_size(64, MAX_SIDE + 1).validate();
        assert_eq!(field_name(err.unwrap_err()), "height");

        assert!(GenerationParams::default().with_size(MAX_SIDE, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GenerationParams::default().with_scale(scale).validate();
            assert_eq!(field_name(err.unwrap_err()), "scale");
        }
    }

    #[test]
    fn test_rejects_zero_octaves() {
        let err = GenerationParams::default().with_octaves(0).validate();
        assert_eq!(field_name(err.unwrap_err()), "octaves");
    }

    #[test]
    fn test_rejects_shape_parameters_out_of_range() {
        let mut params = GenerationParams::default();
        params.persistence = 0.0;
        assert_eq!(field_name(params.validate().unwrap_err()), "persistence");
        params.persistence = 1.5;
        assert_eq!(field_name(params.validate().unwrap_err()), "persistence");

        let mut params = GenerationParams::default();
        params.lacunarity = 0.5;
        assert_eq!(field_name(params.validate().unwrap_err()), "lacunarity");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: GenerationParams = serde_json::from_str(r#"{"seed": 7, "scale": 42.0}"#).unwrap();
        assert_eq!(params.seed, 7);
        assert_eq!(params.scale, 42.0);
        assert_eq!(params.width, 256);
        assert_eq!(params.octaves, 4);
    }
}
