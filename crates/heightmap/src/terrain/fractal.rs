//! Perlin noise summed over octaves.

use noise::{NoiseFn, Perlin};

use super::HeightSource;
use crate::params::GenerationParams;

/// Fractal Perlin noise with configurable octave falloff.
///
/// Each octave samples Perlin noise at `lacunarity` times the previous
/// frequency and `persistence` times the previous amplitude. The sum is
/// divided by the total amplitude, keeping the result in the primitive's
/// own range.
#[derive(Debug, Clone)]
pub struct FractalPerlin {
    perlin: Perlin,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl FractalPerlin {
    /// Creates a single-octave source for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Creates a source with the shape parameters of `params`.
    pub fn from_params(params: &GenerationParams) -> Self {
        Self::new(params.seed)
            .with_octaves(params.octaves)
            .with_persistence(params.persistence)
            .with_lacunarity(params.lacunarity)
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }
}

impl HeightSource for FractalPerlin {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([x * frequency, y * frequency]) * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_consistency() {
        let source = FractalPerlin::new(42).with_octaves(4);
        let h1 = source.height_at(3.7, -1.2);
        let h2 = source.height_at(3.7, -1.2);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_height_range() {
        let source = FractalPerlin::new(7).with_octaves(6);
        for i in 0..200 {
            let t = i as f64 * 0.137;
            let h = source.height_at(t, t * 0.5);
            assert!((-1.5..=1.5).contains(&h), "height {h} out of range");
        }
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // Gradient noise vanishes on integer lattice points.
        let source = FractalPerlin::new(3).with_octaves(3);
        assert_eq!(source.height_at(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_octaves_is_flat() {
        let source = FractalPerlin::new(1).with_octaves(0);
        assert_eq!(source.height_at(0.3, 0.9), 0.0);
    }
}
