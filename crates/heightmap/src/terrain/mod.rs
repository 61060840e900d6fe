//! Noise sources and raw field sampling.
//!
//! This module provides the gradient-noise primitive used for heightmaps and
//! the grid sampler that evaluates it once per pixel.

mod field;
mod fractal;

pub use field::NoiseField;
pub use fractal::FractalPerlin;

/// A deterministic scalar function of two coordinates.
pub trait HeightSource {
    fn height_at(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> HeightSource for F {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
