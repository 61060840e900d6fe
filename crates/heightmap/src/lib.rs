//! Greyscale heightmap synthesis.
//!
//! This crate samples fractal Perlin noise over a pixel grid and stretches
//! the samples into an 8-bit image suitable for use as terrain elevation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use heightmap::prelude::*;
//!
//! let params = GenerationParams::default().with_size(512, 512).with_seed(42);
//! let map = synthesize(&params)?;
//! map.save("terrain.png")?;
//! # Ok::<(), heightmap::HeightmapError>(())
//! ```

pub mod errors;
pub mod export;
pub mod heightmap;
pub mod normalize;
pub mod params;
pub mod terrain;

pub use errors::{HeightmapError, Result};
pub use heightmap::{Heightmap, synthesize, synthesize_with};
pub use params::GenerationParams;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::export::ExportFormat;
    pub use crate::heightmap::{Heightmap, synthesize, synthesize_with};
    pub use crate::params::GenerationParams;
    pub use crate::terrain::{FractalPerlin, HeightSource, NoiseField};
    pub use crate::HeightmapError;
}
