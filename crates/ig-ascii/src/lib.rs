/// ASCII conversion engine for inkgrid.
///
/// Converts image bytes to newline-delimited character grids:
/// geometry resolution, grayscale resampling, ramp quantization.

pub mod convert;
pub mod geometry;
pub mod render;

pub use convert::{convert, convert_with_policy};
pub use geometry::{ResolvedGeometry, resolve};
pub use render::render;
