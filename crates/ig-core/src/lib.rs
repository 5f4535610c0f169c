/// Configuration, types, and shared structures for inkgrid.
///
/// This crate contains the error taxonomy, pixel/canvas types, ramp
/// presets, and configuration logic used across the inkgrid workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;

pub use config::{ConvertConfig, ConvertRequest, GeometryPolicy};
pub use error::ConvertError;
pub use frame::{AsciiCanvas, GrayFrame};
pub use ramp::RampLut;
