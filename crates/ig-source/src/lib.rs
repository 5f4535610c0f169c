/// Pixel source modules for inkgrid (decoding, resampling).

pub mod decode;
pub mod resample;

pub use decode::decode;
pub use resample::{Resampler, resample_frame};
