//! Pixel transforms module
//!
//! In-memory operations over a decoded `PixelBuffer`. Crop produces a new
//! buffer; quantize and flip mutate the buffer they are given.

mod crop;
mod flip;
mod quantize;
pub mod types;

pub use crop::crop;
pub use flip::flip_horizontal;
pub use quantize::{quantization_step, quantize};
pub use types::{CropRegion, Transform, TransformConfig, TransformConfigBuilder};
