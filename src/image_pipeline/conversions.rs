//! Pipeline conversions module
//!
//! This module contains the orchestration logic that takes a BMP from bytes,
//! through one transform, back to bytes.

mod bmp_transform;


pub use bmp_transform::BmpTransformPipeline;
