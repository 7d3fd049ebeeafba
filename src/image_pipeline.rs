//! Image processing pipeline module
//!
//! This module provides a structured approach to uncompressed BMP processing,
//! with separate modules for BMP reading/writing, pixel transforms, and
//! pipeline orchestration.

pub mod bmp;
pub mod transforms;
pub mod conversions;
pub mod common;

pub use common::{
    BmpError,
    Result,
};

pub use bmp::{
    BmpHeaders,
    BmpImage,
    BmpReader,
    BmpWriter,
    FileHeader,
    InfoHeader,
    PixelBuffer,
    StandardBmpReader,
    StandardBmpWriter,
};

pub use transforms::{
    CropRegion,
    Transform,
    TransformConfig,
    TransformConfigBuilder,
};

pub use conversions::{
    BmpTransformPipeline,
};
