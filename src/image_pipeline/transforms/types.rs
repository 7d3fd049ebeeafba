//! Transform selection and pipeline configuration types

use crate::image_pipeline::common::error::{BmpError, Result};
use crate::image_pipeline::transforms::quantize::quantization_step;

/// Rectangle to keep when cropping, in stored-row coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Left column of the region
    pub x: usize,
    /// First stored row of the region
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CropRegion {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The single transform a pipeline run applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Decode and re-encode without touching the pixels
    #[default]
    Passthrough,
    /// Extract a rectangular region into a new, smaller image
    Crop(CropRegion),
    /// Reduce B, G and R to `2^bits` levels each
    Quantize { bits: u32 },
    /// Mirror every row left to right
    FlipHorizontal,
}

impl Transform {
    /// Checks parameters that can be rejected without looking at an image.
    pub fn validate(&self) -> Result<()> {
        match self {
            Transform::Crop(region) if region.width == 0 || region.height == 0 => {
                Err(BmpError::InvalidParameter(format!(
                    "crop region must not be empty, got {}x{}",
                    region.width, region.height
                )))
            }
            Transform::Quantize { bits } => quantization_step(*bits).map(|_| ()),
            _ => Ok(()),
        }
    }
}

/// Configuration for a BMP transform run
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Transform to apply between decode and encode
    pub transform: Transform,
    /// Whether to reject empty or oversized images before decoding pixels
    pub validate_dimensions: bool,
    /// Largest accepted width or row count when validating dimensions
    pub max_dimension: Option<usize>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            transform: Transform::Passthrough,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl TransformConfig {
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }
}

/// Builder for TransformConfig
#[derive(Default)]
pub struct TransformConfigBuilder {
    transform: Option<Transform>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl TransformConfigBuilder {
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn crop(self, x: usize, y: usize, width: usize, height: usize) -> Self {
        self.transform(Transform::Crop(CropRegion::new(x, y, width, height)))
    }

    pub fn quantize(self, bits: u32) -> Self {
        self.transform(Transform::Quantize { bits })
    }

    pub fn flip_horizontal(self) -> Self {
        self.transform(Transform::FlipHorizontal)
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> TransformConfig {
        let default = TransformConfig::default();
        TransformConfig {
            transform: self.transform.unwrap_or(default.transform),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
