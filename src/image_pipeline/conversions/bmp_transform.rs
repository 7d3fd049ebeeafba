use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    bmp::{BmpHeaders, BmpImage, BmpReader, BmpWriter, InfoHeader, StandardBmpReader, StandardBmpWriter},
    common::error::{BmpError, Result},
    transforms::{Transform, TransformConfig, crop, flip_horizontal, quantize},
};

pub struct BmpTransformPipeline<R: BmpReader, W: BmpWriter> {
    reader: R,
    writer: W,
    config: TransformConfig,
}

impl BmpTransformPipeline<StandardBmpReader, StandardBmpWriter> {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            reader: StandardBmpReader,
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: BmpReader, W: BmpWriter> BmpTransformPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: TransformConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Acceptance gate: 24 or 32 bits per pixel, no compression, and an info
    /// header at least as large as BITMAPINFOHEADER.
    fn validate_format(&self, info: &InfoHeader) -> Result<()> {
        if info.is_supported() {
            return Ok(());
        }
        Err(BmpError::UnsupportedFormat(format!(
            "bits_per_pixel={}, compression={}, header_size={}; only 24/32-bit uncompressed images are supported",
            info.bits_per_pixel, info.compression, info.header_size
        )))
    }

    fn validate_dimensions(&self, info: &InfoHeader) -> Result<()> {
        let (width, height) = info.dimensions()?;
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let invalid = || BmpError::InvalidDimensions {
            width: i64::from(info.width),
            height: i64::from(info.height),
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(invalid());
            }
        }

        Ok(())
    }

    /// Runs the configured transform and fixes up the header fields it invalidates.
    fn apply_transform(&self, mut image: BmpImage) -> Result<BmpImage> {
        match self.config.transform {
            Transform::Passthrough => Ok(image),
            Transform::Crop(region) => {
                let cropped = crop(&image.pixels, region)?;
                image.with_resized_pixels(cropped)
            }
            Transform::Quantize { bits } => {
                quantize(&mut image.pixels, bits)?;
                Ok(image)
            }
            Transform::FlipHorizontal => {
                flip_horizontal(&mut image.pixels);
                Ok(image)
            }
        }
    }

    /// Decodes, transforms and re-encodes `input_data`, returning the new file bytes.
    ///
    /// Every check runs before encoding starts, so an error never comes with
    /// partial output.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len(), transform = ?self.config.transform))]
    pub fn transform_bytes(&self, input_data: &[u8]) -> Result<Vec<u8>> {
        info!("Starting BMP transform");

        self.config.transform.validate()?;

        let headers: BmpHeaders = {
            let _span = tracing::info_span!("read_headers").entered();
            self.reader.read_headers(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_format",
                bits_per_pixel = headers.info.bits_per_pixel,
                compression = headers.info.compression
            ).entered();
            self.validate_format(&headers.info)?;
        }

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = headers.info.width,
                height = headers.info.height
            ).entered();
            self.validate_dimensions(&headers.info)?;
        }

        let image = {
            let _span = tracing::info_span!("decode_pixels").entered();
            self.reader.read_image(input_data, headers)?
        };

        let image = {
            let _span = tracing::info_span!("apply_transform").entered();
            self.apply_transform(image)?
        };

        let (width, height) = (image.headers.info.width, image.headers.info.height);
        let mut encoded =
            Vec::with_capacity(image.expected_pixel_offset() + image.pixels.as_bytes().len());
        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(image, &mut encoded)?;
        }

        info!(width, height, output_size = encoded.len(), "Transform complete");
        Ok(encoded)
    }

    /// Like [`Self::transform_bytes`], writing to `output` only once the whole
    /// file has been encoded.
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let encoded = self.transform_bytes(input_data)?;
        output.write_all(&encoded)?;
        Ok(())
    }

    /// Transforms the BMP at `input_path` into `output_path`.
    ///
    /// The output file is only created after the transform has succeeded.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Transforming file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                BmpError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let encoded = self.transform_bytes(&input_data)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                BmpError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TransformConfig) {
        self.config = config;
    }
}
