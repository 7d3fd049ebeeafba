use std::io::Write;
use tracing::debug;
use crate::image_pipeline::bmp::header::encode_headers;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::{BmpError, Result};

pub struct StandardBmpWriter;

impl StandardBmpWriter {
    /// Output-side acceptance gate: the headers must describe a supported format
    /// and agree with the buffer being written.
    fn check_consistency(image: &BmpImage) -> Result<()> {
        let info = &image.headers.info;
        if !info.is_supported() {
            return Err(BmpError::EncodeError(format!(
                "refusing to write bits_per_pixel={}, compression={}, header_size={}",
                info.bits_per_pixel, info.compression, info.header_size
            )));
        }

        let pixels = &image.pixels;
        let (width, rows) = info.dimensions()?;
        if width != pixels.width()
            || rows != pixels.height()
            || info.bytes_per_pixel()? != pixels.bytes_per_pixel()
        {
            return Err(BmpError::EncodeError(format!(
                "header describes {}x{} at {} bpp but buffer is {}x{} at {} bytes per pixel",
                info.width,
                info.height,
                info.bits_per_pixel,
                pixels.width(),
                pixels.height(),
                pixels.bytes_per_pixel()
            )));
        }

        let offset = image.headers.file.pixel_data_offset as usize;
        if offset != image.expected_pixel_offset() {
            return Err(BmpError::EncodeError(format!(
                "pixel data offset {offset} does not match the {} header bytes written before it",
                image.expected_pixel_offset()
            )));
        }

        Ok(())
    }
}

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: BmpImage, output: &mut dyn Write) -> Result<()> {
        Self::check_consistency(&image)?;
        debug!(
            "Encoding BMP image: {}x{}",
            image.headers.info.width, image.headers.info.height
        );

        let mut buffer = encode_headers(&image.headers);
        buffer.reserve(image.extra_header.len() + image.pixels.as_bytes().len());
        buffer.extend_from_slice(&image.extra_header);
        buffer.extend_from_slice(&image.pixels.into_bytes());

        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
