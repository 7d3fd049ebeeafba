//! Decoded BMP image types

use crate::image_pipeline::bmp::header::{BmpHeaders, HEADERS_SIZE};
use crate::image_pipeline::bmp::pixel_buffer::PixelBuffer;
use crate::image_pipeline::common::error::{BmpError, Result};

/// A decoded BMP held by exactly one pipeline stage at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpImage {
    /// Both fixed headers as read from the input
    pub headers: BmpHeaders,
    /// Bytes between the 54-byte header block and the pixel data, passed through verbatim
    pub extra_header: Vec<u8>,
    /// Row-padded pixel data
    pub pixels: PixelBuffer,
}

impl BmpImage {
    /// Replaces the pixel buffer with one of different dimensions and rewrites
    /// the header fields that depend on them: width, height (keeping the
    /// source's row order sign), image size, and file size.
    pub fn with_resized_pixels(mut self, pixels: PixelBuffer) -> Result<Self> {
        let overflow = |what: &str| {
            BmpError::EncodeError(format!(
                "{what} does not fit a BMP header for a {}x{} image",
                pixels.width(),
                pixels.height()
            ))
        };

        let width = i32::try_from(pixels.width()).map_err(|_| overflow("width"))?;
        let rows = i32::try_from(pixels.height()).map_err(|_| overflow("height"))?;
        let image_size =
            u32::try_from(pixels.as_bytes().len()).map_err(|_| overflow("image size"))?;
        let file_size = self
            .headers
            .file
            .pixel_data_offset
            .checked_add(image_size)
            .ok_or_else(|| overflow("file size"))?;

        let info = &mut self.headers.info;
        info.width = width;
        info.height = if info.is_top_down() { -rows } else { rows };
        info.image_size = image_size;
        self.headers.file.file_size = file_size;
        self.pixels = pixels;

        Ok(self)
    }

    /// Offset the pixel data must start at for the headers and extra bytes written.
    pub fn expected_pixel_offset(&self) -> usize {
        HEADERS_SIZE + self.extra_header.len()
    }
}
