//! BMP reader for in-memory byte slices.
//!
//! Decodes the two fixed headers, the opaque bytes that sit between them and
//! the pixel data, and the row-padded pixel buffer itself.

use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::bmp::header::{BmpHeaders, HEADERS_SIZE, decode_headers};
use crate::image_pipeline::bmp::pixel_buffer::PixelBuffer;
use crate::image_pipeline::bmp::reader::BmpReader;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::common::error::{BmpError, Result};

pub struct StandardBmpReader;

impl BmpReader for StandardBmpReader {
    fn read_headers(&self, data: &[u8]) -> Result<BmpHeaders> {
        debug!("Decoding BMP headers, {} bytes", data.len());
        decode_headers(data)
    }

    /// Reads everything after the fixed headers.
    ///
    /// Fails with `FormatError` when the pixel data offset points inside the
    /// header block and with `TruncatedData` when the input ends before either
    /// the pixel data offset or the last pixel row.
    fn read_image(&self, data: &[u8], headers: BmpHeaders) -> Result<BmpImage> {
        let offset = headers.file.pixel_data_offset as usize;
        if offset < HEADERS_SIZE {
            return Err(BmpError::FormatError(format!(
                "pixel data offset {offset} overlaps the {HEADERS_SIZE}-byte header block"
            )));
        }
        if offset > data.len() {
            return Err(BmpError::TruncatedData {
                offset: HEADERS_SIZE as u64,
                expected: offset - HEADERS_SIZE,
                actual: data.len().saturating_sub(HEADERS_SIZE),
            });
        }

        let extra_header = data[HEADERS_SIZE..offset].to_vec();
        if !extra_header.is_empty() {
            debug!("Carrying {} bytes between headers and pixel data", extra_header.len());
        }

        let pixels = PixelBuffer::decode(&mut Cursor::new(data), &headers.file, &headers.info)?;

        Ok(BmpImage {
            headers,
            extra_header,
            pixels,
        })
    }
}
