//! Row-padded pixel storage.

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::image_pipeline::bmp::header::{FileHeader, InfoHeader};
use crate::image_pipeline::common::error::{BmpError, Result};

/// Bytes per stored row, rounded up to a multiple of 4.
///
/// Returns `None` when the row size overflows `usize`.
pub fn row_stride(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Raw BMP pixel rows, in stored order, including alignment padding.
///
/// Channel order inside a pixel is B, G, R and then A for 32-bit images.
/// Padding bytes at the end of each row are carried but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer.
    pub fn new(width: usize, height: usize, bytes_per_pixel: usize) -> Result<Self> {
        let (stride, len) = Self::layout(width, height, bytes_per_pixel)?;
        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            stride,
            data: vec![0u8; len],
        })
    }

    /// Wraps already padded row data. `data` must be exactly `stride * height` bytes.
    pub fn from_bytes(
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let (stride, len) = Self::layout(width, height, bytes_per_pixel)?;
        if data.len() != len {
            return Err(BmpError::TruncatedData {
                offset: 0,
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            stride,
            data,
        })
    }

    /// Reads `stride * |height|` bytes starting at the header's pixel data offset.
    pub fn decode<S: Read + Seek>(
        stream: &mut S,
        file_header: &FileHeader,
        info_header: &InfoHeader,
    ) -> Result<Self> {
        let bytes_per_pixel = info_header.bytes_per_pixel()?;
        let (width, height) = info_header.dimensions()?;
        let (stride, len) = Self::layout(width, height, bytes_per_pixel)?;

        let offset = u64::from(file_header.pixel_data_offset);
        let end = stream.seek(SeekFrom::End(0))?;
        let available = end.saturating_sub(offset);
        if available < len as u64 {
            return Err(BmpError::TruncatedData {
                offset,
                expected: len,
                actual: usize::try_from(available).unwrap_or(usize::MAX),
            });
        }
        stream.seek(SeekFrom::Start(offset))?;

        // Sized from the stream, not the header alone
        let mut data = Vec::with_capacity(len);
        stream.take(len as u64).read_to_end(&mut data)?;
        if data.len() < len {
            return Err(BmpError::TruncatedData {
                offset,
                expected: len,
                actual: data.len(),
            });
        }

        debug!(width, height, stride, bytes = len, "Decoded pixel buffer");

        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            stride,
            data,
        })
    }

    fn layout(width: usize, height: usize, bytes_per_pixel: usize) -> Result<(usize, usize)> {
        let too_large = || BmpError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };
        let stride = row_stride(width, bytes_per_pixel).ok_or_else(too_large)?;
        let len = stride.checked_mul(height).ok_or_else(too_large)?;
        Ok((stride, len))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Bytes of pixel data in one row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.width * self.bytes_per_pixel
    }

    /// Byte offset of column `x` within a row.
    pub fn pixel_offset(x: usize, bytes_per_pixel: usize) -> usize {
        x * bytes_per_pixel
    }

    /// Full stored row `y`, padding included. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Mutable stored row `y`, padding included. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// Mutable iterator over every stored row, padding included.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // chunks_exact_mut rejects a zero chunk size
        self.data.chunks_exact_mut(self.stride.max(1))
    }

    /// The `bytes_per_pixel` bytes of the pixel at column `x` of stored row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = Self::pixel_offset(x, self.bytes_per_pixel);
        &self.row(y)[start..start + self.bytes_per_pixel]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
