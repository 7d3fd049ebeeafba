//! Byte-level codec for the BMP file header and BITMAPINFOHEADER.
//!
//! Both headers are read and written field by field in little-endian order
//! with no padding between fields, never through in-memory struct layout.
//!
//! File header (14 bytes):
//!
//! | offset | size | field             |
//! |--------|------|-------------------|
//! | 0      | 2    | signature `"BM"`  |
//! | 2      | 4    | file size         |
//! | 6      | 2    | reserved 1        |
//! | 8      | 2    | reserved 2        |
//! | 10     | 4    | pixel data offset |
//!
//! Info header (40 bytes) follows immediately at offset 14.

use tracing::debug;

use crate::image_pipeline::common::error::{BmpError, Result};

pub const BMP_SIGNATURE: [u8; 2] = *b"BM";
pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Combined size of both fixed headers, the smallest valid pixel data offset.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Uncompressed RGB (`BI_RGB`).
pub const COMPRESSION_NONE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    /// Opaque, written back unchanged.
    pub reserved1: u16,
    /// Opaque, written back unchanged.
    pub reserved2: u16,
    pub pixel_data_offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive means rows are stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Decoded pair of fixed headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl InfoHeader {
    /// Whether the bit depth and compression are ones the pipeline can process.
    pub fn is_supported(&self) -> bool {
        matches!(self.bits_per_pixel, 24 | 32)
            && self.compression == COMPRESSION_NONE
            && self.header_size as usize >= INFO_HEADER_SIZE
    }

    /// Bytes per pixel for a supported bit depth.
    pub fn bytes_per_pixel(&self) -> Result<usize> {
        match self.bits_per_pixel {
            24 => Ok(3),
            32 => Ok(4),
            other => Err(BmpError::UnsupportedFormat(format!(
                "bits_per_pixel={other}, only 24 and 32 are supported"
            ))),
        }
    }

    /// Logical width and row count. The row count ignores the sign of the height.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        if self.width < 0 {
            return Err(BmpError::InvalidDimensions {
                width: i64::from(self.width),
                height: i64::from(self.height),
            });
        }
        Ok((self.width as usize, self.height.unsigned_abs() as usize))
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parses both fixed headers from the start of `bytes`.
///
/// Only the length and the `"BM"` signature are checked here. Bit depth and
/// compression are left for the pipeline's acceptance gate.
pub fn decode_headers(bytes: &[u8]) -> Result<BmpHeaders> {
    if bytes.len() < HEADERS_SIZE {
        return Err(BmpError::FormatError(format!(
            "need {HEADERS_SIZE} header bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[0..2] != BMP_SIGNATURE {
        return Err(BmpError::FormatError(format!(
            "bad signature {:#04x} {:#04x}, expected \"BM\"",
            bytes[0], bytes[1]
        )));
    }

    let file = FileHeader {
        file_size: le_u32(bytes, 2),
        reserved1: le_u16(bytes, 6),
        reserved2: le_u16(bytes, 8),
        pixel_data_offset: le_u32(bytes, 10),
    };

    let info_bytes = &bytes[FILE_HEADER_SIZE..HEADERS_SIZE];
    let info = InfoHeader {
        header_size: le_u32(info_bytes, 0),
        width: le_i32(info_bytes, 4),
        height: le_i32(info_bytes, 8),
        planes: le_u16(info_bytes, 12),
        bits_per_pixel: le_u16(info_bytes, 14),
        compression: le_u32(info_bytes, 16),
        image_size: le_u32(info_bytes, 20),
        x_pixels_per_meter: le_i32(info_bytes, 24),
        y_pixels_per_meter: le_i32(info_bytes, 28),
        colors_used: le_u32(info_bytes, 32),
        colors_important: le_u32(info_bytes, 36),
    };

    debug!(
        width = info.width,
        height = info.height,
        bits_per_pixel = info.bits_per_pixel,
        compression = info.compression,
        offset = file.pixel_data_offset,
        "Decoded BMP headers"
    );

    Ok(BmpHeaders { file, info })
}

/// Serializes both headers into their exact 54-byte on-disk layout.
pub fn encode_headers(headers: &BmpHeaders) -> Vec<u8> {
    let BmpHeaders { file, info } = headers;
    let mut out = Vec::with_capacity(HEADERS_SIZE);

    out.extend_from_slice(&BMP_SIGNATURE);
    out.extend_from_slice(&file.file_size.to_le_bytes());
    out.extend_from_slice(&file.reserved1.to_le_bytes());
    out.extend_from_slice(&file.reserved2.to_le_bytes());
    out.extend_from_slice(&file.pixel_data_offset.to_le_bytes());

    out.extend_from_slice(&info.header_size.to_le_bytes());
    out.extend_from_slice(&info.width.to_le_bytes());
    out.extend_from_slice(&info.height.to_le_bytes());
    out.extend_from_slice(&info.planes.to_le_bytes());
    out.extend_from_slice(&info.bits_per_pixel.to_le_bytes());
    out.extend_from_slice(&info.compression.to_le_bytes());
    out.extend_from_slice(&info.image_size.to_le_bytes());
    out.extend_from_slice(&info.x_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.y_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.colors_used.to_le_bytes());
    out.extend_from_slice(&info.colors_important.to_le_bytes());

    out
}
