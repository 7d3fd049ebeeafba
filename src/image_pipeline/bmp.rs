//! BMP reading and writing module
//!
//! This module provides the byte-level header codec, the row-padded pixel
//! buffer, and reader/writer implementations for uncompressed 24-bit and
//! 32-bit BMP files.

pub mod header;
pub mod pixel_buffer;
pub mod types;
mod reader;
mod writer;
mod standard_bmp_reader;
mod standard_bmp_writer;

pub use header::{BmpHeaders, FileHeader, InfoHeader, decode_headers, encode_headers};
pub use pixel_buffer::{PixelBuffer, row_stride};
pub use types::BmpImage;
pub use reader::BmpReader;
pub use writer::BmpWriter;
pub use standard_bmp_reader::StandardBmpReader;
pub use standard_bmp_writer::StandardBmpWriter;
