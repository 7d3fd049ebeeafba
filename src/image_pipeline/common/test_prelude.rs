//! Synthetic BMP fixtures for unit tests.

use crate::image_pipeline::bmp::header::{
    BmpHeaders, FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader, encode_headers,
};
use crate::image_pipeline::bmp::pixel_buffer::{PixelBuffer, row_stride};

/// Builds a bottom-up, uncompressed BMP whose pixel at stored column `x`, row `y`
/// has the channel bytes returned by `pixel` (only the first `bits / 8` are used).
/// Padding bytes are filled with `0xEE` so tests can tell them apart.
pub fn synthetic_bmp(
    width: usize,
    height: usize,
    bits_per_pixel: u16,
    pixel: impl Fn(usize, usize) -> [u8; 4],
) -> Vec<u8> {
    let bpp = usize::from(bits_per_pixel / 8);
    let stride = row_stride(width, bpp).unwrap();
    let image_size = stride * height;

    let headers = BmpHeaders {
        file: FileHeader {
            file_size: (HEADERS_SIZE + image_size) as u32,
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: HEADERS_SIZE as u32,
        },
        info: InfoHeader {
            header_size: INFO_HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel,
            compression: 0,
            image_size: image_size as u32,
            x_pixels_per_meter: 2835,
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        },
    };

    let mut out = encode_headers(&headers);
    for y in 0..height {
        for x in 0..width {
            out.extend_from_slice(&pixel(x, y)[..bpp]);
        }
        out.extend(std::iter::repeat_n(0xEEu8, stride - width * bpp));
    }
    out
}

/// Buffer where every channel byte encodes its position, padding left at zero.
pub fn patterned_buffer(width: usize, height: usize, bytes_per_pixel: usize) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height, bytes_per_pixel).unwrap();
    let row_bytes = buffer.row_bytes();
    for (y, row) in buffer.rows_mut().enumerate() {
        for (i, byte) in row[..row_bytes].iter_mut().enumerate() {
            *byte = (y * 31 + i * 7 + 1) as u8;
        }
    }
    buffer
}
