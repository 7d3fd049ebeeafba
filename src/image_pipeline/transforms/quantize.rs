use tracing::debug;

use crate::image_pipeline::bmp::pixel_buffer::PixelBuffer;
use crate::image_pipeline::common::error::{BmpError, Result};

/// Highest channel value of an 8-bit sample.
const MAX_CHANNEL_VALUE: u32 = 255;

/// Number of colour channels touched per pixel (B, G, R). Alpha is left alone.
const COLOR_CHANNELS: usize = 3;

/// Bucket width for `bits` of colour resolution: `255 / (2^bits - 1)`,
/// truncated. Fails for `bits` outside `1..=8`.
pub fn quantization_step(bits: u32) -> Result<u8> {
    if !(1..=8).contains(&bits) {
        return Err(BmpError::InvalidParameter(format!(
            "quantization bits must be in 1..=8, got {bits}"
        )));
    }
    let levels = 1u32 << bits;
    Ok((MAX_CHANNEL_VALUE / (levels - 1)) as u8)
}

/// Reduces the B, G and R channels of every pixel to `2^bits` levels in place.
///
/// Each value maps to `floor(value / step) * step`, the low edge of its
/// bucket. When `step` does not divide 255 the top bucket is shorter than the
/// rest. `bits == 8` leaves the buffer unchanged.
pub fn quantize(buffer: &mut PixelBuffer, bits: u32) -> Result<()> {
    let step = quantization_step(bits)?;
    if step == 1 {
        return Ok(());
    }

    let bytes_per_pixel = buffer.bytes_per_pixel();
    let row_bytes = buffer.row_bytes();
    for row in buffer.rows_mut() {
        for pixel in row[..row_bytes].chunks_exact_mut(bytes_per_pixel) {
            for value in &mut pixel[..COLOR_CHANNELS] {
                *value = (*value / step) * step;
            }
        }
    }

    debug!(bits, step, "Quantized colour channels");
    Ok(())
}
