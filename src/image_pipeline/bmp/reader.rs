use crate::image_pipeline::bmp::header::BmpHeaders;
use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::common::error::Result;

/// Two-phase BMP decoding so callers can gate on the headers before any
/// pixel buffer is allocated.
pub trait BmpReader {
    fn read_headers(&self, data: &[u8]) -> Result<BmpHeaders>;
    fn read_image(&self, data: &[u8], headers: BmpHeaders) -> Result<BmpImage>;
}
