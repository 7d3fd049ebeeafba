use tracing::debug;

use crate::image_pipeline::bmp::pixel_buffer::PixelBuffer;
use crate::image_pipeline::common::error::{BmpError, Result};
use crate::image_pipeline::transforms::types::CropRegion;

/// Copies the rectangle `region` out of `source` into a new buffer.
///
/// `region.y` counts stored rows, so for a bottom-up image row 0 is the
/// bottom of the picture. The region must lie entirely inside the source;
/// nothing is clamped. Destination padding bytes stay zero.
pub fn crop(source: &PixelBuffer, region: CropRegion) -> Result<PixelBuffer> {
    let CropRegion {
        x,
        y,
        width,
        height,
    } = region;

    let out_of_bounds = x.checked_add(width).is_none_or(|right| right > source.width())
        || y.checked_add(height).is_none_or(|bottom| bottom > source.height());
    if out_of_bounds {
        return Err(BmpError::BoundsError {
            x,
            y,
            width,
            height,
            image_width: source.width(),
            image_height: source.height(),
        });
    }

    let bytes_per_pixel = source.bytes_per_pixel();
    let mut cropped = PixelBuffer::new(width, height, bytes_per_pixel)?;
    let start = PixelBuffer::pixel_offset(x, bytes_per_pixel);
    let row_bytes = cropped.row_bytes();

    for (j, dest_row) in cropped.rows_mut().enumerate().take(height) {
        let src_row = source.row(y + j);
        dest_row[..row_bytes].copy_from_slice(&src_row[start..start + row_bytes]);
    }

    debug!(
        x, y, width, height,
        stride = cropped.stride(),
        "Cropped {}x{} buffer",
        source.width(),
        source.height()
    );

    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::test_prelude::patterned_buffer;

    #[test]
    fn test_crop_copies_the_region() {
        let source = patterned_buffer(7, 5, 3);
        let region = CropRegion::new(2, 1, 3, 4);

        let cropped = crop(&source, region).unwrap();

        assert_eq!(cropped.width(), 3);
        assert_eq!(cropped.height(), 4);
        for j in 0..4 {
            for i in 0..3 {
                assert_eq!(cropped.pixel(i, j), source.pixel(2 + i, 1 + j));
            }
        }
    }

    #[test]
    fn test_crop_recomputes_stride_and_zeroes_padding() {
        let source = patterned_buffer(8, 2, 3);
        let cropped = crop(&source, CropRegion::new(1, 0, 3, 2)).unwrap();

        assert_eq!(source.stride(), 24);
        assert_eq!(cropped.stride(), 12);
        assert_eq!(cropped.as_bytes().len(), 24);
        for y in 0..2 {
            assert_eq!(&cropped.row(y)[9..], &[0, 0, 0]);
        }
    }

    #[test]
    fn test_crop_keeps_alpha_channel() {
        let source = patterned_buffer(4, 4, 4);
        let cropped = crop(&source, CropRegion::new(3, 3, 1, 1)).unwrap();

        assert_eq!(cropped.stride(), 4);
        assert_eq!(cropped.pixel(0, 0), source.pixel(3, 3));
    }

    #[test]
    fn test_full_image_crop_is_identity() {
        let source = patterned_buffer(5, 3, 4);
        let cropped = crop(&source, CropRegion::new(0, 0, 5, 3)).unwrap();

        assert_eq!(cropped, source);
    }

    #[test]
    fn test_crop_past_right_edge_fails() {
        let source = PixelBuffer::new(200, 200, 3).unwrap();
        let result = crop(&source, CropRegion::new(150, 0, 100, 10));

        assert!(matches!(
            result,
            Err(BmpError::BoundsError {
                x: 150,
                width: 100,
                image_width: 200,
                ..
            })
        ));
    }

    #[test]
    fn test_crop_past_bottom_edge_fails() {
        let source = PixelBuffer::new(10, 10, 3).unwrap();
        let result = crop(&source, CropRegion::new(0, 5, 1, 6));

        assert!(matches!(result, Err(BmpError::BoundsError { y: 5, height: 6, .. })));
    }

    #[test]
    fn test_crop_overflowing_coordinates_fail() {
        let source = PixelBuffer::new(10, 10, 3).unwrap();
        let result = crop(&source, CropRegion::new(usize::MAX, 0, 2, 2));

        assert!(matches!(result, Err(BmpError::BoundsError { .. })));
    }
}
