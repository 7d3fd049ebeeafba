use tracing::debug;

use crate::image_pipeline::bmp::pixel_buffer::PixelBuffer;

/// Mirrors every row left to right in place.
///
/// Whole pixels are swapped, alpha included, and the middle column of an
/// odd-width row stays where it is. Padding bytes are not touched.
pub fn flip_horizontal(buffer: &mut PixelBuffer) {
    let width = buffer.width();
    let bytes_per_pixel = buffer.bytes_per_pixel();
    let row_bytes = buffer.row_bytes();

    for row in buffer.rows_mut() {
        let pixels = &mut row[..row_bytes];
        for x in 0..width / 2 {
            let left = PixelBuffer::pixel_offset(x, bytes_per_pixel);
            let right = PixelBuffer::pixel_offset(width - 1 - x, bytes_per_pixel);
            let (head, tail) = pixels.split_at_mut(right);
            head[left..left + bytes_per_pixel].swap_with_slice(&mut tail[..bytes_per_pixel]);
        }
    }

    debug!(width, height = buffer.height(), "Flipped rows horizontally");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::test_prelude::patterned_buffer;

    #[test]
    fn test_flip_twice_is_identity() {
        for bytes_per_pixel in [3, 4] {
            for width in [1, 2, 5, 6] {
                let original = patterned_buffer(width, 3, bytes_per_pixel);
                let mut buffer = original.clone();

                flip_horizontal(&mut buffer);
                flip_horizontal(&mut buffer);

                assert_eq!(buffer, original);
            }
        }
    }

    #[test]
    fn test_odd_width_keeps_middle_column() {
        let original = patterned_buffer(5, 2, 3);
        let mut buffer = original.clone();
        flip_horizontal(&mut buffer);

        for y in 0..2 {
            assert_eq!(buffer.pixel(2, y), original.pixel(2, y));
            assert_eq!(buffer.pixel(0, y), original.pixel(4, y));
            assert_eq!(buffer.pixel(4, y), original.pixel(0, y));
            assert_eq!(buffer.pixel(1, y), original.pixel(3, y));
            assert_eq!(buffer.pixel(3, y), original.pixel(1, y));
        }
    }

    #[test]
    fn test_pixels_move_whole() {
        let mut buffer = PixelBuffer::from_bytes(2, 1, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        flip_horizontal(&mut buffer);
        assert_eq!(buffer.as_bytes(), &[5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_padding_untouched() {
        let data = vec![1, 2, 3, 4, 5, 6, 0xEE, 0xEF];
        let mut buffer = PixelBuffer::from_bytes(2, 1, 3, data).unwrap();
        flip_horizontal(&mut buffer);
        assert_eq!(buffer.as_bytes(), &[4, 5, 6, 1, 2, 3, 0xEE, 0xEF]);
    }
}
