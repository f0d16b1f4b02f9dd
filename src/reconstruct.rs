//! Reconstruction of the glare-suppressed image.

use crate::error::{DeglareError, DeglareResult};
use crate::types::EdgeMap;
use image::{GrayImage, Luma};

/// Subtract the smoothed edge estimate from the grayscale image.
///
/// Each smoothed strength is scaled by 255 and truncated to an integer, then
/// subtracted from the corresponding grayscale sample with the result clamped
/// to [0, 255]. Underflow therefore clamps to 0 rather than erroring. An
/// all-zero smoothed map returns the grayscale image unchanged.
pub fn reconstruct(gray: &GrayImage, smoothed: &EdgeMap) -> DeglareResult<GrayImage> {
    if gray.dimensions() != smoothed.dimensions() {
        return Err(DeglareError::DimensionMismatch {
            expected: gray.dimensions(),
            got: smoothed.dimensions(),
        });
    }

    let (w, h) = gray.dimensions();
    let mut out = GrayImage::new(w, h);
    for (x, y, px) in gray.enumerate_pixels() {
        let glare = (smoothed.get_pixel(x, y)[0] * 255.0) as i32;
        let v = (px[0] as i32 - glare).clamp(0, 255) as u8;
        out.put_pixel(x, y, Luma([v]));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_map_is_identity() {
        let gray = GrayImage::from_fn(6, 4, |x, y| Luma([(x * 37 + y * 11) as u8]));
        let smoothed = EdgeMap::new(6, 4);

        let result = reconstruct(&gray, &smoothed).unwrap();
        assert_eq!(result.as_raw(), gray.as_raw());
    }

    #[test]
    fn test_subtraction_clamps_at_zero() {
        let gray = GrayImage::from_pixel(3, 3, Luma([10]));
        let smoothed = EdgeMap::from_pixel(3, 3, Luma([1.0]));

        let result = reconstruct(&gray, &smoothed).unwrap();
        assert!(result.pixels().all(|px| px[0] == 0));
    }

    #[test]
    fn test_partial_subtraction() {
        let gray = GrayImage::from_pixel(2, 2, Luma([200]));
        let smoothed = EdgeMap::from_pixel(2, 2, Luma([0.5]));

        let result = reconstruct(&gray, &smoothed).unwrap();
        // 0.5 * 255 truncates to 127.
        assert!(result.pixels().all(|px| px[0] == 73));
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let gray = GrayImage::new(4, 4);
        let smoothed = EdgeMap::new(5, 4);
        assert!(matches!(
            reconstruct(&gray, &smoothed),
            Err(DeglareError::DimensionMismatch { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_reconstruction_always_in_range(value in any::<u8>(), strength in -0.5f32..2.0) {
            let gray = GrayImage::from_pixel(3, 3, Luma([value]));
            let smoothed = EdgeMap::from_pixel(3, 3, Luma([strength]));

            let result = reconstruct(&gray, &smoothed).unwrap();
            let expected = (value as i32 - (strength * 255.0) as i32).clamp(0, 255) as u8;
            prop_assert!(result.pixels().all(|px| px[0] == expected));
        }
    }
}
