//! Glare suppression by Gaussian smoothing of the combined edge map.

use crate::types::EdgeMap;
use imageproc::filter::gaussian_blur_f32;

/// Default smoothing sigma for the suppression blur.
pub const DEFAULT_SUPPRESS_SIGMA: f32 = 1.0;

/// Smooth an edge map with an isotropic Gaussian kernel.
///
/// imageproc performs the convolution as a separable two-pass filter. Pure and
/// deterministic; `sigma` must be positive.
pub fn suppress(map: &EdgeMap, sigma: f32) -> EdgeMap {
    debug_assert!(sigma > 0.0, "suppression sigma must be positive");
    gaussian_blur_f32(map, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_dimensions_preserved() {
        let map = EdgeMap::new(13, 9);
        assert_eq!(suppress(&map, 1.0).dimensions(), (13, 9));
    }

    #[test]
    fn test_zero_map_stays_zero() {
        let map = EdgeMap::new(8, 8);
        let smoothed = suppress(&map, 1.0);
        assert!(smoothed.pixels().all(|px| px[0] == 0.0));
    }

    #[test]
    fn test_constant_map_is_unchanged() {
        // The kernel is normalized, so a constant field is a fixed point
        // (imageproc replicates samples at the border).
        let map = EdgeMap::from_pixel(8, 8, Luma([0.5]));
        let smoothed = suppress(&map, 1.0);
        for px in smoothed.pixels() {
            assert!((px[0] - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_peak_spreads_to_neighbours() {
        let mut map = EdgeMap::new(9, 9);
        map.put_pixel(4, 4, Luma([1.0]));
        let smoothed = suppress(&map, 1.0);

        assert!(smoothed.get_pixel(4, 4)[0] < 1.0, "peak must flatten");
        assert!(smoothed.get_pixel(5, 4)[0] > 0.0, "mass must spread");
    }
}
