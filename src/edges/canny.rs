//! Canny edge operator.
//!
//! Gaussian pre-smoothing at a configurable sigma, then imageproc's Canny
//! implementation (gradient computation, non-maximum suppression, hysteresis
//! thresholding). The binary edge image maps to {0.0, 1.0} so it can join the
//! max-reduce with the other operators.

use crate::types::EdgeMap;
use image::{GrayImage, Luma};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Hysteresis low threshold, in sobel gradient-magnitude units.
pub const LOW_THRESHOLD: f32 = 50.0;
/// Hysteresis high threshold, in sobel gradient-magnitude units.
pub const HIGH_THRESHOLD: f32 = 100.0;

/// Canny edge map as {0, 1} strengths. `sigma` must be positive.
pub(crate) fn canny_edges(gray: &GrayImage, sigma: f32) -> EdgeMap {
    debug_assert!(sigma > 0.0, "canny sigma must be positive");

    let blurred = gaussian_blur_f32(gray, sigma);
    let edges = canny(&blurred, LOW_THRESHOLD, HIGH_THRESHOLD);

    let (w, h) = edges.dimensions();
    let mut out = EdgeMap::new(w, h);
    for (x, y, px) in edges.enumerate_pixels() {
        out.put_pixel(x, y, Luma([if px[0] > 0 { 1.0 } else { 0.0 }]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimensions_match_input() {
        let gray = GrayImage::new(16, 12);
        assert_eq!(canny_edges(&gray, 1.0).dimensions(), (16, 12));
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let gray = GrayImage::from_pixel(16, 16, Luma([200]));
        let map = canny_edges(&gray, 1.0);
        assert!(map.pixels().all(|px| px[0] == 0.0));
    }

    #[test]
    fn test_step_edge_is_detected_and_binary() {
        // Strong vertical step; wide enough to survive both smoothing passes.
        let gray =
            GrayImage::from_fn(32, 32, |x, _| if x < 16 { Luma([0]) } else { Luma([255]) });
        let map = canny_edges(&gray, 1.0);

        let hits = map.pixels().filter(|px| px[0] == 1.0).count();
        assert!(hits > 0, "step edge should produce edge pixels");
        assert!(map.pixels().all(|px| px[0] == 0.0 || px[0] == 1.0));
        // The quiet flanks stay quiet.
        assert_eq!(map.get_pixel(1, 16)[0], 0.0);
        assert_eq!(map.get_pixel(30, 16)[0], 0.0);
    }
}
