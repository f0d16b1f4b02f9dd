//! Second-derivative edge operator.
//!
//! A raw 4-neighbour Laplacian with no preceding Gaussian smoothing. The
//! pipeline titles this stage "LOG Edge Detection" for continuity with the
//! source material, but no pre-blur is applied. The absolute response is
//! scaled into [0, 1] so the map is comparable to the gradient operators
//! before the max-reduce.

use crate::types::{gray_to_f32, EdgeMap};
use image::{GrayImage, Luma};

/// Absolute 4-neighbour Laplacian response, scaled into [0, 1].
pub(crate) fn laplacian(gray: &GrayImage) -> EdgeMap {
    let f = gray_to_f32(gray);
    let (w, h) = f.dimensions();
    let mut out = EdgeMap::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let c = f.get_pixel(x, y)[0];
            let response = f.get_pixel(x, y - 1)[0]
                + f.get_pixel(x, y + 1)[0]
                + f.get_pixel(x - 1, y)[0]
                + f.get_pixel(x + 1, y)[0]
                - 4.0 * c;
            out.put_pixel(x, y, Luma([response.abs() / 4.0]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimensions_match_input() {
        let gray = GrayImage::new(5, 7);
        assert_eq!(laplacian(&gray).dimensions(), (5, 7));
    }

    #[test]
    fn test_flat_image_has_no_response() {
        let gray = GrayImage::from_pixel(6, 6, Luma([123]));
        let map = laplacian(&gray);
        assert!(map.pixels().all(|px| px[0] == 0.0));
    }

    #[test]
    fn test_bright_pixel_peaks_at_the_pixel() {
        let mut gray = GrayImage::new(4, 4);
        gray.put_pixel(1, 1, Luma([255]));

        let map = laplacian(&gray);
        // -4 * 1.0 at the pixel itself, magnitude 1 after scaling.
        assert!((map.get_pixel(1, 1)[0] - 1.0).abs() < 1e-6);
        // Neighbours see the +1 contribution.
        assert!((map.get_pixel(2, 1)[0] - 0.25).abs() < 1e-6);
        assert_eq!(map.get_pixel(3, 3)[0], 0.0);
    }
}
