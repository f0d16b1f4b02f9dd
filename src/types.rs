//! Shared buffer types and conversions.
//!
//! Edge maps are single-channel f32 buffers with values in [0, 1], the
//! interchange format imageproc's float filters operate on. Grayscale u8
//! buffers are converted through these helpers at the pipeline seams.

use image::{GrayImage, ImageBuffer, Luma};

/// Single-channel floating-point edge-strength buffer, values in [0, 1].
pub type EdgeMap = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Scale a grayscale u8 buffer into an f32 buffer with samples in [0, 1].
pub fn gray_to_f32(gray: &GrayImage) -> EdgeMap {
    let (w, h) = gray.dimensions();
    let mut out = EdgeMap::new(w, h);
    for (x, y, px) in gray.enumerate_pixels() {
        out.put_pixel(x, y, Luma([px[0] as f32 / 255.0]));
    }
    out
}

/// Quantize an edge map back to u8, clamping samples into [0, 1] first.
pub fn edge_map_to_gray(map: &EdgeMap) -> GrayImage {
    let (w, h) = map.dimensions();
    let mut out = GrayImage::new(w, h);
    for (x, y, px) in map.enumerate_pixels() {
        let v = px[0].clamp(0.0, 1.0);
        out.put_pixel(x, y, Luma([(v * 255.0).round() as u8]));
    }
    out
}
