//! First-derivative edge operators: Roberts, Sobel, Prewitt.
//!
//! Each operator convolves the [0, 1]-scaled grayscale buffer with a pair of
//! orthogonal kernels and reports the gradient magnitude. Kernels are
//! normalized so a full-range step cannot exceed 1, keeping the maps directly
//! comparable across operators. Responses are computed where the kernel fits
//! entirely inside the image; border cells stay 0.

use crate::types::{gray_to_f32, EdgeMap};
use image::{GrayImage, Luma};

const SQRT_2: f32 = std::f32::consts::SQRT_2;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const PREWITT_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
const PREWITT_Y: [[f32; 3]; 3] = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

/// 2x2 diagonal-difference gradient magnitude.
pub(crate) fn roberts(gray: &GrayImage) -> EdgeMap {
    let f = gray_to_f32(gray);
    let (w, h) = f.dimensions();
    let mut out = EdgeMap::new(w, h);
    if w < 2 || h < 2 {
        return out;
    }

    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let p00 = f.get_pixel(x, y)[0];
            let p10 = f.get_pixel(x + 1, y)[0];
            let p01 = f.get_pixel(x, y + 1)[0];
            let p11 = f.get_pixel(x + 1, y + 1)[0];
            let gx = p00 - p11;
            let gy = p10 - p01;
            let mag = (gx * gx + gy * gy).sqrt() / SQRT_2;
            out.put_pixel(x, y, Luma([mag]));
        }
    }
    out
}

/// 3x3 weighted gradient magnitude.
pub(crate) fn sobel(gray: &GrayImage) -> EdgeMap {
    gradient_magnitude(gray, &SOBEL_X, &SOBEL_Y, 4.0)
}

/// 3x3 unweighted gradient magnitude.
pub(crate) fn prewitt(gray: &GrayImage) -> EdgeMap {
    gradient_magnitude(gray, &PREWITT_X, &PREWITT_Y, 3.0)
}

fn gradient_magnitude(
    gray: &GrayImage,
    kern_x: &[[f32; 3]; 3],
    kern_y: &[[f32; 3]; 3],
    kernel_norm: f32,
) -> EdgeMap {
    let f = gray_to_f32(gray);
    let (w, h) = f.dimensions();
    let mut out = EdgeMap::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3usize {
                for kx in 0..3usize {
                    let v = f.get_pixel(x + kx as u32 - 1, y + ky as u32 - 1)[0];
                    gx += v * kern_x[ky][kx];
                    gy += v * kern_y[ky][kx];
                }
            }
            let mag = (gx * gx + gy * gy).sqrt() / (kernel_norm * SQRT_2);
            out.put_pixel(x, y, Luma([mag]));
        }
    }
    out
}
