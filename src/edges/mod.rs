//! Edge detector bank.
//!
//! Five independent operators, each a pure `grayscale -> edge map` function
//! with no shared state. The bank runs in pipeline order but the operators may
//! execute in parallel.

mod canny;
mod gradient;
mod laplacian;

use crate::types::EdgeMap;
use image::GrayImage;

pub use canny::{HIGH_THRESHOLD, LOW_THRESHOLD};

/// Default smoothing sigma for the Canny operator.
pub const DEFAULT_CANNY_SIGMA: f32 = 1.0;

/// One of the five classical edge operators applied by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeDetector {
    /// 2x2 diagonal gradient magnitude approximation.
    Roberts,
    /// 3x3 weighted gradient-magnitude operator.
    Sobel,
    /// 3x3 unweighted gradient-magnitude operator.
    Prewitt,
    /// Raw 4-neighbour Laplacian (no pre-blur), absolute response.
    Laplacian,
    /// Multi-stage binary operator with Gaussian pre-smoothing.
    Canny {
        /// Smoothing sigma applied before gradient computation.
        sigma: f32,
    },
}

impl EdgeDetector {
    /// The standard five-operator bank in pipeline order.
    pub fn all(canny_sigma: f32) -> Vec<EdgeDetector> {
        vec![
            EdgeDetector::Roberts,
            EdgeDetector::Sobel,
            EdgeDetector::Prewitt,
            EdgeDetector::Laplacian,
            EdgeDetector::Canny { sigma: canny_sigma },
        ]
    }

    /// Fixed display title for this operator's stage.
    pub fn title(&self) -> &'static str {
        match self {
            EdgeDetector::Roberts => "Roberts Edge Detection",
            EdgeDetector::Sobel => "Sobel Edge Detection",
            EdgeDetector::Prewitt => "Prewitt Edge Detection",
            EdgeDetector::Laplacian => "LOG Edge Detection",
            EdgeDetector::Canny { .. } => "Canny Edge Detection",
        }
    }

    /// Apply the operator to a grayscale buffer.
    ///
    /// The result has the input's dimensions with strengths in [0, 1]; the
    /// Canny variant only produces 0.0 or 1.0.
    pub fn detect(&self, gray: &GrayImage) -> EdgeMap {
        match self {
            EdgeDetector::Roberts => gradient::roberts(gray),
            EdgeDetector::Sobel => gradient::sobel(gray),
            EdgeDetector::Prewitt => gradient::prewitt(gray),
            EdgeDetector::Laplacian => laplacian::laplacian(gray),
            EdgeDetector::Canny { sigma } => canny::canny_edges(gray, *sigma),
        }
    }
}
