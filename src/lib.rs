//! # Deglare - Glare Suppression via Combined Edge Detection
//!
//! Deglare loads a still image, converts it to grayscale, applies five
//! classical edge-detection operators (Roberts, Sobel, Prewitt, Laplacian,
//! Canny), combines the edge maps with an element-wise max-reduce, blurs the
//! combination, and subtracts the scaled result from the grayscale image to
//! produce a glare-suppressed output. Every intermediate stage can be rendered
//! to disk, plus one composite summary grid.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deglare::prelude::*;
//!
//! let output = deglare::pipeline::run("input.bmp", &PipelineOptions::default())?;
//! let renderer = Renderer::new("./output")?;
//! output.render_all(&renderer)?;
//! ```
//!
//! ## Architecture
//!
//! A single linear pipeline; data flows strictly left to right:
//!
//! - [`loader`]: reads the source image, producing matching RGB and grayscale
//!   buffers
//! - [`edges`]: the five independent edge operators
//! - [`combine`]: element-wise max-reduce of the edge maps
//! - [`suppress`]: Gaussian smoothing of the combined map
//! - [`reconstruct`]: subtraction of the smoothed estimate from the grayscale
//!   image
//! - [`render`]: side-effect-only stage output
//! - [`pipeline`]: ties the steps together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combine;
pub mod edges;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reconstruct;
pub mod render;
pub mod suppress;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::combine::max_reduce;
    pub use crate::edges::{EdgeDetector, DEFAULT_CANNY_SIGMA};
    pub use crate::error::{DeglareError, DeglareResult};
    pub use crate::loader::{load_image, LoadedImage};
    pub use crate::pipeline::{run, PipelineOptions, PipelineOutput};
    pub use crate::reconstruct::reconstruct;
    pub use crate::render::Renderer;
    pub use crate::suppress::{suppress, DEFAULT_SUPPRESS_SIGMA};
    pub use crate::types::{edge_map_to_gray, gray_to_f32, EdgeMap};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
