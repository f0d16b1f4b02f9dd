//! Error types for deglare.
//!
//! Uses thiserror for structured errors. The load boundary distinguishes a
//! missing file from an undecodable one; everything downstream of a successful
//! load is infallible apart from defensive dimension checks and render I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the glare-suppression pipeline.
#[derive(Error, Debug)]
pub enum DeglareError {
    /// The input path does not resolve to a readable file.
    #[error("could not find the image at path {0}")]
    FileNotFound(PathBuf),

    /// The file exists but could not be parsed as an image.
    #[error("could not read the image at {path}: {source}")]
    Decode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// Decoder error reported by the image crate.
        source: image::ImageError,
    },

    /// Buffers that must share dimensions disagree.
    #[error("buffer dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Dimensions of the reference buffer (width, height).
        expected: (u32, u32),
        /// Dimensions of the offending buffer (width, height).
        got: (u32, u32),
    },

    /// Filesystem error while rendering stage output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder error while rendering stage output.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for deglare operations.
pub type DeglareResult<T> = Result<T, DeglareError>;
