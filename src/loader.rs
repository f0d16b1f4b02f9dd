//! Image loading.
//!
//! Produces the RGB and grayscale views of one source image. The grayscale
//! conversion is the image crate's luminance-weighted combination of channels.

use crate::error::{DeglareError, DeglareResult};
use image::{GrayImage, RgbImage};
use std::path::Path;

/// RGB and grayscale views of one loaded source image.
///
/// Both buffers share the source dimensions; every buffer derived downstream
/// inherits them.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// The source image in RGB.
    pub rgb: RgbImage,
    /// Luminance-weighted grayscale view of the source.
    pub gray: GrayImage,
}

impl LoadedImage {
    /// Source dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }
}

/// Load an image from disk, format auto-detected by the decoder.
///
/// Fails with [`DeglareError::FileNotFound`] when the path does not resolve to
/// a file, and with [`DeglareError::Decode`] when the file cannot be parsed as
/// an image. Either error aborts the pipeline before any stage runs.
pub fn load_image(path: impl AsRef<Path>) -> DeglareResult<LoadedImage> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(DeglareError::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| DeglareError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LoadedImage {
        rgb: img.to_rgb8(),
        gray: img.to_luma8(),
    })
}
