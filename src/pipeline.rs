//! The glare-suppression pipeline.
//!
//! One forward pass: load -> edge detectors (x5) -> max-reduce -> Gaussian
//! suppression -> reconstruction. Each buffer is owned by the step that
//! produced it until handed to the next step; the five detectors are mutually
//! independent and fan out across a rayon pool.

use crate::combine::max_reduce;
use crate::edges::{EdgeDetector, DEFAULT_CANNY_SIGMA};
use crate::error::DeglareResult;
use crate::loader::{load_image, LoadedImage};
use crate::reconstruct::reconstruct;
use crate::render::Renderer;
use crate::suppress::{suppress, DEFAULT_SUPPRESS_SIGMA};
use crate::types::{edge_map_to_gray, EdgeMap};
use image::{DynamicImage, GrayImage, RgbImage};
use rayon::prelude::*;
use std::path::Path;

/// Filename of the composite summary grid.
pub const MONTAGE_FILENAME: &str = "11_summary_grid.png";

/// Tuning knobs for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Smoothing sigma for the Canny operator. Must be positive.
    pub canny_sigma: f32,
    /// Smoothing sigma for the glare-suppression blur. Must be positive.
    pub suppress_sigma: f32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            canny_sigma: DEFAULT_CANNY_SIGMA,
            suppress_sigma: DEFAULT_SUPPRESS_SIGMA,
        }
    }
}

/// Every buffer produced by one pipeline run, in processing order.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The source image in RGB.
    pub rgb: RgbImage,
    /// Grayscale view of the source.
    pub gray: GrayImage,
    /// The five detector outputs with their stage titles, in bank order.
    pub edge_maps: Vec<(&'static str, EdgeMap)>,
    /// Element-wise maximum of the five detector outputs.
    pub combined: EdgeMap,
    /// Gaussian-smoothed combined map.
    pub suppressed: EdgeMap,
    /// Grayscale image minus the scaled suppressed map, clamped to [0, 255].
    pub reconstructed: GrayImage,
}

impl PipelineOutput {
    /// All stages in display order as `(title, image)` pairs.
    pub fn stages(&self) -> Vec<(&'static str, DynamicImage)> {
        let mut stages = vec![
            ("Original Image", DynamicImage::ImageRgb8(self.rgb.clone())),
            ("Grayscale Image", DynamicImage::ImageLuma8(self.gray.clone())),
        ];
        for (title, map) in &self.edge_maps {
            stages.push((*title, DynamicImage::ImageLuma8(edge_map_to_gray(map))));
        }
        stages.push((
            "Combined Edge Detection for Glare Region",
            DynamicImage::ImageLuma8(edge_map_to_gray(&self.combined)),
        ));
        stages.push((
            "Glare-Suppressed Image",
            DynamicImage::ImageLuma8(edge_map_to_gray(&self.suppressed)),
        ));
        stages.push((
            "Final Glare-Suppressed Image",
            DynamicImage::ImageLuma8(self.reconstructed.clone()),
        ));
        stages
    }

    /// Write every stage plus the summary montage through `renderer`.
    pub fn render_all(&self, renderer: &Renderer) -> DeglareResult<()> {
        for (i, (title, image)) in self.stages().into_iter().enumerate() {
            renderer.render(i + 1, title, &image)?;
        }

        let panels = vec![
            DynamicImage::ImageRgb8(self.rgb.clone()),
            DynamicImage::ImageLuma8(self.gray.clone()),
            DynamicImage::ImageLuma8(edge_map_to_gray(&self.combined)),
            DynamicImage::ImageLuma8(edge_map_to_gray(&self.suppressed)),
            DynamicImage::ImageLuma8(self.reconstructed.clone()),
        ];
        renderer.montage(MONTAGE_FILENAME, &panels)?;
        Ok(())
    }
}

/// Run the whole pipeline on one image file.
///
/// Aborts before any processing if the image cannot be loaded; no partial
/// output is produced in that case.
pub fn run(path: impl AsRef<Path>, options: &PipelineOptions) -> DeglareResult<PipelineOutput> {
    let LoadedImage { rgb, gray } = load_image(path.as_ref())?;
    log::info!(
        "loaded {} ({}x{})",
        path.as_ref().display(),
        rgb.width(),
        rgb.height()
    );

    let detectors = EdgeDetector::all(options.canny_sigma);
    let maps: Vec<EdgeMap> = detectors.par_iter().map(|d| d.detect(&gray)).collect();
    log::info!("applied {} edge detectors", maps.len());

    let combined = max_reduce(&maps)?;
    let suppressed = suppress(&combined, options.suppress_sigma);
    log::info!("suppressed glare estimate (sigma = {})", options.suppress_sigma);

    let reconstructed = reconstruct(&gray, &suppressed)?;
    log::info!("reconstruction complete");

    let edge_maps = detectors
        .iter()
        .map(|d| d.title())
        .zip(maps)
        .collect();

    Ok(PipelineOutput {
        rgb,
        gray,
        edge_maps,
        combined,
        suppressed,
        reconstructed,
    })
}
