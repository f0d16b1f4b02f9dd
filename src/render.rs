//! Stage rendering.
//!
//! Side-effect-only: each stage buffer is written as a PNG named after its
//! index and title, plus one composite montage of the summary panels. None of
//! this participates in the computational contract.

use crate::error::DeglareResult;
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Montage grid shape: 2 columns by 3 rows.
const MONTAGE_COLS: u32 = 2;
const MONTAGE_ROWS: u32 = 3;

/// Writes stage images into an output directory.
#[derive(Debug, Clone)]
pub struct Renderer {
    dir: PathBuf,
}

impl Renderer {
    /// Create a renderer, creating `dir` (and parents) if needed.
    pub fn new(dir: impl AsRef<Path>) -> DeglareResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory stage images are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one stage as `NN_title_slug.png` and return the path.
    pub fn render(&self, index: usize, title: &str, image: &DynamicImage) -> DeglareResult<PathBuf> {
        let path = self.dir.join(format!("{:02}_{}.png", index, slug(title)));
        image.save(&path)?;
        log::debug!("rendered '{}' to {}", title, path.display());
        Ok(path)
    }

    /// Compose the panels into a 2x3 grid and write it as one image.
    ///
    /// Panels fill the grid row by row; cells beyond the last panel stay
    /// black, matching the source layout that leaves its sixth axis blank.
    pub fn montage(&self, filename: &str, panels: &[DynamicImage]) -> DeglareResult<PathBuf> {
        let cell_w = panels.iter().map(|p| p.width()).max().unwrap_or(1);
        let cell_h = panels.iter().map(|p| p.height()).max().unwrap_or(1);

        let mut canvas = RgbaImage::from_pixel(
            cell_w * MONTAGE_COLS,
            cell_h * MONTAGE_ROWS,
            Rgba([0, 0, 0, 255]),
        );

        for (i, panel) in panels
            .iter()
            .enumerate()
            .take((MONTAGE_COLS * MONTAGE_ROWS) as usize)
        {
            let col = i as u32 % MONTAGE_COLS;
            let row = i as u32 / MONTAGE_COLS;
            imageops::overlay(
                &mut canvas,
                &panel.to_rgba8(),
                (col * cell_w) as i64,
                (row * cell_h) as i64,
            );
        }

        let path = self.dir.join(filename);
        canvas.save(&path)?;
        log::debug!("rendered montage to {}", path.display());
        Ok(path)
    }
}

fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_sep = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_sep = false;
        } else if !prev_sep {
            out.push('_');
            prev_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
