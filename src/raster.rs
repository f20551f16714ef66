//! Rasterizer collaborators: QR generation, image decoding and the
//! temporary PNG used on the text path.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::PixelGrid;

/// Generator settings for the text path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Error-correction level; the version is fitted to the data
    pub ec_level: EcLevel,
    /// Pixels per module
    pub box_size: u32,
    /// Quiet zone, in modules
    pub border: u32,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::L,
            box_size: 10,
            border: 4,
        }
    }
}

/// Encode `text` and paint it black on white.
pub fn generate_qr_image(text: &str, style: &QrStyle) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), style.ec_level)?;
    let modules = code.width() as u32;
    let side = (modules + 2 * style.border) * style.box_size;
    debug!(modules, side, "generated QR code");

    let mut img = GrayImage::from_pixel(side, side, Luma([255]));
    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let index = index as u32;
        let left = (index % modules + style.border) * style.box_size;
        let top = (index / modules + style.border) * style.box_size;
        for y in top..top + style.box_size {
            for x in left..left + style.box_size {
                img.put_pixel(x, y, Luma([0]));
            }
        }
    }
    Ok(img)
}

/// Decode any supported image file to grayscale
pub fn load_pixel_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let img = image::open(path)?;
    Ok(PixelGrid::from(img.to_luma8()))
}

/// A PNG in the system temp directory that is deleted on drop.
#[derive(Debug)]
pub struct TempImage {
    path: PathBuf,
}

impl TempImage {
    /// Write `image` to a fresh, uniquely named temporary file
    pub fn create(image: &GrayImage) -> Result<Self> {
        Self::create_in(&env::temp_dir(), image)
    }

    /// Same as [`TempImage::create`], inside `dir`
    pub fn create_in(dir: &Path, image: &GrayImage) -> Result<Self> {
        let path = dir.join(format!("qr2unicode-{}.png", Uuid::new_v4()));
        // Guard exists before the write so a partial file is still removed
        let temp = Self { path };
        image
            .save_with_format(&temp.path, ImageFormat::Png)
            .map_err(|source| Error::TempFile {
                path: temp.path.clone(),
                source,
            })?;
        debug!(path = %temp.path.display(), "generated QR code saved to temporary file");
        Ok(temp)
    }

    /// Location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "temporary file deleted"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to delete temporary file"),
        }
    }
}
