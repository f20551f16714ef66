//! Module-grid extraction from an axis-aligned QR raster
//!
//! The extractor runs three single-pass stages, each derived only from the
//! previous one:
//! - [`bounds`]: bounding box of every ink pixel
//! - [`block_size`]: module size from the first dark run of the finder pattern
//! - [`sampler`]: centre-pixel sampling of each module
//!
//! Rotated, skewed or damaged captures are not handled.

pub mod block_size;
pub mod bounds;
pub mod sampler;

use std::num::NonZeroUsize;

use tracing::debug;

use crate::error::ExtractionError;
use crate::models::{BoundingBox, ModuleMatrix, PixelGrid};

pub use block_size::{estimate_block_size, measure_finder_run};
pub use bounds::find_bounding_box;
pub use sampler::sample_modules;

/// Default ink threshold: pixels strictly darker than this are ink
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Modules across a QR finder pattern
pub const FINDER_MODULES: usize = 7;

/// How the block-size run and module samples decide a pixel is filled.
///
/// The bounding box always uses `< threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InkRule {
    /// Only intensity 0 counts as filled
    #[default]
    PureBlack,
    /// Anything strictly darker than the threshold counts as filled
    Threshold,
}

impl InkRule {
    /// Classify one intensity
    #[inline]
    pub fn is_filled(self, value: u8, threshold: u8) -> bool {
        match self {
            InkRule::PureBlack => value == 0,
            InkRule::Threshold => value < threshold,
        }
    }
}

/// Extraction constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Bounding-box ink threshold
    pub threshold: u8,
    /// Width of the finder pattern in modules
    pub finder_modules: usize,
    /// Filled test used for the run length and sampling
    pub ink: InkRule,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            finder_modules: FINDER_MODULES,
            ink: InkRule::PureBlack,
        }
    }
}

/// Geometry recovered from a raster before sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Ink bounding box
    pub bounds: BoundingBox,
    /// Module side length in pixels
    pub block_size: NonZeroUsize,
    /// Whole modules across the box
    pub columns: usize,
    /// Whole modules down the box
    pub rows: usize,
}

/// Recovers the module matrix of a QR code from a grayscale raster
#[derive(Debug, Clone, Default)]
pub struct GridExtractor {
    config: ExtractorConfig,
}

impl GridExtractor {
    /// Create an extractor with the given constants
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Constants in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Compute bounding box and block size without sampling
    pub fn analyze(&self, grid: &PixelGrid) -> Result<GridGeometry, ExtractionError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(ExtractionError::EmptyImage);
        }

        let bounds =
            find_bounding_box(grid, self.config.threshold).ok_or(ExtractionError::NoInk)?;
        debug!(?bounds, "ink bounding box");

        let block_size = estimate_block_size(grid, &bounds, &self.config)?;
        let geometry = GridGeometry {
            bounds,
            block_size,
            columns: bounds.width() / block_size,
            rows: bounds.height() / block_size,
        };
        debug!(
            block_size = geometry.block_size.get(),
            columns = geometry.columns,
            rows = geometry.rows,
            "module geometry"
        );
        Ok(geometry)
    }

    /// Extract the module matrix
    pub fn extract(&self, grid: &PixelGrid) -> Result<ModuleMatrix, ExtractionError> {
        let geometry = self.analyze(grid)?;
        let matrix = sample_modules(
            grid,
            &geometry.bounds,
            geometry.block_size,
            self.config.ink,
            self.config.threshold,
        );
        if !matrix.is_square() {
            debug!(
                columns = matrix.width(),
                rows = matrix.height(),
                "sampled module grid is not square"
            );
        }
        Ok(matrix)
    }
}

/// Extract with default constants
pub fn extract(grid: &PixelGrid) -> Result<ModuleMatrix, ExtractionError> {
    GridExtractor::default().extract(grid)
}
