use std::num::NonZeroUsize;

use super::ExtractorConfig;
use crate::error::ExtractionError;
use crate::models::{BoundingBox, PixelGrid};

/// Length of the first dark run down the left edge of the bounding box.
///
/// Walks column `min_x` from `min_y`, skipping pixels lighter than the
/// threshold, then counts consecutive filled pixels (per the configured
/// [`InkRule`](super::InkRule)) until the run breaks or leaves the box.
pub fn measure_finder_run(
    grid: &PixelGrid,
    bounds: &BoundingBox,
    config: &ExtractorConfig,
) -> usize {
    let x = bounds.min_x;
    let pixel = |y: usize| grid.get(x, y).unwrap_or(u8::MAX);

    let mut y = bounds.min_y;
    while y < bounds.max_y && pixel(y) > config.threshold {
        y += 1;
    }

    let mut run = 0;
    while y <= bounds.max_y && config.ink.is_filled(pixel(y), config.threshold) {
        run += 1;
        y += 1;
    }
    run
}

/// Module size in pixels: the finder run divided by the finder width.
///
/// Fails with [`ExtractionError::ZeroBlockSize`] if the run is shorter than
/// one module per finder column.
pub fn estimate_block_size(
    grid: &PixelGrid,
    bounds: &BoundingBox,
    config: &ExtractorConfig,
) -> Result<NonZeroUsize, ExtractionError> {
    let run = measure_finder_run(grid, bounds, config);
    run.checked_div(config.finder_modules)
        .and_then(NonZeroUsize::new)
        .ok_or(ExtractionError::ZeroBlockSize {
            run,
            modules: config.finder_modules,
        })
}
