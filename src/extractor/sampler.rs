use std::num::NonZeroUsize;

use super::InkRule;
use crate::models::{BoundingBox, ModuleMatrix, PixelGrid};

/// Sample one pixel at the centre of every whole block inside `bounds`.
///
/// Blocks step from the top-left corner of the box. A trailing partial
/// block on either axis is dropped, so the matrix has
/// `extent / block_size` columns and rows. No averaging or voting.
pub fn sample_modules(
    grid: &PixelGrid,
    bounds: &BoundingBox,
    block_size: NonZeroUsize,
    ink: InkRule,
    threshold: u8,
) -> ModuleMatrix {
    let step = block_size.get();
    let half = step / 2;
    let columns = bounds.width() / step;
    let rows = bounds.height() / step;

    let mut matrix = ModuleMatrix::new(columns, rows);
    for row in 0..rows {
        let y = bounds.min_y + row * step + half;
        for col in 0..columns {
            let x = bounds.min_x + col * step + half;
            let filled = grid
                .get(x, y)
                .is_some_and(|value| ink.is_filled(value, threshold));
            matrix.set(col, row, filled);
        }
    }
    matrix
}
