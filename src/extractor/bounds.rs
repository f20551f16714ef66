use crate::models::{BoundingBox, PixelGrid};

/// Scan every pixel and return the box around those darker than `threshold`.
///
/// Full O(width * height) pass with no early exit. Returns `None` when the
/// image has no ink at all.
pub fn find_bounding_box(grid: &PixelGrid, threshold: u8) -> Option<BoundingBox> {
    let width = grid.width();
    if width == 0 {
        return None;
    }

    let mut bounds: Option<BoundingBox> = None;
    for (y, row) in grid.as_bytes().chunks_exact(width).enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value >= threshold {
                continue;
            }
            match bounds.as_mut() {
                Some(b) => b.include(x, y),
                None => bounds = Some(BoundingBox::at(x, y)),
            }
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(width: usize, height: usize, x0: usize, y0: usize, n: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| {
            if (x0..x0 + n).contains(&x) && (y0..y0 + n).contains(&y) {
                0
            } else {
                255
            }
        })
    }

    #[test]
    fn test_square_bounds() {
        let grid = square(100, 80, 12, 30, 25);
        assert_eq!(
            find_bounding_box(&grid, 128),
            Some(BoundingBox {
                min_x: 12,
                max_x: 36,
                min_y: 30,
                max_y: 54
            })
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut pixels = vec![255u8; 16];
        pixels[5] = 128;
        pixels[10] = 127;
        let grid = PixelGrid::new(4, 4, pixels).unwrap();
        assert_eq!(find_bounding_box(&grid, 128), Some(BoundingBox::at(2, 2)));
    }

    #[test]
    fn test_no_ink() {
        let grid = PixelGrid::filled(10, 10, 200);
        assert_eq!(find_bounding_box(&grid, 128), None);
        assert_eq!(find_bounding_box(&PixelGrid::filled(0, 5, 0), 128), None);
    }

    proptest! {
        #[test]
        fn prop_dark_square_bounds_match(
            x0 in 0usize..40,
            y0 in 0usize..40,
            n in 1usize..20,
            background in 128u8..=255,
            ink in 0u8..128,
        ) {
            let grid = PixelGrid::from_fn(64, 64, |x, y| {
                if (x0..x0 + n).contains(&x) && (y0..y0 + n).contains(&y) { ink } else { background }
            });
            let bounds = find_bounding_box(&grid, 128).unwrap();
            prop_assert_eq!(bounds, BoundingBox {
                min_x: x0,
                max_x: x0 + n - 1,
                min_y: y0,
                max_y: y0 + n - 1,
            });
        }
    }
}
