/// Smallest axis-aligned rectangle holding every ink pixel.
///
/// All four coordinates are inclusive: `max_x` is the column of the
/// right-most ink pixel, not one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left-most ink column
    pub min_x: usize,
    /// Right-most ink column
    pub max_x: usize,
    /// Top-most ink row
    pub min_y: usize,
    /// Bottom-most ink row
    pub max_y: usize,
}

impl BoundingBox {
    /// Box covering a single pixel
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow the box to include (x, y)
    pub fn include(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Pixel extent along x
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    /// Pixel extent along y
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}
