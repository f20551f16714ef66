use image::GrayImage;

/// 8-bit grayscale raster, row-major, origin top-left.
///
/// 0 is black, 255 is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw grayscale buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid where every pixel has the same intensity
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at (x, y), or `None` outside the grid
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Raw row-major intensities
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl From<GrayImage> for PixelGrid {
    fn from(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_new_checks_length() {
        assert!(PixelGrid::new(3, 2, vec![0; 6]).is_some());
        assert!(PixelGrid::new(3, 2, vec![0; 5]).is_none());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(4, 3, |x, y| (y * 10 + x) as u8);
        assert_eq!(grid.get(2, 1), Some(12));
        assert_eq!(grid.as_bytes()[6], 12);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_from_gray_image() {
        let mut img = GrayImage::from_pixel(5, 4, Luma([255]));
        img.put_pixel(3, 2, Luma([0]));
        let grid = PixelGrid::from(img);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(3, 2), Some(0));
        assert_eq!(grid.get(2, 3), Some(255));
    }
}
