/// Boolean QR module grid, bit-packed row-major.
///
/// `true` means a filled (dark) module. Rows and columns come from stepping
/// across the bounding box, so the matrix is not required to be square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create an all-empty matrix with `width` columns and `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let mut matrix = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                matrix.set(x, y, filled);
            }
        }
        Some(matrix)
    }

    /// Number of module columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of module rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the row and column counts match
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Get the module at (x, y); out-of-range reads are empty
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set the module at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if filled {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.height).map(move |y| (0..self.width).map(|x| self.get(x, y)).collect())
    }

    /// Copy the matrix out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().collect()
    }

    /// Count filled modules
    pub fn filled_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl Default for ModuleMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_matrix() {
        let mut matrix = ModuleMatrix::new(21, 21);
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.height(), 21);
        assert!(matrix.is_square());

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(4, 3));
        assert_eq!(matrix.filled_count(), 1);

        matrix.set(3, 4, false);
        assert_eq!(matrix.filled_count(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = ModuleMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
        assert_eq!(matrix.filled_count(), 0);
    }

    #[test]
    fn test_from_rows_keeps_layout() {
        let rows = vec![vec![true, false, false], vec![false, true, true]];
        let matrix = ModuleMatrix::from_rows(&rows).unwrap();
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 2);
        assert!(!matrix.is_square());
        assert_eq!(matrix.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(ModuleMatrix::from_rows(&rows).is_none());
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = ModuleMatrix::from_rows(&[]).unwrap();
        assert_eq!((matrix.width(), matrix.height()), (0, 0));
        assert_eq!(matrix.rows().count(), 0);
    }
}
