//! Small dense matrices over GF(2).
//!
//! Each row is packed into a byte with column 0 in the most significant used bit, so a
//! row doubles as a bit pattern that can be ANDed against a word. Multiplying a word by
//! a matrix then reduces to counting the ones in each masked row modulo 2.

use binfield_matrix::matrix_mul;
use collect_slice::CollectSlice;

use crate::bits;
use crate::error::{HammingError, Result};

/// Largest supported number of rows or columns.
pub const MAX_DIM: usize = 8;

/// Matrix over GF(2) with at most 8 rows and 8 columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Packed rows, of which only the first `height` are used.
    rows: [u8; MAX_DIM],
    height: usize,
    width: usize,
}

impl Matrix {
    /// Construct a new `Matrix` from the given packed rows, each `width` bits wide.
    pub fn new(rows: &[u8], width: usize) -> Result<Matrix> {
        if rows.is_empty() || rows.len() > MAX_DIM || width == 0 || width > MAX_DIM {
            return Err(HammingError::Dimension {
                rows: rows.len(),
                cols: width,
            });
        }

        if let Some(row) = rows.iter().position(|&r| bits::check_width(r, width).is_err()) {
            return Err(HammingError::RowWidth { row, width });
        }

        let mut buf = [0; MAX_DIM];
        buf[..rows.len()].copy_from_slice(rows);

        Ok(Matrix {
            rows: buf,
            height: rows.len(),
            width,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize { self.height }

    /// Number of columns.
    pub fn width(&self) -> usize { self.width }

    /// Packed rows.
    pub fn rows(&self) -> &[u8] { &self.rows[..self.height] }

    /// Get the entry at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.height);
        bits::bit(self.rows[row], self.width, col)
    }

    /// Get the given column packed into a word, with row 0 in the most significant used
    /// bit.
    pub fn column(&self, col: usize) -> u8 {
        (0..self.height).fold(0, |accum, row| accum << 1 | self.get(row, col))
    }

    /// Construct a new matrix with the given row appended to the bottom.
    pub fn with_row(&self, row: u8) -> Result<Matrix> {
        let mut rows = self.rows;

        if self.height == MAX_DIM {
            return Err(HammingError::Dimension {
                rows: self.height + 1,
                cols: self.width,
            });
        }

        rows[self.height] = row;
        Matrix::new(&rows[..=self.height], self.width)
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Matrix {
        let mut rows = [0; MAX_DIM];

        (0..self.width)
            .map(|col| self.column(col))
            .collect_slice_checked(&mut rows[..self.width]);

        Matrix {
            rows,
            height: self.width,
            width: self.height,
        }
    }

    /// Compute the column vector M·wᵀ for the given `width`-bit word, packed into a
    /// `height`-bit word.
    pub fn mul_word(&self, word: u8) -> u8 {
        debug_assert!(bits::check_width(word, self.width).is_ok());

        let out: u8 = matrix_mul(word, self.rows());
        out
    }

    /// Check if M·wᵀ is zero for each row `w` of the given matrix, returning the first
    /// row that fails.
    pub fn annihilates(&self, other: &Matrix) -> std::result::Result<(), usize> {
        assert_eq!(self.width, other.width);

        match other.rows().iter().position(|&row| self.mul_word(row) != 0) {
            Some(row) => Err(row),
            None => Ok(()),
        }
    }
}
