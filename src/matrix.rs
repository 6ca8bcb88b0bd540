//! Rectangular row-major matrix container.
//!
//! A [`Matrix`] can only be constructed non-empty and non-jagged, so an invalid
//! matrix is rejected before any bytes are written for it: the encode path never
//! produces a partial write.

use crate::Error;

/// A non-empty, rectangular matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// Fails if either dimension is zero or if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMatrix { rows, cols });
        }
        let expected = rows.checked_mul(cols).ok_or(Error::ShapeMismatch {
            rows,
            cols,
            len: data.len(),
        })?;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from nested rows.
    ///
    /// Fails if the outer vector or the first row is empty, or if any row has a
    /// different length than the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(Error::EmptyMatrix {
                rows: row_count,
                cols,
            });
        }
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::JaggedMatrix {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Number of rows (always at least 1).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (always at least 1).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The element at `(r, c)`, or `None` if out of range.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.data.get(r * self.cols + c)
        } else {
            None
        }
    }

    /// Row `r` as a slice.
    ///
    /// Panics if `r >= self.rows()`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..][..self.cols]
    }

    /// The full row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix into nested rows.
    pub fn to_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut data = self.data.into_iter();
        (0..self.rows)
            .map(|_| data.by_ref().take(cols).collect())
            .collect()
    }
}
