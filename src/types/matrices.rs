//! Generic matrix serializer.
//!
//! Matrices are a u32 row count, a u32 column count, then the row-major packed
//! elements, with no per-row tags or separators. The serializer only contributes
//! the shape prefix and the element loop; a [`Matrix`] is rectangular and
//! non-empty by construction, so encoding never starts for an invalid shape.

use crate::{
    codec::{MatrixElement, Read, Write},
    endian::ByteOrder,
    error::Error,
    matrix::Matrix,
    util::at_least,
};
use bytes::{Buf, BufMut};

/// Encoded size of `m` including the two shape prefixes.
#[inline]
pub fn matrix_size<T: MatrixElement>(m: &Matrix<T>) -> usize {
    8 + m.rows() * m.cols() * T::SIZE
}

/// Writes the row count, the column count, then the row-major packed elements.
pub fn write_matrix<T: MatrixElement>(m: &Matrix<T>, order: ByteOrder, buf: &mut impl BufMut) {
    let rows = u32::try_from(m.rows()).expect("matrix rows exceed u32");
    let cols = u32::try_from(m.cols()).expect("matrix cols exceed u32");
    order.put_u32(buf, rows);
    order.put_u32(buf, cols);
    for item in m.as_slice() {
        item.write(order, buf);
    }
}

/// Reads a shape prefix and exactly `rows * cols` packed elements.
///
/// A zero row or column count is rejected, and the element loop reads exactly
/// the declared shape, so the reconstructed matrix always matches the data
/// consumed.
pub fn read_matrix<T: MatrixElement>(buf: &mut impl Buf, order: ByteOrder) -> Result<Matrix<T>, Error> {
    let rows = order.get_u32(buf)? as usize;
    let cols = order.get_u32(buf)? as usize;
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyMatrix { rows, cols });
    }
    let total = rows.checked_mul(cols).ok_or(Error::EndOfBuffer)?;
    at_least(buf, total.checked_mul(T::SIZE).ok_or(Error::EndOfBuffer)?)?;
    let mut data = Vec::with_capacity(total);
    for _ in 0..total {
        data.push(T::read(buf, order)?);
    }
    Matrix::new(rows, cols, data)
}
