//! Core codec traits

use crate::{endian::ByteOrder, error::Error, tag::Tag};
use bytes::{Buf, BufMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer with the given byte order.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, order: ByteOrder, buf: &mut impl BufMut);
}

/// Trait for types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer with the given byte order, consuming the
    /// necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough bytes).
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error>;
}

/// Trait for types with a known, fixed encoded width.
pub trait FixedSize {
    /// The encoded width in bytes.
    const SIZE: usize;
}

/// Types legal as array elements.
///
/// An element knows its own scalar tag and the tag of its 1D array form; the
/// array serializer only contributes the element-count prefix and the loop.
pub trait Element: Write + Read + FixedSize {
    /// Tag for a scalar of this type.
    const TAG: Tag;
    /// Tag for a 1D array of this type.
    const ARRAY_TAG: Tag;
}

/// Types legal as matrix elements (the numeric subset of [`Element`]).
pub trait MatrixElement: Element {
    /// Tag for a 2D matrix of this type.
    const MATRIX_TAG: Tag;
}
