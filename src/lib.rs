//! Self-describing binary serialization for typed message fields.
//!
//! # Overview
//!
//! A binary serialization library for message-passing protocols that carry a
//! heterogeneous sequence of typed fields in a single buffer:
//! - Every value is preceded by a one-byte [`Tag`] identifying its logical type
//! - Strings and arrays carry a 4-byte count prefix; matrices carry a 4-byte row
//!   count followed by a 4-byte column count, then the row-major packed elements
//! - A [`ByteOrder`] is chosen once per encode/decode session and applied to every
//!   multi-byte field, the count prefixes included
//!
//! Decoding a buffer with the same byte order it was encoded with reproduces the
//! original sequence exactly (type, shape, and value), including edge values such
//! as NaN and infinities.
//!
//! # Supported Types
//!
//! - Primitives: `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`
//! - Characters: Latin-1 bytes (CHAR_8) and UTF-16 code units (CHAR_16)
//! - Strings: UTF-8 (STRING_8) and UTF-16 (STRING_16)
//! - Arrays of the numeric types and `bool`
//! - Rectangular row-major [`Matrix`] values of the numeric types
//!
//! # Example
//!
//! ```
//! use tagwire::{decode, encode, ByteOrder, Matrix, Value};
//!
//! let values = vec![
//!     Value::Int(42),
//!     Value::from("hello"),
//!     Value::IntMatrix(Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?),
//! ];
//!
//! let encoded = encode(&values, ByteOrder::Big);
//! let decoded = decode(encoded, ByteOrder::Big)?;
//! assert_eq!(values, decoded);
//! # Ok::<(), tagwire::Error>(())
//! ```

pub mod codec;
pub mod endian;
pub mod error;
pub mod matrix;
pub mod tag;
pub mod types;
pub mod util;
pub mod value;

// Re-export main types and traits
pub use codec::{Element, FixedSize, MatrixElement, Read, Write};
pub use endian::ByteOrder;
pub use error::Error;
pub use matrix::Matrix;
pub use tag::Tag;
pub use value::Value;

use bytes::{Buf, Bytes, BytesMut};

/// Encodes a sequence of values into a single buffer using the given byte order.
///
/// Panics if a `write` implementation does not write the expected number of bytes.
pub fn encode(values: &[Value], order: ByteOrder) -> Bytes {
    let len: usize = values.iter().map(Value::encode_size).sum();
    let mut buf = BytesMut::with_capacity(len);
    for value in values {
        value.write(order, &mut buf);
    }
    assert_eq!(buf.len(), len, "write() did not write expected bytes");
    buf.freeze()
}

/// Decodes a sequence of values from a buffer, consuming it entirely.
///
/// A trailing partial value fails the whole call.
pub fn decode(mut buf: impl Buf, order: ByteOrder) -> Result<Vec<Value>, Error> {
    let mut values = Vec::new();
    while buf.has_remaining() {
        values.push(Value::read(&mut buf, order)?);
    }
    Ok(values)
}

/// Decodes a single value from the front of a buffer, leaving the rest in place.
///
/// Useful when values are embedded in a larger framing.
pub fn decode_one(buf: &mut impl Buf, order: ByteOrder) -> Result<Value, Error> {
    Value::read(buf, order)
}
