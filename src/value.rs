//! Runtime value dispatch.
//!
//! [`Value`] pairs a payload with its logical type: the variant selects the
//! serializer in the encode direction, and [`Tag::from_u8`] selects it in the
//! decode direction. `From` conversions cover the unambiguous Rust-type
//! mappings; CHAR_8, CHAR_16, and STRING_16 share a Rust type with another
//! variant and get explicit constructors instead.

use crate::{
    codec::{FixedSize, Read, Write},
    endian::ByteOrder,
    error::Error,
    matrix::Matrix,
    tag::Tag,
    types::{arrays, matrices, strings},
};
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// A single typed value, as carried on the wire.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    /// A Latin-1 code unit.
    Char8(u8),
    /// A raw UTF-16 code unit. Unpaired surrogates round-trip byte-exactly.
    Char16(u16),
    /// A UTF-8 string.
    String8(String),
    /// A UTF-16 string.
    String16(String),
    ByteArray(Vec<i8>),
    ShortArray(Vec<i16>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    BoolArray(Vec<bool>),
    ByteMatrix(Matrix<i8>),
    ShortMatrix(Matrix<i16>),
    IntMatrix(Matrix<i32>),
    LongMatrix(Matrix<i64>),
    FloatMatrix(Matrix<f32>),
    DoubleMatrix(Matrix<f64>),
}

impl Value {
    /// A CHAR_8 value.
    pub fn char8(unit: u8) -> Self {
        Value::Char8(unit)
    }

    /// A CHAR_16 value.
    pub fn char16(unit: u16) -> Self {
        Value::Char16(unit)
    }

    /// A string to be carried as STRING_16 (UTF-16 code units on the wire).
    pub fn string16(s: impl Into<String>) -> Self {
        Value::String16(s.into())
    }

    /// The wire tag for this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::Bool(_) => Tag::Bool,
            Value::Char8(_) => Tag::Char8,
            Value::Char16(_) => Tag::Char16,
            Value::String8(_) => Tag::String8,
            Value::String16(_) => Tag::String16,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::ShortArray(_) => Tag::ShortArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::FloatArray(_) => Tag::FloatArray,
            Value::DoubleArray(_) => Tag::DoubleArray,
            Value::BoolArray(_) => Tag::BoolArray,
            Value::ByteMatrix(_) => Tag::ByteMatrix,
            Value::ShortMatrix(_) => Tag::ShortMatrix,
            Value::IntMatrix(_) => Tag::IntMatrix,
            Value::LongMatrix(_) => Tag::LongMatrix,
            Value::FloatMatrix(_) => Tag::FloatMatrix,
            Value::DoubleMatrix(_) => Tag::DoubleMatrix,
        }
    }

    /// The exact encoded length, including the tag byte.
    pub fn encode_size(&self) -> usize {
        1 + match self {
            Value::Byte(_) => i8::SIZE,
            Value::Short(_) => i16::SIZE,
            Value::Int(_) => i32::SIZE,
            Value::Long(_) => i64::SIZE,
            Value::Float(_) => f32::SIZE,
            Value::Double(_) => f64::SIZE,
            Value::Bool(_) => bool::SIZE,
            Value::Char8(_) => u8::SIZE,
            Value::Char16(_) => u16::SIZE,
            Value::String8(s) => strings::utf8_size(s),
            Value::String16(s) => strings::utf16_size(s),
            Value::ByteArray(v) => arrays::slice_size(v),
            Value::ShortArray(v) => arrays::slice_size(v),
            Value::IntArray(v) => arrays::slice_size(v),
            Value::LongArray(v) => arrays::slice_size(v),
            Value::FloatArray(v) => arrays::slice_size(v),
            Value::DoubleArray(v) => arrays::slice_size(v),
            Value::BoolArray(v) => arrays::slice_size(v),
            Value::ByteMatrix(m) => matrices::matrix_size(m),
            Value::ShortMatrix(m) => matrices::matrix_size(m),
            Value::IntMatrix(m) => matrices::matrix_size(m),
            Value::LongMatrix(m) => matrices::matrix_size(m),
            Value::FloatMatrix(m) => matrices::matrix_size(m),
            Value::DoubleMatrix(m) => matrices::matrix_size(m),
        }
    }

    /// Writes the tag byte and the payload.
    pub fn write(&self, order: ByteOrder, buf: &mut impl BufMut) {
        order.put_u8(buf, self.tag().byte());
        match self {
            Value::Byte(v) => v.write(order, buf),
            Value::Short(v) => v.write(order, buf),
            Value::Int(v) => v.write(order, buf),
            Value::Long(v) => v.write(order, buf),
            Value::Float(v) => v.write(order, buf),
            Value::Double(v) => v.write(order, buf),
            Value::Bool(v) => v.write(order, buf),
            Value::Char8(v) => v.write(order, buf),
            Value::Char16(v) => v.write(order, buf),
            Value::String8(s) => strings::write_utf8(s, order, buf),
            Value::String16(s) => strings::write_utf16(s, order, buf),
            Value::ByteArray(v) => arrays::write_slice(v, order, buf),
            Value::ShortArray(v) => arrays::write_slice(v, order, buf),
            Value::IntArray(v) => arrays::write_slice(v, order, buf),
            Value::LongArray(v) => arrays::write_slice(v, order, buf),
            Value::FloatArray(v) => arrays::write_slice(v, order, buf),
            Value::DoubleArray(v) => arrays::write_slice(v, order, buf),
            Value::BoolArray(v) => arrays::write_slice(v, order, buf),
            Value::ByteMatrix(m) => matrices::write_matrix(m, order, buf),
            Value::ShortMatrix(m) => matrices::write_matrix(m, order, buf),
            Value::IntMatrix(m) => matrices::write_matrix(m, order, buf),
            Value::LongMatrix(m) => matrices::write_matrix(m, order, buf),
            Value::FloatMatrix(m) => matrices::write_matrix(m, order, buf),
            Value::DoubleMatrix(m) => matrices::write_matrix(m, order, buf),
        }
    }

    /// Reads a tag byte and the matching payload.
    ///
    /// A byte outside the known tag set fails the decode with
    /// [`Error::UnknownTag`].
    pub fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        let tag = Tag::from_u8(order.get_u8(buf)?)?;
        Ok(match tag {
            Tag::Byte => Value::Byte(i8::read(buf, order)?),
            Tag::Short => Value::Short(i16::read(buf, order)?),
            Tag::Int => Value::Int(i32::read(buf, order)?),
            Tag::Long => Value::Long(i64::read(buf, order)?),
            Tag::Float => Value::Float(f32::read(buf, order)?),
            Tag::Double => Value::Double(f64::read(buf, order)?),
            Tag::Bool => Value::Bool(bool::read(buf, order)?),
            Tag::Char8 => Value::Char8(u8::read(buf, order)?),
            Tag::Char16 => Value::Char16(u16::read(buf, order)?),
            Tag::String8 => Value::String8(strings::read_utf8(buf, order)?),
            Tag::String16 => Value::String16(strings::read_utf16(buf, order)?),
            Tag::ByteArray => Value::ByteArray(arrays::read_vec(buf, order)?),
            Tag::ShortArray => Value::ShortArray(arrays::read_vec(buf, order)?),
            Tag::IntArray => Value::IntArray(arrays::read_vec(buf, order)?),
            Tag::LongArray => Value::LongArray(arrays::read_vec(buf, order)?),
            Tag::FloatArray => Value::FloatArray(arrays::read_vec(buf, order)?),
            Tag::DoubleArray => Value::DoubleArray(arrays::read_vec(buf, order)?),
            Tag::BoolArray => Value::BoolArray(arrays::read_vec(buf, order)?),
            Tag::ByteMatrix => Value::ByteMatrix(matrices::read_matrix(buf, order)?),
            Tag::ShortMatrix => Value::ShortMatrix(matrices::read_matrix(buf, order)?),
            Tag::IntMatrix => Value::IntMatrix(matrices::read_matrix(buf, order)?),
            Tag::LongMatrix => Value::LongMatrix(matrices::read_matrix(buf, order)?),
            Tag::FloatMatrix => Value::FloatMatrix(matrices::read_matrix(buf, order)?),
            Tag::DoubleMatrix => Value::DoubleMatrix(matrices::read_matrix(buf, order)?),
        })
    }

    /// Encodes this value to a fresh buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number
    /// of bytes.
    pub fn encode(&self, order: ByteOrder) -> Bytes {
        let len = self.encode_size();
        let mut buf = BytesMut::with_capacity(len);
        self.write(order, &mut buf);
        assert_eq!(buf.len(), len, "write() did not write expected bytes");
        buf.freeze()
    }

    /// Decodes a single value from a buffer, ensuring the buffer is fully
    /// consumed.
    pub fn decode(mut buf: impl Buf, order: ByteOrder) -> Result<Self, Error> {
        let result = Self::read(&mut buf, order)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

macro_rules! impl_from {
    ($($type:ty => $variant:ident,)*) => {
        $(
            impl From<$type> for Value {
                #[inline]
                fn from(value: $type) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => String8,
    Vec<i8> => ByteArray,
    Vec<i16> => ShortArray,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
    Vec<f32> => FloatArray,
    Vec<f64> => DoubleArray,
    Vec<bool> => BoolArray,
    Matrix<i8> => ByteMatrix,
    Matrix<i16> => ShortMatrix,
    Matrix<i32> => IntMatrix,
    Matrix<i64> => LongMatrix,
    Matrix<f32> => FloatMatrix,
    Matrix<f64> => DoubleMatrix,
);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String8(value.to_string())
    }
}
