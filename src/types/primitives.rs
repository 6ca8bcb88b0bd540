//! Per-type serializers for the fixed-width primitives.
//!
//! Each primitive knows its own encoded width and, where it can appear inside a
//! collection, its scalar/array/matrix tags. `u8` and `u16` carry the CHAR_8 and
//! CHAR_16 payloads (a Latin-1 byte and a raw UTF-16 code unit) and are not array
//! elements.

use crate::{
    codec::{Element, FixedSize, MatrixElement, Read, Write},
    endian::ByteOrder,
    error::Error,
    tag::Tag,
};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $get_method:ident, $put_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, order: ByteOrder, buf: &mut impl BufMut) {
                order.$put_method(buf, *self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
                order.$get_method(buf)
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(i16, get_i16, put_i16);
impl_numeric!(u16, get_u16, put_u16);
impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(i64, get_i64, put_i64);
impl_numeric!(f32, get_f32, put_f32);
impl_numeric!(f64, get_f64, put_f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, order: ByteOrder, buf: &mut impl BufMut) {
        order.put_u8(buf, *self as u8);
    }
}

impl Read for bool {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        match order.get_u8(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(Error::InvalidBool(byte)),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

macro_rules! impl_element {
    ($type:ty, $tag:ident, $array_tag:ident) => {
        impl Element for $type {
            const TAG: Tag = Tag::$tag;
            const ARRAY_TAG: Tag = Tag::$array_tag;
        }
    };
}

impl_element!(i8, Byte, ByteArray);
impl_element!(i16, Short, ShortArray);
impl_element!(i32, Int, IntArray);
impl_element!(i64, Long, LongArray);
impl_element!(f32, Float, FloatArray);
impl_element!(f64, Double, DoubleArray);
impl_element!(bool, Bool, BoolArray);

macro_rules! impl_matrix_element {
    ($type:ty, $matrix_tag:ident) => {
        impl MatrixElement for $type {
            const MATRIX_TAG: Tag = Tag::$matrix_tag;
        }
    };
}

impl_matrix_element!(i8, ByteMatrix);
impl_matrix_element!(i16, ShortMatrix);
impl_matrix_element!(i32, IntMatrix);
impl_matrix_element!(i64, LongMatrix);
impl_matrix_element!(f32, FloatMatrix);
impl_matrix_element!(f64, DoubleMatrix);
