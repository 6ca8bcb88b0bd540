//! Byte-order selection and the primitive put/get routines that honor it.
//!
//! A [`ByteOrder`] is picked once per encode/decode session and threaded through
//! every call. All byte-order branching lives in the methods below; callers never
//! branch on the order themselves. Readers check the remaining length, so this is
//! also the only place underflow is detected for fixed-width fields.

use crate::{util::at_least, Error};
use bytes::{Buf, BufMut};

/// Byte order applied to every multi-byte field of a session, count prefixes included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Network byte order (most significant byte first).
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

macro_rules! impl_width {
    ($put:ident, $get:ident, $ty:ty, $put_be:ident, $put_le:ident, $get_be:ident, $get_le:ident) => {
        #[inline]
        pub fn $put(self, buf: &mut impl BufMut, value: $ty) {
            match self {
                ByteOrder::Big => buf.$put_be(value),
                ByteOrder::Little => buf.$put_le(value),
            }
        }

        #[inline]
        pub fn $get(self, buf: &mut impl Buf) -> Result<$ty, Error> {
            at_least(buf, std::mem::size_of::<$ty>())?;
            Ok(match self {
                ByteOrder::Big => buf.$get_be(),
                ByteOrder::Little => buf.$get_le(),
            })
        }
    };
}

impl ByteOrder {
    impl_width!(put_u16, get_u16, u16, put_u16, put_u16_le, get_u16, get_u16_le);
    impl_width!(put_i16, get_i16, i16, put_i16, put_i16_le, get_i16, get_i16_le);
    impl_width!(put_u32, get_u32, u32, put_u32, put_u32_le, get_u32, get_u32_le);
    impl_width!(put_i32, get_i32, i32, put_i32, put_i32_le, get_i32, get_i32_le);
    impl_width!(put_i64, get_i64, i64, put_i64, put_i64_le, get_i64, get_i64_le);
    impl_width!(put_f32, get_f32, f32, put_f32, put_f32_le, get_f32, get_f32_le);
    impl_width!(put_f64, get_f64, f64, put_f64, put_f64_le, get_f64, get_f64_le);

    // Single-byte fields have no order, but keeping them here gives callers a
    // uniform call site and a single place where underflow is checked.

    #[inline]
    pub fn put_u8(self, buf: &mut impl BufMut, value: u8) {
        buf.put_u8(value);
    }

    #[inline]
    pub fn get_u8(self, buf: &mut impl Buf) -> Result<u8, Error> {
        at_least(buf, 1)?;
        Ok(buf.get_u8())
    }

    #[inline]
    pub fn put_i8(self, buf: &mut impl BufMut, value: i8) {
        buf.put_i8(value);
    }

    #[inline]
    pub fn get_i8(self, buf: &mut impl Buf) -> Result<i8, Error> {
        at_least(buf, 1)?;
        Ok(buf.get_i8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_u32_layout() {
        let mut buf = BytesMut::new();
        ByteOrder::Big.put_u32(&mut buf, 0x01020304);
        assert_eq!(&buf[..], &[0x01, 0x02, 0x03, 0x04]);

        let mut buf = BytesMut::new();
        ByteOrder::Little.put_u32(&mut buf, 0x01020304);
        assert_eq!(&buf[..], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_i16_layout() {
        let mut buf = BytesMut::new();
        ByteOrder::Big.put_i16(&mut buf, 0x1234);
        assert_eq!(&buf[..], &[0x12, 0x34]);

        let mut buf = BytesMut::new();
        ByteOrder::Little.put_i16(&mut buf, 0x1234);
        assert_eq!(&buf[..], &[0x34, 0x12]);
    }

    #[test]
    fn test_f64_round_trip() {
        for order in [ByteOrder::Big, ByteOrder::Little] {
            for value in [0.0f64, -1.5, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
                let mut buf = BytesMut::new();
                order.put_f64(&mut buf, value);
                let decoded = order.get_f64(&mut buf.freeze()).unwrap();
                assert_eq!(value, decoded);
            }
        }
    }

    #[test]
    fn test_f32_nan_bits_preserved() {
        // A non-canonical NaN payload must survive a round trip bit-for-bit.
        let value = f32::from_bits(0x7FC0_1234);
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let mut buf = BytesMut::new();
            order.put_f32(&mut buf, value);
            let decoded = order.get_f32(&mut buf.freeze()).unwrap();
            assert_eq!(value.to_bits(), decoded.to_bits());
        }
    }

    #[test]
    fn test_get_underflow() {
        let mut buf: &[u8] = &[0x01, 0x02, 0x03];
        assert!(matches!(
            ByteOrder::Big.get_u32(&mut buf),
            Err(Error::EndOfBuffer)
        ));
        // A failed read must not consume anything.
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_i64_round_trip() {
        for order in [ByteOrder::Big, ByteOrder::Little] {
            for value in [0i64, 1, -1, i64::MIN, i64::MAX] {
                let mut buf = BytesMut::new();
                order.put_i64(&mut buf, value);
                let decoded = order.get_i64(&mut buf.freeze()).unwrap();
                assert_eq!(value, decoded);
            }
        }
    }
}
