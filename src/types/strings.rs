//! String serializers.
//!
//! STRING_8 is a u32 byte count followed by the UTF-8 bytes. STRING_16 is a u32
//! code-unit count followed by the UTF-16 code units, each written in the session
//! byte order. Malformed payloads fail the decode; no replacement characters are
//! ever substituted.
//!
//! For portability, the length of a string must fit within a `u32`.

use crate::{endian::ByteOrder, error::Error, util::at_least};
use bytes::{Buf, BufMut};

/// Encoded size of `s` as STRING_8, including the byte-count prefix.
#[inline]
pub fn utf8_size(s: &str) -> usize {
    4 + s.len()
}

/// Writes `s` as a byte-count prefix followed by its UTF-8 bytes.
pub fn write_utf8(s: &str, order: ByteOrder, buf: &mut impl BufMut) {
    let len = u32::try_from(s.len()).expect("string length exceeds u32");
    order.put_u32(buf, len);
    buf.put_slice(s.as_bytes());
}

/// Reads a STRING_8 payload, validating the UTF-8.
pub fn read_utf8(buf: &mut impl Buf, order: ByteOrder) -> Result<String, Error> {
    let len = order.get_u32(buf)? as usize;
    at_least(buf, len)?;
    let mut bytes = vec![0u8; len];
    buf.copy_to_slice(&mut bytes);
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

/// Encoded size of `s` as STRING_16, including the code-unit-count prefix.
#[inline]
pub fn utf16_size(s: &str) -> usize {
    4 + s.encode_utf16().count() * 2
}

/// Writes `s` as a code-unit-count prefix followed by its UTF-16 code units.
pub fn write_utf16(s: &str, order: ByteOrder, buf: &mut impl BufMut) {
    let units = s.encode_utf16().count();
    let len = u32::try_from(units).expect("string length exceeds u32");
    order.put_u32(buf, len);
    for unit in s.encode_utf16() {
        order.put_u16(buf, unit);
    }
}

/// Reads a STRING_16 payload, failing on unpaired surrogates.
pub fn read_utf16(buf: &mut impl Buf, order: ByteOrder) -> Result<String, Error> {
    let len = order.get_u32(buf)? as usize;
    at_least(buf, len.checked_mul(2).ok_or(Error::EndOfBuffer)?)?;
    let mut units = Vec::with_capacity(len);
    for _ in 0..len {
        units.push(order.get_u16(buf)?);
    }
    String::from_utf16(&units).map_err(|_| Error::InvalidUtf16)
}
