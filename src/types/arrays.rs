//! Generic array serializer.
//!
//! Arrays are a u32 element-count prefix followed by the packed elements, with
//! no per-element tags. The serializer only contributes the prefix and the loop;
//! per-element work is delegated to the wrapped [`Element`].
//!
//! For portability, the length of an array must fit within a `u32`.

use crate::{
    codec::{Element, Read, Write},
    endian::ByteOrder,
    error::Error,
    util::at_least,
};
use bytes::{Buf, BufMut};

/// Encoded size of `items` including the element-count prefix.
#[inline]
pub fn slice_size<T: Element>(items: &[T]) -> usize {
    4 + items.len() * T::SIZE
}

/// Writes the element-count prefix followed by the packed elements.
pub fn write_slice<T: Element>(items: &[T], order: ByteOrder, buf: &mut impl BufMut) {
    let len = u32::try_from(items.len()).expect("array length exceeds u32");
    order.put_u32(buf, len);
    for item in items {
        item.write(order, buf);
    }
}

/// Reads an element-count prefix and that many packed elements.
///
/// The buffer must hold at least `count * T::SIZE` bytes before any allocation
/// happens, so a forged count cannot trigger an oversized allocation.
pub fn read_vec<T: Element>(buf: &mut impl Buf, order: ByteOrder) -> Result<Vec<T>, Error> {
    let len = order.get_u32(buf)? as usize;
    at_least(buf, len.checked_mul(T::SIZE).ok_or(Error::EndOfBuffer)?)?;
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(T::read(buf, order)?);
    }
    Ok(items)
}
