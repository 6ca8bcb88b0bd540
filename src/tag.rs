//! Wire type tags.
//!
//! One tag byte precedes every encoded value. Tag values are fixed by the
//! protocol and shared by both byte orders. Matrices exist only for the six
//! numeric element types, and characters have no array or matrix form.

use crate::Error;

/// Logical type of an encoded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Byte = 0,
    Short = 1,
    Int = 2,
    Long = 3,
    Float = 4,
    Double = 5,
    Bool = 6,
    Char8 = 7,
    Char16 = 8,
    String8 = 9,
    String16 = 10,
    ByteArray = 11,
    ShortArray = 12,
    IntArray = 13,
    LongArray = 14,
    FloatArray = 15,
    DoubleArray = 16,
    BoolArray = 17,
    ByteMatrix = 18,
    ShortMatrix = 19,
    IntMatrix = 20,
    LongMatrix = 21,
    FloatMatrix = 22,
    DoubleMatrix = 23,
}

impl Tag {
    /// The wire byte for this tag.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Looks up the tag for a wire byte, failing on bytes outside the known set.
    pub fn from_u8(byte: u8) -> Result<Self, Error> {
        Ok(match byte {
            0 => Tag::Byte,
            1 => Tag::Short,
            2 => Tag::Int,
            3 => Tag::Long,
            4 => Tag::Float,
            5 => Tag::Double,
            6 => Tag::Bool,
            7 => Tag::Char8,
            8 => Tag::Char16,
            9 => Tag::String8,
            10 => Tag::String16,
            11 => Tag::ByteArray,
            12 => Tag::ShortArray,
            13 => Tag::IntArray,
            14 => Tag::LongArray,
            15 => Tag::FloatArray,
            16 => Tag::DoubleArray,
            17 => Tag::BoolArray,
            18 => Tag::ByteMatrix,
            19 => Tag::ShortMatrix,
            20 => Tag::IntMatrix,
            21 => Tag::LongMatrix,
            22 => Tag::FloatMatrix,
            23 => Tag::DoubleMatrix,
            _ => return Err(Error::UnknownTag(byte)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tag; 24] = [
        Tag::Byte,
        Tag::Short,
        Tag::Int,
        Tag::Long,
        Tag::Float,
        Tag::Double,
        Tag::Bool,
        Tag::Char8,
        Tag::Char16,
        Tag::String8,
        Tag::String16,
        Tag::ByteArray,
        Tag::ShortArray,
        Tag::IntArray,
        Tag::LongArray,
        Tag::FloatArray,
        Tag::DoubleArray,
        Tag::BoolArray,
        Tag::ByteMatrix,
        Tag::ShortMatrix,
        Tag::IntMatrix,
        Tag::LongMatrix,
        Tag::FloatMatrix,
        Tag::DoubleMatrix,
    ];

    #[test]
    fn test_byte_round_trip() {
        for (i, tag) in ALL.iter().enumerate() {
            assert_eq!(tag.byte(), i as u8);
            assert_eq!(Tag::from_u8(i as u8).unwrap(), *tag);
        }
    }

    #[test]
    fn test_unknown_bytes() {
        for byte in 24..=u8::MAX {
            assert!(matches!(Tag::from_u8(byte), Err(Error::UnknownTag(b)) if b == byte));
        }
    }

    #[test]
    fn test_int_matrix_value() {
        assert_eq!(Tag::IntMatrix.byte(), 0x14);
    }
}
