//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("unknown type tag: {0:#04x}")]
    UnknownTag(u8),
    #[error("invalid bool byte: {0:#04x}")]
    InvalidBool(u8),
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,
    #[error("invalid utf-16 in string payload")]
    InvalidUtf16,
    #[error("empty matrix: {rows} rows x {cols} cols")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("jagged matrix: row {row} has {found} columns, expected {expected}")]
    JaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("matrix shape mismatch: {rows} rows x {cols} cols != {len} elements")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
