//! Shared helpers for codec implementations

use crate::Error;
use bytes::Buf;

/// Returns an error if the buffer has fewer than `len` bytes remaining.
#[inline]
pub fn at_least(buf: &impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let buf: &[u8] = &[1, 2, 3];
        assert!(at_least(&buf, 3).is_ok());
        assert!(matches!(at_least(&buf, 4), Err(Error::EndOfBuffer)));
    }
}
