//! Varint decoding from a flat buffer.

use tracing::trace;

use crate::encode::{CONTINUATION_BIT, PAYLOAD_MASK};
use crate::errors::{Malformed, VarintError};
use crate::size::{BITS_PER_BYTE, MAX_UVARINT_LEN};

/// Index of the last byte a valid encoding can have.
const LAST_INDEX: usize = MAX_UVARINT_LEN - 1;

/// Outcome of feeding one byte to an [`Accumulator`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The byte had the continuation bit set.
    More,

    /// The byte terminated the varint.
    Done(u64),
}

/// Byte-at-a-time varint state machine used by both the buffer and the
/// stream decoders.
#[derive(Clone, Debug, Default)]
pub(crate) struct Accumulator {
    value: u64,
    consumed: usize,
}

impl Accumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of bytes fed so far, including a terminating byte.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    /// Feeds the next byte.
    ///
    /// Never called again after returning `Done` or an error.
    pub(crate) fn push(&mut self, byte: u8) -> Result<Step, Malformed> {
        let index = self.consumed;
        let shift = index as u32 * BITS_PER_BYTE;
        self.consumed += 1;

        if byte & CONTINUATION_BIT == 0 {
            // The tenth byte only has room for bit 63.
            if index == LAST_INDEX && byte > 1 {
                return Err(reject(Malformed::Overflow, index, byte));
            }

            // A zero final group means the bytes before it were enough.
            if byte == 0 && index > 0 {
                return Err(reject(Malformed::NotMinimal, index, byte));
            }

            return Ok(Step::Done(self.value | ((byte as u64) << shift)));
        }

        if index == LAST_INDEX {
            return Err(reject(Malformed::Overflow, index, byte));
        }

        self.value |= ((byte & PAYLOAD_MASK) as u64) << shift;
        Ok(Step::More)
    }
}

fn reject(err: Malformed, offset: usize, byte: u8) -> Malformed {
    trace!(target: "uvarint", ?err, offset, byte, "rejecting malformed varint");
    err
}

/// Decodes a varint from the front of `buf`, returning the value and the
/// number of bytes it occupied.
///
/// Bytes after the varint are ignored.  On error nothing is returned, so
/// there is never a partially decoded value to misuse.
///
/// # Errors
///
/// - [`VarintError::Overflow`] if the value doesn't fit in a `u64`.
/// - [`VarintError::NotMinimal`] if a shorter encoding of the value exists.
/// - [`VarintError::Underflow`] if `buf` ends before the terminating byte.
pub fn from_uvarint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut acc = Accumulator::new();
    for &byte in buf {
        if let Step::Done(value) = acc.push(byte)? {
            return Ok((value, acc.consumed()));
        }
    }

    Err(VarintError::Underflow)
}

/// Decodes a varint that must span the whole of `buf`.
///
/// Errors the same way as [`from_uvarint`], and additionally with
/// [`VarintError::TrailingBytes`] if anything follows the varint.
pub fn decode_uvarint_exact(buf: &[u8]) -> Result<u64, VarintError> {
    let (value, n) = from_uvarint(buf)?;
    if n < buf.len() {
        return Err(VarintError::TrailingBytes(buf.len() - n));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_uvarint, uvarint_size};

    #[test]
    fn test_decode_known_values() {
        assert_eq!(from_uvarint(&[0x00]), Ok((0, 1)));
        assert_eq!(from_uvarint(&[0x7f]), Ok((127, 1)));
        assert_eq!(from_uvarint(&[0x80, 0x01]), Ok((128, 2)));
        assert_eq!(from_uvarint(&[0xac, 0x02]), Ok((300, 2)));
        assert_eq!(
            from_uvarint(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]),
            Ok((u64::MAX, 10))
        );
    }

    #[test]
    fn test_decode_ignores_trailing() {
        assert_eq!(from_uvarint(&[0xac, 0x02, 0xff, 0x00]), Ok((300, 2)));
    }

    #[test]
    fn test_roundtrip_boundaries() {
        for k in 0..=9u32 {
            let boundary = 1u64 << (7 * k);
            for v in [boundary - 1, boundary, boundary + 1] {
                let buf = to_uvarint(v);
                assert_eq!(from_uvarint(&buf), Ok((v, uvarint_size(v))), "value {v}");
            }
        }
    }

    #[test]
    fn test_overflow_long_run() {
        let mut buf = [0xff; 12];
        buf[11] = 0x00;
        assert_eq!(from_uvarint(&buf), Err(VarintError::Overflow));

        // No terminator at all is still overflow once the tenth byte continues.
        assert_eq!(from_uvarint(&[0xff; 24]), Err(VarintError::Overflow));
        assert_eq!(from_uvarint(&[0xff; 10]), Err(VarintError::Overflow));
    }

    #[test]
    fn test_overflow_tenth_byte() {
        let mut buf = [0xff; 10];
        buf[9] = 0x02;
        assert_eq!(from_uvarint(&buf), Err(VarintError::Overflow));

        buf[9] = 0x7f;
        assert_eq!(from_uvarint(&buf), Err(VarintError::Overflow));

        buf[9] = 0x01;
        assert_eq!(from_uvarint(&buf), Ok((u64::MAX, 10)));
    }

    #[test]
    fn test_not_minimal() {
        assert_eq!(from_uvarint(&[0x80, 0x00]), Err(VarintError::NotMinimal));
        assert_eq!(from_uvarint(&[0x81, 0x00]), Err(VarintError::NotMinimal));
        assert_eq!(
            from_uvarint(&[0xff, 0x80, 0x00]),
            Err(VarintError::NotMinimal)
        );

        // Leading 0x80 is fine when the value really needs the second byte.
        assert_eq!(from_uvarint(&[0x80, 0x01]), Ok((128, 2)));
    }

    #[test]
    fn test_not_minimal_tenth_byte() {
        let mut buf = [0xff; 10];
        buf[9] = 0x00;
        assert_eq!(from_uvarint(&buf), Err(VarintError::NotMinimal));
    }

    #[test]
    fn test_underflow() {
        assert_eq!(from_uvarint(&[]), Err(VarintError::Underflow));
        assert_eq!(from_uvarint(&[0x81, 0x81]), Err(VarintError::Underflow));
        assert_eq!(from_uvarint(&[0x80]), Err(VarintError::Underflow));
    }

    #[test]
    fn test_decode_exact() {
        assert_eq!(decode_uvarint_exact(&[0xac, 0x02]), Ok(300));
        assert_eq!(
            decode_uvarint_exact(&[0xac, 0x02, 0x00]),
            Err(VarintError::TrailingBytes(1))
        );
        assert_eq!(decode_uvarint_exact(&[0xac]), Err(VarintError::Underflow));
    }

    #[test]
    fn test_accumulator_counts() {
        let mut acc = Accumulator::new();
        assert_eq!(acc.push(0xac), Ok(Step::More));
        assert_eq!(acc.consumed(), 1);
        assert_eq!(acc.push(0x02), Ok(Step::Done(300)));
        assert_eq!(acc.consumed(), 2);
    }
}
