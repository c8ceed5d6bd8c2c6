//! Varint encoding.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::errors::VarintError;
use crate::size::{BITS_PER_BYTE, MAX_UVARINT_LEN, uvarint_size};

/// Set on every encoded byte except the last.
pub(crate) const CONTINUATION_BIT: u8 = 0x80;

/// Mask for the payload bits of an encoded byte.
pub(crate) const PAYLOAD_MASK: u8 = 0x7f;

/// Encodes `value` into the front of `buf`, returning the number of bytes
/// written.
///
/// Fails without writing anything if `buf` is shorter than
/// [`uvarint_size`] of the value.  A buffer of [`MAX_UVARINT_LEN`] bytes
/// always suffices.
pub fn put_uvarint(buf: &mut [u8], value: u64) -> Result<usize, VarintError> {
    let needed = uvarint_size(value);
    let Some(out) = buf.get_mut(..needed) else {
        return Err(VarintError::BufferTooShort {
            needed,
            available: buf.len(),
        });
    };

    Ok(write_groups(out, value))
}

/// Encodes `value` into a stack buffer.
pub fn encode_uvarint(value: u64) -> EncodedUvarint {
    let mut buf = [0; MAX_UVARINT_LEN];
    let len = write_groups(&mut buf, value);
    EncodedUvarint {
        buf,
        len: len as u8,
    }
}

/// Encodes `value` into a newly allocated vec of exactly
/// [`uvarint_size`] bytes.
pub fn to_uvarint(value: u64) -> Vec<u8> {
    let mut buf = vec![0; uvarint_size(value)];
    write_groups(&mut buf, value);
    buf
}

/// Writes the 7-bit groups of `value`, low group first.
///
/// `out` must be at least `uvarint_size(value)` long.
fn write_groups(out: &mut [u8], mut value: u64) -> usize {
    let mut i = 0;
    while value > PAYLOAD_MASK as u64 {
        out[i] = (value as u8 & PAYLOAD_MASK) | CONTINUATION_BIT;
        value >>= BITS_PER_BYTE;
        i += 1;
    }

    out[i] = value as u8;
    i + 1
}

/// An encoded varint held inline, without allocating.
///
/// Derefs to the encoded bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EncodedUvarint {
    buf: [u8; MAX_UVARINT_LEN],
    len: u8,
}

impl EncodedUvarint {
    /// Returns the encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for EncodedUvarint {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for EncodedUvarint {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
