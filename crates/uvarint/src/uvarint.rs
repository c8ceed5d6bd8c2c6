//! Newtype wrapper for values carried as varints.

use alloc::vec::Vec;
use core::fmt;

use crate::decode::from_uvarint;
use crate::encode::{EncodedUvarint, encode_uvarint, to_uvarint};
use crate::errors::{ReadError, VarintError};
use crate::read::read_uvarint;
use crate::size::uvarint_size;
use crate::source::ByteSource;

/// A `u64` that is encoded as a varint.
///
/// Useful as a field type in containers that want to make the wire
/// representation explicit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uvarint(u64);

impl Uvarint {
    /// Construct a new instance.
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    /// Converts to inner value.
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Convenience function for returning the encoded length in bytes.
    pub const fn byte_len(&self) -> usize {
        uvarint_size(self.0)
    }

    /// Encodes into a stack buffer.
    pub fn encode(&self) -> EncodedUvarint {
        encode_uvarint(self.0)
    }

    /// Encodes into a newly allocated vec.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        to_uvarint(self.0)
    }

    /// Decodes from the front of a buffer, also returning the bytes consumed.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), VarintError> {
        from_uvarint(buf).map(|(v, n)| (Self(v), n))
    }

    /// Reads from a byte source.
    pub fn read<S: ByteSource + ?Sized>(src: &mut S) -> Result<Self, ReadError<S::Error>> {
        read_uvarint(src).map(Self)
    }
}

impl From<u64> for Uvarint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Uvarint> for u64 {
    fn from(value: Uvarint) -> Self {
        value.0
    }
}

impl fmt::Display for Uvarint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
