use thiserror::Error;

/// Errors from encoding to or decoding from a byte buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum VarintError {
    /// The encoded value would not fit in 64 bits.
    #[error("varint overflows u64")]
    Overflow,

    /// The encoding is longer than the shortest encoding of its value.
    #[error("varint not minimally encoded")]
    NotMinimal,

    /// The buffer ended before the varint's terminating byte.
    #[error("varint truncated before terminating byte")]
    Underflow,

    /// The output buffer can't hold the encoding.
    #[error("output buffer too short (needed {needed}, available {available})")]
    BufferTooShort {
        /// Bytes the encoding occupies.
        needed: usize,

        /// Bytes the caller provided.
        available: usize,
    },

    /// There was extra data in the buffer after the varint.
    #[error("{0} trailing bytes after varint")]
    TrailingBytes(usize),
}

/// Errors from reading a varint out of a [`ByteSource`](crate::ByteSource).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ReadError<E> {
    /// The source was already exhausted before the first byte.
    ///
    /// This is usually a normal end of stream, not corruption.
    #[error("end of input")]
    CleanEnd,

    /// The source was exhausted partway through a varint.
    #[error("unexpected end of input inside varint")]
    UnexpectedEnd,

    /// The encoded value would not fit in 64 bits.
    #[error("varint overflows u64")]
    Overflow,

    /// The encoding is longer than the shortest encoding of its value.
    #[error("varint not minimally encoded")]
    NotMinimal,

    /// The underlying source failed.
    #[error("byte source: {0}")]
    Source(E),
}

impl<E> ReadError<E> {
    /// Returns if this is a clean end of input, where no bytes were consumed.
    pub fn is_clean_end(&self) -> bool {
        matches!(self, Self::CleanEnd)
    }

    /// Returns the source error, if this wraps one.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<ReadError<std::io::Error>> for std::io::Error {
    fn from(value: ReadError<std::io::Error>) -> Self {
        use std::io::{Error, ErrorKind};

        match value {
            ReadError::CleanEnd => Error::new(ErrorKind::UnexpectedEof, "end of input"),
            ReadError::UnexpectedEnd => Error::new(ErrorKind::UnexpectedEof, "truncated varint"),
            ReadError::Overflow => Error::new(ErrorKind::InvalidData, "varint overflows u64"),
            ReadError::NotMinimal => {
                Error::new(ErrorKind::InvalidData, "varint not minimally encoded")
            }
            ReadError::Source(e) => e,
        }
    }
}

/// Malformed-encoding conditions shared by both decoders.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Malformed {
    Overflow,
    NotMinimal,
}

impl From<Malformed> for VarintError {
    fn from(value: Malformed) -> Self {
        match value {
            Malformed::Overflow => Self::Overflow,
            Malformed::NotMinimal => Self::NotMinimal,
        }
    }
}

impl<E> From<Malformed> for ReadError<E> {
    fn from(value: Malformed) -> Self {
        match value {
            Malformed::Overflow => Self::Overflow,
            Malformed::NotMinimal => Self::NotMinimal,
        }
    }
}
