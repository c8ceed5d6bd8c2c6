//! Byte sources for incremental decoding.

use core::convert::Infallible;

/// Something that yields bytes one at a time.
///
/// The three possible outcomes of a read are kept distinct: a byte, the end
/// of input (`Ok(None)`), or a failure of the source itself.
pub trait ByteSource {
    /// Failure type of the underlying source.
    type Error;

    /// Reads the next byte, or returns `Ok(None)` if there are none left.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }
}

/// Reading from a slice advances it past the bytes read.
impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let Some((&byte, rest)) = self.split_first() else {
            return Ok(None);
        };

        *self = rest;
        Ok(Some(byte))
    }
}

/// Cursor over an arbitrary [`AsRef`] on a byte slice.
///
/// Unlike reading from a `&[u8]` directly, this keeps the whole buffer
/// around and tracks how far into it we are.
#[derive(Clone, Debug)]
pub struct SliceSource<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> SliceSource<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns how many bytes have been read.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns the total number of remaining bytes that can be read.
    pub fn remaining(&self) -> usize {
        self.len() - self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    pub fn rest(&self) -> &[u8] {
        &self.buf.as_ref()[self.at..]
    }

    /// Unwraps the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B: AsRef<[u8]>> ByteSource for SliceSource<B> {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.buf.as_ref().get(self.at).copied();
        if byte.is_some() {
            self.at += 1;
        }

        Ok(byte)
    }
}

#[cfg(feature = "std")]
pub use io_source::IoSource;

#[cfg(feature = "std")]
mod io_source {
    use std::io::{self, ErrorKind, Read};

    use super::ByteSource;

    /// Adapts a [`Read`] impl into a [`ByteSource`].
    ///
    /// Reads are one byte at a time, so wrap unbuffered readers in a
    /// [`BufReader`](std::io::BufReader) first.
    #[derive(Debug)]
    pub struct IoSource<R> {
        inner: R,
    }

    impl<R: Read> IoSource<R> {
        /// Wraps a reader.
        pub fn new(inner: R) -> Self {
            Self { inner }
        }

        /// Returns a reference to the wrapped reader.
        pub fn get_ref(&self) -> &R {
            &self.inner
        }

        /// Unwraps the reader.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: Read> ByteSource for IoSource<R> {
        type Error = io::Error;

        fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
            let mut byte = [0; 1];
            loop {
                match self.inner.read(&mut byte) {
                    Ok(0) => return Ok(None),
                    Ok(_) => return Ok(Some(byte[0])),
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                    Err(e) => return Err(e),
                }
            }
        }
    }
}
