//! Varint decoding from an incremental byte source.

use tracing::debug;

use crate::decode::{Accumulator, Step};
use crate::errors::ReadError;
use crate::source::ByteSource;

/// Reads one varint from `src`, pulling only as many bytes as it occupies.
///
/// Validity rules are the same as [`from_uvarint`](crate::from_uvarint).
/// Running out of input is reported as [`ReadError::CleanEnd`] if it happens
/// before the first byte and [`ReadError::UnexpectedEnd`] otherwise, so
/// callers can tell a finished stream from a truncated one.  Source errors
/// are passed through as [`ReadError::Source`].
pub fn read_uvarint<S: ByteSource + ?Sized>(src: &mut S) -> Result<u64, ReadError<S::Error>> {
    let mut acc = Accumulator::new();
    loop {
        let byte = match src.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) if acc.consumed() == 0 => return Err(ReadError::CleanEnd),
            Ok(None) => return Err(ReadError::UnexpectedEnd),
            Err(e) => {
                debug!(target: "uvarint", consumed = acc.consumed(), "byte source failed");
                return Err(ReadError::Source(e));
            }
        };

        if let Step::Done(value) = acc.push(byte)? {
            return Ok(value);
        }
    }
}
