//! Unsigned LEB128 varint codec.
//!
//! Values are split into 7-bit groups, least significant first.  Every byte
//! but the last has its high bit set.
//!
//! ```txt
//! 300 = 0b10_0101100
//!     -> 1_0101100 0_0000010
//!     -> [0xac, 0x02]
//! ```
//!
//! Decoding is strict: encodings that are longer than necessary or that
//! don't fit in a `u64` are rejected rather than silently accepted, so every
//! value has exactly one valid encoding.
//!
//! The `std` feature (on by default) adds [`IoSource`] for reading from
//! [`std::io::Read`] impls.  Without it the crate is `no_std` and only needs
//! `alloc`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

// stupid linter issue
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tracing_subscriber as _;

mod decode;
mod encode;
mod errors;
mod read;
mod size;
mod source;
mod uvarint;

pub use decode::{decode_uvarint_exact, from_uvarint};
pub use encode::{EncodedUvarint, encode_uvarint, put_uvarint, to_uvarint};
pub use errors::{ReadError, VarintError};
pub use read::read_uvarint;
pub use size::{MAX_UVARINT_LEN, uvarint_size};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SliceSource};
pub use uvarint::Uvarint;
