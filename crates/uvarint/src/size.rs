//! Encoded length calculation.

/// The longest a varint encoding of a `u64` can be.
///
/// 64 bits in 7-bit groups is 10 groups, with the last holding only bit 63.
pub const MAX_UVARINT_LEN: usize = 10;

/// Payload bits carried by each encoded byte.
pub(crate) const BITS_PER_BYTE: u32 = 7;

/// Returns the number of bytes `value` occupies when encoded as a minimal
/// unsigned varint.
///
/// This is always in `1..=MAX_UVARINT_LEN` and always equal to the length
/// [`put_uvarint`](crate::put_uvarint) writes for the same value.
pub const fn uvarint_size(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    if bits == 0 {
        return 1;
    }

    bits.div_ceil(BITS_PER_BYTE) as usize
}
