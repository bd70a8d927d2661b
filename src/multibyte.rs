//! # Multi-Byte Payload Helpers
//!
//! The multi-byte tiers store a big-endian payload of 0-8 bytes after the
//! marker byte, keeping only the significant bytes of the 64-bit pattern:
//!
//! - Positive form: strip leading `0x00` bytes. A payload of zero strips to
//!   nothing (length 0) because the tier offset already subtracted from the
//!   value carries the information.
//! - Negative form: strip leading `0xFF` bytes of the two's-complement
//!   pattern. Decoding seeds the accumulator with all ones so the stripped
//!   bytes reappear.
//!
//! Byte counts come from `leading_zeros`/`leading_ones`, and the read/write
//! loops step through an explicit byte count in 8-bit shifts, so no shift
//! ever reaches the 64-bit width.

/// Number of significant big-endian bytes after stripping leading `0x00`
/// bytes: 0 for a zero value, up to 8 for a full-width one.
pub(crate) fn pos_payload_len(x: u64) -> usize {
    8 - x.leading_zeros() as usize / 8
}

/// Number of significant big-endian bytes of a negative value's
/// two's-complement pattern after stripping leading `0xFF` bytes.
pub(crate) fn neg_payload_len(x: i64) -> usize {
    8 - (x as u64).leading_ones() as usize / 8
}

/// Writes the low `len` bytes of `x` big-endian into `buf[..len]`. The
/// caller has already validated capacity.
pub(crate) fn write_payload(x: u64, len: usize, buf: &mut [u8]) {
    for i in 0..len {
        buf[i] = (x >> ((len - 1 - i) * 8)) as u8;
    }
}

/// Reads `len` big-endian bytes from `buf[..len]` into an accumulator
/// seeded with zero (positive form).
pub(crate) fn read_pos_payload(buf: &[u8], len: usize) -> u64 {
    let mut x = 0u64;
    for &b in &buf[..len] {
        x = (x << 8) | b as u64;
    }
    x
}

/// Reads `len` big-endian bytes from `buf[..len]` into an accumulator
/// seeded with all ones (negative form), restoring the stripped `0xFF`
/// bytes.
pub(crate) fn read_neg_payload(buf: &[u8], len: usize) -> u64 {
    let mut x = u64::MAX;
    for &b in &buf[..len] {
        x = (x << 8) | b as u64;
    }
    x
}
