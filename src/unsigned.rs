//! # Unsigned Encoding
//!
//! u64 values use the three non-negative tiers. The 1-byte tier stores the
//! value in the marker byte's low 6 bits. The 2-byte tier subtracts the
//! 1-byte tier's capacity (64) and stores 13 bits across the marker's low
//! 5 bits and one trailing byte. The multi-byte tier subtracts the 2-byte
//! tier's capacity (8256) and stores the remainder's significant bytes
//! big-endian, with the byte count in the marker's low nibble — so 8256
//! itself encodes as the bare marker `0xE0` with no payload at all.
//!
//! Subtracting each tier's base offset before storing is what keeps the
//! encodings dense and the first encoding of every tier exactly one step
//! above the last encoding of the tier below it.
//!
//! Encoders validate the full required length before writing the first
//! byte; a failed encode leaves the buffer untouched.

use crate::error::{Error, Result};
use crate::multibyte::{pos_payload_len, read_pos_payload, write_payload};
use crate::tier::{marker, Tier, POS_1BYTE_MAX, POS_2BYTE_MAX};

/// Encoded length of `x` in bytes (1-9), without writing anything. Always
/// agrees with [`encode_uint`].
pub fn uint_len(x: u64) -> usize {
    if x <= POS_1BYTE_MAX {
        1
    } else if x <= POS_2BYTE_MAX {
        2
    } else {
        1 + pos_payload_len(x - (POS_2BYTE_MAX + 1))
    }
}

/// Writes the tiered layout for `x` into `buf`. `needed` is the total
/// encoded length, already validated against the buffer by the caller; the
/// multi-byte arm derives its payload count from it so encoder and size
/// estimator cannot drift apart.
fn write_uint(x: u64, needed: usize, buf: &mut [u8]) {
    if x <= POS_1BYTE_MAX {
        buf[0] = marker::POS_1BYTE | x as u8;
    } else if x <= POS_2BYTE_MAX {
        let v = x - (POS_1BYTE_MAX + 1);
        buf[0] = marker::POS_2BYTE | (v >> 8) as u8;
        buf[1] = v as u8;
    } else {
        let payload = x - (POS_2BYTE_MAX + 1);
        let len = needed - 1;
        buf[0] = marker::POS_MULTI | len as u8;
        write_payload(payload, len, &mut buf[1..]);
    }
}

/// Encodes `x` into the front of `buf`, returning the bytes written.
/// Fails with [`Error::BufferTooSmall`] without writing anything if `buf`
/// is shorter than [`uint_len`]`(x)`.
pub fn encode_uint(x: u64, buf: &mut [u8]) -> Result<usize> {
    let needed = uint_len(x);
    if buf.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    write_uint(x, needed, buf);
    Ok(needed)
}

/// Appends the encoding of `x` to `out`, returning the bytes appended.
/// Infallible: the vector grows as needed.
pub fn encode_uint_to(x: u64, out: &mut Vec<u8>) -> usize {
    let needed = uint_len(x);
    let start = out.len();
    out.resize(start + needed, 0);
    write_uint(x, needed, &mut out[start..]);
    needed
}

/// Decodes one unsigned integer from the front of `buf`, returning the
/// value and the bytes consumed. Trailing bytes are ignored.
///
/// Fails with [`Error::InvalidEncoding`] if the leading byte is not an
/// unsigned-tier marker (negative and reserved patterns alike), if the
/// payload-length nibble exceeds 8, or if the payload plus the tier offset
/// overflows u64; fails with [`Error::TruncatedInput`] if fewer bytes
/// remain than the tier requires.
pub fn decode_uint(buf: &[u8]) -> Result<(u64, usize)> {
    if buf.is_empty() {
        return Err(Error::TruncatedInput {
            needed: 1,
            available: 0,
        });
    }
    let first = buf[0];

    match Tier::from_marker(first) {
        Some(Tier::Pos1Byte) => Ok(((first & 0x3F) as u64, 1)),
        Some(Tier::Pos2Byte) => {
            if buf.len() < 2 {
                return Err(Error::TruncatedInput {
                    needed: 2,
                    available: buf.len(),
                });
            }
            let v = ((first & 0x1F) as u64) << 8 | buf[1] as u64;
            Ok((v + (POS_1BYTE_MAX + 1), 2))
        }
        Some(Tier::PosMulti) => {
            let len = (first & 0x0F) as usize;
            if len > 8 {
                return Err(Error::InvalidEncoding { marker: first });
            }
            let needed = 1 + len;
            if buf.len() < needed {
                return Err(Error::TruncatedInput {
                    needed,
                    available: buf.len(),
                });
            }
            match read_pos_payload(&buf[1..], len).checked_add(POS_2BYTE_MAX + 1) {
                Some(x) => Ok((x, needed)),
                None => Err(Error::InvalidEncoding { marker: first }),
            }
        }
        _ => Err(Error::InvalidEncoding { marker: first }),
    }
}
