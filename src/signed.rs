//! # Signed Encoding
//!
//! i64 values reuse the unsigned tiers for `x >= 0` byte-for-byte, so a
//! non-negative value has one encoding regardless of which API produced
//! it. Negative values get the three low-marker tiers.
//!
//! The 1-byte and 2-byte negative tiers store `x` minus the tier floor
//! (-64 and -8256), which maps the most negative value of the tier to an
//! all-zero data field and -1 of the tier to an all-one data field, so
//! bigger bytes mean values closer to zero. The multi-byte tier stores the
//! two's-complement bits of `x` with leading `0xFF` bytes stripped, and
//! stores `8 - len` in the marker nibble rather than `len`: a more
//! negative value needs more payload bytes, so inverting the count makes
//! its marker byte smaller and keeps the byte order aligned with the
//! numeric order.
//!
//! Encoders validate the full required length before writing the first
//! byte; a failed encode leaves the buffer untouched.

use crate::error::{Error, Result};
use crate::multibyte::{neg_payload_len, read_neg_payload, write_payload};
use crate::tier::{marker, Tier, NEG_1BYTE_MIN, NEG_2BYTE_MIN};
use crate::unsigned::{decode_uint, encode_uint, encode_uint_to, uint_len};

/// Encoded length of `x` in bytes (1-9), without writing anything. Always
/// agrees with [`encode_int`].
pub fn int_len(x: i64) -> usize {
    if x >= 0 {
        uint_len(x as u64)
    } else if x >= NEG_1BYTE_MIN {
        1
    } else if x >= NEG_2BYTE_MIN {
        2
    } else {
        1 + neg_payload_len(x)
    }
}

/// Writes the negative-tier layout for `x < 0` into `buf`. `needed` is the
/// total encoded length, already validated by the caller.
fn write_neg(x: i64, needed: usize, buf: &mut [u8]) {
    if x >= NEG_1BYTE_MIN {
        buf[0] = marker::NEG_1BYTE | (x - NEG_1BYTE_MIN) as u8;
    } else if x >= NEG_2BYTE_MIN {
        let v = x - NEG_2BYTE_MIN;
        buf[0] = marker::NEG_2BYTE | (v >> 8) as u8;
        buf[1] = v as u8;
    } else {
        let len = needed - 1;
        buf[0] = marker::NEG_MULTI | (8 - len) as u8;
        write_payload(x as u64, len, &mut buf[1..]);
    }
}

/// Encodes `x` into the front of `buf`, returning the bytes written.
/// Fails with [`Error::BufferTooSmall`] without writing anything if `buf`
/// is shorter than [`int_len`]`(x)`.
pub fn encode_int(x: i64, buf: &mut [u8]) -> Result<usize> {
    if x >= 0 {
        return encode_uint(x as u64, buf);
    }
    let needed = int_len(x);
    if buf.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    write_neg(x, needed, buf);
    Ok(needed)
}

/// Appends the encoding of `x` to `out`, returning the bytes appended.
/// Infallible: the vector grows as needed.
pub fn encode_int_to(x: i64, out: &mut Vec<u8>) -> usize {
    if x >= 0 {
        return encode_uint_to(x as u64, out);
    }
    let needed = int_len(x);
    let start = out.len();
    out.resize(start + needed, 0);
    write_neg(x, needed, &mut out[start..]);
    needed
}

/// Decodes one signed integer from the front of `buf`, returning the
/// value and the bytes consumed. Trailing bytes are ignored.
///
/// Accepts every tier. An unsigned-tier encoding whose value exceeds
/// `i64::MAX` fails with [`Error::InvalidEncoding`] rather than wrapping,
/// as do reserved markers and an oversized length nibble;
/// [`Error::TruncatedInput`] reports short input.
pub fn decode_int(buf: &[u8]) -> Result<(i64, usize)> {
    if buf.is_empty() {
        return Err(Error::TruncatedInput {
            needed: 1,
            available: 0,
        });
    }
    let first = buf[0];

    match Tier::from_marker(first) {
        Some(Tier::NegMulti) => {
            let stored = (first & 0x0F) as usize;
            if stored > 8 {
                return Err(Error::InvalidEncoding { marker: first });
            }
            let len = 8 - stored;
            let needed = 1 + len;
            if buf.len() < needed {
                return Err(Error::TruncatedInput {
                    needed,
                    available: buf.len(),
                });
            }
            let bits = read_neg_payload(&buf[1..], len);
            Ok((bits as i64, needed))
        }
        Some(Tier::Neg2Byte) => {
            if buf.len() < 2 {
                return Err(Error::TruncatedInput {
                    needed: 2,
                    available: buf.len(),
                });
            }
            let v = ((first & 0x1F) as i64) << 8 | buf[1] as i64;
            Ok((NEG_2BYTE_MIN + v, 2))
        }
        Some(Tier::Neg1Byte) => Ok((NEG_1BYTE_MIN + (first & 0x3F) as i64, 1)),
        Some(Tier::Pos1Byte | Tier::Pos2Byte | Tier::PosMulti) => {
            let (x, n) = decode_uint(buf)?;
            match i64::try_from(x) {
                Ok(v) => Ok((v, n)),
                Err(_) => Err(Error::InvalidEncoding { marker: first }),
            }
        }
        None => Err(Error::InvalidEncoding { marker: first }),
    }
}
