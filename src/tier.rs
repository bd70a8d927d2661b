//! # Tier Classification and Format Constants
//!
//! Every encoded integer belongs to exactly one of six tiers, selected by
//! the value's sign and magnitude on the encode side and re-derived from the
//! leading byte's high bits on the decode side. Tiers are arranged so their
//! marker ranges ascend with the value ranges they cover; this is what makes
//! encoded bytes compare like the numbers they hold, so the constants in
//! this module are load-bearing for the ordering guarantee, not just layout
//! trivia.
//!
//! ## Constant Derivations
//!
//! The 1-byte tiers carry 6 payload bits in the marker byte, the 2-byte
//! tiers add an 8-bit trailing byte for 13 payload bits total, and each
//! tier's range starts where the previous one ends:
//!
//! ```text
//! POS_1BYTE_MAX = 2^6 - 1            = 63
//! POS_2BYTE_MAX = 2^13 + POS_1BYTE_MAX = 8255
//! NEG_1BYTE_MIN = -2^6               = -64
//! NEG_2BYTE_MIN = -2^13 + NEG_1BYTE_MIN = -8256
//! ```
//!
//! These relationships are pinned by compile-time assertions below; if one
//! constant changes without the others the crate stops building.
//!
//! ## Reserved Patterns
//!
//! Leading bytes `0x00-0x0F` and `0xF0-0xFF` belong to no tier. The encoder
//! never produces them and [`Tier::from_marker`] maps them to `None`, which
//! the decoders surface as `InvalidEncoding`. They bracket the format so
//! foreign data is likelier to fail fast, and they leave room for future
//! tiers at both extremes without disturbing the ordering of existing ones.

/// Largest value of the non-negative 1-byte tier.
pub const POS_1BYTE_MAX: u64 = (1 << 6) - 1;

/// Largest value of the non-negative 2-byte tier.
pub const POS_2BYTE_MAX: u64 = (1 << 13) + POS_1BYTE_MAX;

/// Smallest value of the negative 1-byte tier.
pub const NEG_1BYTE_MIN: i64 = -(1 << 6);

/// Smallest value of the negative 2-byte tier.
pub const NEG_2BYTE_MIN: i64 = -(1 << 13) + NEG_1BYTE_MIN;

/// Largest byte length an encoded integer can have: one marker byte plus at
/// most eight big-endian payload bytes. Callers can size scratch buffers
/// with this.
pub const MAX_ENCODED_LEN: usize = 9;

const _: () = assert!(
    POS_1BYTE_MAX == 63 && POS_2BYTE_MAX == 8255,
    "positive tier boundaries must match the wire format"
);

const _: () = assert!(
    NEG_1BYTE_MIN == -64 && NEG_2BYTE_MIN == -8256,
    "negative tier boundaries must match the wire format"
);

const _: () = assert!(
    POS_2BYTE_MAX - POS_1BYTE_MAX == (1 << 13) && NEG_1BYTE_MIN - NEG_2BYTE_MIN == (1 << 13),
    "2-byte tiers must span exactly 13 payload bits"
);

const _: () = assert!(
    MAX_ENCODED_LEN == 1 + 8,
    "encodings are one marker byte plus at most eight payload bytes"
);

/// Marker values: the high-bit patterns a leading byte is OR'd from. The
/// low bits of the leading byte hold payload (1- and 2-byte tiers) or a
/// payload-length nibble (multi-byte tiers).
pub mod marker {
    /// `0001 llll` - negative multi-byte; nibble stores 8 - payload length.
    pub const NEG_MULTI: u8 = 0x10;
    /// `001x xxxx` - negative 2-byte; one payload byte follows.
    pub const NEG_2BYTE: u8 = 0x20;
    /// `01xx xxxx` - negative 1-byte; value lives in the low 6 bits.
    pub const NEG_1BYTE: u8 = 0x40;
    /// `10xx xxxx` - non-negative 1-byte; value lives in the low 6 bits.
    pub const POS_1BYTE: u8 = 0x80;
    /// `110x xxxx` - non-negative 2-byte; one payload byte follows.
    pub const POS_2BYTE: u8 = 0xC0;
    /// `1110 llll` - non-negative multi-byte; nibble stores payload length.
    pub const POS_MULTI: u8 = 0xE0;
}

/// The six encoding tiers, declared in ascending value order. `Ord` on
/// `Tier` therefore agrees with both numeric order and encoded-byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NegMulti,
    Neg2Byte,
    Neg1Byte,
    Pos1Byte,
    Pos2Byte,
    PosMulti,
}

impl Tier {
    /// Tier an unsigned value encodes into. Always one of the three
    /// non-negative tiers.
    pub fn of_uint(x: u64) -> Self {
        if x <= POS_1BYTE_MAX {
            Tier::Pos1Byte
        } else if x <= POS_2BYTE_MAX {
            Tier::Pos2Byte
        } else {
            Tier::PosMulti
        }
    }

    /// Tier a signed value encodes into.
    pub fn of_int(x: i64) -> Self {
        if x < NEG_2BYTE_MIN {
            Tier::NegMulti
        } else if x < NEG_1BYTE_MIN {
            Tier::Neg2Byte
        } else if x < 0 {
            Tier::Neg1Byte
        } else {
            Tier::of_uint(x as u64)
        }
    }

    /// Tier identified by a leading byte's high bits, or `None` for the two
    /// reserved patterns. Low "don't-care" bits never affect the result.
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte >> 4 {
            0x1 => Some(Tier::NegMulti),
            0x2 | 0x3 => Some(Tier::Neg2Byte),
            0x4..=0x7 => Some(Tier::Neg1Byte),
            0x8..=0xB => Some(Tier::Pos1Byte),
            0xC | 0xD => Some(Tier::Pos2Byte),
            0xE => Some(Tier::PosMulti),
            _ => None,
        }
    }
}
