//! # ordpack - Order-Preserving Variable-Length Integer Encoding
//!
//! This crate encodes 64-bit signed and unsigned integers into compact byte
//! sequences whose lexicographic (plain `memcmp`) order matches the numeric
//! order of the original values. A storage engine can therefore use encoded
//! integers directly as B-tree key material and compare keys with a single
//! byte-string comparison, no integer-aware comparator required.
//!
//! ## Encoding Format
//!
//! The high bits of the leading byte select one of six tiers; the remaining
//! bits hold either payload or a payload-length count:
//!
//! ```text
//! Leading byte   Tier                     Values                Total bytes
//! 0000 xxxx      reserved                 —                     never produced
//! 0001 llll      negative, multi-byte     i64::MIN .. -8257     1 + (8 - llll)
//! 001x xxxx      negative, 2-byte         -8256 .. -65          2
//! 01xx xxxx      negative, 1-byte         -64 .. -1             1
//! 10xx xxxx      non-negative, 1-byte     0 .. 63               1
//! 110x xxxx      non-negative, 2-byte     64 .. 8255            2
//! 1110 llll      non-negative, multi-byte 8256 .. u64::MAX      1 + llll
//! 1111 xxxx      reserved                 —                     never produced
//! ```
//!
//! Non-negative tiers are shared verbatim between the signed and unsigned
//! encoders, so `encode_int(7)` and `encode_uint(7)` produce identical bytes.
//!
//! ## Why the Ordering Holds
//!
//! Tier markers ascend with value range, so any value in a lower tier starts
//! with a smaller leading byte than any value in a higher tier. Within the
//! 1- and 2-byte tiers the value (minus the tier's base offset) is stored
//! big-endian straight into the low bits, so byte comparison is numeric
//! comparison. Within the multi-byte tiers the leading byte carries the
//! payload length: longer non-negative payloads mean larger values, so the
//! length count is stored directly, while longer negative payloads mean
//! *more* negative values, so `8 - length` is stored instead. Either way a
//! longer encoding of the same sign compares exactly where its magnitude
//! says it should.
//!
//! ## Marker Byte Interpretation
//!
//! ```text
//! Marker 0x00-0x0F: reserved, decode fails
//! Marker 0x10-0x1F: negative multi-byte, low nibble = 8 - payload length
//! Marker 0x20-0x3F: negative 2-byte, low 5 bits = value high bits
//! Marker 0x40-0x7F: negative 1-byte, low 6 bits = value
//! Marker 0x80-0xBF: non-negative 1-byte, low 6 bits = value
//! Marker 0xC0-0xDF: non-negative 2-byte, low 5 bits = value high bits
//! Marker 0xE0-0xEF: non-negative multi-byte, low nibble = payload length
//! Marker 0xF0-0xFF: reserved, decode fails
//! ```
//!
//! ## Boundary Values
//!
//! Key boundary values for testing:
//!
//! - 63: maximum 1-byte unsigned value (`0xBF`)
//! - 64: minimum 2-byte unsigned value (`0xC0 0x00`)
//! - 8255: maximum 2-byte unsigned value (`0xDF 0xFF`)
//! - 8256: minimum multi-byte unsigned value (`0xE0`, zero payload bytes)
//! - -1: maximum 1-byte negative value (`0x7F`)
//! - -64: minimum 1-byte negative value (`0x40`)
//! - -65: maximum 2-byte negative value (`0x3F 0xFF`)
//! - -8256: minimum 2-byte negative value (`0x20 0x00`)
//! - -8257: maximum multi-byte negative value (`0x16 0xDF 0xBF`)
//! - u64::MAX, i64::MIN: 9-byte encodings
//!
//! ## Usage Example
//!
//! ```rust
//! use ordpack::{decode_uint, encode_uint, uint_len, MAX_ENCODED_LEN};
//!
//! // Check encoded length without encoding.
//! assert_eq!(uint_len(1000), 2);
//!
//! // Encode into a caller-supplied buffer.
//! let mut buf = [0u8; MAX_ENCODED_LEN];
//! let written = encode_uint(1000, &mut buf).unwrap();
//! assert_eq!(written, 2);
//!
//! // Decode returns the value and the bytes consumed.
//! let (value, read) = decode_uint(&buf).unwrap();
//! assert_eq!(value, 1000);
//! assert_eq!(read, 2);
//! ```
//!
//! Composite keys append encoded fields to a `Vec<u8>`; byte order of the
//! result follows field-by-field numeric order:
//!
//! ```rust
//! use ordpack::{encode_int_to, encode_uint_to};
//!
//! let mut low = Vec::new();
//! encode_uint_to(42, &mut low);
//! encode_int_to(-8300, &mut low);
//!
//! let mut high = Vec::new();
//! encode_uint_to(42, &mut high);
//! encode_int_to(64, &mut high);
//!
//! assert!(low < high);
//! ```
//!
//! ## Zero-Copy Design
//!
//! All functions operate on byte slices directly:
//! - `encode_uint` / `encode_int` write to a mutable slice, returning bytes
//!   written; the required length is validated before the first byte is
//!   written, so a failed encode leaves the buffer untouched
//! - `decode_uint` / `decode_int` read from a slice, returning
//!   `(value, bytes_read)` and ignoring any trailing bytes
//! - `uint_len` / `int_len` compute the encoded length without any I/O
//! - `encode_uint_to` / `encode_int_to` append to a `Vec<u8>` for composite
//!   key construction
//!
//! No heap allocations are performed except by the explicit `_to` variants
//! growing their output vector.
//!
//! ## Thread Safety
//!
//! All functions are pure and stateless, making them inherently thread-safe.
//! They can be called concurrently without any synchronization, provided
//! each call owns its buffer region.
//!
//! ## Error Handling
//!
//! Failures are typed ([`Error`]) so callers can tell a too-small output
//! buffer from truncated input from corrupt data:
//! - [`Error::BufferTooSmall`]: encode needs more capacity than supplied
//! - [`Error::TruncatedInput`]: decode needs more bytes than remain
//! - [`Error::InvalidEncoding`]: reserved marker pattern, or a sequence that
//!   denotes no representable value
//!
//! No failure path panics and none is deferred to a debug assertion.

pub mod error;
pub mod signed;
pub mod tier;
pub mod unsigned;

mod multibyte;

pub use error::{Error, Result};
pub use signed::{decode_int, encode_int, encode_int_to, int_len};
pub use tier::{
    marker, Tier, MAX_ENCODED_LEN, NEG_1BYTE_MIN, NEG_2BYTE_MIN, POS_1BYTE_MAX, POS_2BYTE_MAX,
};
pub use unsigned::{decode_uint, encode_uint, encode_uint_to, uint_len};
