//! # Codec Error Type
//!
//! Every fallible operation in this crate reports one of three conditions,
//! and callers are expected to match on them: a too-small output buffer is
//! fixed by re-encoding into a larger one (usually after consulting
//! [`uint_len`](crate::uint_len) / [`int_len`](crate::int_len)), truncated
//! input is a framing problem for the layer that sliced the bytes, and an
//! invalid encoding means the bytes were never produced by this codec and
//! cannot be decoded at all.
//!
//! All conditions are detected before any out-of-bounds access and returned
//! synchronously; nothing panics and nothing is retried internally.

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure conditions for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Encode requires more bytes than the output buffer has. The buffer is
    /// left untouched; retry with at least `needed` bytes.
    #[error("buffer too small for encoded integer: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Decode requires more bytes than remain in the input. `needed` is the
    /// full length the leading byte announced.
    #[error("truncated encoded integer: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// The leading byte matches a reserved pattern, or the sequence denotes
    /// no representable value. The input did not come from this encoder.
    #[error("invalid encoding: marker byte {marker:#04x}")]
    InvalidEncoding { marker: u8 },
}
