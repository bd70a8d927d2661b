//! Fuzz testing for the decoders.
//!
//! This fuzz target feeds arbitrary byte sequences to both decoders to
//! ensure malformed input is rejected with an error rather than a panic,
//! an out-of-bounds read, or a wrapped value. Whenever a decode succeeds,
//! re-encoding the value canonically must decode back to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ordpack::{
    decode_int, decode_uint, encode_int, encode_uint, int_len, uint_len, MAX_ENCODED_LEN,
};

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = decode_uint(data) {
        assert!((1..=MAX_ENCODED_LEN).contains(&consumed));
        assert!(consumed <= data.len());

        // The input may be a non-canonical spelling of `value`, so only
        // the value is compared, never the bytes.
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let n = encode_uint(value, &mut buf).unwrap();
        assert_eq!(n, uint_len(value));
        assert_eq!(decode_uint(&buf[..n]).unwrap(), (value, n));
    }

    if let Ok((value, consumed)) = decode_int(data) {
        assert!((1..=MAX_ENCODED_LEN).contains(&consumed));
        assert!(consumed <= data.len());

        let mut buf = [0u8; MAX_ENCODED_LEN];
        let n = encode_int(value, &mut buf).unwrap();
        assert_eq!(n, int_len(value));
        assert_eq!(decode_int(&buf[..n]).unwrap(), (value, n));
    }
});
