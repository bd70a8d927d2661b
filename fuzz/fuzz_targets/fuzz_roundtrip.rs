//! Fuzz testing for the roundtrip and ordering invariants.
//!
//! This fuzz target drives the encoders with arbitrary values and checks
//! the properties the encoding promises: every value roundtrips, the size
//! estimators agree with the encoders, byte order matches numeric order,
//! and a non-negative value encodes identically through both APIs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordpack::{
    decode_int, decode_uint, encode_int_to, encode_uint_to, int_len, uint_len, MAX_ENCODED_LEN,
};

#[derive(Debug, Arbitrary)]
struct ValuePairs {
    unsigned: (u64, u64),
    signed: (i64, i64),
}

fuzz_target!(|input: ValuePairs| {
    let (a, b) = input.unsigned;

    let mut ea = Vec::new();
    let mut eb = Vec::new();
    assert_eq!(encode_uint_to(a, &mut ea), uint_len(a));
    assert_eq!(encode_uint_to(b, &mut eb), uint_len(b));
    assert!(ea.len() <= MAX_ENCODED_LEN);

    assert_eq!(decode_uint(&ea).unwrap(), (a, ea.len()));
    assert_eq!(decode_uint(&eb).unwrap(), (b, eb.len()));
    assert_eq!(ea.cmp(&eb), a.cmp(&b));

    let (a, b) = input.signed;

    let mut ea = Vec::new();
    let mut eb = Vec::new();
    assert_eq!(encode_int_to(a, &mut ea), int_len(a));
    assert_eq!(encode_int_to(b, &mut eb), int_len(b));
    assert!(ea.len() <= MAX_ENCODED_LEN);

    assert_eq!(decode_int(&ea).unwrap(), (a, ea.len()));
    assert_eq!(decode_int(&eb).unwrap(), (b, eb.len()));
    assert_eq!(ea.cmp(&eb), a.cmp(&b));

    // Non-negative values share one encoding across the two domains.
    if a >= 0 {
        let mut eu = Vec::new();
        encode_uint_to(a as u64, &mut eu);
        assert_eq!(ea, eu);
        assert_eq!(decode_uint(&ea).unwrap(), (a as u64, ea.len()));
    }
});
