//! # Ordering Test Suite
//!
//! The whole point of this encoding is that `memcmp` on encoded bytes
//! ranks values the same way the integers themselves rank. Every test
//! here compares encodings with plain slice comparison (`<` on `&[u8]`,
//! which is lexicographic) and cross-checks against numeric order.
//!
//! ## Test Categories
//!
//! 1. **Tier Boundaries**: the pairs where marker bytes or lengths change
//! 2. **Exhaustive Scans**: consecutive values across the short tiers
//! 3. **Power-of-Two Windows**: pairs straddling each payload-width step
//! 4. **Random Pairs**: deterministic wide-spectrum comparisons
//! 5. **Sorted Arrays**: whole-array sorts by value and by bytes agree
//! 6. **Composite Keys**: concatenated encodings order like tuples
//!
//! ## Usage
//!
//! ```sh
//! cargo test --test ordering
//! ```

use std::cmp::Ordering;

use ordpack::{decode_uint, encode_int_to, encode_uint_to};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn enc_u(x: u64) -> Vec<u8> {
    let mut out = Vec::new();
    encode_uint_to(x, &mut out);
    out
}

fn enc_i(x: i64) -> Vec<u8> {
    let mut out = Vec::new();
    encode_int_to(x, &mut out);
    out
}

fn assert_uint_pair_ordered(a: u64, b: u64) {
    let (ea, eb) = (enc_u(a), enc_u(b));
    assert_eq!(
        ea.cmp(&eb),
        a.cmp(&b),
        "byte order disagrees with numeric order for {a} vs {b}: {ea:02x?} vs {eb:02x?}"
    );
}

fn assert_int_pair_ordered(a: i64, b: i64) {
    let (ea, eb) = (enc_i(a), enc_i(b));
    assert_eq!(
        ea.cmp(&eb),
        a.cmp(&b),
        "byte order disagrees with numeric order for {a} vs {b}: {ea:02x?} vs {eb:02x?}"
    );
}

/// Deterministic 64-bit generator (splitmix64) so failures reproduce.
fn splitmix(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// TIER BOUNDARIES
// ============================================================================

mod tier_boundaries {
    use super::*;

    #[test]
    fn unsigned_boundary_pairs() {
        for (a, b) in [
            (0u64, 1u64),
            (62, 63),
            (63, 64),
            (64, 65),
            (8254, 8255),
            (8255, 8256),
            (8256, 8257),
            (8256 + 0xFF, 8256 + 0x100),
            (8256 + 0xFFFF, 8256 + 0x1_0000),
            (u64::MAX - 1, u64::MAX),
        ] {
            assert_uint_pair_ordered(a, b);
            assert_uint_pair_ordered(b, a);
            assert_uint_pair_ordered(a, a);
        }
    }

    #[test]
    fn signed_boundary_pairs() {
        for (a, b) in [
            (i64::MIN, i64::MIN + 1),
            (-8258i64, -8257i64),
            (-8257, -8256),
            (-8256, -8255),
            (-66, -65),
            (-65, -64),
            (-64, -63),
            (-2, -1),
            (-1, 0),
            (0, 1),
            (63, 64),
            (8255, 8256),
            (i64::MAX - 1, i64::MAX),
        ] {
            assert_int_pair_ordered(a, b);
            assert_int_pair_ordered(b, a);
            assert_int_pair_ordered(a, a);
        }
    }

    #[test]
    fn shorter_encoding_still_sorts_after_longer_at_tier_boundary() {
        // 8255 takes two bytes but 8256 takes one. The comparison is
        // decided at the first byte (0xDF < 0xE0) before length matters.
        let (a, b) = (enc_u(8255), enc_u(8256));
        assert_eq!(a, vec![0xDF, 0xFF]);
        assert_eq!(b, vec![0xE0]);
        assert!(a < b);

        // Same shape on the negative side: -8256 is two bytes, -8257 three.
        let (c, d) = (enc_i(-8257), enc_i(-8256));
        assert_eq!(c, vec![0x16, 0xDF, 0xBF]);
        assert_eq!(d, vec![0x20, 0x00]);
        assert!(c < d);
    }

    #[test]
    fn longer_negative_payloads_sort_before_shorter_ones() {
        // The inverted length nibble at work: more payload bytes means a
        // more negative value and a smaller marker byte.
        let far = enc_i(-0x1_0000_0000);
        let near = enc_i(-0x1_0000);
        assert!(far[0] < near[0]);
        assert!(far.len() > near.len());
        assert!(far < near);
    }
}

// ============================================================================
// EXHAUSTIVE SCANS
// ============================================================================

mod exhaustive_scans {
    use super::*;

    #[test]
    fn unsigned_low_range_is_monotone() {
        let mut prev = enc_u(0);
        for x in 1..=70_000u64 {
            let cur = enc_u(x);
            assert!(prev < cur, "order break at {x}: {prev:02x?} !< {cur:02x?}");
            prev = cur;
        }
    }

    #[test]
    fn signed_low_range_is_monotone() {
        let mut prev = enc_i(-70_000);
        for x in -69_999..=70_000i64 {
            let cur = enc_i(x);
            assert!(prev < cur, "order break at {x}: {prev:02x?} !< {cur:02x?}");
            prev = cur;
        }
    }
}

// ============================================================================
// POWER-OF-TWO WINDOWS
// ============================================================================

mod power_of_two_windows {
    use super::*;

    #[test]
    fn unsigned_width_steps() {
        for shift in 0..64 {
            let base = 1u64 << shift;
            let lo = base.saturating_sub(3);
            let hi = base.saturating_add(3);
            let mut prev = enc_u(lo);
            for x in lo + 1..=hi {
                let cur = enc_u(x);
                assert!(prev < cur, "order break at {x}");
                prev = cur;
            }
        }
    }

    #[test]
    fn signed_width_steps() {
        for shift in 0..63 {
            let base = 1i64 << shift;
            for center in [base, -base] {
                let mut prev = enc_i(center - 3);
                for x in center - 2..=center + 2 {
                    let cur = enc_i(x);
                    assert!(prev < cur, "order break at {x}");
                    prev = cur;
                }
            }
        }
    }
}

// ============================================================================
// RANDOM PAIRS
// ============================================================================

mod random_pairs {
    use super::*;

    #[test]
    fn unsigned_pairs_agree_with_numeric_order() {
        let mut state = 0xCAFE_F00D_DEAD_BEEFu64;
        for i in 0..16_384u32 {
            let a = splitmix(&mut state) >> (i % 64);
            let b = splitmix(&mut state) >> ((i / 64) % 64);
            assert_uint_pair_ordered(a, b);
        }
    }

    #[test]
    fn signed_pairs_agree_with_numeric_order() {
        let mut state = 0xBAD_C0FF_EE00_DDEEu64;
        for i in 0..16_384u32 {
            let a = (splitmix(&mut state) >> (i % 64)) as i64;
            let b = (splitmix(&mut state) >> ((i / 64) % 64)) as i64;
            assert_int_pair_ordered(a, b);
            assert_int_pair_ordered(a.wrapping_neg(), b);
            assert_int_pair_ordered(a.wrapping_neg(), b.wrapping_neg());
        }
    }
}

// ============================================================================
// SORTED ARRAYS
// ============================================================================

mod sorted_arrays {
    use super::*;

    fn diverse_uints() -> Vec<u64> {
        let mut values = vec![
            0,
            1,
            63,
            64,
            8255,
            8256,
            8257,
            0xFFFF,
            0xFFFF_FFFF,
            u64::MAX,
        ];
        let mut state = 0x1234_5678_9ABC_DEF0u64;
        for i in 0..2_000u32 {
            values.push(splitmix(&mut state) >> (i % 64));
        }
        values
    }

    #[test]
    fn sorting_values_sorts_encodings() {
        let mut values = diverse_uints();
        values.sort_unstable();
        let encodings: Vec<Vec<u8>> = values.iter().map(|&x| enc_u(x)).collect();
        for pair in encodings.windows(2) {
            assert!(pair[0] <= pair[1], "{:02x?} > {:02x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sorting_encodings_sorts_values() {
        let mut encodings: Vec<Vec<u8>> = diverse_uints().iter().map(|&x| enc_u(x)).collect();
        encodings.sort_unstable();
        let decoded: Vec<u64> = encodings
            .iter()
            .map(|e| decode_uint(e).expect("sorted encoding must decode").0)
            .collect();
        for pair in decoded.windows(2) {
            assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sorting_signed_values_sorts_encodings() {
        let mut values = vec![
            i64::MIN,
            -8257,
            -8256,
            -65,
            -64,
            -1,
            0,
            63,
            64,
            8255,
            8256,
            i64::MAX,
        ];
        let mut state = 0xFEED_FACE_CAFE_BEEFu64;
        for i in 0..2_000u32 {
            values.push((splitmix(&mut state) >> (i % 64)) as i64);
            values.push(((splitmix(&mut state) >> (i % 64)) as i64).wrapping_neg());
        }
        values.sort_unstable();
        let encodings: Vec<Vec<u8>> = values.iter().map(|&x| enc_i(x)).collect();
        for pair in encodings.windows(2) {
            assert!(pair[0] <= pair[1], "{:02x?} > {:02x?}", pair[0], pair[1]);
        }
    }
}

// ============================================================================
// COMPOSITE KEYS
// ============================================================================

mod composite_keys {
    use super::*;

    fn composite(a: i64, b: i64) -> Vec<u8> {
        let mut key = Vec::new();
        encode_int_to(a, &mut key);
        encode_int_to(b, &mut key);
        key
    }

    /// No encoding is a strict prefix of another, so concatenating fields
    /// must order like the tuple of values.
    #[test]
    fn two_field_keys_order_like_tuples() {
        let fields = [i64::MIN, -8257, -8256, -64, -1, 0, 63, 64, 8256, i64::MAX];
        for &a1 in &fields {
            for &b1 in &fields {
                for &a2 in &fields {
                    for &b2 in &fields {
                        let byte_order = composite(a1, b1).cmp(&composite(a2, b2));
                        let tuple_order = (a1, b1).cmp(&(a2, b2));
                        assert_eq!(
                            byte_order, tuple_order,
                            "({a1},{b1}) vs ({a2},{b2}) misordered"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn encodings_are_never_strict_prefixes_of_each_other() {
        // Equal first bytes imply equal lengths, and differing first bytes
        // decide the comparison at offset zero. Check densely around the
        // tier boundaries and coarsely across the rest of the small range.
        let values: Vec<i64> = (-8_300..=-8_200)
            .chain(-100..=100)
            .chain(8_200..=8_300)
            .chain((-70_000..=70_000).step_by(997))
            .chain([i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX])
            .collect();
        let encodings: Vec<Vec<u8>> = values.into_iter().map(enc_i).collect();
        for (i, a) in encodings.iter().enumerate() {
            for b in &encodings[i + 1..] {
                if a.len() < b.len() {
                    assert_ne!(&b[..a.len()], &a[..], "{a:02x?} prefixes {b:02x?}");
                }
                if b.len() < a.len() {
                    assert_ne!(&a[..b.len()], &b[..], "{a:02x?} prefixes {b:02x?}");
                }
            }
        }
    }

    #[test]
    fn mixed_length_fields_keep_tuple_order() {
        let pairs = [
            ((-8257i64, i64::MAX), (-8256i64, i64::MIN)),
            ((8255, 99), (8256, -99)),
            ((0, u16::MAX as i64), (1, 0)),
            ((-1, 1), (0, -1)),
        ];
        for ((a1, b1), (a2, b2)) in pairs {
            assert_eq!(
                composite(a1, b1).cmp(&composite(a2, b2)),
                Ordering::Less,
                "({a1},{b1}) should sort before ({a2},{b2})"
            );
        }
    }
}
