//! Property tests over arbitrary inputs, in the round-trip /
//! index-consistency / substring-equivalence directions.

use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    CharIndex, DecodeError, from_str, from_utf16, from_utf16_wtf8, index_of, substring, to_hex,
    to_string, to_utf16,
};

fn iterations() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: any native string survives the encode/decode round trip.
#[test]
fn string_roundtrip_quickcheck() {
    fn prop(s: String) -> bool {
        let bytes = from_str(&s);
        to_string(&bytes).as_deref() == Ok(s.as_str())
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the UTF-16 route agrees with the native-string route, and
/// decoding re-splits supplementary code points into the original units.
#[test]
fn utf16_roundtrip_quickcheck() {
    fn prop(s: String) -> bool {
        let units: Vec<u16> = s.encode_utf16().collect();
        let Ok(bytes) = from_utf16(&units) else {
            return false; // no unpaired surrogates possible here
        };
        bytes == from_str(&s) && to_utf16(&bytes) == Ok(units)
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: over arbitrary code units, strict encode succeeding means the
/// bytes decode back to exactly those units; strict encode failing means
/// the lenient encoding is not valid UTF-8 and decode says why.
#[test]
fn arbitrary_units_quickcheck() {
    fn prop(units: Vec<u16>) -> bool {
        match from_utf16(&units) {
            Ok(bytes) => {
                bytes == from_utf16_wtf8(&units) && to_utf16(&bytes).as_deref() == Ok(&units[..])
            }
            Err(_) => matches!(
                to_utf16(&from_utf16_wtf8(&units)),
                Err(DecodeError::LoneSurrogate { .. })
            ),
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Property: index length equals the character count, offsets strictly
/// increase, and they agree with where the standard library says
/// characters start.
#[test]
fn index_consistency_quickcheck() {
    fn prop(s: String) -> bool {
        let bytes = from_str(&s);
        let Ok(idx) = CharIndex::build(&bytes) else {
            return false;
        };
        let std_offsets: Vec<usize> = s.char_indices().map(|(at, _)| at).collect();
        let widths: usize = (0..idx.char_count()).map(|p| idx.width_at(&bytes, p)).sum();
        idx.char_count() == s.chars().count() && idx.offsets() == std_offsets && widths == bytes.len()
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: positive-argument substrings behave like skip/take over
/// characters.
#[test]
fn substring_matches_std_quickcheck() {
    fn prop(s: String, first: u8, count: u8) -> bool {
        let bytes = from_str(&s);
        // a zero count stops zero characters short of the end
        let want: String = if count == 0 {
            s.chars().skip(usize::from(first)).collect()
        } else {
            s.chars()
                .skip(usize::from(first))
                .take(usize::from(count))
                .collect()
        };
        substring(&bytes, isize::from(first), Some(isize::from(count)), None).as_deref()
            == Ok(from_str(&want).as_slice())
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String, u8, u8) -> bool);
}

/// Property: trailing selections. `-k` through the end takes the last `k`
/// characters; a negative count drops that many from the end.
#[test]
fn substring_tail_quickcheck() {
    fn prop(s: String, k: u8) -> bool {
        if k == 0 {
            return true; // -0 is just 0; nothing to check
        }
        let bytes = from_str(&s);
        let total = s.chars().count();
        let k_usize = usize::from(k);

        let last_k: String = s.chars().skip(total.saturating_sub(k_usize)).collect();
        let drop_k: String = s.chars().take(total.saturating_sub(k_usize)).collect();

        let neg = -isize::from(k);
        substring(&bytes, neg, None, None).as_deref() == Ok(from_str(&last_k).as_slice())
            && substring(&bytes, 0, Some(neg), None).as_deref() == Ok(from_str(&drop_k).as_slice())
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String, u8) -> bool);
}

/// Property: hex rendering emits one prefixed group per byte.
#[quickcheck]
fn hex_group_per_byte(bytes: Vec<u8>) -> bool {
    to_hex(&bytes, "%").matches('%').count() == bytes.len()
}

/// Property: a needle sliced out of the haystack on character boundaries is
/// always found, at or before the position it was sliced from.
#[test]
fn index_of_finds_planted_needles_quickcheck() {
    fn prop(s: String, start: u8, len: u8) -> bool {
        let bytes = from_str(&s);
        let chars: Vec<char> = s.chars().collect();
        let start = usize::from(start) % (chars.len() + 1);
        let len = usize::from(len) % (chars.len() + 1 - start);
        if len == 0 {
            return true;
        }
        let needle: String = chars[start..start + len].iter().collect();
        match index_of(&bytes, &from_str(&needle), None) {
            Some(at) => at <= start,
            None => false,
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String, u8, u8) -> bool);
}
