//! One mixed-width sample exercised end to end: ASCII, a 2-byte, a 3-byte
//! and a 4-byte character (the latter needing a surrogate pair on the
//! UTF-16 side).

use alloc::vec::Vec;

use crate::{
    CharIndex, char_count, char_width, char_width_at, from_str, from_utf16, index_of, substring,
    to_hex, to_string, to_utf16,
};

const SAMPLE: &str = "Foo \u{00a9} bar \u{1d306} baz \u{2603} qux";

const SAMPLE_BYTES: [u8; 27] = [
    0x46, 0x6f, 0x6f, 0x20, 0xc2, 0xa9, 0x20, 0x62, 0x61, 0x72, 0x20, 0xf0, 0x9d, 0x8c, 0x86,
    0x20, 0x62, 0x61, 0x7a, 0x20, 0xe2, 0x98, 0x83, 0x20, 0x71, 0x75, 0x78,
];

const SAMPLE_OFFSETS: [usize; 21] = [
    0, 1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 15, 16, 17, 18, 19, 20, 23, 24, 25, 26,
];

#[test]
fn encodes_to_expected_bytes() {
    assert_eq!(from_str(SAMPLE), SAMPLE_BYTES);
    let units: Vec<u16> = SAMPLE.encode_utf16().collect();
    assert_eq!(units.len(), 22); // the pair makes UTF-16 one unit longer
    assert_eq!(from_utf16(&units).unwrap(), SAMPLE_BYTES);
}

#[test]
fn decodes_back() {
    assert_eq!(to_string(&SAMPLE_BYTES).unwrap(), SAMPLE);
    let units: Vec<u16> = SAMPLE.encode_utf16().collect();
    assert_eq!(to_utf16(&SAMPLE_BYTES).unwrap(), units);
}

#[test]
fn character_index_is_by_character_not_byte() {
    let idx = CharIndex::build(&SAMPLE_BYTES).unwrap();
    assert_eq!(idx.offsets(), SAMPLE_OFFSETS);
    assert_eq!(idx.char_count(), 21);
    assert_eq!(char_count(&SAMPLE_BYTES, None).unwrap(), 21);
    assert_eq!(char_count(&SAMPLE_BYTES, Some(&idx)).unwrap(), 21);
}

#[test]
fn widths_cover_the_buffer() {
    let idx = CharIndex::build(&SAMPLE_BYTES).unwrap();
    let total: usize = (0..idx.char_count())
        .map(|pos| idx.width_at(&SAMPLE_BYTES, pos))
        .sum();
    assert_eq!(total, SAMPLE_BYTES.len());
    assert_eq!(char_width(&SAMPLE_BYTES, 11), 4);
    assert_eq!(char_width_at(&SAMPLE_BYTES, 10, None), 4);
    assert_eq!(char_width_at(&SAMPLE_BYTES, 21, None), 0);
}

#[test]
fn substrings_select_characters() {
    let idx = CharIndex::build(&SAMPLE_BYTES).unwrap();
    let sub = |first, count| substring(&SAMPLE_BYTES, first, count, Some(&idx)).unwrap();
    assert_eq!(sub(-1, None), from_str("x"));
    assert_eq!(sub(0, Some(-1)), from_str("Foo \u{00a9} bar \u{1d306} baz \u{2603} qu"));
    assert_eq!(sub(4, Some(1)), from_str("\u{00a9}"));
    assert_eq!(sub(10, Some(1)), from_str("\u{1d306}"));
    assert_eq!(sub(12, Some(3)), from_str("baz"));
    assert_eq!(sub(-3, None), from_str("qux"));
}

#[test]
fn searches_report_character_positions() {
    assert_eq!(index_of(&SAMPLE_BYTES, &from_str("\u{00a9}"), None), Some(4));
    assert_eq!(index_of(&SAMPLE_BYTES, &from_str("\u{1d306}"), None), Some(10));
    assert_eq!(index_of(&SAMPLE_BYTES, &from_str("qux"), None), Some(18));
    assert_eq!(index_of(&SAMPLE_BYTES, &from_str("quux"), None), None);
}

#[test]
fn hex_rendering() {
    assert_eq!(
        to_hex(&SAMPLE_BYTES, ""),
        "466f6f20c2a92062617220f09d8c862062617a20e2988320717578"
    );
    assert_eq!(to_hex(&SAMPLE_BYTES[..4], "%"), "%46%6f%6f%20");
}
