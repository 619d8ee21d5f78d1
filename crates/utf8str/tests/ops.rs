//! End-to-end checks over the public API: build buffers, index them, slice,
//! search, convert case and render, the way a caller would.

use utf8str::{
    CharIndex, char_count, from_str, from_utf16, index_of, substring, to_hex, to_lowercase,
    to_string, to_uppercase, to_utf16, utf8cat,
};

#[test]
fn pipeline_over_a_composed_buffer() {
    let greeting = from_utf16(&[0x00A9, 0x0020]).unwrap(); // "© "
    let buffer = utf8cat![&greeting, "stra\u{00df}e", b" \xf0\x9d\x8c\x86"];
    assert_eq!(to_string(&buffer).unwrap(), "\u{00a9} stra\u{00df}e \u{1d306}");

    let index = CharIndex::build(&buffer).unwrap();
    assert_eq!(index.char_count(), 10);
    assert_eq!(char_count(&buffer, Some(&index)).unwrap(), 10);

    // character positions, not byte offsets
    assert_eq!(index_of(&buffer, &from_str("stra"), Some(&index)), Some(2));
    assert_eq!(index_of(&buffer, &from_str("\u{1d306}"), Some(&index)), Some(9));

    let street = substring(&buffer, 2, Some(6), Some(&index)).unwrap();
    assert_eq!(to_string(&street).unwrap(), "stra\u{00df}e");

    let shouted = to_uppercase(&street).unwrap();
    assert_eq!(to_string(&shouted).unwrap(), "STRASSE");
    assert_eq!(to_string(&to_lowercase(&shouted).unwrap()).unwrap(), "strasse");
}

#[test]
fn utf16_round_trips_through_operations() {
    let units: Vec<u16> = "Foo \u{1d306} bar".encode_utf16().collect();
    let bytes = from_utf16(&units).unwrap();
    let tail = substring(&bytes, -3, None, None).unwrap();
    assert_eq!(to_utf16(&tail).unwrap(), "bar".encode_utf16().collect::<Vec<u16>>());
    assert_eq!(to_utf16(&bytes).unwrap(), units);
}

#[test]
fn hex_rendering_matches_byte_layout() {
    let bytes = from_str("Foo \u{00a9}");
    assert_eq!(to_hex(&bytes, ""), "466f6f20c2a9");
    assert_eq!(to_hex(&bytes, "%"), "%46%6f%6f%20%c2%a9");
}
