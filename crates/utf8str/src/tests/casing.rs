//! Case-conversion behavior: mapped ranges, length-changing replacements,
//! idempotence, and the deliberate asymmetry of the two directions.

use alloc::string::String;

use quickcheck::QuickCheck;

use crate::{from_str, to_lowercase, to_string, to_uppercase};

fn upper(s: &str) -> String {
    to_string(&to_uppercase(&from_str(s)).unwrap()).unwrap()
}

fn lower(s: &str) -> String {
    to_string(&to_lowercase(&from_str(s)).unwrap()).unwrap()
}

#[test]
fn ascii() {
    assert_eq!(upper("Hello, World! 123"), "HELLO, WORLD! 123");
    assert_eq!(lower("Hello, World! 123"), "hello, world! 123");
}

#[test]
fn latin_greek_cyrillic() {
    assert_eq!(upper("caf\u{00e9}"), "CAF\u{00c9}");
    assert_eq!(lower("\u{00c9}COLE"), "\u{00e9}cole");
    assert_eq!(upper("\u{3b1}\u{3b2}\u{3b3}"), "\u{391}\u{392}\u{393}");
    assert_eq!(upper("\u{43c}\u{43e}\u{441}\u{43a}\u{432}\u{430}"), "\u{41c}\u{41e}\u{421}\u{41a}\u{412}\u{410}");
    assert_eq!(lower("\u{41c}\u{41e}\u{421}\u{41a}\u{412}\u{410}"), "\u{43c}\u{43e}\u{441}\u{43a}\u{432}\u{430}");
}

#[test]
fn four_byte_characters_map() {
    // Deseret long I: U+10428 uppercases to U+10400
    assert_eq!(upper("\u{10428}"), "\u{10400}");
    assert_eq!(lower("\u{10400}"), "\u{10428}");
    // Adlam: U+1E922 uppercases to U+1E900
    assert_eq!(upper("\u{1e922}"), "\u{1e900}");
}

#[test]
fn length_changing_replacements() {
    // one character out of two bytes
    assert_eq!(upper("stra\u{00df}e"), "STRASSE");
    // one character into two
    assert_eq!(lower("\u{130}"), "i\u{307}");
    // micro sign jumps to Greek capital Mu
    assert_eq!(upper("\u{b5}"), "\u{39c}");
    // six replacement bytes out of two
    assert_eq!(upper("\u{390}"), "\u{399}\u{308}\u{301}");
}

#[test]
fn unmapped_characters_pass_through() {
    assert_eq!(upper("\u{1d306} \u{2603}"), "\u{1d306} \u{2603}");
    assert_eq!(lower("\u{1d306} \u{2603}"), "\u{1d306} \u{2603}");
}

#[test]
fn directions_are_not_inverses() {
    // upper of "ß" is "SS", which lowers to "ss", not back to "ß"
    assert_eq!(lower(&upper("\u{00df}")), "ss");
}

/// Property: both conversions are idempotent over arbitrary strings.
#[test]
fn idempotence_quickcheck() {
    fn prop(s: String) -> bool {
        let bytes = from_str(&s);
        let up = to_uppercase(&bytes).unwrap();
        let down = to_lowercase(&bytes).unwrap();
        to_uppercase(&up).unwrap() == up && to_lowercase(&down).unwrap() == down
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String) -> bool);
}
