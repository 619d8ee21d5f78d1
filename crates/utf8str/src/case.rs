//! Table-driven case conversion over UTF-8 bytes.
//!
//! Each character's bytes are packed big-endian into a `u32` and looked up
//! in the direction's table; characters without an entry pass through
//! unchanged. Replacements are not length-preserving in general ("ß"
//! uppercases to "SS", "İ" lowercases to "i\u{0307}"), so output length can
//! differ from input length in both directions. The tables are `static`
//! sorted data, built once for the life of the process and shared by all
//! threads.
//!
//! The two directions are deliberately not inverses of each other (there is
//! no lowercasing "SS" back to "ß"); both are idempotent.

pub(crate) mod tables;

use alloc::vec::Vec;

use crate::{boundary::char_width, error::MalformedError};

/// Uppercases `bytes` character by character.
///
/// # Errors
///
/// [`MalformedError`] when some position fails the structural boundary
/// check; no partial output is returned.
pub fn to_uppercase(bytes: &[u8]) -> Result<Vec<u8>, MalformedError> {
    convert(bytes, tables::UPPERCASE)
}

/// Lowercases `bytes` character by character.
///
/// # Errors
///
/// [`MalformedError`] when some position fails the structural boundary
/// check; no partial output is returned.
pub fn to_lowercase(bytes: &[u8]) -> Result<Vec<u8>, MalformedError> {
    convert(bytes, tables::LOWERCASE)
}

fn convert(bytes: &[u8], table: &[(u32, u64)]) -> Result<Vec<u8>, MalformedError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut at = 0;
    while at < bytes.len() {
        let width = char_width(bytes, at);
        if width == 0 {
            return Err(MalformedError { offset: at });
        }
        let ch = &bytes[at..at + width];
        match table.binary_search_by_key(&pack(ch), |&(key, _)| key) {
            Ok(hit) => push_replacement(&mut out, table[hit].1),
            Err(_) => out.extend_from_slice(ch),
        }
        at += width;
    }
    Ok(out)
}

/// Big-endian packing of one character's bytes into a lookup key.
fn pack(ch: &[u8]) -> u32 {
    ch.iter().fold(0, |acc, &b| (acc << 8) | u32::from(b))
}

/// Emits the non-zero bytes of a packed replacement, most significant
/// first. Zero byte positions mean "absent", which is how replacements
/// shorter (or longer) than the key character are expressed.
#[allow(clippy::cast_possible_truncation)]
fn push_replacement(out: &mut Vec<u8>, packed: u64) {
    for shift in (0..8).rev() {
        let b = (packed >> (shift * 8)) as u8;
        if b != 0 {
            out.push(b);
        }
    }
}
