//! Byte-level UTF-8 text codec.
//!
//! Converts between UTF-16 code units and UTF-8 bytes, and manipulates the
//! encoded bytes directly: length, substring, search, concatenation and
//! case conversion all work in character positions over 1–4 byte
//! characters, without ever decoding back to a native string.
//!
//! Character positions are resolved through a [`CharIndex`], the table of
//! byte offsets at which each character starts. Every operation builds one
//! on demand; callers touching the same buffer repeatedly can build it once
//! and pass it in.
//!
//! ```rust
//! use utf8str::{CharIndex, from_str, index_of, substring, to_string};
//!
//! let bytes = from_str("Foo \u{00a9} bar");
//! let index = CharIndex::build(&bytes)?;
//! assert_eq!(index.char_count(), 9);
//! assert_eq!(index_of(&bytes, &from_str("\u{00a9}"), Some(&index)), Some(4));
//!
//! let tail = substring(&bytes, -3, None, Some(&index))?;
//! assert_eq!(to_string(&tail)?, "bar");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! All operations are pure functions of their inputs; the only shared state
//! is the immutable case tables, safe under any number of concurrent
//! readers. Failures are reported as typed errors and never as partial
//! output.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod boundary;
mod case;
mod codec;
mod concat;
mod error;
mod hex;
mod index;
mod navigate;

#[cfg(test)]
mod tests;

pub use boundary::char_width;
pub use case::{to_lowercase, to_uppercase};
pub use codec::{from_str, from_utf16, from_utf16_wtf8, to_string, to_utf16};
pub use concat::{Segment, SegmentFrom, concat};
pub use error::{DecodeError, EncodeError, MalformedError};
pub use hex::to_hex;
pub use index::{CharIndex, char_count, char_width_at};
pub use navigate::{index_of, substring};

/// Joins byte sequences and native strings into one UTF-8 byte buffer.
///
/// Accepts any mix of `&str`, `&String`, `&[u8]`, byte-array and `&Vec<u8>`
/// arguments; native strings are encoded on the way in.
///
/// ```rust
/// use utf8str::{from_str, utf8cat};
///
/// let joined = utf8cat![b"Foo ", "\u{00a9}", b" bar"];
/// assert_eq!(joined, from_str("Foo \u{00a9} bar"));
/// ```
#[macro_export]
macro_rules! utf8cat {
    () => {{
        let segments: [$crate::Segment<'static>; 0] = [];
        $crate::concat(segments)
    }};
    ( $( $seg:expr ),+ $(,)? ) => {{
        use $crate::SegmentFrom;
        $crate::concat([$($crate::Segment::from_segment($seg)),+])
    }};
}
