//! Hex rendering of byte buffers.

use alloc::string::String;
use core::fmt::Write;

/// Renders `bytes` as concatenated lowercase hex values, each preceded by
/// `prefix` (pass `""` for none; `"\\x"` and `"%"` are the usual choices).
///
/// Values are not zero-padded: byte `0x0a` renders as `"a"`.
#[must_use]
pub fn to_hex(bytes: &[u8], prefix: &str) -> String {
    let mut out = String::with_capacity(bytes.len() * (prefix.len() + 2));
    for byte in bytes {
        out.push_str(prefix);
        let _ = write!(out, "{byte:x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_hex;

    #[test]
    fn bare_and_prefixed() {
        assert_eq!(to_hex(b"Foo", ""), "466f6f");
        assert_eq!(to_hex(b"Foo", "%"), "%46%6f%6f");
        assert_eq!(to_hex(b"\xc2\xa9", "\\x"), "\\xc2\\xa9");
    }

    #[test]
    fn small_values_are_not_padded() {
        assert_eq!(to_hex(&[0x0a, 0x00, 0xff], ""), "a0ff");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_hex(b"", "%"), "");
    }
}
