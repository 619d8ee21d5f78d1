//! Conversion between UTF-16 code units and UTF-8 bytes.
//!
//! Encoding pairs surrogates left to right: a high surrogate followed by a
//! low surrogate combines into one supplementary code point; a high
//! surrogate followed by anything else stays a unit of its own, so the next
//! unit is re-examined as a potential pair start. What happens to such an
//! unpaired unit then depends on the entry point: [`from_utf16`] refuses
//! it, [`from_utf16_wtf8`] encodes it like any other 3-byte value.
//!
//! Decoding is strict in both entry points: lead and continuation byte
//! patterns, minimal-length encoding, the surrogate gap and the
//! `[0x10000, 0x10FFFF]` ceiling are all enforced, and the first violation
//! aborts the call with no partial output.

use alloc::{string::String, vec::Vec};

use crate::error::{DecodeError, EncodeError};

const HIGH_SURROGATE_MIN: u16 = 0xD800;
const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
const SURROGATE_MAX: u16 = 0xDFFF;

/// Combines the surrogate pair starting at `i`, if one is present.
fn pair_at(units: &[u16], i: usize) -> Option<u32> {
    let high = units[i];
    if !(HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&high) {
        return None;
    }
    let low = *units.get(i + 1)?;
    if low & 0xFC00 != 0xDC00 {
        return None;
    }
    Some((u32::from(high & 0x3FF) << 10) + u32::from(low & 0x3FF) + 0x10000)
}

/// Appends the minimal-length UTF-8 encoding of `cp`.
#[allow(clippy::cast_possible_truncation)]
fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push((cp >> 6) as u8 | 0xC0);
        out.push((cp & 0x3F) as u8 | 0x80);
    } else if cp < 0x10000 {
        out.push((cp >> 12) as u8 | 0xE0);
        out.push(((cp >> 6) & 0x3F) as u8 | 0x80);
        out.push((cp & 0x3F) as u8 | 0x80);
    } else {
        out.push((cp >> 18) as u8 | 0xF0);
        out.push(((cp >> 12) & 0x3F) as u8 | 0x80);
        out.push(((cp >> 6) & 0x3F) as u8 | 0x80);
        out.push((cp & 0x3F) as u8 | 0x80);
    }
}

/// Encodes a sequence of UTF-16 code units as UTF-8, strictly.
///
/// Surrogate pairs combine into supplementary code points. An unpaired
/// surrogate fails the whole call with [`EncodeError::UnpairedSurrogate`];
/// use [`from_utf16_wtf8`] when such input should survive instead.
///
/// # Errors
///
/// Returns [`EncodeError::UnpairedSurrogate`] for a surrogate code unit
/// with no partner.
pub fn from_utf16(units: &[u16]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if let Some(cp) = pair_at(units, i) {
            push_code_point(&mut out, cp);
            i += 2;
        } else {
            let unit = units[i];
            if (HIGH_SURROGATE_MIN..=SURROGATE_MAX).contains(&unit) {
                return Err(EncodeError::UnpairedSurrogate { unit, index: i });
            }
            push_code_point(&mut out, u32::from(unit));
            i += 1;
        }
    }
    Ok(out)
}

/// Encodes a sequence of UTF-16 code units, keeping unpaired surrogates.
///
/// Like [`from_utf16`], except an unpaired surrogate is encoded as an
/// ordinary 3-byte sequence instead of failing, so the function is total.
/// The result is WTF-8 rather than UTF-8 whenever that happens: decoding it
/// back fails with [`DecodeError::LoneSurrogate`]. That asymmetry is
/// intentional; this direction preserves whatever the code units held,
/// while decode only ever produces valid Unicode.
#[must_use]
pub fn from_utf16_wtf8(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if let Some(cp) = pair_at(units, i) {
            push_code_point(&mut out, cp);
            i += 2;
        } else {
            push_code_point(&mut out, u32::from(units[i]));
            i += 1;
        }
    }
    out
}

/// Encodes a native string as a UTF-8 byte buffer.
///
/// Rust strings are UTF-8 already, so this cannot fail; it exists so call
/// sites mixing native strings and byte buffers (see
/// [`concat`](crate::concat())) read uniformly.
#[must_use]
pub fn from_str(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Decodes and validates the code point starting at `at`.
///
/// Returns the code point and the bytes it occupied.
fn decode_code_point(bytes: &[u8], at: usize) -> Result<(u32, usize), DecodeError> {
    let lead = bytes[at];
    if lead & 0x80 == 0 {
        return Ok((u32::from(lead), 1));
    }
    let (width, first) = if lead & 0xE0 == 0xC0 {
        (2, u32::from(lead & 0x1F))
    } else if lead & 0xF0 == 0xE0 {
        (3, u32::from(lead & 0x0F))
    } else if lead & 0xF8 == 0xF0 {
        (4, u32::from(lead & 0x07))
    } else {
        return Err(DecodeError::InvalidLeadByte {
            byte: lead,
            offset: at,
        });
    };
    let Some(tail) = bytes.get(at + 1..at + width) else {
        return Err(DecodeError::TruncatedSequence {
            offset: at,
            expected: width,
        });
    };
    let mut cp = first;
    for (k, &b) in tail.iter().enumerate() {
        if b & 0xC0 != 0x80 {
            return Err(DecodeError::InvalidContinuationByte {
                byte: b,
                offset: at + 1 + k,
            });
        }
        cp = (cp << 6) | u32::from(b & 0x3F);
    }
    match width {
        2 if cp < 0x80 => Err(DecodeError::OverlongEncoding {
            value: cp,
            width,
            offset: at,
        }),
        3 if cp < 0x800 => Err(DecodeError::OverlongEncoding {
            value: cp,
            width,
            offset: at,
        }),
        3 if (u32::from(HIGH_SURROGATE_MIN)..=u32::from(SURROGATE_MAX)).contains(&cp) => {
            Err(DecodeError::LoneSurrogate {
                value: cp,
                offset: at,
            })
        }
        4 if cp < 0x10000 => Err(DecodeError::OverlongEncoding {
            value: cp,
            width,
            offset: at,
        }),
        4 if cp > 0x10FFFF => Err(DecodeError::CodePointOutOfRange {
            value: cp,
            offset: at,
        }),
        _ => Ok((cp, width)),
    }
}

/// Decodes a UTF-8 byte buffer into UTF-16 code units.
///
/// Code points above `0xFFFF` are split back into surrogate pairs.
///
/// # Errors
///
/// Any [`DecodeError`] variant; the call aborts at the first invalid
/// sequence and returns no partial output.
#[allow(clippy::cast_possible_truncation)]
pub fn to_utf16(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut at = 0;
    while at < bytes.len() {
        let (cp, width) = decode_code_point(bytes, at)?;
        if cp > 0xFFFF {
            let v = cp - 0x10000;
            out.push(HIGH_SURROGATE_MIN | (v >> 10) as u16);
            out.push(0xDC00 | (v as u16 & 0x3FF));
        } else {
            out.push(cp as u16);
        }
        at += width;
    }
    Ok(out)
}

/// Decodes a UTF-8 byte buffer into a native string.
///
/// # Errors
///
/// Any [`DecodeError`] variant; the call aborts at the first invalid
/// sequence and returns no partial output.
pub fn to_string(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    let mut at = 0;
    while at < bytes.len() {
        let (cp, width) = decode_code_point(bytes, at)?;
        // decode_code_point only yields scalar values
        out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
        at += width;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{from_str, from_utf16, from_utf16_wtf8, to_string, to_utf16};
    use crate::error::{DecodeError, EncodeError};

    #[test]
    fn pairs_combine() {
        // U+1D306 as the pair D834 DF06
        assert_eq!(
            from_utf16(&[0xD834, 0xDF06]).unwrap(),
            [0xF0, 0x9D, 0x8C, 0x86]
        );
    }

    #[test]
    fn strict_rejects_unpaired() {
        assert_eq!(
            from_utf16(&[0x41, 0xD800]),
            Err(EncodeError::UnpairedSurrogate {
                unit: 0xD800,
                index: 1
            })
        );
        // low surrogate with no preceding high
        assert!(from_utf16(&[0xDC00, 0x41]).is_err());
    }

    #[test]
    fn wtf8_keeps_unpaired() {
        assert_eq!(from_utf16_wtf8(&[0x41, 0xD800]), [0x41, 0xED, 0xA0, 0x80]);
    }

    #[test]
    fn high_surrogate_rescans_next_unit() {
        // D800 cannot pair with D834, but D834 DF06 still pairs.
        let bytes = from_utf16_wtf8(&[0xD800, 0xD834, 0xDF06]);
        assert_eq!(bytes, [0xED, 0xA0, 0x80, 0xF0, 0x9D, 0x8C, 0x86]);
        assert!(matches!(
            to_utf16(&bytes),
            Err(DecodeError::LoneSurrogate {
                value: 0xD800,
                offset: 0
            })
        ));
    }

    #[test]
    fn surrogate_pairs_resplit_on_decode() {
        let units = [0x46, 0xD834, 0xDF06, 0x7A];
        let bytes = from_utf16(&units).unwrap();
        assert_eq!(to_utf16(&bytes).unwrap(), units);
    }

    #[test]
    fn str_and_utf16_agree() {
        let s = "Foo \u{00a9} bar \u{1d306}";
        let units: alloc::vec::Vec<u16> = s.encode_utf16().collect();
        assert_eq!(from_utf16(&units).unwrap(), from_str(s));
        assert_eq!(to_string(&from_str(s)).unwrap(), s);
    }
}
