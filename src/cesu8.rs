//! CESU-8 and big-endian UTF-16 byte streams.
//!
//! CESU-8 encodes every UTF-16 code unit on its own with the UTF-8 bit layout, so a
//! supplementary-plane codepoint becomes two three-byte groups (one per surrogate)
//! instead of one four-byte group. It is what Java's modified UTF-8 and some databases
//! store. BMP text is byte-identical in CESU-8 and UTF-8.

use crate::{
    classify::{is_continuation_byte, needs_surrogates, REPLACEMENT_CHARACTER},
    convert::{convert, convert_into},
    encode::to_utf,
    surrogate::SurrogatePair,
    unit::Unit,
};

/// Writes a single UTF-16 unit in the three-byte UTF-8 layout, surrogates included.
fn push_unit3(unit: u16, out: &mut Vec<u8>) {
    out.push(0xE0 | (unit >> 12) as u8);
    out.push(0x80 | (unit >> 6 & 0x3F) as u8);
    out.push(0x80 | (unit & 0x3F) as u8);
}

/// Decodes a three-byte group that carries a surrogate in `range`, returning the unit.
fn encoded_surrogate(bytes: &[u8], range: std::ops::RangeInclusive<u8>) -> Option<u16> {
    match *bytes {
        [0xED, second, third, ..] if range.contains(&second) && is_continuation_byte(third) => {
            Some(0xD000 | u16::from(second & 0x3F) << 6 | u16::from(third & 0x3F))
        }
        _ => None,
    }
}

/// Returns `utf8` re-encoded as CESU-8.
///
/// Malformed groups become U+FFFD.
pub fn utf8_to_cesu8(utf8: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(utf8.len() + utf8.len() / 2);
    let mut replaced = 0usize;
    let mut rest = utf8;
    while !rest.is_empty() {
        let (value, len) = u8::decode(rest);
        rest = &rest[len..];
        match value {
            Some(cp) if needs_surrogates(cp) => {
                let pair = SurrogatePair::new(cp);
                push_unit3(pair.low, &mut out);
                push_unit3(pair.high, &mut out);
            }
            Some(cp) => to_utf(cp, &mut out),
            None => {
                replaced += 1;
                to_utf(REPLACEMENT_CHARACTER, &mut out);
            }
        }
    }
    if replaced > 0 {
        log::debug!("replaced {} malformed sequence(s) while writing CESU-8", replaced);
    }
    out
}

/// Returns CESU-8 input decoded to standard UTF-8.
///
/// Pairs of encoded surrogates are joined into one four-byte group. An encoded surrogate
/// without its partner and every other malformed group become U+FFFD. Four-byte groups,
/// which CESU-8 never produces, are accepted as they are.
pub fn cesu8_to_utf8(cesu8: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(cesu8.len());
    let mut replaced = 0usize;
    let mut pos = 0;
    while pos < cesu8.len() {
        let rest = &cesu8[pos..];
        if let Some(low) = encoded_surrogate(rest, 0xA0..=0xAF) {
            if let Some(high) = encoded_surrogate(&rest[3..], 0xB0..=0xBF) {
                to_utf(SurrogatePair::from_units(low, high).to_codepoint(), &mut out);
                pos += 6;
                continue;
            }
        }
        if encoded_surrogate(rest, 0xA0..=0xBF).is_some() {
            replaced += 1;
            to_utf(REPLACEMENT_CHARACTER, &mut out);
            pos += 3;
            continue;
        }
        let (value, len) = u8::decode(rest);
        pos += len;
        match value {
            Some(_) => out.extend_from_slice(&rest[..len]),
            None => {
                replaced += 1;
                to_utf(REPLACEMENT_CHARACTER, &mut out);
            }
        }
    }
    if replaced > 0 {
        log::debug!("replaced {} malformed sequence(s) while reading CESU-8", replaced);
    }
    out
}

/// Returns `utf8` as big-endian UTF-16 bytes. Malformed groups become U+FFFD.
pub fn utf8_to_utf16_bytes(utf8: &[u8]) -> Vec<u8> {
    let wide: Vec<u16> = convert(utf8);
    wide.iter().flat_map(|unit| unit.to_be_bytes()).collect()
}

/// Returns big-endian UTF-16 bytes decoded to UTF-8.
///
/// Unpaired surrogates and a dangling odd byte at the end become U+FFFD.
pub fn utf16_bytes_to_utf8(bytes: &[u8]) -> Vec<u8> {
    let chunks = bytes.chunks_exact(2);
    let odd = !chunks.remainder().is_empty();
    let wide: Vec<u16> = chunks
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    let mut out = Vec::with_capacity(wide.len() * 3 / 2 + 3);
    convert_into(&wide, &mut out);
    if odd {
        log::debug!("odd trailing byte in UTF-16 input");
        to_utf(REPLACEMENT_CHARACTER, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "testäöü test日本語abc中文Русский";

    #[test]
    fn test_bmp_is_utf8() {
        assert_eq!(SAMPLE.as_bytes(), &utf8_to_cesu8(SAMPLE.as_bytes())[..]);
        assert_eq!(SAMPLE.as_bytes(), &cesu8_to_utf8(SAMPLE.as_bytes())[..]);
    }

    #[test]
    fn test_supplementary_split() {
        let cesu = utf8_to_cesu8("😀".as_bytes());
        assert_eq!(vec![0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80], cesu);
        assert_eq!("😀".as_bytes(), &cesu8_to_utf8(&cesu)[..]);
    }

    #[test]
    fn test_cesu8_roundtrip_full_range() {
        let mut text = String::new();
        for cp in (0x10000..=0x10FFFF).step_by(0x101) {
            if let Some(ch) = char::from_u32(cp) {
                text.push(ch);
                text.push('x');
            }
        }
        let cesu = utf8_to_cesu8(text.as_bytes());
        assert!(!cesu.iter().any(|&byte| byte >= 0xF0));
        assert_eq!(text.as_bytes(), &cesu8_to_utf8(&cesu)[..]);
    }

    #[test]
    fn test_cesu8_lone_surrogates() {
        // lone lead, then lone trail, then a lead followed by ASCII
        let input = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80, 0xED, 0xA0, 0x80, 0x41];
        let out = cesu8_to_utf8(&input[3..]);
        assert_eq!("\u{FFFD}\u{FFFD}A".as_bytes(), &out[..]);
        let out = cesu8_to_utf8(&[0xED, 0xA0]);
        assert_eq!("\u{FFFD}".as_bytes(), &out[..]);
    }

    #[test]
    fn test_cesu8_accepts_four_byte_groups() {
        assert_eq!("𐑅".as_bytes(), &cesu8_to_utf8("𐑅".as_bytes())[..]);
    }

    #[test]
    fn test_utf16_bytes() {
        let bytes = utf8_to_utf16_bytes(SAMPLE.as_bytes());
        assert_eq!(47, SAMPLE.len());
        assert_eq!(54, bytes.len());
        assert_eq!(&[0x00, 0x74, 0x00, 0x65][..], &bytes[..4]);
        assert_eq!(SAMPLE.as_bytes(), &utf16_bytes_to_utf8(&bytes)[..]);

        let bytes = utf8_to_utf16_bytes("😀".as_bytes());
        assert_eq!(vec![0xD8, 0x3D, 0xDE, 0x00], bytes);
        assert_eq!("😀".as_bytes(), &utf16_bytes_to_utf8(&bytes)[..]);
    }

    #[test]
    fn test_utf16_bytes_malformed() {
        assert_eq!(
            "A\u{FFFD}".as_bytes(),
            &utf16_bytes_to_utf8(&[0x00, 0x41, 0x00])[..]
        );
        assert_eq!(
            "\u{FFFD}B".as_bytes(),
            &utf16_bytes_to_utf8(&[0xD8, 0x3D, 0x00, 0x42])[..]
        );
        assert_eq!("\u{FFFD}".as_bytes(), &utf16_bytes_to_utf8(&[0xDE, 0x00])[..]);
    }
}
