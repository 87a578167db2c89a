use crate::{
    error::{Error, Result},
    unit::Unit,
};

const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// Returns the offset of the first malformed unit group in `units`, or `units.len()`
/// if the whole slice is well-formed.
///
/// A group is malformed if it is truncated, overlong, starts with a stray continuation
/// byte or trail surrogate, encodes a surrogate directly, or lies above U+10FFFF.
pub fn invalid<U: Unit>(units: &[U]) -> usize {
    let mut pos = 0;
    while pos < units.len() {
        if units[pos].to_u32() < 0x80 {
            pos += 1;
            continue;
        }
        match U::decode(&units[pos..]) {
            (Some(_), len) => pos += len,
            (None, _) => return pos,
        }
    }
    units.len()
}

/// Returns true if `units` is well-formed in its encoding.
#[inline]
pub fn valid<U: Unit>(units: &[U]) -> bool {
    invalid(units) == units.len()
}

/// Like [`valid`], but reports where the first malformed group starts.
pub fn validate<U: Unit>(units: &[U]) -> Result<()> {
    let offset = invalid(units);
    if offset == units.len() {
        Ok(())
    } else {
        Err(Error::InvalidSequence {
            offset,
            encoding: U::ENCODING,
        })
    }
}

#[inline]
fn load_word(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_ne_bytes(buf)
}

/// Returns the offset of the first byte with the high bit set, or `bytes.len()` if
/// every byte is ASCII.
///
/// Agrees with [`invalid`] on input that is pure ASCII.
pub fn invalid_ascii(bytes: &[u8]) -> usize {
    let mut offset = 0;
    for chunk in bytes.chunks_exact(16) {
        if (load_word(chunk) | load_word(&chunk[8..])) & HIGH_BITS != 0 {
            break;
        }
        offset += 16;
    }
    bytes[offset..]
        .iter()
        .position(|&byte| byte >= 0x80)
        .map_or(bytes.len(), |idx| offset + idx)
}

/// Returns true if every byte of `bytes` is ASCII.
#[inline]
pub fn valid_ascii(bytes: &[u8]) -> bool {
    invalid_ascii(bytes) == bytes.len()
}

/// Like [`valid_ascii`], but reports the first non-ASCII byte.
pub fn validate_ascii(bytes: &[u8]) -> Result<()> {
    let offset = invalid_ascii(bytes);
    if offset == bytes.len() {
        Ok(())
    } else {
        Err(Error::NotAscii { offset })
    }
}

/// Returns true if the first non-ASCII group of `bytes` is a well-formed UTF-8
/// multi-byte sequence.
///
/// Pure ASCII input has no UTF-8 in it and yields false. This is the cheap test used
/// to tell UTF-8 from a legacy 8-bit charset.
pub fn has_utf8(bytes: &[u8]) -> bool {
    let start = invalid_ascii(bytes);
    start < bytes.len() && <u8 as Unit>::decode(&bytes[start..]).0.is_some()
}
