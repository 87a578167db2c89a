use crate::Codepoint;

/// The replacement character U+FFFD, substituted for malformed input.
pub const REPLACEMENT_CHARACTER: Codepoint = 0xFFFD;
/// The largest legal Unicode codepoint.
pub const CODEPOINT_MAX: Codepoint = 0x10FFFF;
/// First codepoint of the lead (high-order) surrogate band.
pub const SURROGATE_LOW_START: Codepoint = 0xD800;
/// Last codepoint of the lead (high-order) surrogate band.
pub const SURROGATE_LOW_END: Codepoint = 0xDBFF;
/// First codepoint of the trail (low-order) surrogate band.
pub const SURROGATE_HIGH_START: Codepoint = 0xDC00;
/// Last codepoint of the trail (low-order) surrogate band.
pub const SURROGATE_HIGH_END: Codepoint = 0xDFFF;
/// First codepoint that needs a surrogate pair in UTF-16.
pub const NEEDS_SURROGATE_START: Codepoint = 0x10000;
/// Last codepoint that fits a surrogate pair in UTF-16.
pub const NEEDS_SURROGATE_END: Codepoint = 0x10FFFF;

const TAG_MASK: u8 = 0b1100_0000;
const TAG_CONT: u8 = 0b1000_0000;
const TAG_START: u8 = 0b1100_0000;

/// Returns true if `byte` is a complete one-byte UTF-8 sequence (ASCII).
#[inline]
pub const fn is_single_byte(byte: u8) -> bool {
    byte < 0x80
}

/// Returns true if `byte` starts a multi-byte UTF-8 sequence.
///
/// This is a bit-pattern test only: `0xC0`, `0xC1` and `0xF5..=0xFF` are start bytes
/// here even though no well-formed sequence begins with them.
#[inline]
pub const fn is_start_byte(byte: u8) -> bool {
    byte & TAG_MASK == TAG_START
}

/// Returns true if `byte` is a UTF-8 continuation byte (`0x80..=0xBF`).
#[inline]
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & TAG_MASK == TAG_CONT
}

/// Returns true if `unit` is a UTF-16 lead surrogate (`0xD800..=0xDBFF`).
#[inline]
pub const fn is_lead_surrogate(unit: Codepoint) -> bool {
    unit & 0x1F_FC00 == SURROGATE_LOW_START
}

/// Returns true if `unit` is a UTF-16 trail surrogate (`0xDC00..=0xDFFF`).
#[inline]
pub const fn is_trail_surrogate(unit: Codepoint) -> bool {
    unit & 0x1F_FC00 == SURROGATE_HIGH_START
}

/// Returns true if `unit` lies anywhere in the surrogate band (`0xD800..=0xDFFF`).
#[inline]
pub const fn is_surrogate(unit: Codepoint) -> bool {
    unit & 0x1F_F800 == SURROGATE_LOW_START
}

/// Returns true if `codepoint` is a Unicode scalar value.
#[inline]
pub const fn is_valid_codepoint(codepoint: Codepoint) -> bool {
    codepoint <= CODEPOINT_MAX && !is_surrogate(codepoint)
}

/// Returns true if `codepoint` has to be written as a surrogate pair in UTF-16.
#[inline]
pub const fn needs_surrogates(codepoint: Codepoint) -> bool {
    codepoint >= NEEDS_SURROGATE_START && codepoint <= NEEDS_SURROGATE_END
}
