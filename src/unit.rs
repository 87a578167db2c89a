use crate::{
    classify::{
        is_continuation_byte, is_lead_surrogate, is_trail_surrogate, is_valid_codepoint,
        needs_surrogates, REPLACEMENT_CHARACTER,
    },
    surrogate::SurrogatePair,
    Codepoint,
};
use std::fmt;

/// The three Unicode encoding forms, one per code unit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 8 bit units.
    Utf8,
    /// 16 bit units, platform endianness.
    Utf16,
    /// 32 bit units, platform endianness.
    Utf32,
}

impl Encoding {
    /// Width of one code unit in bytes.
    pub const fn unit_width(self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16 => 2,
            Encoding::Utf32 => 4,
        }
    }

    /// Largest number of units a single codepoint can occupy.
    pub const fn max_units(self) -> usize {
        match self {
            Encoding::Utf8 => 4,
            Encoding::Utf16 => 2,
            Encoding::Utf32 => 1,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
            Encoding::Utf32 => write!(f, "UTF-32"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit of one of the Unicode encoding forms.
///
/// `u8` is UTF-8, `u16` is UTF-16 and `u32` is UTF-32. Everything else in this crate is
/// generic over this trait, so the same function validates, steps through or converts
/// any of the three.
pub trait Unit: sealed::Sealed + Copy + Default + Eq + Ord + fmt::Debug + 'static {
    /// The encoding form this unit belongs to.
    const ENCODING: Encoding;

    /// Zero-extends the unit into a codepoint-sized value.
    fn to_u32(self) -> u32;

    /// Truncates `value` to the unit width.
    fn from_u32(value: u32) -> Self;

    /// Returns true for units that can never start a unit group:
    /// UTF-8 continuation bytes and UTF-16 trail surrogates.
    fn is_trailing(self) -> bool;

    /// Decodes the unit group at the start of `units`.
    ///
    /// Returns the codepoint (`None` if the group is malformed) and the number of units
    /// the group occupies. The count is at least 1 for non-empty input, so callers that
    /// step by it always make progress. A malformed UTF-8 group extends over every
    /// continuation byte that follows its first byte.
    fn decode(units: &[Self]) -> (Option<Codepoint>, usize);

    /// Decodes the unit group that ends at the end of `units`.
    ///
    /// Returns the same partition as repeated [`decode`](Unit::decode) calls from the
    /// front would produce, so stepping backward and forward always agree.
    fn decode_back(units: &[Self]) -> (Option<Codepoint>, usize);

    /// Number of units [`encode`](Unit::encode) writes for `codepoint`.
    fn units_for(codepoint: Codepoint) -> usize;

    /// Writes the minimal encoding of `codepoint` into `buf`, returning the unit count.
    /// Surrogates and values above U+10FFFF are written as U+FFFD.
    fn encode(codepoint: Codepoint, buf: &mut [Self; 4]) -> usize;
}

#[inline]
fn malformed_utf8_len(units: &[u8]) -> usize {
    1 + units[1..]
        .iter()
        .take_while(|&&byte| is_continuation_byte(byte))
        .count()
}

impl Unit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        value as u8
    }

    #[inline]
    fn is_trailing(self) -> bool {
        is_continuation_byte(self)
    }

    fn decode(units: &[u8]) -> (Option<Codepoint>, usize) {
        let lead = match units.first() {
            Some(&lead) => lead,
            None => return (None, 0),
        };
        if lead < 0x80 {
            return (Some(u32::from(lead)), 1);
        }
        // the first continuation byte carries the overlong, surrogate and range limits
        let (len, first_cont) = match lead {
            0xC2..=0xDF => (2, 0x80..=0xBF),
            0xE0 => (3, 0xA0..=0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
            0xED => (3, 0x80..=0x9F),
            0xF0 => (4, 0x90..=0xBF),
            0xF1..=0xF3 => (4, 0x80..=0xBF),
            0xF4 => (4, 0x80..=0x8F),
            _ => return (None, malformed_utf8_len(units)),
        };
        match units.get(1) {
            Some(byte) if first_cont.contains(byte) => {}
            _ => return (None, malformed_utf8_len(units)),
        }
        for idx in 2..len {
            match units.get(idx) {
                Some(&byte) if is_continuation_byte(byte) => {}
                _ => return (None, idx),
            }
        }
        let mut value = u32::from(lead & (0x7F >> len));
        for &byte in &units[1..len] {
            value = (value << 6) | u32::from(byte & 0x3F);
        }
        (Some(value), len)
    }

    fn decode_back(units: &[u8]) -> (Option<Codepoint>, usize) {
        let end = units.len();
        if end == 0 {
            return (None, 0);
        }
        let start = units
            .iter()
            .rposition(|&byte| !is_continuation_byte(byte))
            .unwrap_or(0);
        let (value, len) = Self::decode(&units[start..]);
        if start + len == end {
            (value, len)
        } else {
            // surplus continuation bytes behind a complete group form their own group
            (None, end - start - len)
        }
    }

    #[inline]
    fn units_for(codepoint: Codepoint) -> usize {
        match codepoint {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            0x1_0000..=0x10_FFFF => 4,
            // U+FFFD
            _ => 3,
        }
    }

    fn encode(codepoint: Codepoint, buf: &mut [u8; 4]) -> usize {
        let cp = if is_valid_codepoint(codepoint) {
            codepoint
        } else {
            REPLACEMENT_CHARACTER
        };
        match cp {
            0..=0x7F => {
                buf[0] = cp as u8;
                1
            }
            0x80..=0x7FF => {
                buf[0] = 0xC0 | (cp >> 6 & 0x1F) as u8;
                buf[1] = 0x80 | (cp & 0x3F) as u8;
                2
            }
            0x800..=0xFFFF => {
                buf[0] = 0xE0 | (cp >> 12 & 0x0F) as u8;
                buf[1] = 0x80 | (cp >> 6 & 0x3F) as u8;
                buf[2] = 0x80 | (cp & 0x3F) as u8;
                3
            }
            _ => {
                buf[0] = 0xF0 | (cp >> 18 & 0x07) as u8;
                buf[1] = 0x80 | (cp >> 12 & 0x3F) as u8;
                buf[2] = 0x80 | (cp >> 6 & 0x3F) as u8;
                buf[3] = 0x80 | (cp & 0x3F) as u8;
                4
            }
        }
    }
}

impl Unit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        value as u16
    }

    #[inline]
    fn is_trailing(self) -> bool {
        is_trail_surrogate(u32::from(self))
    }

    fn decode(units: &[u16]) -> (Option<Codepoint>, usize) {
        let first = match units.first() {
            Some(&first) => first,
            None => return (None, 0),
        };
        let value = u32::from(first);
        if is_lead_surrogate(value) {
            match units.get(1) {
                Some(&second) if is_trail_surrogate(u32::from(second)) => (
                    Some(SurrogatePair::from_units(first, second).to_codepoint()),
                    2,
                ),
                // the unit after an unpaired lead starts the next group
                _ => (None, 1),
            }
        } else if is_trail_surrogate(value) {
            (None, 1)
        } else {
            (Some(value), 1)
        }
    }

    fn decode_back(units: &[u16]) -> (Option<Codepoint>, usize) {
        match *units {
            [] => (None, 0),
            [.., lead, trail]
                if is_lead_surrogate(u32::from(lead)) && is_trail_surrogate(u32::from(trail)) =>
            {
                (Some(SurrogatePair::from_units(lead, trail).to_codepoint()), 2)
            }
            [.., last] => (Self::decode(&[last]).0, 1),
        }
    }

    #[inline]
    fn units_for(codepoint: Codepoint) -> usize {
        if needs_surrogates(codepoint) {
            2
        } else {
            1
        }
    }

    fn encode(codepoint: Codepoint, buf: &mut [u16; 4]) -> usize {
        if needs_surrogates(codepoint) {
            let pair = SurrogatePair::new(codepoint);
            buf[0] = pair.low;
            buf[1] = pair.high;
            2
        } else {
            buf[0] = if is_valid_codepoint(codepoint) {
                codepoint as u16
            } else {
                REPLACEMENT_CHARACTER as u16
            };
            1
        }
    }
}

impl Unit for u32 {
    const ENCODING: Encoding = Encoding::Utf32;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        value
    }

    #[inline]
    fn is_trailing(self) -> bool {
        false
    }

    #[inline]
    fn decode(units: &[u32]) -> (Option<Codepoint>, usize) {
        match units.first() {
            Some(&value) => (is_valid_codepoint(value).then_some(value), 1),
            None => (None, 0),
        }
    }

    #[inline]
    fn decode_back(units: &[u32]) -> (Option<Codepoint>, usize) {
        match units.last() {
            Some(&value) => (is_valid_codepoint(value).then_some(value), 1),
            None => (None, 0),
        }
    }

    #[inline]
    fn units_for(_codepoint: Codepoint) -> usize {
        1
    }

    #[inline]
    fn encode(codepoint: Codepoint, buf: &mut [u32; 4]) -> usize {
        buf[0] = if is_valid_codepoint(codepoint) {
            codepoint
        } else {
            REPLACEMENT_CHARACTER
        };
        1
    }
}

/// Number of `U` units that [`to_utf`](crate::to_utf) writes for `codepoint`.
///
/// Invalid codepoints count as U+FFFD, which is what gets written for them.
#[inline]
pub fn units_for<U: Unit>(codepoint: Codepoint) -> usize {
    U::units_for(codepoint)
}
