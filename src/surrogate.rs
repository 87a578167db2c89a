use crate::{
    classify::{NEEDS_SURROGATE_START, SURROGATE_HIGH_START, SURROGATE_LOW_START},
    Codepoint,
};

/// The two UTF-16 units that jointly encode one supplementary-plane codepoint.
///
/// `low` holds the unit that comes first in the stream (the lead surrogate,
/// `0xD800..=0xDBFF`), `high` the unit that follows it (the trail surrogate,
/// `0xDC00..=0xDFFF`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurrogatePair {
    /// The lead surrogate.
    pub low: u16,
    /// The trail surrogate.
    pub high: u16,
}

impl SurrogatePair {
    /// Splits `codepoint` into a surrogate pair.
    ///
    /// Only meaningful for codepoints in `0x10000..=0x10FFFF`; check with
    /// [`needs_surrogates`](crate::needs_surrogates) first. Other values are
    /// wrapped into the ten bit fields without further notice.
    #[inline]
    pub const fn new(codepoint: Codepoint) -> Self {
        let offset = codepoint.wrapping_sub(NEEDS_SURROGATE_START);
        SurrogatePair {
            low: (SURROGATE_LOW_START + ((offset >> 10) & 0x03FF)) as u16,
            high: (SURROGATE_HIGH_START + (offset & 0x03FF)) as u16,
        }
    }

    /// Builds a pair from a lead and a trail surrogate read off a UTF-16 stream.
    #[inline]
    pub const fn from_units(low: u16, high: u16) -> Self {
        SurrogatePair { low, high }
    }

    /// Reassembles the codepoint.
    #[inline]
    pub const fn to_codepoint(self) -> Codepoint {
        ((self.low as Codepoint) << 10)
            .wrapping_add(self.high as Codepoint)
            .wrapping_sub((SURROGATE_LOW_START << 10) + SURROGATE_HIGH_START)
            .wrapping_add(NEEDS_SURROGATE_START)
    }
}

impl From<SurrogatePair> for Codepoint {
    fn from(pair: SurrogatePair) -> Self {
        pair.to_codepoint()
    }
}
