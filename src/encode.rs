use crate::{unit::Unit, Codepoint};
use smallvec::SmallVec;

/// An inline buffer large enough for the encoding of one codepoint in any width.
pub type UnitBuf<U> = SmallVec<[U; 4]>;

/// An appendable output container for code units.
///
/// Implemented for `Vec<U>` and `SmallVec`, so the output of every encoding operation
/// can go straight into the caller's own storage.
pub trait Sink<U: Unit> {
    /// Appends a single unit.
    fn push_unit(&mut self, unit: U);

    /// Appends a run of units.
    fn extend_units(&mut self, units: &[U]) {
        for &unit in units {
            self.push_unit(unit);
        }
    }

    /// Hint that about `additional` more units will be appended.
    fn reserve_units(&mut self, _additional: usize) {}
}

impl<U: Unit> Sink<U> for Vec<U> {
    #[inline]
    fn push_unit(&mut self, unit: U) {
        self.push(unit);
    }

    #[inline]
    fn extend_units(&mut self, units: &[U]) {
        self.extend_from_slice(units);
    }

    #[inline]
    fn reserve_units(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<A> Sink<A::Item> for SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Unit,
{
    #[inline]
    fn push_unit(&mut self, unit: A::Item) {
        self.push(unit);
    }

    #[inline]
    fn extend_units(&mut self, units: &[A::Item]) {
        self.extend_from_slice(units);
    }

    #[inline]
    fn reserve_units(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

/// Appends the minimal encoding of `codepoint` to `sink`.
///
/// The unit width is taken from the sink. Codepoints above U+FFFF become a surrogate pair
/// in UTF-16. Surrogates and values above U+10FFFF are written as U+FFFD.
#[inline]
pub fn to_utf<U, S>(codepoint: Codepoint, sink: &mut S)
where
    U: Unit,
    S: Sink<U> + ?Sized,
{
    let mut buf = [U::default(); 4];
    let len = U::encode(codepoint, &mut buf);
    sink.extend_units(&buf[..len]);
}

/// Returns the encoding of `codepoint` in an inline buffer.
#[inline]
pub fn to_utf_buf<U: Unit>(codepoint: Codepoint) -> UnitBuf<U> {
    let mut out = UnitBuf::new();
    to_utf(codepoint, &mut out);
    out
}

/// Appends ISO-8859-1 encoded `latin1` to `sink`.
///
/// Every byte is the codepoint of the same value, so there is nothing to validate.
pub fn latin1_to_utf<U, S>(latin1: &[u8], sink: &mut S)
where
    U: Unit,
    S: Sink<U> + ?Sized,
{
    sink.reserve_units(latin1.len());
    for &byte in latin1 {
        if byte < 0x80 {
            sink.push_unit(U::from_u32(u32::from(byte)));
        } else {
            to_utf(u32::from(byte), sink);
        }
    }
}

/// Returns ISO-8859-1 encoded `latin1` as `U` units.
pub fn latin1_to_utf_vec<U: Unit>(latin1: &[u8]) -> Vec<U> {
    let mut out = Vec::new();
    latin1_to_utf(latin1, &mut out);
    out
}
