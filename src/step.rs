use crate::{
    classify::REPLACEMENT_CHARACTER,
    error::{Error, Result},
    unit::{Encoding, Unit},
    Codepoint,
};
use std::{fmt, iter::FusedIterator};

/// Decodes the codepoint at `*pos` and advances `*pos` past it.
///
/// Malformed groups decode as U+FFFD and are skipped as a whole, so `*pos` always moves
/// by at least one unit. Returns `None` only when `*pos` is already at (or past) the end.
#[inline]
pub fn codepoint<U: Unit>(units: &[U], pos: &mut usize) -> Option<Codepoint> {
    let rest = units.get(*pos..).filter(|rest| !rest.is_empty())?;
    let (value, len) = U::decode(rest);
    *pos += len;
    Some(value.unwrap_or(REPLACEMENT_CHARACTER))
}

/// Like [`codepoint`], but reports a malformed group as an error carrying its offset.
///
/// `*pos` is advanced past the malformed group either way.
pub fn try_codepoint<U: Unit>(units: &[U], pos: &mut usize) -> Option<Result<Codepoint>> {
    let start = *pos;
    let rest = units.get(start..).filter(|rest| !rest.is_empty())?;
    let (value, len) = U::decode(rest);
    *pos += len;
    Some(value.ok_or(Error::InvalidSequence {
        offset: start,
        encoding: U::ENCODING,
    }))
}

/// Decodes the codepoint that ends at `*pos` and moves `*pos` back to its start.
///
/// Returns `None` at the beginning of `units`.
pub fn prev_codepoint<U: Unit>(units: &[U], pos: &mut usize) -> Option<Codepoint> {
    let end = (*pos).min(units.len());
    if end == 0 {
        *pos = 0;
        return None;
    }
    let (value, len) = U::decode_back(&units[..end]);
    *pos = end - len;
    Some(value.unwrap_or(REPLACEMENT_CHARACTER))
}

/// Moves a position that points into the middle of a unit group forward to the start
/// of the next group.
pub fn sync<U: Unit>(units: &[U], pos: &mut usize) {
    match U::ENCODING {
        Encoding::Utf8 => {
            while *pos < units.len() && units[*pos].is_trailing() {
                *pos += 1;
            }
        }
        Encoding::Utf16 => {
            if *pos < units.len() && units[*pos].is_trailing() {
                *pos += 1;
            }
        }
        Encoding::Utf32 => {}
    }
}

/// Advances `*pos` by `n` codepoints.
///
/// Returns false if fewer than `n` codepoints were left, in which case `*pos` is left
/// at the end of `units`.
pub fn increment<U: Unit>(units: &[U], pos: &mut usize, n: usize) -> bool {
    if *pos > units.len() {
        *pos = units.len();
    }
    if U::ENCODING == Encoding::Utf32 {
        let step = n.min(units.len() - *pos);
        *pos += step;
        return step == n;
    }
    for _ in 0..n {
        if *pos == units.len() {
            return false;
        }
        *pos += U::decode(&units[*pos..]).1;
    }
    true
}

/// Moves `*pos` back by `n` codepoints.
///
/// Returns false if fewer than `n` codepoints preceded `*pos`, in which case `*pos` is
/// left at 0.
pub fn decrement<U: Unit>(units: &[U], pos: &mut usize, n: usize) -> bool {
    if *pos > units.len() {
        *pos = units.len();
    }
    if U::ENCODING == Encoding::Utf32 {
        let step = n.min(*pos);
        *pos -= step;
        return step == n;
    }
    for _ in 0..n {
        if *pos == 0 {
            return false;
        }
        *pos -= U::decode_back(&units[..*pos]).1;
    }
    true
}

/// Counts the codepoints in `units`. Every malformed group counts as one.
#[inline]
pub fn count<U: Unit>(units: &[U]) -> usize {
    count_max(units, usize::MAX)
}

/// Counts the codepoints in `units`, stopping once `max` have been seen.
///
/// Use this to bound the work on long buffers when only "at least `max`" matters.
pub fn count_max<U: Unit>(units: &[U], max: usize) -> usize {
    if U::ENCODING == Encoding::Utf32 {
        return units.len().min(max);
    }
    let mut count = 0;
    let mut pos = 0;
    while pos < units.len() && count < max {
        // ASCII runs need no decoding
        let ascii = units[pos..]
            .iter()
            .take(max - count)
            .take_while(|unit| unit.to_u32() < 0x80)
            .count();
        pos += ascii;
        count += ascii;
        if pos == units.len() || count == max {
            break;
        }
        pos += U::decode(&units[pos..]).1;
        count += 1;
    }
    count
}

/// Returns the codepoint at codepoint index `n`, or `None` if `units` is shorter.
pub fn at<U: Unit>(units: &[U], n: usize) -> Option<Codepoint> {
    let mut pos = 0;
    if !increment(units, &mut pos, n) {
        return None;
    }
    codepoint(units, &mut pos)
}

/// Returns an iterator over the codepoints of `units`.
pub fn codepoints<U: Unit>(units: &[U]) -> Codepoints<'_, U> {
    Codepoints { data: units }
}

/// A double-ended iterator over the codepoints of a unit slice.
///
/// Malformed groups are yielded as U+FFFD. Created by [`codepoints`].
#[derive(Clone, Copy)]
pub struct Codepoints<'a, U: Unit> {
    data: &'a [U],
}

impl<'a, U: Unit> Codepoints<'a, U> {
    /// Returns the units that have not been yielded yet.
    pub fn as_units(&self) -> &'a [U] {
        self.data
    }
}

impl<'a, U: Unit> Iterator for Codepoints<'a, U> {
    type Item = Codepoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let (value, len) = U::decode(self.data);
        self.data = &self.data[len..];
        Some(value.unwrap_or(REPLACEMENT_CHARACTER))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.data.len();
        // a malformed UTF-8 group has no length limit
        let lower = match U::ENCODING {
            Encoding::Utf8 => usize::from(!self.data.is_empty()),
            Encoding::Utf16 => (len + 1) / 2,
            Encoding::Utf32 => len,
        };
        (lower, Some(len))
    }

    fn count(self) -> usize {
        count(self.data)
    }
}

impl<'a, U: Unit> DoubleEndedIterator for Codepoints<'a, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let (value, len) = U::decode_back(self.data);
        self.data = &self.data[..self.data.len() - len];
        Some(value.unwrap_or(REPLACEMENT_CHARACTER))
    }
}

impl<U: Unit> FusedIterator for Codepoints<'_, U> {}

impl<U: Unit> fmt::Debug for Codepoints<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codepoints(")?;
        f.debug_list().entries(*self).finish()?;
        write!(f, ")")
    }
}

/// A position inside a unit slice that only ever rests on group boundaries.
///
/// Bundles the slice and the position that the free stepping functions take separately.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a, U: Unit> {
    units: &'a [U],
    pos: usize,
}

impl<'a, U: Unit> Cursor<'a, U> {
    /// A cursor at the start of `units`.
    pub fn new(units: &'a [U]) -> Self {
        Cursor { units, pos: 0 }
    }

    /// A cursor at the end of `units`.
    pub fn at_end(units: &'a [U]) -> Self {
        Cursor {
            units,
            pos: units.len(),
        }
    }

    /// The current unit offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True if the cursor sits at the end of its slice.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.units.len()
    }

    /// True if the cursor sits at the start of its slice.
    pub fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    /// The units before the cursor.
    pub fn consumed(&self) -> &'a [U] {
        &self.units[..self.pos]
    }

    /// The units from the cursor on.
    pub fn remaining(&self) -> &'a [U] {
        &self.units[self.pos..]
    }

    /// Decodes the codepoint at the cursor and moves past it.
    pub fn next_codepoint(&mut self) -> Option<Codepoint> {
        codepoint(self.units, &mut self.pos)
    }

    /// Moves back over the previous codepoint and returns it.
    pub fn prev_codepoint(&mut self) -> Option<Codepoint> {
        prev_codepoint(self.units, &mut self.pos)
    }

    /// Moves forward by `n` codepoints, see [`increment`].
    pub fn increment(&mut self, n: usize) -> bool {
        increment(self.units, &mut self.pos, n)
    }

    /// Moves back by `n` codepoints, see [`decrement`].
    pub fn decrement(&mut self, n: usize) -> bool {
        decrement(self.units, &mut self.pos, n)
    }
}

impl<U: Unit> fmt::Debug for Cursor<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("encoding", &U::ENCODING)
            .field("position", &self.pos)
            .field("len", &self.units.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "testäöü test日本語abc中文Русский ..";

    #[test]
    fn test_increment_utf8() {
        let input = SAMPLE.as_bytes();
        let mut pos = 0;
        assert!(increment(input, &mut pos, 0));
        assert_eq!(0, pos);
        assert!(increment(input, &mut pos, 1));
        assert_eq!(b'e', input[pos]);
        assert!(increment(input, &mut pos, 6));
        assert_eq!(b' ', input[pos]);
        assert!(increment(input, &mut pos, 20));
        assert_eq!(b' ', input[pos]);
        assert!(!increment(input, &mut pos, 5));
        assert_eq!(input.len(), pos);
    }

    #[test]
    fn test_increment_utf32() {
        let input: Vec<u32> = SAMPLE.chars().map(u32::from).collect();
        let mut pos = 0;
        assert!(increment(&input, &mut pos, 1));
        assert_eq!(u32::from('e'), input[pos]);
        assert!(increment(&input, &mut pos, 26));
        assert_eq!(u32::from(' '), input[pos]);
        assert!(increment(&input, &mut pos, 3));
        assert_eq!(input.len(), pos);
        assert!(!increment(&input, &mut pos, 1));
    }

    #[test]
    fn test_decrement_utf8() {
        let input = SAMPLE.as_bytes();
        let mut pos = input.len();
        assert!(decrement(input, &mut pos, 0));
        assert_eq!(input.len(), pos);
        assert!(decrement(input, &mut pos, 1));
        assert_eq!(b'.', input[pos]);
        assert!(decrement(input, &mut pos, 12));
        assert_eq!(b'c', input[pos]);
        assert!(decrement(input, &mut pos, 6));
        assert_eq!(b't', input[pos]);
        assert!(!decrement(input, &mut pos, 12));
        assert_eq!(0, pos);
    }

    #[test]
    fn test_decrement_utf16() {
        let input: Vec<u16> = SAMPLE.encode_utf16().chain("𐑅!".encode_utf16()).collect();
        let mut pos = input.len();
        assert!(decrement(&input, &mut pos, 2));
        assert_eq!(input.len() - 3, pos);
        assert_eq!(Some(0x10445), codepoint(&input, &mut pos));
        assert!(decrement(&input, &mut pos, 31));
        assert_eq!(0, pos);
        assert!(!decrement(&input, &mut pos, 1));
    }

    #[test]
    fn test_out_of_range_position_is_clamped() {
        let input = b"abc";
        let mut pos = 10;
        assert!(!increment(&input[..], &mut pos, 1));
        assert_eq!(3, pos);
        let mut pos = 10;
        assert!(decrement(&input[..], &mut pos, 1));
        assert_eq!(2, pos);
        let mut pos = 10;
        assert_eq!(None, codepoint(&input[..], &mut pos));
    }

    #[test]
    fn test_codepoint_replaces_malformed() {
        let input: [u8; 6] = [0x41, 0xC0, 0xAF, 0xE6, 0x97, 0xA5];
        let mut pos = 0;
        assert_eq!(Some(0x41), codepoint(&input, &mut pos));
        assert_eq!(Some(REPLACEMENT_CHARACTER), codepoint(&input, &mut pos));
        assert_eq!(3, pos);
        assert_eq!(Some(0x65E5), codepoint(&input, &mut pos));
        assert_eq!(None, codepoint(&input, &mut pos));
    }

    #[test]
    fn test_try_codepoint_reports_offset() {
        let input: [u8; 3] = [0x41, 0xFF, 0x42];
        let mut pos = 0;
        assert_eq!(0x41, try_codepoint(&input, &mut pos).unwrap().unwrap());
        match try_codepoint(&input, &mut pos) {
            Some(Err(Error::InvalidSequence { offset, encoding })) => {
                assert_eq!(1, offset);
                assert_eq!(Encoding::Utf8, encoding);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(0x42, try_codepoint(&input, &mut pos).unwrap().unwrap());
        assert!(try_codepoint(&input, &mut pos).is_none());
    }

    #[test]
    fn test_prev_codepoint() {
        let input = "aä日𐑅".as_bytes();
        let mut pos = input.len();
        assert_eq!(Some(0x10445), prev_codepoint(input, &mut pos));
        assert_eq!(Some(0x65E5), prev_codepoint(input, &mut pos));
        assert_eq!(Some(0xE4), prev_codepoint(input, &mut pos));
        assert_eq!(Some(0x61), prev_codepoint(input, &mut pos));
        assert_eq!(None, prev_codepoint(input, &mut pos));
        assert_eq!(0, pos);
    }

    #[test]
    fn test_sync() {
        let input = "日本".as_bytes();
        let mut pos = 1;
        sync(input, &mut pos);
        assert_eq!(3, pos);
        sync(input, &mut pos);
        assert_eq!(3, pos);

        let input: Vec<u16> = "𐑅x".encode_utf16().collect();
        let mut pos = 1;
        sync(&input, &mut pos);
        assert_eq!(2, pos);
    }

    #[test]
    fn test_count() {
        let input = SAMPLE.as_bytes();
        assert_eq!(30, count(input));
        assert_eq!(28, count(&input[2..]));
        assert_eq!(10, count_max(input, 10));
        assert_eq!(30, count_max(input, 100));
        let wide: Vec<u16> = SAMPLE.encode_utf16().collect();
        assert_eq!(30, count(&wide));
        let wide: Vec<u32> = SAMPLE.chars().map(u32::from).collect();
        assert_eq!(30, count(&wide));
        assert_eq!(3, count_max(&wide, 3));
        assert_eq!(0, count::<u8>(&[]));
    }

    #[test]
    fn test_count_malformed() {
        // one group each: "a", C3 A4, stray 80 80, FF
        assert_eq!(4, count(&[0x61u8, 0xC3, 0xA4, 0x80, 0x80, 0xFF][..]));
        assert_eq!(2, count(&[0xDC00u16, 0xD800][..]));
    }

    #[test]
    fn test_at() {
        let input = SAMPLE.as_bytes();
        assert_eq!(Some(u32::from('t')), at(input, 0));
        assert_eq!(Some(u32::from('ä')), at(input, 4));
        assert_eq!(Some(u32::from('日')), at(input, 12));
        assert_eq!(Some(u32::from('.')), at(input, 29));
        assert_eq!(None, at(input, 30));
    }

    #[test]
    fn test_codepoints_iterator() {
        let input = "aä日𐑅".as_bytes();
        let forward: Vec<_> = codepoints(input).collect();
        assert_eq!(vec![0x61, 0xE4, 0x65E5, 0x10445], forward);
        let mut backward: Vec<_> = codepoints(input).rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        let mut iter = codepoints(input);
        assert_eq!(Some(0x61), iter.next());
        assert_eq!(Some(0x10445), iter.next_back());
        assert_eq!("ä日".as_bytes(), iter.as_units());
        assert_eq!(2, iter.count());
    }

    #[test]
    fn test_codepoints_size_hint_malformed() {
        fn check<U: Unit>(input: &[U], expected: usize) {
            let (lower, upper) = codepoints(input).size_hint();
            let yielded = codepoints(input).fold(0, |n, _| n + 1);
            assert_eq!(expected, yielded, "{:x?}", input);
            assert!(lower <= yielded, "{:x?}", input);
            assert!(upper.map_or(true, |upper| yielded <= upper), "{:x?}", input);
        }
        check(&[0x80u8; 16], 1);
        check(&[0xC0u8, 0xAF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], 1);
        check(&[0xE0u8, 0x80, 0xAF, 0x80, 0x80, 0x41], 2);
        check::<u8>(&[], 0);
        check("日本語".as_bytes(), 3);
        check(&[0xD83Du16, 0xDE00], 1);
        check(&[0xD83Du16, 0xDE00, 0x41], 2);
        check(&[0x61u32, 0xD800, 0x110000], 3);
        assert_eq!((3, Some(3)), codepoints(&[0x61u32, 0xD800, 0x110000]).size_hint());

        let mut iter = codepoints(&[0x80u8; 16][..]);
        assert_eq!((1, Some(16)), iter.size_hint());
        iter.next();
        assert_eq!((0, Some(0)), iter.size_hint());
    }

    #[test]
    fn test_cursor() {
        let input = "日本語".as_bytes();
        let mut cursor = Cursor::new(input);
        assert!(cursor.is_at_start());
        assert_eq!(Some(0x65E5), cursor.next_codepoint());
        assert_eq!(3, cursor.position());
        assert!(cursor.increment(1));
        assert_eq!("語".as_bytes(), cursor.remaining());
        assert!(!cursor.increment(2));
        assert!(cursor.is_at_end());
        assert!(cursor.decrement(3));
        assert!(cursor.is_at_start());
        let mut cursor = Cursor::at_end(input);
        assert_eq!(Some(0x8A9E), cursor.prev_codepoint());
        assert_eq!("日本".as_bytes(), cursor.consumed());
    }
}
