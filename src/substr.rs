use crate::{
    step::{decrement, increment},
    unit::Unit,
};

/// Returns the first `n` codepoints of `units`, or all of it if it is shorter.
///
/// The result always ends where [`increment`] from the start by `n` stops.
pub fn left<U: Unit>(units: &[U], n: usize) -> &[U] {
    let mut end = 0;
    increment(units, &mut end, n);
    &units[..end]
}

/// Returns the last `n` codepoints of `units`, or all of it if it is shorter.
pub fn right<U: Unit>(units: &[U], n: usize) -> &[U] {
    let mut start = units.len();
    decrement(units, &mut start, n);
    &units[start..]
}

/// Returns `n` codepoints of `units` starting at codepoint index `start`.
///
/// The result is shorter if `units` runs out first, and empty if `start` is past the end.
pub fn mid<U: Unit>(units: &[U], start: usize, n: usize) -> &[U] {
    let mut begin = 0;
    increment(units, &mut begin, start);
    left(&units[begin..], n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "testäöü test日本語abc中文Русский";

    #[test]
    fn test_left() {
        let input = SAMPLE.as_bytes();
        assert_eq!("testäöü".as_bytes(), left(input, 7));
        assert_eq!(b"", left(input, 0));
        assert_eq!(input, left(input, 1000));
    }

    #[test]
    fn test_right() {
        let input = SAMPLE.as_bytes();
        assert_eq!("c中文Русский".as_bytes(), right(input, 10));
        assert_eq!(b"", right(input, 0));
        assert_eq!(input, right(input, 1000));
    }

    #[test]
    fn test_mid() {
        let input = SAMPLE.as_bytes();
        assert_eq!("test日本語".as_bytes(), mid(input, 8, 7));
        assert_eq!("Русский".as_bytes(), mid(input, 20, 100));
        assert_eq!(b"", mid(input, 27, 1));
        assert_eq!(b"", mid(input, 100, 1));
    }

    #[test]
    fn test_wide_substrings() {
        let input: Vec<u16> = "a𐑅b𐐝c".encode_utf16().collect();
        assert_eq!(&input[..3], left(&input, 2));
        assert_eq!(&input[4..], right(&input, 2));
        assert_eq!(&input[1..4], mid(&input, 1, 2));
        let input: Vec<u32> = "a𐑅b".chars().map(u32::from).collect();
        assert_eq!(&[0x10445, 0x62][..], mid(&input, 1, 5));
    }
}
