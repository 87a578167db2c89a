use crate::{
    case_table::{CaseRange, TO_LOWER, TO_UPPER},
    convert::transform,
    encode::Sink,
    unit::Unit,
    Codepoint,
};

/// How case is changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// Only `a`..`z` and `A`..`Z` are mapped.
    Ascii,
    /// Simple one-to-one Unicode case mapping.
    #[default]
    Unicode,
    /// The C library's mapping for the current locale, applied to codepoints up to
    /// U+00FF. Falls back to [`CaseMode::Ascii`] without the `locale` feature.
    Locale,
}

/// Target case for [`change_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Uppercase.
    Upper,
    /// Lowercase.
    Lower,
}

const CASE_TABLE_END: Codepoint = 0x2_0000;

fn lookup(table: &[CaseRange], codepoint: Codepoint) -> Codepoint {
    if codepoint >= CASE_TABLE_END {
        return codepoint;
    }
    let idx = table.partition_point(|range| range.last < codepoint);
    match table.get(idx) {
        Some(range)
            if range.first <= codepoint && (codepoint - range.first) % range.stride == 0 =>
        {
            (codepoint as i32 + range.delta) as Codepoint
        }
        _ => codepoint,
    }
}

/// Returns the simple uppercase mapping of `codepoint`, or `codepoint` if it has none.
#[inline]
pub fn to_upper_codepoint(codepoint: Codepoint) -> Codepoint {
    if codepoint < 0x80 {
        return ascii_upper(codepoint);
    }
    lookup(&TO_UPPER, codepoint)
}

/// Returns the simple lowercase mapping of `codepoint`, or `codepoint` if it has none.
#[inline]
pub fn to_lower_codepoint(codepoint: Codepoint) -> Codepoint {
    if codepoint < 0x80 {
        return ascii_lower(codepoint);
    }
    lookup(&TO_LOWER, codepoint)
}

/// Returns true if `codepoint` has a lowercase mapping.
pub fn is_upper(codepoint: Codepoint) -> bool {
    to_lower_codepoint(codepoint) != codepoint
}

/// Returns true if `codepoint` has an uppercase mapping.
pub fn is_lower(codepoint: Codepoint) -> bool {
    to_upper_codepoint(codepoint) != codepoint
}

#[inline]
fn ascii_upper(codepoint: Codepoint) -> Codepoint {
    if (0x61..=0x7A).contains(&codepoint) {
        codepoint - 0x20
    } else {
        codepoint
    }
}

#[inline]
fn ascii_lower(codepoint: Codepoint) -> Codepoint {
    if (0x41..=0x5A).contains(&codepoint) {
        codepoint + 0x20
    } else {
        codepoint
    }
}

#[cfg(feature = "locale")]
fn locale_byte(byte: u8, case: Case) -> u8 {
    let value = libc::c_int::from(byte);
    // SAFETY: toupper and tolower accept every value of unsigned char
    let mapped = unsafe {
        match case {
            Case::Upper => libc::toupper(value),
            Case::Lower => libc::tolower(value),
        }
    };
    u8::try_from(mapped).unwrap_or(byte)
}

#[cfg(not(feature = "locale"))]
fn locale_byte(byte: u8, case: Case) -> u8 {
    match case {
        Case::Upper => byte.to_ascii_uppercase(),
        Case::Lower => byte.to_ascii_lowercase(),
    }
}

fn locale_codepoint(codepoint: Codepoint, case: Case) -> Codepoint {
    match u8::try_from(codepoint) {
        Ok(byte) => Codepoint::from(locale_byte(byte, case)),
        Err(_) => codepoint,
    }
}

/// Appends `src` converted to uppercase to `sink`.
///
/// Source and target width are independent. Codepoints without a one-to-one uppercase
/// mapping pass through unchanged, malformed groups become U+FFFD. Returns the number of
/// malformed groups replaced.
pub fn to_upper<S, T, K>(src: &[S], sink: &mut K) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    transform(src, sink, to_upper_codepoint)
}

/// Appends `src` converted to lowercase to `sink`. See [`to_upper`].
pub fn to_lower<S, T, K>(src: &[S], sink: &mut K) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    transform(src, sink, to_lower_codepoint)
}

/// Appends `src` to `sink` with only `a`..`z` changed to uppercase.
pub fn to_upper_ascii<S, T, K>(src: &[S], sink: &mut K) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    transform(src, sink, ascii_upper)
}

/// Appends `src` to `sink` with only `A`..`Z` changed to lowercase.
pub fn to_lower_ascii<S, T, K>(src: &[S], sink: &mut K) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    transform(src, sink, ascii_lower)
}

/// Changes `a`..`z` to uppercase in place.
///
/// ASCII units never occur inside a multi-unit group, so this works on any encoding and
/// leaves everything else untouched, malformed input included.
pub fn make_upper_ascii<U: Unit>(units: &mut [U]) {
    for unit in units {
        *unit = U::from_u32(ascii_upper(unit.to_u32()));
    }
}

/// Changes `A`..`Z` to lowercase in place. See [`make_upper_ascii`].
pub fn make_lower_ascii<U: Unit>(units: &mut [U]) {
    for unit in units {
        *unit = U::from_u32(ascii_lower(unit.to_u32()));
    }
}

/// Maps every byte of `bytes` through the C library's `toupper` for the current locale.
///
/// This is byte-wise and meant for single-byte charsets. Without the `locale` feature
/// only ASCII letters change.
pub fn to_upper_locale(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&byte| locale_byte(byte, Case::Upper)).collect()
}

/// Maps every byte of `bytes` through the C library's `tolower`. See [`to_upper_locale`].
pub fn to_lower_locale(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&byte| locale_byte(byte, Case::Lower)).collect()
}

/// Appends `src` to `sink` in the requested case, using the strategy `mode` selects.
pub fn change_case<S, T, K>(src: &[S], sink: &mut K, mode: CaseMode, case: Case) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    match (mode, case) {
        (CaseMode::Ascii, Case::Upper) => to_upper_ascii(src, sink),
        (CaseMode::Ascii, Case::Lower) => to_lower_ascii(src, sink),
        (CaseMode::Unicode, Case::Upper) => to_upper(src, sink),
        (CaseMode::Unicode, Case::Lower) => to_lower(src, sink),
        (CaseMode::Locale, case) => transform(src, sink, |cp| locale_codepoint(cp, case)),
    }
}
