use crate::{
    classify::REPLACEMENT_CHARACTER,
    encode::{to_utf, Sink},
    unit::Unit,
    validate::valid,
    Codepoint,
};

/// Decodes `src`, maps every codepoint through `f` and appends the result to `sink`.
///
/// Malformed groups are written as U+FFFD without calling `f`. ASCII input is passed to
/// `f` like any other codepoint. Returns the number of malformed groups replaced.
pub fn transform<S, T, K, F>(src: &[S], sink: &mut K, mut f: F) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
    F: FnMut(Codepoint) -> Codepoint,
{
    sink.reserve_units(src.len());
    let mut replaced = 0;
    let mut rest = src;
    while !rest.is_empty() {
        let (value, len) = S::decode(rest);
        rest = &rest[len..];
        match value {
            Some(cp) => to_utf(f(cp), sink),
            None => {
                replaced += 1;
                to_utf(REPLACEMENT_CHARACTER, sink);
            }
        }
    }
    if replaced > 0 {
        log::debug!(
            "replaced {} malformed {} sequence(s) while writing {}",
            replaced,
            S::ENCODING,
            T::ENCODING
        );
    }
    replaced
}

/// Converts `src` to the encoding of `sink` and appends the result.
///
/// Works for every pairing of UTF-8, UTF-16 and UTF-32. Malformed groups in `src` become
/// one U+FFFD each, so the output is always well-formed. Returns the number of groups
/// replaced. Converting well-formed input to its own encoding copies it unchanged.
pub fn convert_into<S, T, K>(src: &[S], sink: &mut K) -> usize
where
    S: Unit,
    T: Unit,
    K: Sink<T> + ?Sized,
{
    if S::ENCODING == T::ENCODING && valid(src) {
        sink.reserve_units(src.len());
        for &unit in src {
            sink.push_unit(T::from_u32(unit.to_u32()));
        }
        return 0;
    }
    transform(src, sink, |cp| cp)
}

/// Returns `src` converted to `T` units. See [`convert_into`].
pub fn convert<S: Unit, T: Unit>(src: &[S]) -> Vec<T> {
    let mut out = Vec::new();
    convert_into(src, &mut out);
    out
}

/// Returns `units` as a Rust string, with malformed groups replaced by U+FFFD.
pub fn to_string<U: Unit>(units: &[U]) -> String {
    let bytes: Vec<u8> = convert(units);
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // conversion output is always well-formed
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Calls `f` with every codepoint of `units` in order, `None` for a malformed group.
///
/// Stops as soon as `f` returns false. Returns true if every codepoint was visited.
pub fn for_each<U, F>(units: &[U], mut f: F) -> bool
where
    U: Unit,
    F: FnMut(Option<Codepoint>) -> bool,
{
    let mut rest = units;
    while !rest.is_empty() {
        let (value, len) = U::decode(rest);
        rest = &rest[len..];
        if !f(value) {
            return false;
        }
    }
    true
}
