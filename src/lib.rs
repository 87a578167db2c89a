#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Unicode encoding forms: validation, stepping, conversion and case mapping.
//!
//! Text is handled as plain slices of code units. `&[u8]` is UTF-8, `&[u16]` is UTF-16
//! and `&[u32]` is UTF-32; every operation is generic over the [`Unit`] trait, so one
//! function covers all three widths. Output goes to any [`Sink`], which `Vec` and
//! `SmallVec` implement.
//!
//! Nothing in this crate panics on malformed input. Decoding substitutes
//! [`REPLACEMENT_CHARACTER`] for each malformed unit group and always makes progress, so
//! untrusted data can be passed straight in. Where the position of a problem matters,
//! [`invalid`] and [`validate`] report it.
//!
//! # Positions
//!
//! Positions are unit offsets into the slice. The stepping functions ([`increment`],
//! [`decrement`], [`codepoint`], ...) only ever leave a position on a group boundary and
//! clamp it to the slice instead of reading past either end.
//!
//! ```
//! let text = "testäöü test日本語".as_bytes();
//! assert_eq!(15, kutf::count(text));
//! assert_eq!("test日本語".as_bytes(), kutf::mid(text, 8, 7));
//!
//! let wide: Vec<u16> = kutf::convert(text);
//! let mut upper = Vec::<u8>::new();
//! kutf::to_upper(&wide, &mut upper);
//! assert_eq!("TESTÄÖÜ TEST日本語".as_bytes(), &upper[..]);
//! ```
//!
//! # Malformed UTF-8
//!
//! A malformed group covers its first byte and every continuation byte directly
//! following it, except that a group cut short by a new lead byte ends there. Stepping
//! backward yields exactly the groups stepping forward does.

pub(crate) mod unit;

pub(crate) mod classify;

pub(crate) mod surrogate;

pub(crate) mod error;

pub(crate) mod validate;

pub(crate) mod step;

pub(crate) mod encode;

pub(crate) mod convert;

pub(crate) mod substr;

pub(crate) mod case_table;

pub(crate) mod case;

pub(crate) mod cesu8;

pub(crate) mod reader;

pub use unit::{units_for, Encoding, Unit};

pub use classify::{
    is_continuation_byte, is_lead_surrogate, is_single_byte, is_start_byte, is_surrogate,
    is_trail_surrogate, is_valid_codepoint, needs_surrogates, CODEPOINT_MAX,
    NEEDS_SURROGATE_END, NEEDS_SURROGATE_START, REPLACEMENT_CHARACTER, SURROGATE_HIGH_END,
    SURROGATE_HIGH_START, SURROGATE_LOW_END, SURROGATE_LOW_START,
};

pub use surrogate::SurrogatePair;

pub use error::{Error, Result};

pub use validate::{has_utf8, invalid, invalid_ascii, valid, valid_ascii, validate, validate_ascii};

pub use step::{
    at, codepoint, codepoints, count, count_max, decrement, increment, prev_codepoint, sync,
    try_codepoint, Codepoints, Cursor,
};

pub use encode::{latin1_to_utf, latin1_to_utf_vec, to_utf, to_utf_buf, Sink, UnitBuf};

pub use convert::{convert, convert_into, for_each, to_string, transform};

pub use substr::{left, mid, right};

pub use case::{
    change_case, is_lower, is_upper, make_lower_ascii, make_upper_ascii, to_lower,
    to_lower_ascii, to_lower_codepoint, to_lower_locale, to_upper, to_upper_ascii,
    to_upper_codepoint, to_upper_locale, Case, CaseMode,
};

pub use cesu8::{cesu8_to_utf8, utf16_bytes_to_utf8, utf8_to_cesu8, utf8_to_utf16_bytes};

pub use reader::Utf8Reader;

/// A codepoint value. Valid codepoints are `0..=0x10FFFF` minus the surrogate band,
/// see [`is_valid_codepoint`].
pub type Codepoint = u32;
