//! Property tests over arbitrary text and arbitrary byte soup.

use kutf::{Codepoint, Unit};
use proptest::prelude::*;

fn forward_groups<U: Unit>(units: &[U]) -> Vec<(Option<Codepoint>, usize)> {
    let mut groups = Vec::new();
    let mut rest = units;
    while !rest.is_empty() {
        let group = U::decode(rest);
        groups.push(group);
        rest = &rest[group.1..];
    }
    groups
}

fn backward_groups<U: Unit>(units: &[U]) -> Vec<(Option<Codepoint>, usize)> {
    let mut groups = Vec::new();
    let mut rest = units;
    while !rest.is_empty() {
        let group = U::decode_back(rest);
        groups.push(group);
        rest = &rest[..rest.len() - group.1];
    }
    groups.reverse();
    groups
}

proptest! {
    #[test]
    fn prop_utf16_roundtrip(text in any::<String>()) {
        let wide: Vec<u16> = kutf::convert(text.as_bytes());
        prop_assert_eq!(text.encode_utf16().collect::<Vec<_>>(), wide.clone());
        let back: Vec<u8> = kutf::convert(&wide);
        prop_assert_eq!(text.as_bytes(), &back[..]);
    }

    #[test]
    fn prop_utf32_roundtrip(text in any::<String>()) {
        let wide: Vec<u32> = kutf::convert(text.as_bytes());
        let back: Vec<u8> = kutf::convert(&wide);
        prop_assert_eq!(text.as_bytes(), &back[..]);
    }

    #[test]
    fn prop_valid_matches_std(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let std_result = std::str::from_utf8(&bytes);
        prop_assert_eq!(std_result.is_ok(), kutf::valid(&bytes));
        if let Err(err) = std_result {
            prop_assert_eq!(err.valid_up_to(), kutf::invalid(&bytes));
        }
    }

    #[test]
    fn prop_conversion_output_is_valid(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let utf8: Vec<u8> = kutf::convert(&bytes);
        prop_assert!(kutf::valid(&utf8));
        let utf16: Vec<u16> = kutf::convert(&bytes);
        prop_assert!(kutf::valid(&utf16));
        prop_assert_eq!(kutf::count(&bytes), kutf::count(&utf16));
    }

    #[test]
    fn prop_replacement_matches_std_lossy(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        // a malformed group here covers at least one of std's maximal subparts
        let converted = kutf::to_string(&bytes);
        prop_assert!(converted.chars().count() <= String::from_utf8_lossy(&bytes).chars().count());
    }

    #[test]
    fn prop_count_matches_steps(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut pos = 0;
        let mut steps = 0;
        while kutf::codepoint(&bytes, &mut pos).is_some() {
            steps += 1;
        }
        prop_assert_eq!(bytes.len(), pos);
        prop_assert_eq!(steps, kutf::count(&bytes));
        prop_assert_eq!(steps, kutf::codepoints(&bytes).count());
    }

    #[test]
    fn prop_backward_partition_matches_forward(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(forward_groups(&bytes), backward_groups(&bytes));
    }

    #[test]
    fn prop_backward_partition_matches_forward_utf16(units in prop::collection::vec(
        prop_oneof![Just(0xD800u16), Just(0xDC00u16), Just(0x41u16), any::<u16>()],
        0..32,
    )) {
        prop_assert_eq!(forward_groups(&units), backward_groups(&units));
    }

    #[test]
    fn prop_left_right_complement(bytes in prop::collection::vec(any::<u8>(), 0..64), split in 0usize..80) {
        let total = kutf::count(&bytes);
        let n = split.min(total);
        let mut joined = kutf::left(&bytes, n).to_vec();
        joined.extend_from_slice(kutf::right(&bytes, total - n));
        prop_assert_eq!(bytes, joined);
    }

    #[test]
    fn prop_left_matches_increment(text in any::<String>(), n in 0usize..40) {
        let mut pos = 0;
        kutf::increment(text.as_bytes(), &mut pos, n);
        prop_assert_eq!(&text.as_bytes()[..pos], kutf::left(text.as_bytes(), n));
        let expected: String = text.chars().take(n).collect();
        prop_assert_eq!(expected.as_bytes(), kutf::left(text.as_bytes(), n));
    }

    #[test]
    fn prop_case_agrees_with_std(ch in any::<char>()) {
        let cp = ch as u32;
        let mapped = kutf::to_upper_codepoint(cp);
        if mapped != cp {
            let upper: Vec<char> = ch.to_uppercase().collect();
            prop_assert_eq!(vec![mapped], upper.iter().map(|&c| c as u32).collect::<Vec<_>>());
        }
        let mapped = kutf::to_lower_codepoint(cp);
        if mapped != cp {
            let lower: Vec<char> = ch.to_lowercase().collect();
            prop_assert_eq!(vec![mapped], lower.iter().map(|&c| c as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_cesu8_roundtrip(text in any::<String>()) {
        let cesu = kutf::utf8_to_cesu8(text.as_bytes());
        prop_assert_eq!(text.as_bytes(), &kutf::cesu8_to_utf8(&cesu)[..]);
        let bytes = kutf::utf8_to_utf16_bytes(text.as_bytes());
        prop_assert_eq!(text.as_bytes(), &kutf::utf16_bytes_to_utf8(&bytes)[..]);
    }

    #[test]
    fn prop_reader_matches_slice_decode(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let expected: Vec<Codepoint> = kutf::codepoints(&bytes).collect();
        let read: Vec<Codepoint> = kutf::Utf8Reader::new(&bytes[..])
            .collect::<kutf::Result<_>>()
            .unwrap();
        prop_assert_eq!(expected, read);
    }
}
