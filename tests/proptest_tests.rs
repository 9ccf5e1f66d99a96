// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the retrieval rules of `ParsedValue` against arbitrary
//! textual and typed inputs.

use lazycfg::adapters::DelimitedTokenizer;
use lazycfg::domain::{ParsedValue, RawValue};
use lazycfg::ports::ValueTokenizer;
use proptest::prelude::*;
use std::collections::HashMap;

fn sentinel_map() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("__default__".to_string(), "__default__".to_string());
    map
}

// Map retrieval matches the entry parser whenever the text looks like a map
proptest! {
    #[test]
    fn test_map_retrieval_matches_entry_parser(s in "\\PC*") {
        let tokenizer = DelimitedTokenizer::new();
        let value = ParsedValue::new(s.clone());
        let read = value.get_or(sentinel_map());

        if tokenizer.looks_like_map(&s) {
            let mut expected = HashMap::new();
            let result = tokenizer.parse_entries(&s, &mut |k, v| {
                expected.insert(k.to_string(), v.to_string());
            });
            if result.is_err() {
                expected.clear();
            }
            prop_assert_eq!(read, expected);
        } else {
            prop_assert_eq!(read, sentinel_map());
        }
    }
}

// Well-formed map text round-trips through the entry parser
proptest! {
    #[test]
    fn test_map_retrieval_of_generated_entries(
        entries in prop::collection::hash_map("[a-z]{1,8}", "[a-z0-9]{1,8}", 1..5)
    ) {
        let text = entries
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";");
        let value = ParsedValue::new(text);
        prop_assert_eq!(value.get_or(sentinel_map()), entries);
    }
}

// List retrieval never falls through to the default
proptest! {
    #[test]
    fn test_list_retrieval_is_total(s in "\\PC*") {
        let value = ParsedValue::new(s.clone());
        let expected = DelimitedTokenizer::new().split_unique(&s);
        prop_assert!(value.as_list().is_some());
        prop_assert_eq!(value.get_or(vec!["__default__".to_string()]), expected);
    }
}

// Boolean retrieval is true exactly for "true" in any case
proptest! {
    #[test]
    fn test_boolean_retrieval(s in "\\PC*", default in prop::bool::ANY) {
        let value = ParsedValue::new(s.clone());
        prop_assert_eq!(value.get_or(default), s.eq_ignore_ascii_case("true"));
    }
}

proptest! {
    #[test]
    fn test_boolean_retrieval_of_true_spellings(
        s in "[tT][rR][uU][eE]",
        default in prop::bool::ANY
    ) {
        prop_assert!(ParsedValue::new(s).get_or(default));
    }
}

// Integer retrieval returns the parsed number or the default
proptest! {
    #[test]
    fn test_integer_retrieval_of_numbers(n in prop::num::i64::ANY, d in prop::num::i64::ANY) {
        let value = ParsedValue::new(n.to_string());
        prop_assert_eq!(value.get_or(d), n);
    }
}

proptest! {
    #[test]
    fn test_integer_retrieval_of_any_text(s in "\\PC*", d in prop::num::i64::ANY) {
        let value = ParsedValue::new(s.clone());
        let expected = s.parse::<i64>().unwrap_or(d);
        prop_assert_eq!(value.get_or(d), expected);
    }
}

// A default of the original's own type always returns the original
proptest! {
    #[test]
    fn test_exact_type_short_circuit_text(s in "\\PC*", d in "\\PC*") {
        prop_assert_eq!(ParsedValue::new(s.clone()).get_or(d), s);
    }
}

proptest! {
    #[test]
    fn test_exact_type_short_circuit_integer(n in prop::num::i64::ANY, d in prop::num::i64::ANY) {
        prop_assert_eq!(ParsedValue::new(n).get_or(d), n);
    }
}

proptest! {
    #[test]
    fn test_exact_type_short_circuit_boolean(b in prop::bool::ANY, d in prop::bool::ANY) {
        prop_assert_eq!(ParsedValue::new(b).get_or(d), b);
    }
}

proptest! {
    #[test]
    fn test_exact_type_short_circuit_list(
        items in prop::collection::vec("[a-z]{0,6}", 0..6)
    ) {
        let raw = RawValue::List(items.iter().cloned().map(RawValue::from).collect());
        let value = ParsedValue::new(raw);
        prop_assert_eq!(value.get_or(vec!["__default__".to_string()]), items);
    }
}

// Reading text back without a default as another type fails
proptest! {
    #[test]
    fn test_no_default_mismatch_fails(s in "\\PC*") {
        let value = ParsedValue::new(s.clone());
        prop_assert!(value.get::<i64>().is_err());
        prop_assert!(value.get::<bool>().is_err());
        prop_assert!(value.get::<Vec<String>>().is_err());
        prop_assert_eq!(value.get::<String>().unwrap(), s);
    }
}

// Typed originals never gain alternate readings
proptest! {
    #[test]
    fn test_typed_originals_not_coerced(n in prop::num::i64::ANY) {
        let value = ParsedValue::new(n);
        prop_assert!(value.as_list().is_none());
        prop_assert!(value.as_boolean().is_none());
        prop_assert_eq!(value.get_or(String::from("d")), "d");
    }
}
