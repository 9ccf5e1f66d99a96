// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value tokenizer trait definition.
//!
//! This module defines the `ValueTokenizer` trait, the interface through which a
//! [`ParsedValue`](crate::domain::ParsedValue) turns text into list items and
//! map entries. The grammar itself lives in the adapters.

use crate::domain::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Something, a colon, something; anywhere in the text and within one line.
///
/// A line ends at `\n`, `\r`, U+0085, U+2028 or U+2029.
static MAP_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^\n\r\u{85}\u{2028}\u{2029}]+:[^\n\r\u{85}\u{2028}\u{2029}]+")
        .expect("map shape pattern is valid")
});

/// A trait for splitting textual config values into lists and map entries.
///
/// # Examples
///
/// ```rust
/// use lazycfg::ports::ValueTokenizer;
/// use lazycfg::domain::Result;
///
/// struct WhitespaceTokenizer;
///
/// impl ValueTokenizer for WhitespaceTokenizer {
///     fn split_unique(&self, text: &str) -> Vec<String> {
///         let mut items: Vec<String> = Vec::new();
///         for item in text.split_whitespace() {
///             if !items.iter().any(|i| i == item) {
///                 items.push(item.to_string());
///             }
///         }
///         items
///     }
///
///     fn parse_entries(&self, text: &str, emit: &mut dyn FnMut(&str, &str)) -> Result<()> {
///         for entry in text.split_whitespace() {
///             if let Some((key, value)) = entry.split_once('=') {
///                 emit(key, value);
///             }
///         }
///         Ok(())
///     }
/// }
///
/// let items = WhitespaceTokenizer.split_unique("a b a");
/// assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
/// ```
pub trait ValueTokenizer: Send + Sync {
    /// Splits text into unique items, keeping first-seen order.
    ///
    /// Must be total: every input, including the empty string, yields a list.
    fn split_unique(&self, text: &str) -> Vec<String>;

    /// Parses key/value entries out of text, calling `emit` once per entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError)
    /// with a human-readable message when the text is malformed. Entries emitted
    /// before the failure should be discarded by the caller.
    fn parse_entries(&self, text: &str, emit: &mut dyn FnMut(&str, &str)) -> Result<()>;

    /// Cheap presence check deciding whether `parse_entries` is attempted at all.
    ///
    /// This is deliberately loose: any text with a colon that has at least one
    /// character on each side on the same line qualifies, so URLs and times do
    /// too.
    fn looks_like_map(&self, text: &str) -> bool {
        MAP_SHAPE.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use std::collections::HashMap;

    // Accepts only "key=value" pairs separated by '&'
    struct QueryTokenizer;

    impl ValueTokenizer for QueryTokenizer {
        fn split_unique(&self, text: &str) -> Vec<String> {
            let mut items: Vec<String> = Vec::new();
            for item in text.split('&') {
                if !items.iter().any(|i| i == item) {
                    items.push(item.to_string());
                }
            }
            items
        }

        fn parse_entries(&self, text: &str, emit: &mut dyn FnMut(&str, &str)) -> Result<()> {
            for entry in text.split('&') {
                let (key, value) = entry
                    .split_once('=')
                    .ok_or_else(|| ConfigError::parse(format!("no '=' in '{}'", entry)))?;
                emit(key, value);
            }
            Ok(())
        }
    }

    #[test]
    fn test_tokenizer_split_unique() {
        let items = QueryTokenizer.split_unique("a&b&a");
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_tokenizer_parse_entries() {
        let mut map = HashMap::new();
        QueryTokenizer
            .parse_entries("x=1&y=2", &mut |k, v| {
                map.insert(k.to_string(), v.to_string());
            })
            .unwrap();
        assert_eq!(map.get("x"), Some(&"1".to_string()));
        assert_eq!(map.get("y"), Some(&"2".to_string()));
    }

    #[test]
    fn test_tokenizer_parse_entries_error() {
        let result = QueryTokenizer.parse_entries("x=1&y", &mut |_, _| {});
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_looks_like_map_default() {
        assert!(QueryTokenizer.looks_like_map("host:1234"));
        assert!(QueryTokenizer.looks_like_map("see http://example.com"));
        assert!(QueryTokenizer.looks_like_map("a:b:c"));
        assert!(!QueryTokenizer.looks_like_map("host:"));
        assert!(!QueryTokenizer.looks_like_map(":1234"));
        assert!(!QueryTokenizer.looks_like_map("a\n:b"));
        assert!(!QueryTokenizer.looks_like_map("a\r:b"));
        assert!(!QueryTokenizer.looks_like_map("a:\u{2028}b"));
        assert!(!QueryTokenizer.looks_like_map("a\u{85}:b"));
        assert!(!QueryTokenizer.looks_like_map("a:\u{2029}b"));
        assert!(QueryTokenizer.looks_like_map("x\r\nkey:value"));
        assert!(!QueryTokenizer.looks_like_map("plain"));
    }

    #[test]
    fn test_tokenizer_as_trait_object() {
        let tokenizer: Box<dyn ValueTokenizer> = Box::new(QueryTokenizer);
        assert_eq!(tokenizer.split_unique("only").len(), 1);
    }
}
