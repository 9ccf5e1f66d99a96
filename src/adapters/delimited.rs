// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delimiter-based tokenizer adapter.
//!
//! Lists are written as `a, b, c` and maps as `key1:value1, key2:value2`
//! (entries may also be separated with `;`).

use crate::domain::{ConfigError, Result};
use crate::ports::ValueTokenizer;

/// Default separator between list items.
pub const LIST_ITEM_SEPARATOR: char = ',';

/// Default separators between map entries.
pub const MAP_ENTRY_SEPARATORS: [char; 2] = [',', ';'];

/// Default separator between a map key and its value.
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Tokenizer that splits on configurable single-character delimiters.
///
/// Items and keys/values are trimmed; blank list items and blank map entries
/// are skipped.
///
/// # Examples
///
/// ```rust
/// use lazycfg::adapters::DelimitedTokenizer;
/// use lazycfg::ports::ValueTokenizer;
///
/// let tokenizer = DelimitedTokenizer::new();
/// assert_eq!(tokenizer.split_unique("foo, bar,foo"), vec!["foo", "bar"]);
///
/// let semi = DelimitedTokenizer::new().with_list_separator(';');
/// assert_eq!(semi.split_unique("a;b"), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTokenizer {
    list_separator: char,
    entry_separators: Vec<char>,
    key_value_separator: char,
}

impl DelimitedTokenizer {
    /// Creates a tokenizer with the default separators.
    pub fn new() -> Self {
        Self {
            list_separator: LIST_ITEM_SEPARATOR,
            entry_separators: MAP_ENTRY_SEPARATORS.to_vec(),
            key_value_separator: KEY_VALUE_SEPARATOR,
        }
    }

    /// Sets the list item separator.
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.list_separator = separator;
        self
    }

    /// Sets the map entry separators.
    pub fn with_entry_separators(mut self, separators: &[char]) -> Self {
        self.entry_separators = separators.to_vec();
        self
    }

    /// Sets the separator between a map key and its value.
    pub fn with_key_value_separator(mut self, separator: char) -> Self {
        self.key_value_separator = separator;
        self
    }

    /// Returns the list item separator.
    pub fn list_separator(&self) -> char {
        self.list_separator
    }

    fn parse_entry<'a>(&self, entry: &'a str) -> Result<(&'a str, &'a str)> {
        let mut parts = entry.split(self.key_value_separator);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                let (key, value) = (key.trim(), value.trim());
                if key.is_empty() || value.is_empty() {
                    return Err(ConfigError::parse(format!(
                        "map entry '{}' needs both a key and a value",
                        entry.trim()
                    )));
                }
                Ok((key, value))
            }
            _ => Err(ConfigError::parse(format!(
                "map entry '{}' must have the form key{}value",
                entry.trim(),
                self.key_value_separator
            ))),
        }
    }
}

impl Default for DelimitedTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueTokenizer for DelimitedTokenizer {
    fn split_unique(&self, text: &str) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();
        for item in text.split(self.list_separator).map(str::trim) {
            if !item.is_empty() && !items.iter().any(|seen| seen == item) {
                items.push(item.to_string());
            }
        }
        items
    }

    fn parse_entries(&self, text: &str, emit: &mut dyn FnMut(&str, &str)) -> Result<()> {
        for entry in text.split(self.entry_separators.as_slice()) {
            if entry.trim().is_empty() {
                continue;
            }
            let (key, value) = self.parse_entry(entry)?;
            emit(key, value);
        }
        Ok(())
    }
}
