// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value parsed once into every representation it supports.
//!
//! A textual config value can validly mean more than one thing: `"a,b"` is a
//! string and a two-item list, `"42"` is a string and an integer, and
//! `"host:1234"` is also a one-entry map. [`ParsedValue`] works all of these
//! out when the value is loaded, so reading it back is a lookup rather than a
//! parse.
//!
//! Values the loader already typed (booleans, integers, lists, maps, null) are
//! stored as they are and never coerced.

use crate::adapters::DelimitedTokenizer;
use crate::domain::config_type::{Coercion, ConfigType, Representation};
use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::{RawValue, ValueKind};
use crate::ports::ValueTokenizer;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_TOKENIZER: Lazy<DelimitedTokenizer> = Lazy::new(DelimitedTokenizer::new);

/// An immutable config value with its precomputed alternate representations.
///
/// Reading back with a default ([`get_or`](Self::get_or)) returns the original
/// when the default has the same kind, otherwise the matching precomputed
/// representation, otherwise the default. Reading back without a default
/// ([`get`](Self::get)) only ever returns the original and fails if the caller
/// asked for the wrong type.
///
/// # Examples
///
/// ```
/// use lazycfg::domain::ParsedValue;
///
/// let value = ParsedValue::new("42");
/// assert_eq!(value.get_or(0_i64), 42);
/// assert_eq!(value.get_or(String::new()), "42");
/// assert_eq!(value.get_or(vec!["x".to_string()]), vec!["42".to_string()]);
///
/// let value = ParsedValue::new("abc");
/// assert_eq!(value.get_or(7_i64), 7);
/// assert!(value.get::<i64>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    original: RawValue,
    as_list: Option<Vec<String>>,
    as_map: Option<HashMap<String, String>>,
    as_boolean: Option<bool>,
    as_integer: Option<i64>,
}

impl ParsedValue {
    /// Wraps a raw value, pre-parsing it with the default `,`/`:` tokenizer.
    ///
    /// Never fails. Text that looks like a map but does not parse as one is
    /// logged at warn level and keeps an empty map.
    pub fn new(value: impl Into<RawValue>) -> Self {
        Self::with_tokenizer(value, &*DEFAULT_TOKENIZER)
    }

    /// Wraps a raw value, pre-parsing it with the given tokenizer.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazycfg::adapters::DelimitedTokenizer;
    /// use lazycfg::domain::ParsedValue;
    ///
    /// let tokenizer = DelimitedTokenizer::new().with_list_separator(' ');
    /// let value = ParsedValue::with_tokenizer("a b a", &tokenizer);
    /// assert_eq!(value.as_list(), Some(&["a".to_string(), "b".to_string()][..]));
    /// ```
    pub fn with_tokenizer(value: impl Into<RawValue>, tokenizer: &dyn ValueTokenizer) -> Self {
        let original = value.into();
        let mut parsed = ParsedValue {
            original,
            as_list: None,
            as_map: None,
            as_boolean: None,
            as_integer: None,
        };

        if let RawValue::Text(text) = &parsed.original {
            parsed.as_list = Some(tokenizer.split_unique(text));
            parsed.as_boolean = Some(text.eq_ignore_ascii_case("true"));
            if tokenizer.looks_like_map(text) {
                parsed.as_map = Some(parse_map(text, tokenizer));
            }
            parsed.as_integer = text.parse::<i64>().ok();
        }

        parsed
    }

    /// Returns the value exactly as it was loaded.
    pub fn original(&self) -> &RawValue {
        &self.original
    }

    /// Returns the kind of the original value.
    pub fn kind(&self) -> ValueKind {
        self.original.kind()
    }

    /// Returns true if the key was present without a value.
    pub fn is_null(&self) -> bool {
        self.original.is_null()
    }

    /// The text split into unique items; present for every textual original.
    pub fn as_list(&self) -> Option<&[String]> {
        self.as_list.as_deref()
    }

    /// The text parsed as map entries; present if the text looked like a map.
    pub fn as_map(&self) -> Option<&HashMap<String, String>> {
        self.as_map.as_ref()
    }

    /// Whether the text is `"true"` in any case; present for every textual original.
    pub fn as_boolean(&self) -> Option<bool> {
        self.as_boolean
    }

    /// The text parsed as a base-10 integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_integer
    }

    /// Reads the original back as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when `T` is not the type the value
    /// was loaded as. No coercion is attempted; use [`get_or`](Self::get_or)
    /// for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazycfg::domain::ParsedValue;
    ///
    /// let value = ParsedValue::new(true);
    /// assert_eq!(value.get::<bool>().unwrap(), true);
    /// assert!(value.get::<String>().is_err());
    /// ```
    pub fn get<T: ConfigType>(&self) -> Result<T> {
        let actual = self.kind();
        if T::KIND != actual {
            return Err(ConfigError::type_mismatch(T::KIND, actual));
        }
        T::from_representation(Representation::Original(&self.original))
            .ok_or_else(|| ConfigError::type_mismatch(T::KIND, actual))
    }

    /// Reads the value back as the type of `default`, coercing where possible.
    ///
    /// Checked in order, the first one available wins:
    /// 1. the original, when `default` has the same kind
    /// 2. the parsed map, for map types
    /// 3. the parsed list, for list types
    /// 4. the parsed integer, for integer types
    /// 5. the parsed boolean, for booleans
    /// 6. `default`
    ///
    /// A list or map original that holds nested lists, maps or nulls has no
    /// `Vec<String>` or `HashMap<String, String>` form, so reading it with a
    /// default of that type returns the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazycfg::domain::ParsedValue;
    ///
    /// assert_eq!(ParsedValue::new("TRUE").get_or(false), true);
    /// assert_eq!(ParsedValue::new("yes").get_or(true), false);
    /// assert_eq!(ParsedValue::new(true).get_or(false), true);
    /// ```
    pub fn get_or<T: ConfigType>(&self, default: T) -> T {
        let repr = if T::KIND == self.kind() {
            Some(Representation::Original(&self.original))
        } else {
            self.coerced(T::COERCION)
        };
        repr.and_then(T::from_representation).unwrap_or(default)
    }

    /// Reads the value back with an optional default.
    ///
    /// `None` behaves like [`get`](Self::get) and `Some(default)` like
    /// [`get_or`](Self::get_or).
    pub fn get_opt<T: ConfigType>(&self, default: Option<T>) -> Result<T> {
        match default {
            Some(default) => Ok(self.get_or(default)),
            None => self.get(),
        }
    }

    fn coerced(&self, coercion: Coercion) -> Option<Representation<'_>> {
        match coercion {
            Coercion::Original => None,
            Coercion::Map => self.as_map.as_ref().map(Representation::Map),
            Coercion::List => self.as_list.as_deref().map(Representation::List),
            Coercion::Integer => self.as_integer.map(Representation::Integer),
            Coercion::Boolean => self.as_boolean.map(Representation::Boolean),
        }
    }
}

fn parse_map(text: &str, tokenizer: &dyn ValueTokenizer) -> HashMap<String, String> {
    let mut parsed = HashMap::new();
    let result = tokenizer.parse_entries(text, &mut |key, value| {
        parsed.insert(key.to_string(), value.to_string());
    });
    if let Err(e) = result {
        tracing::warn!("Could not read '{}' as a map: {}", text, e);
        tracing::warn!("'{}' is only available as text or a list", text);
        parsed.clear();
    }
    parsed
}
