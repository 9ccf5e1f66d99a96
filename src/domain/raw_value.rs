// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration values as handed over by a loader.
//!
//! A [`RawValue`] is whatever the upstream parser produced for a single key:
//! text, an already-typed scalar, a list, a map, or nothing at all.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The runtime type of a [`RawValue`].
///
/// Two values "have the same type" exactly when their kinds are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Key present without a value
    Null,
    /// Boolean scalar
    Boolean,
    /// Integer scalar
    Integer,
    /// Floating point scalar
    Float,
    /// Textual scalar
    Text,
    /// Sequence of values
    List,
    /// Mapping of string keys to values
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        };
        f.write_str(name)
    }
}

/// A configuration value exactly as the loader produced it.
///
/// # Examples
///
/// ```
/// use lazycfg::domain::{RawValue, ValueKind};
///
/// let value = RawValue::from("localhost");
/// assert_eq!(value.kind(), ValueKind::Text);
/// assert_eq!(value.as_text(), Some("localhost"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    /// Key present without a value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value; the only kind that gets pre-parsed
    Text(String),
    /// Sequence of values
    List(Vec<RawValue>),
    /// Mapping of string keys to values
    Map(HashMap<String, RawValue>),
}

impl RawValue {
    /// Returns the runtime type of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            RawValue::Null => ValueKind::Null,
            RawValue::Bool(_) => ValueKind::Boolean,
            RawValue::Integer(_) => ValueKind::Integer,
            RawValue::Float(_) => ValueKind::Float,
            RawValue::Text(_) => ValueKind::Text,
            RawValue::List(_) => ValueKind::List,
            RawValue::Map(_) => ValueKind::Map,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Get as str if this is Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders a scalar as text. Null and containers have no scalar form.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Null | RawValue::List(_) | RawValue::Map(_) => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Integer(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::List(items)
    }
}

impl From<HashMap<String, RawValue>> for RawValue {
    fn from(map: HashMap<String, RawValue>) -> Self {
        RawValue::Map(map)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(RawValue::Null.kind(), ValueKind::Null);
        assert_eq!(RawValue::from(true).kind(), ValueKind::Boolean);
        assert_eq!(RawValue::from(7_i64).kind(), ValueKind::Integer);
        assert_eq!(RawValue::from(1.5_f64).kind(), ValueKind::Float);
        assert_eq!(RawValue::from("x").kind(), ValueKind::Text);
        assert_eq!(RawValue::from(Vec::<RawValue>::new()).kind(), ValueKind::List);
        assert_eq!(RawValue::from(HashMap::<String, RawValue>::new()).kind(), ValueKind::Map);
    }

    #[test]
    fn test_option_conversion() {
        assert!(RawValue::from(None::<&str>).is_null());
        assert_eq!(RawValue::from(Some("on")), RawValue::Text("on".to_string()));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(RawValue::from(42_i64).scalar_text().as_deref(), Some("42"));
        assert_eq!(RawValue::from(false).scalar_text().as_deref(), Some("false"));
        assert_eq!(RawValue::Null.scalar_text(), None);
        assert_eq!(RawValue::from(vec![RawValue::from("a")]).scalar_text(), None);
    }

    #[test]
    fn test_as_text_only_for_text() {
        assert_eq!(RawValue::from("abc").as_text(), Some("abc"));
        assert_eq!(RawValue::from(1_i64).as_text(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Boolean.to_string(), "boolean");
        assert_eq!(ValueKind::Map.to_string(), "map");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_deserialize_untagged() {
        let value: RawValue = serde_yaml::from_str("[1, two, 2.5, true, ~]").unwrap();
        assert_eq!(
            value,
            RawValue::List(vec![
                RawValue::Integer(1),
                RawValue::Text("two".to_string()),
                RawValue::Float(2.5),
                RawValue::Bool(true),
                RawValue::Null,
            ])
        );
    }
}
