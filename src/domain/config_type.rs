// SPDX-License-Identifier: MIT OR Apache-2.0

//! Types a [`ParsedValue`](crate::domain::ParsedValue) can be read back as.
//!
//! Every readable type names the [`ValueKind`] it returns verbatim and the one
//! precomputed [`Coercion`] it accepts when the original has a different kind.

use crate::domain::raw_value::{RawValue, ValueKind};
use std::collections::HashMap;

/// The precomputed representation a requested type may be served from.
///
/// Retrieval consults these in the order they are declared here, after the
/// exact-type check on the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coercion {
    /// Only the original value, when its kind matches
    Original,
    /// The text parsed as `key:value` entries
    Map,
    /// The text split into unique items
    List,
    /// The text parsed as a base-10 integer
    Integer,
    /// The text compared against `"true"`
    Boolean,
}

/// A borrowed view of one stored representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Representation<'a> {
    /// The original value
    Original(&'a RawValue),
    /// The parsed map
    Map(&'a HashMap<String, String>),
    /// The parsed list
    List(&'a [String]),
    /// The parsed integer
    Integer(i64),
    /// The parsed boolean
    Boolean(bool),
}

/// A Rust type that configuration values can be retrieved as.
///
/// Implemented for `String`, `bool`, `i64`, `f64`, `Vec<String>` and
/// `HashMap<String, String>`.
pub trait ConfigType: Sized {
    /// The kind of original value this type reads back unchanged.
    const KIND: ValueKind;

    /// The precomputed representation consulted when the kinds differ.
    const COERCION: Coercion;

    /// Builds the value from a representation, or `None` if it does not fit.
    fn from_representation(repr: Representation<'_>) -> Option<Self>;
}

impl ConfigType for String {
    const KIND: ValueKind = ValueKind::Text;
    const COERCION: Coercion = Coercion::Original;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            Representation::Original(RawValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ConfigType for bool {
    const KIND: ValueKind = ValueKind::Boolean;
    const COERCION: Coercion = Coercion::Boolean;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            Representation::Original(RawValue::Bool(b)) => Some(*b),
            Representation::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl ConfigType for i64 {
    const KIND: ValueKind = ValueKind::Integer;
    const COERCION: Coercion = Coercion::Integer;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            Representation::Original(RawValue::Integer(i)) => Some(*i),
            Representation::Integer(i) => Some(i),
            _ => None,
        }
    }
}

impl ConfigType for f64 {
    const KIND: ValueKind = ValueKind::Float;
    const COERCION: Coercion = Coercion::Original;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            Representation::Original(RawValue::Float(f)) => Some(*f),
            _ => None,
        }
    }
}

impl ConfigType for Vec<String> {
    const KIND: ValueKind = ValueKind::List;
    const COERCION: Coercion = Coercion::List;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            // Nested containers have no string form.
            Representation::Original(RawValue::List(items)) => {
                items.iter().map(RawValue::scalar_text).collect()
            }
            Representation::List(items) => Some(items.to_vec()),
            _ => None,
        }
    }
}

impl ConfigType for HashMap<String, String> {
    const KIND: ValueKind = ValueKind::Map;
    const COERCION: Coercion = Coercion::Map;

    fn from_representation(repr: Representation<'_>) -> Option<Self> {
        match repr {
            Representation::Original(RawValue::Map(map)) => map
                .iter()
                .map(|(k, v)| v.scalar_text().map(|text| (k.clone(), text)))
                .collect(),
            Representation::Map(map) => Some(map.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_reads_only_text() {
        let text = RawValue::from("abc");
        assert_eq!(
            String::from_representation(Representation::Original(&text)),
            Some("abc".to_string())
        );
        let int = RawValue::from(3_i64);
        assert_eq!(String::from_representation(Representation::Original(&int)), None);
    }

    #[test]
    fn test_bool_from_original_and_coerced() {
        let b = RawValue::from(true);
        assert_eq!(bool::from_representation(Representation::Original(&b)), Some(true));
        assert_eq!(bool::from_representation(Representation::Boolean(false)), Some(false));
        assert_eq!(bool::from_representation(Representation::Integer(1)), None);
    }

    #[test]
    fn test_i64_from_original_and_coerced() {
        let i = RawValue::from(-9_i64);
        assert_eq!(i64::from_representation(Representation::Original(&i)), Some(-9));
        assert_eq!(i64::from_representation(Representation::Integer(42)), Some(42));
    }

    #[test]
    fn test_list_original_renders_scalars() {
        let list = RawValue::from(vec![RawValue::from("a"), RawValue::from(2_i64)]);
        assert_eq!(
            Vec::<String>::from_representation(Representation::Original(&list)),
            Some(vec!["a".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_list_original_with_nested_list_does_not_fit() {
        let list = RawValue::from(vec![RawValue::from(vec![RawValue::from("a")])]);
        assert_eq!(
            Vec::<String>::from_representation(Representation::Original(&list)),
            None
        );
    }

    #[test]
    fn test_map_original_renders_scalars() {
        let mut map = HashMap::new();
        map.insert("port".to_string(), RawValue::from(80_i64));
        let raw = RawValue::from(map);
        let read = HashMap::<String, String>::from_representation(Representation::Original(&raw))
            .unwrap();
        assert_eq!(read.get("port"), Some(&"80".to_string()));
    }

    #[test]
    fn test_declared_kinds_and_coercions() {
        assert_eq!(<String as ConfigType>::COERCION, Coercion::Original);
        assert_eq!(<f64 as ConfigType>::KIND, ValueKind::Float);
        assert_eq!(<Vec<String> as ConfigType>::COERCION, Coercion::List);
        assert_eq!(<HashMap<String, String> as ConfigType>::KIND, ValueKind::Map);
    }
}
