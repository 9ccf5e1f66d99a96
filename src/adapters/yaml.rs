// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document adapter.
//!
//! Converts `serde_yaml` values into [`RawValue`]s, keeping the types YAML
//! already assigned: `port: 8080` arrives as an integer, `port: "8080"` as text.

use crate::domain::{ConfigError, RawValue, Result};
use std::collections::HashMap;

/// Parses a YAML document into a single [`RawValue`].
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the content is not valid YAML.
///
/// # Examples
///
/// ```rust
/// use lazycfg::adapters::yaml::parse_yaml;
/// use lazycfg::domain::RawValue;
///
/// let value = parse_yaml("port: 8080").unwrap();
/// let RawValue::Map(map) = value else { panic!("expected a map") };
/// assert_eq!(map.get("port"), Some(&RawValue::Integer(8080)));
/// ```
pub fn parse_yaml(content: &str) -> Result<RawValue> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;
    Ok(RawValue::from(value))
}

/// Renders a mapping key as text. Only scalar keys are addressable.
fn key_text(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => key_text(&tagged.value),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => RawValue::Null,
            serde_yaml::Value::Bool(b) => RawValue::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Integer(i)
                } else if n.as_u64().is_some() {
                    tracing::debug!("YAML integer {} exceeds i64, keeping it as text", n);
                    RawValue::Text(n.to_string())
                } else {
                    RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => RawValue::Text(s),
            serde_yaml::Value::Sequence(seq) => {
                RawValue::List(seq.into_iter().map(RawValue::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => {
                let mut map = HashMap::with_capacity(mapping.len());
                for (key, val) in mapping {
                    match key_text(&key) {
                        Some(key) => {
                            map.insert(key, RawValue::from(val));
                        }
                        None => tracing::debug!("Skipping YAML entry with non-scalar key"),
                    }
                }
                RawValue::Map(map)
            }
            serde_yaml::Value::Tagged(tagged) => RawValue::from(tagged.value),
        }
    }
}
