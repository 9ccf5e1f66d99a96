// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyed collection of parsed configuration values.
//!
//! [`ParsedConfig`] wraps every entry of a loaded document in a
//! [`ParsedValue`] exactly once, then serves typed lookups by dotted key.

use crate::adapters::DelimitedTokenizer;
use crate::domain::config_key::KEY_SEPARATOR;
use crate::domain::{ConfigError, ConfigKey, ConfigType, ParsedValue, RawValue, Result};
use crate::ports::ValueTokenizer;
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration entries, each pre-parsed at insertion.
///
/// Nested maps are flattened to dotted keys, and every map node stays
/// addressable under its own key as well, so with
///
/// ```yaml
/// database:
///   host: localhost
///   labels: "env:prod;team:core"
/// ```
///
/// `database`, `database.host` and `database.labels` can all be looked up.
///
/// A mapping key may itself contain dots (`"database.host": other`). When
/// such a key spells the same dotted key as a nested path, the nested value
/// is kept. Between two dotted spellings, the one with more nesting is kept,
/// and equal nesting falls back to the spelling that sorts last.
///
/// # Examples
///
/// ```rust
/// use lazycfg::service::ParsedConfig;
///
/// # fn main() -> lazycfg::domain::Result<()> {
/// let config = ParsedConfig::from_yaml_str(
///     "server:\n  port: \"8080\"\n  tags: a,b,a\n  debug: TRUE",
/// )?;
///
/// assert_eq!(config.get_or("server.port", 80_i64), 8080);
/// assert_eq!(config.get_or("server.tags", Vec::<String>::new()), vec!["a", "b"]);
/// assert!(config.get_or("server.debug", false));
/// assert_eq!(config.get_or("server.missing", 5_i64), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ParsedConfig {
    values: HashMap<ConfigKey, ParsedValue>,
    tokenizer: Arc<dyn ValueTokenizer>,
}

impl ParsedConfig {
    /// Creates an empty configuration using the default tokenizer.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            tokenizer: Arc::new(DelimitedTokenizer::new()),
        }
    }

    /// Replaces the tokenizer used for values inserted from now on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazycfg::adapters::DelimitedTokenizer;
    /// use lazycfg::service::ParsedConfig;
    ///
    /// let mut config = ParsedConfig::new()
    ///     .with_tokenizer(DelimitedTokenizer::new().with_list_separator(' '));
    /// config.insert("hosts", "a b");
    /// assert_eq!(config.get_or("hosts", Vec::<String>::new()), vec!["a", "b"]);
    /// ```
    pub fn with_tokenizer<T: ValueTokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Builds a configuration from flat key/value pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<ConfigKey>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut config = Self::new();
        for (key, value) in entries {
            config.insert(key, value);
        }
        config
    }

    /// Builds a configuration from a document root.
    ///
    /// A map root contributes one entry per node, keyed by dotted path. Any
    /// other root is stored under the empty key.
    pub fn from_raw(root: RawValue) -> Self {
        let mut config = Self::new();
        config.insert_raw(root);
        config
    }

    /// Inserts a document root into this configuration, flattening maps.
    pub fn insert_raw(&mut self, root: RawValue) {
        match root {
            RawValue::Map(map) => self.insert_flattened(map),
            other => self.insert("", other),
        }
    }

    /// Parses a YAML document and builds a configuration from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the content is not valid YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let root = crate::adapters::yaml::parse_yaml(content)?;
        let config = Self::from_raw(root);
        tracing::debug!("Loaded {} configuration entries from YAML", config.len());
        Ok(config)
    }

    /// Reads and parses a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read and
    /// [`ConfigError::ParseError`] if it is not valid YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Wraps `value` and stores it under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<ConfigKey>, value: impl Into<RawValue>) {
        let parsed = ParsedValue::with_tokenizer(value, self.tokenizer.as_ref());
        self.values.insert(key.into(), parsed);
    }

    fn insert_flattened(&mut self, root: HashMap<String, RawValue>) {
        let mut nodes = Vec::new();
        collect_nodes(&mut Vec::new(), root, &mut nodes);

        // Later inserts replace earlier ones.
        nodes.sort_by(|a, b| {
            (!a.dotted(), a.path.len(), &a.path).cmp(&(!b.dotted(), b.path.len(), &b.path))
        });

        for node in nodes {
            let key = node
                .path
                .iter()
                .fold(ConfigKey::root(), |key, segment| key.join(segment));
            if self.values.contains_key(&key) {
                tracing::debug!(
                    "Configuration key '{}' defined more than once, keeping {:?}",
                    key,
                    node.path
                );
            }
            self.insert(key, node.value);
        }
    }

    /// Returns the parsed value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&ParsedValue> {
        self.values.get(key)
    }

    /// Reads the value under `key` back as the type it was loaded as.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigKeyNotFound`] when there is no such key and
    /// [`ConfigError::TypeMismatch`] when `T` is not the loaded type.
    pub fn get<T: ConfigType>(&self, key: &str) -> Result<T> {
        self.value(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })?
            .get()
    }

    /// Reads the value under `key` as the type of `default`, coercing where
    /// possible, or returns `default` when the key is missing.
    pub fn get_or<T: ConfigType>(&self, key: &str, default: T) -> T {
        match self.value(key) {
            Some(value) => value.get_or(default),
            None => {
                tracing::debug!("Configuration key '{}' not set, using default", key);
                default
            }
        }
    }

    /// Checks whether `key` is present, even without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Returns all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.values.keys()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A document node and the mapping keys leading to it.
struct Node {
    path: Vec<String>,
    value: RawValue,
}

impl Node {
    /// True when some mapping key on the path contains a separator itself.
    fn dotted(&self) -> bool {
        self.path.iter().any(|segment| segment.contains(KEY_SEPARATOR))
    }
}

fn collect_nodes(path: &mut Vec<String>, map: HashMap<String, RawValue>, out: &mut Vec<Node>) {
    for (segment, value) in map {
        path.push(segment);
        if let RawValue::Map(children) = &value {
            collect_nodes(path, children.clone(), out);
        }
        out.push(Node {
            path: path.clone(),
            value,
        });
        path.pop();
    }
}

impl Default for ParsedConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParsedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedConfig")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
