// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted configuration keys.
//!
//! Nested documents are addressed with dot-separated paths such as
//! `database.host`. The empty key is the document root.

use std::borrow::Borrow;
use std::fmt;

/// Separator between the segments of a key.
pub const KEY_SEPARATOR: char = '.';

/// A dotted configuration key.
///
/// Keys borrow as `str`, so maps keyed by `ConfigKey` can be queried with a
/// plain string slice.
///
/// # Examples
///
/// ```
/// use lazycfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database").join("host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// The empty key that nested keys are joined onto.
    pub fn root() -> Self {
        ConfigKey(String::new())
    }

    /// Returns true for the empty key.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key with `segment` appended.
    ///
    /// ```
    /// use lazycfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::root().join("app").as_str(), "app");
    /// assert_eq!(ConfigKey::from("app").join("name").as_str(), "app.name");
    /// ```
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            ConfigKey(segment.to_string())
        } else {
            ConfigKey(format!("{}{}{}", self.0, KEY_SEPARATOR, segment))
        }
    }

    /// Iterates over the dot-separated segments. The root has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
