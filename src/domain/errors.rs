// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Construction of a [`ParsedValue`](crate::domain::ParsedValue) never fails; the
//! errors here surface from typed retrieval without a default, from the entry
//! tokenizer, and from loading documents into a
//! [`ParsedConfig`](crate::service::ParsedConfig).

use crate::domain::raw_value::ValueKind;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use lazycfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration key was not found.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A value was read back without a default as a type other than the one it
    /// was loaded as.
    #[error("Configuration value is {actual}, cannot be read as {expected}")]
    TypeMismatch {
        /// The kind the caller asked for
        expected: ValueKind,
        /// The kind of the stored original value
        actual: ValueKind,
    },

    /// Failed to parse a configuration file or value.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `ParseError` carrying only a message.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `TypeMismatch` error.
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        ConfigError::TypeMismatch { expected, actual }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
