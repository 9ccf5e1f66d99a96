// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration values parsed once, read back as whatever type the caller needs.
//!
//! Text-based configuration formats hand over strings that may mean a list, a
//! map, a boolean or a number. This crate wraps each loaded value in a
//! [`ParsedValue`](domain::ParsedValue) that works out all of those readings
//! when the value is loaded. Callers then ask for a type, usually by passing a
//! default, and get the matching reading or their default back.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `RawValue`, `ParsedValue`, `ConfigType`, `ConfigKey`, errors
//! - **Ports**: The `ValueTokenizer` trait used to split text into lists and maps
//! - **Adapters**: `DelimitedTokenizer` and the YAML document converter
//! - **Service**: `ParsedConfig`, a keyed collection of parsed values
//!
//! # Reading values back
//!
//! With a default, the first of these that is available wins:
//!
//! 1. the original value, if the default has the same kind
//! 2. the text parsed as `key:value` entries, for `HashMap<String, String>`
//! 3. the text split on `,` into unique items, for `Vec<String>`
//! 4. the text parsed as an integer, for `i64`
//! 5. whether the text is `"true"` (any case), for `bool`
//! 6. the default
//!
//! Without a default the original is returned as-is, and asking for the wrong
//! type is an error.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable loading YAML documents (default)
//!
//! # Quick Start
//!
//! ```rust
//! use lazycfg::prelude::*;
//!
//! let value = ParsedValue::new("8080");
//! assert_eq!(value.get_or(80_i64), 8080);
//! assert_eq!(value.get::<String>().unwrap(), "8080");
//!
//! let labels = ParsedValue::new("env:prod;team:core");
//! let map = labels.get_or(std::collections::HashMap::<String, String>::new());
//! assert_eq!(map.get("team").map(String::as_str), Some("core"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::DelimitedTokenizer;
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigType, ParsedValue, RawValue, Result, ValueKind,
    };
    pub use crate::ports::ValueTokenizer;
    pub use crate::service::ParsedConfig;
}
