// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the raw value model, the pre-parsed value wrapper and
//! the types it can be read back as. It does not know where values come from.

pub mod config_key;
pub mod config_type;
pub mod errors;
pub mod parsed_value;
pub mod raw_value;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_type::{Coercion, ConfigType, Representation};
pub use errors::{ConfigError, Result};
pub use parsed_value::ParsedValue;
pub use raw_value::{RawValue, ValueKind};
