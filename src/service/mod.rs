// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer owning collections of parsed values.

pub mod parsed_config;

pub use parsed_config::ParsedConfig;
