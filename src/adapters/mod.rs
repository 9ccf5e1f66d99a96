// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete tokenizers and document converters.

pub mod delimited;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use delimited::DelimitedTokenizer;
#[cfg(feature = "yaml")]
pub use yaml::parse_yaml;
