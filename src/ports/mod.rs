// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the domain and the text grammar used to
//! pre-parse values. They are implemented by adapters in the adapters layer.

pub mod tokenizer;

pub use tokenizer::ValueTokenizer;
