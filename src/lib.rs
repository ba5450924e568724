//! Wispfx - particle parameter records and codecs
//!
//! This library provides functionality to:
//! - Describe particle effect parameters as immutable value records
//! - Encode/decode them over the binary wire format, the textual command
//!   format, and the structured-data (schema) format
//! - Dispatch decoding through an explicitly passed particle type registry
//! - Load effect definitions from JSON5/JSONL streams

pub mod command;
pub mod key;
pub mod models;
pub mod parser;
pub mod registry;
pub mod wire;
